//! Table-cell formatting for timestamps.
//!
//! Dates render as `Y.M.D` and times as `H:MM`, without zero padding on the
//! date parts or the hour. Missing timestamps render as an empty string.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use galley_core::value::Timestamp;

fn local(ts: Option<Timestamp>, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    ts.and_then(Timestamp::to_datetime)
        .map(|dt| dt.with_timezone(&offset))
}

#[must_use]
pub fn date(ts: Option<Timestamp>, offset: FixedOffset) -> String {
    local(ts, offset).map_or_else(String::new, |dt| {
        format!("{}.{}.{}", dt.year(), dt.month(), dt.day())
    })
}

#[must_use]
pub fn time(ts: Option<Timestamp>, offset: FixedOffset) -> String {
    local(ts, offset).map_or_else(String::new, |dt| {
        format!("{}:{:02}", dt.hour(), dt.minute())
    })
}

#[must_use]
pub fn date_time(ts: Option<Timestamp>, offset: FixedOffset) -> String {
    local(ts, offset).map_or_else(String::new, |dt| {
        format!(
            "{}.{}.{} {}:{:02}",
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute()
        )
    })
}

///
/// TESTS
///
