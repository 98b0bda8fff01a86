use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Timestamp
///
/// Second + nanosecond instant, the shape the document store uses for
/// `createdAt`, `updatedAt`, and date-window bounds.
///
/// Serializes as `{"$timestamp": {"seconds": .., "nanos": ..}}` so the
/// JSON bridge can tell it apart from an ordinary object.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[display("{seconds}.{nanos:09}")]
#[serde(from = "TimestampWire", into = "TimestampWire")]
pub struct Timestamp {
    seconds: i64,
    nanos: u32,
}

impl Timestamp {
    pub const UNIX_EPOCH: Self = Self {
        seconds: 0,
        nanos: 0,
    };

    const NANOS_PER_SECOND: u32 = 1_000_000_000;

    /// Build a timestamp, carrying nanosecond overflow into seconds.
    /// The carry saturates at `i64::MAX` seconds.
    #[must_use]
    pub const fn new(seconds: i64, nanos: u32) -> Self {
        Self {
            seconds: seconds.saturating_add((nanos / Self::NANOS_PER_SECOND) as i64),
            nanos: nanos % Self::NANOS_PER_SECOND,
        }
    }

    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self::new(seconds, 0)
    }

    #[must_use]
    pub const fn seconds(self) -> i64 {
        self.seconds
    }

    #[must_use]
    pub const fn nanos(self) -> u32 {
        self.nanos
    }

    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    #[must_use]
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::new(dt.timestamp(), dt.timestamp_subsec_nanos())
    }

    /// Convert to a UTC datetime; `None` outside chrono's representable range.
    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.nanos).single()
    }

    /// Last representable instant of this timestamp's UTC day.
    ///
    /// Date-window end bounds are widened to this so a picked end date
    /// covers the whole day.
    #[must_use]
    pub fn end_of_day(self) -> Self {
        let Some(dt) = self.to_datetime() else {
            return self;
        };
        let last = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
            .map(|time| dt.date_naive().and_time(time).and_utc());

        last.map_or(self, Self::from_datetime)
    }

    /// Start of this timestamp's UTC day.
    #[must_use]
    pub fn start_of_day(self) -> Self {
        self.to_datetime()
            .and_then(|dt| dt.date_naive().and_hms_opt(0, 0, 0))
            .map_or(self, |naive| Self::from_datetime(naive.and_utc()))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

///
/// TimestampWire
///

#[derive(Clone, Copy, Deserialize, Serialize)]
struct TimestampWire {
    #[serde(rename = "$timestamp")]
    parts: TimestampParts,
}

#[derive(Clone, Copy, Deserialize, Serialize)]
struct TimestampParts {
    seconds: i64,
    #[serde(default)]
    nanos: u32,
}

impl From<TimestampWire> for Timestamp {
    fn from(wire: TimestampWire) -> Self {
        Self::new(wire.parts.seconds, wire.parts.nanos)
    }
}

impl From<Timestamp> for TimestampWire {
    fn from(ts: Timestamp) -> Self {
        Self {
            parts: TimestampParts {
                seconds: ts.seconds,
                nanos: ts.nanos,
            },
        }
    }
}
