//! Fixture builders shared by unit tests.

use crate::{
    CREATED_AT,
    document::Document,
    store::MemoryStore,
    value::Timestamp,
};

pub(crate) const BASE_SECONDS: i64 = 1_700_000_000;

/// Id of the row at display position `index` (zero-based, `createdAt desc`).
pub(crate) fn row_id(index: usize) -> String {
    format!("r{index:03}")
}

/// `total` rows whose `createdAt desc` order is `r000, r001, ...`.
pub(crate) fn numbered_rows(total: usize) -> Vec<Document> {
    (0..total)
        .map(|index| {
            let offset = i64::try_from(total - index).unwrap_or(i64::MAX);
            Document::new(row_id(index))
                .with(CREATED_AT, Timestamp::from_seconds(BASE_SECONDS + offset))
                .with("name", format!("row {index}"))
        })
        .collect()
}

/// A memory store seeded with `numbered_rows(total)` in `collection`.
pub(crate) fn seeded_store(collection: &str, total: usize) -> MemoryStore {
    MemoryStore::new().with_documents(collection, numbered_rows(total))
}

/// Ids of `rows`, in order.
pub(crate) fn ids(rows: &[Document]) -> Vec<String> {
    rows.iter().map(|row| row.id.to_string()).collect()
}

/// Expected ids for display positions `range`.
pub(crate) fn expected_ids(range: std::ops::Range<usize>) -> Vec<String> {
    range.map(row_id).collect()
}
