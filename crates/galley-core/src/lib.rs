//! Core runtime for Galley: document values, constraint sets, the store
//! adapter seam, and the cursor-paged fetch/search/projection engine that
//! every back-office screen runs on.
#![warn(unreachable_pub)]

pub mod cursor;
pub mod document;
pub mod error;
pub mod obs;
pub mod page;
pub mod project;
pub mod query;
pub mod search;
pub mod sequence;
pub mod store;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Rows per page used by every table screen unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Maximum number of values one `In` filter may carry.
///
/// Mirrors the remote store's set-membership limit; joined searches that
/// resolve more ids than this fail closed instead of truncating.
pub const IN_FILTER_LIMIT: usize = 30;

/// Upper sentinel appended to a prefix to close a "starts with" range.
pub const PREFIX_SENTINEL: char = '\u{f8ff}';

/// Default sort key carried by every row.
pub const CREATED_AT: &str = "createdAt";

/// Stamp written on every edit; the "only modified" facet filters on it.
pub const UPDATED_AT: &str = "updatedAt";

/// Pseudo-field resolving to the document id; final ordering tiebreak.
pub const ID_FIELD: &str = "__id__";

///
/// Prelude
///
/// Domain vocabulary only. Stores, fetchers, and orchestrators are
/// imported from their modules.
///

pub mod prelude {
    pub use crate::{
        cursor::CursorState,
        document::{DocId, Document},
        error::Error,
        query::{ConstraintSet, FieldRef, OrderDirection},
        value::{Timestamp, Value},
    };
}
