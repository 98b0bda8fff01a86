//! Module: cursor
//! Responsibility: the resumable position a screen carries between page fetches.
//! Does not own: deciding how to use the position (see `page`).

mod boundary;

#[cfg(test)]
mod tests;

pub use boundary::{
    CursorBoundary, CursorBoundarySlot, compare_boundaries, compare_boundary_slots,
    compare_row_to_boundary,
};

use crate::document::Document;

///
/// CursorState
///
/// "The anchor document is the first displayed row of zero-based page
/// `page_index`." Callers hold `Option<CursorState>`; `None` means no prior
/// fetch, and any filter or sort change must reset to `None`.
///
/// The anchor is a snapshot of the row, so the store can position a scan
/// from its field values even if the row has since been deleted.
///

#[derive(Clone, Debug, PartialEq)]
pub struct CursorState {
    pub page_index: u32,
    pub anchor: Document,
}

impl CursorState {
    #[must_use]
    pub const fn new(page_index: u32, anchor: Document) -> Self {
        Self { page_index, anchor }
    }

    /// One-based page number this cursor belongs to.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page_index + 1
    }
}
