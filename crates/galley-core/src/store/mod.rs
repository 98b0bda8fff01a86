//! Module: store
//! Responsibility: the adapter seam between the engine and the remote
//! document/object stores, plus an in-memory implementation of both.
//! Does not own: pagination arithmetic or constraint construction.
//! Boundary: stores are injected by reference; nothing here is a global.

mod error;
mod memory;

#[cfg(test)]
mod tests;

pub use error::{StoreError, document_path};
pub use memory::MemoryStore;

use crate::{
    document::{DocId, Document},
    query::ConstraintSet,
};
use std::future::Future;

///
/// RangeAnchor
///
/// Where a range scan resumes relative to a previously seen row.
///

#[derive(Clone, Copy, Debug)]
pub enum RangeAnchor<'a> {
    /// Scan from the anchor row, inclusive.
    StartAt(&'a Document),
    /// Scan from the first row strictly after the anchor.
    StartAfter(&'a Document),
}

impl<'a> RangeAnchor<'a> {
    #[must_use]
    pub const fn document(self) -> &'a Document {
        match self {
            Self::StartAt(doc) | Self::StartAfter(doc) => doc,
        }
    }

    #[must_use]
    pub const fn is_inclusive(self) -> bool {
        matches!(self, Self::StartAt(_))
    }
}

///
/// RangeQuery
///
/// One ordered, optionally anchored, limited scan of a collection.
///

#[derive(Clone, Copy, Debug)]
pub struct RangeQuery<'a> {
    pub collection: &'a str,
    pub constraints: &'a ConstraintSet,
    pub anchor: Option<RangeAnchor<'a>>,
    pub limit: usize,
}

impl<'a> RangeQuery<'a> {
    #[must_use]
    pub const fn new(collection: &'a str, constraints: &'a ConstraintSet, limit: usize) -> Self {
        Self {
            collection,
            constraints,
            anchor: None,
            limit,
        }
    }

    #[must_use]
    pub const fn start_at(mut self, anchor: &'a Document) -> Self {
        self.anchor = Some(RangeAnchor::StartAt(anchor));
        self
    }

    #[must_use]
    pub const fn start_after(mut self, anchor: &'a Document) -> Self {
        self.anchor = Some(RangeAnchor::StartAfter(anchor));
        self
    }
}

///
/// DocumentStore
///
/// Collection-scoped reads and writes against the document database.
///
/// `fetch_range` returns rows in the constraint set's effective ordering
/// (declared sort keys, then the id tiebreak).
///

pub trait DocumentStore {
    /// Server-side count of rows matching every filter of `constraints`.
    fn count(
        &self,
        collection: &str,
        constraints: &ConstraintSet,
    ) -> impl Future<Output = Result<u64, StoreError>> + Send;

    fn fetch_range(
        &self,
        query: &RangeQuery<'_>,
    ) -> impl Future<Output = Result<Vec<Document>, StoreError>> + Send;

    fn get(
        &self,
        collection: &str,
        id: &DocId,
    ) -> impl Future<Output = Result<Option<Document>, StoreError>> + Send;

    /// Every document of a collection; used for small reference collections.
    fn list(&self, collection: &str)
    -> impl Future<Output = Result<Vec<Document>, StoreError>> + Send;

    fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Merge `document`'s fields into the stored row with the same id.
    fn update(
        &self,
        collection: &str,
        document: Document,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete by id. Deleting an absent document succeeds.
    fn delete(
        &self,
        collection: &str,
        id: &DocId,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

///
/// ObjectStore
///
/// Path-keyed binary attachments.
///

pub trait ObjectStore {
    fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn download(&self, path: &str) -> impl Future<Output = Result<Vec<u8>, StoreError>> + Send;

    fn delete_object(&self, path: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}
