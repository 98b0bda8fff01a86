use crate::document::{DocId, Document};
use std::collections::HashMap;

///
/// LookupCache
///
/// Session-scoped memo of point lookups keyed by `(collection, id)`.
/// Missing references are cached too. Writers invalidate what they touch.
///

#[derive(Clone, Debug, Default)]
pub struct LookupCache {
    entries: HashMap<(String, DocId), Option<Document>>,
}

impl LookupCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` on a cache miss; `Some(None)` for a cached missing reference.
    #[must_use]
    pub fn get(&self, collection: &str, id: &DocId) -> Option<Option<&Document>> {
        self.entries
            .get(&(collection.to_string(), id.clone()))
            .map(Option::as_ref)
    }

    pub fn insert(&mut self, collection: &str, id: DocId, document: Option<Document>) {
        self.entries.insert((collection.to_string(), id), document);
    }

    pub fn invalidate(&mut self, collection: &str, id: &DocId) {
        self.entries.remove(&(collection.to_string(), id.clone()));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
