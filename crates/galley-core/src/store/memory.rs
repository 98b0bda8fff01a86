use crate::{
    IN_FILTER_LIMIT,
    cursor::{CursorBoundary, compare_boundaries},
    document::{DocId, Document, FieldPresence, Row},
    obs::{self, MetricsEvent, WriteKind},
    query::{ConstraintSet, OrderClause, matches},
    store::{DocumentStore, ObjectStore, RangeQuery, StoreError, document_path},
};
use std::collections::{BTreeMap, VecDeque};
use tokio::sync::{Mutex, RwLock};

type Collection = BTreeMap<DocId, Document>;

///
/// MemoryStore
///
/// In-process document and object store.
///
/// Applies the same index rules as the remote store before answering a
/// range query, orders rows by the constraint set's effective ordering, and
/// excludes rows that lack any sort field. Queued faults are returned by
/// the next operations, one each, before any data is touched.
///

#[derive(Debug)]
pub struct MemoryStore {
    collections: RwLock<BTreeMap<String, Collection>>,
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
    faults: Mutex<VecDeque<StoreError>>,
    in_limit: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_in_filter_limit(IN_FILTER_LIMIT)
    }

    #[must_use]
    pub fn with_in_filter_limit(in_limit: usize) -> Self {
        Self {
            collections: RwLock::new(BTreeMap::new()),
            objects: RwLock::new(BTreeMap::new()),
            faults: Mutex::new(VecDeque::new()),
            in_limit,
        }
    }

    /// Seed `collection` with `documents`, replacing rows with the same id.
    #[must_use]
    pub fn with_documents(
        mut self,
        collection: &str,
        documents: impl IntoIterator<Item = Document>,
    ) -> Self {
        let target = self
            .collections
            .get_mut()
            .entry(collection.to_string())
            .or_default();
        for document in documents {
            target.insert(document.id.clone(), document);
        }

        self
    }

    /// Make the next store operation fail with `error`.
    pub async fn fail_next(&self, error: StoreError) {
        self.faults.lock().await.push_back(error);
    }

    /// True if `collection` holds a row with `id`.
    pub async fn contains(&self, collection: &str, id: &DocId) -> bool {
        self.collections
            .read()
            .await
            .get(collection)
            .is_some_and(|rows| rows.contains_key(id))
    }

    /// Every stored object path, sorted.
    pub async fn object_paths(&self) -> Vec<String> {
        self.objects.read().await.keys().cloned().collect()
    }

    async fn take_fault(&self) -> Result<(), StoreError> {
        match self.faults.lock().await.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn check(&self, constraints: &ConstraintSet) -> Result<(), StoreError> {
        constraints
            .validate(self.in_limit)
            .map_err(|err| StoreError::rejected(err.to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

// A row takes part in a query only if every filter holds and every sort
// field is present.
fn is_candidate(doc: &Document, constraints: &ConstraintSet, ordering: &[OrderClause]) -> bool {
    matches(doc, constraints)
        && ordering
            .iter()
            .all(|clause| doc.field(&clause.field) != FieldPresence::Missing)
}

impl DocumentStore for MemoryStore {
    async fn count(&self, collection: &str, constraints: &ConstraintSet) -> Result<u64, StoreError> {
        self.take_fault().await?;
        self.check(constraints)?;

        let ordering = constraints.ordering();
        let total = self
            .collections
            .read()
            .await
            .get(collection)
            .map_or(0, |rows| {
                rows.values()
                    .filter(|doc| is_candidate(doc, constraints, &ordering))
                    .count()
            });
        obs::record(MetricsEvent::Count { collection });

        Ok(total as u64)
    }

    async fn fetch_range(&self, query: &RangeQuery<'_>) -> Result<Vec<Document>, StoreError> {
        self.take_fault().await?;
        self.check(query.constraints)?;

        let ordering = query.constraints.effective_ordering();
        let declared = query.constraints.ordering();
        let rows = {
            let collections = self.collections.read().await;
            let mut keyed: Vec<(CursorBoundary, &Document)> = collections
                .get(query.collection)
                .into_iter()
                .flat_map(BTreeMap::values)
                .filter(|doc| is_candidate(doc, query.constraints, &declared))
                .map(|doc| (CursorBoundary::from_row(doc, &ordering), doc))
                .collect();
            keyed.sort_by(|(left, _), (right, _)| compare_boundaries(left, right, &ordering));

            if let Some(anchor) = query.anchor {
                let boundary = CursorBoundary::from_row(anchor.document(), &ordering);
                keyed.retain(|(key, _)| {
                    let position = compare_boundaries(key, &boundary, &ordering);
                    if anchor.is_inclusive() {
                        position.is_ge()
                    } else {
                        position.is_gt()
                    }
                });
            }

            keyed
                .into_iter()
                .take(query.limit)
                .map(|(_, doc)| doc.clone())
                .collect::<Vec<_>>()
        };

        obs::record(MetricsEvent::RangeRead {
            collection: query.collection,
            rows: rows.len() as u64,
        });

        Ok(rows)
    }

    async fn get(&self, collection: &str, id: &DocId) -> Result<Option<Document>, StoreError> {
        self.take_fault().await?;

        let found = self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|rows| rows.get(id))
            .cloned();
        obs::record(MetricsEvent::PointRead { collection });

        Ok(found)
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        self.take_fault().await?;

        let rows: Vec<Document> = self
            .collections
            .read()
            .await
            .get(collection)
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default();
        obs::record(MetricsEvent::RangeRead {
            collection,
            rows: rows.len() as u64,
        });

        Ok(rows)
    }

    async fn insert(&self, collection: &str, document: Document) -> Result<(), StoreError> {
        self.take_fault().await?;

        {
            let mut collections = self.collections.write().await;
            let rows = collections.entry(collection.to_string()).or_default();
            if rows.contains_key(&document.id) {
                return Err(StoreError::already_exists(document_path(
                    collection,
                    document.id.as_str(),
                )));
            }
            rows.insert(document.id.clone(), document);
        }
        obs::record(MetricsEvent::Write {
            collection,
            kind: WriteKind::Insert,
        });

        Ok(())
    }

    async fn update(&self, collection: &str, document: Document) -> Result<(), StoreError> {
        self.take_fault().await?;

        {
            let mut collections = self.collections.write().await;
            let Some(stored) = collections
                .get_mut(collection)
                .and_then(|rows| rows.get_mut(&document.id))
            else {
                return Err(StoreError::not_found(document_path(
                    collection,
                    document.id.as_str(),
                )));
            };
            stored.fields.extend(document.fields);
        }
        obs::record(MetricsEvent::Write {
            collection,
            kind: WriteKind::Update,
        });

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &DocId) -> Result<(), StoreError> {
        self.take_fault().await?;

        if let Some(rows) = self.collections.write().await.get_mut(collection) {
            rows.remove(id);
        }
        obs::record(MetricsEvent::Write {
            collection,
            kind: WriteKind::Delete,
        });

        Ok(())
    }
}

impl ObjectStore for MemoryStore {
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
        self.take_fault().await?;
        self.objects.write().await.insert(path.to_string(), bytes);

        Ok(())
    }

    async fn download(&self, path: &str) -> Result<Vec<u8>, StoreError> {
        self.take_fault().await?;

        self.objects
            .read()
            .await
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::not_found(path))
    }

    async fn delete_object(&self, path: &str) -> Result<(), StoreError> {
        self.take_fault().await?;

        match self.objects.write().await.remove(path) {
            Some(_) => Ok(()),
            None => Err(StoreError::not_found(path)),
        }
    }
}
