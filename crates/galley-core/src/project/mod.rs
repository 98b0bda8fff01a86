//! Module: project
//! Responsibility: merge denormalized display fields from reference
//! collections into a page of rows.
//! Does not own: deciding which joins a screen needs.

mod cache;


pub use cache::LookupCache;

use crate::{
    document::{DocId, Document},
    error::Error,
    obs::{self, MetricsEvent},
    store::DocumentStore,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

///
/// Join
///
/// Follow `foreign_key` on each row into `collection` and copy the mapped
/// `(source, target)` fields from the referenced document.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Join {
    pub collection: String,
    pub foreign_key: String,
    pub fields: Vec<(String, String)>,
}

impl Join {
    #[must_use]
    pub fn new(collection: impl Into<String>, foreign_key: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            foreign_key: foreign_key.into(),
            fields: Vec::new(),
        }
    }

    /// Copy `source` from the referenced document into `target` on the row.
    #[must_use]
    pub fn map(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.fields.push((source.into(), target.into()));
        self
    }

    /// Copy `field` under the same name.
    #[must_use]
    pub fn keep(self, field: &str) -> Self {
        self.map(field, field)
    }
}

///
/// Projector
///
/// One point lookup per distinct foreign id per page. With a
/// `LookupCache`, ids already resolved earlier in the session are served
/// from memory.
///

#[derive(Clone, Copy, Debug)]
pub struct Projector<'a, S> {
    store: &'a S,
}

impl<'a, S: DocumentStore> Projector<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn project(
        &self,
        mut rows: Vec<Document>,
        joins: &[Join],
        mut cache: Option<&mut LookupCache>,
    ) -> Result<Vec<Document>, Error> {
        for join in joins {
            let ids: BTreeSet<DocId> = rows
                .iter()
                .filter_map(|row| row.text(&join.foreign_key))
                .map(DocId::from)
                .collect();

            let mut resolved: BTreeMap<DocId, Option<Document>> = BTreeMap::new();
            for id in ids {
                let found = self
                    .lookup(&join.collection, &id, cache.as_deref_mut())
                    .await?;
                resolved.insert(id, found);
            }

            for row in &mut rows {
                let Some(key) = row.text(&join.foreign_key).map(DocId::from) else {
                    continue;
                };
                match resolved.get(&key) {
                    Some(Some(referenced)) => merge_fields(row, referenced, &join.fields),
                    _ => warn!(
                        row = %row.id,
                        collection = %join.collection,
                        id = %key,
                        "referenced document missing"
                    ),
                }
            }
        }

        Ok(rows)
    }

    async fn lookup(
        &self,
        collection: &str,
        id: &DocId,
        cache: Option<&mut LookupCache>,
    ) -> Result<Option<Document>, Error> {
        let Some(cache) = cache else {
            return Ok(self.store.get(collection, id).await?);
        };

        if let Some(hit) = cache.get(collection, id) {
            obs::record(MetricsEvent::LookupCacheHit);
            return Ok(hit.cloned());
        }

        let found = self.store.get(collection, id).await?;
        cache.insert(collection, id.clone(), found.clone());

        Ok(found)
    }
}

fn merge_fields(row: &mut Document, referenced: &Document, fields: &[(String, String)]) {
    for (source, target) in fields {
        if let Some(value) = referenced.get(source) {
            row.set(target.clone(), value.clone());
        }
    }
}
