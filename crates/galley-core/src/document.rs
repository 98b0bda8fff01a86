//! Module: document
//! Responsibility: keyed row shape shared by stores, fetchers, and projectors.
//! Does not own: typed records (those live in the domain crate).

use crate::{
    CREATED_AT, ID_FIELD,
    value::{Timestamp, Value},
};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// DocId
///
/// Stable document identifier, unique within one collection.
///

#[derive(
    Clone, Debug, Deserialize, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh, lexicographically time-ordered id.
    #[must_use]
    pub fn generate() -> Self {
        Self(ulid::Ulid::new().to_string().to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

///
/// FieldPresence
///
/// Result of reading a field from a row. Distinguishes a missing field
/// from a present field whose value is `Null`.
///

#[derive(Clone, Debug, PartialEq)]
pub enum FieldPresence {
    Present(Value),
    Missing,
}

///
/// Row
///
/// Anything that can expose fields by name. Filter evaluation and cursor
/// boundaries only ever see rows through this trait.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

///
/// Document
///
/// One stored record: an id plus an open set of named fields.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: DocId,
    pub fields: BTreeMap<String, Value>,
}

impl Document {
    #[must_use]
    pub fn new(id: impl Into<DocId>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field assignment.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Text field accessor; `None` when missing or not text.
    #[must_use]
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_text)
    }

    #[must_use]
    pub fn created_at(&self) -> Option<Timestamp> {
        self.get(CREATED_AT).and_then(Value::as_timestamp)
    }

    /// Render as a JSON object with the id under `"id"`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert("id".to_string(), serde_json::Value::String(self.id.to_string()));
        for (field, value) in &self.fields {
            map.insert(field.clone(), value.to_json());
        }

        serde_json::Value::Object(map)
    }

    /// Decode a JSON object; `"id"` becomes the document id when present,
    /// otherwise `fallback_id` is used.
    #[must_use]
    pub fn from_json(json: &serde_json::Value, fallback_id: impl Into<DocId>) -> Option<Self> {
        let serde_json::Value::Object(map) = json else {
            return None;
        };

        let id = map
            .get("id")
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| fallback_id.into(), DocId::from);
        let fields = map
            .iter()
            .filter(|(field, _)| field.as_str() != "id")
            .map(|(field, value)| (field.clone(), Value::from_json(value)))
            .collect();

        Some(Self { id, fields })
    }
}

impl Row for Document {
    fn field(&self, name: &str) -> FieldPresence {
        if name == ID_FIELD {
            return FieldPresence::Present(Value::Text(self.id.to_string()));
        }

        match self.fields.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}
