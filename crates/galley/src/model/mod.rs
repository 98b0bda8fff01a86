//! Typed records for every back-office collection.
//!
//! Records carry their fields only; ids live on the `Document` and on
//! `Stored<R>`. Conversion goes through the JSON bridge, so a record and its
//! document always agree on field names.

mod content;
mod menu;
mod order;
mod user;
mod validate;

#[cfg(test)]
mod tests;

pub use content::{Faq, FaqCategory, Popup, Review};
pub use menu::{Menu, MenuCategory};
pub use order::{Order, OrderItem, OrderStatus, OrdererType, PaymentMethod};
pub use user::{Guest, User};
pub use validate::validate_required;

use galley_core::{
    document::{DocId, Document},
    error::ValidationError,
};
use serde::{Serialize, de::DeserializeOwned};

///
/// Record
///

pub trait Record: Serialize + DeserializeOwned {
    const COLLECTION: &'static str;

    /// Fields that must be present and non-blank before any write.
    const REQUIRED: &'static [&'static str];

    /// Object-store paths owned by the record stored under `id`.
    fn attachments(&self, _id: &DocId) -> Vec<String> {
        Vec::new()
    }

    fn to_document(&self, id: DocId) -> Result<Document, ValidationError> {
        let json = serde_json::to_value(self).map_err(|err| encode_error::<Self>(&err))?;
        let mut document = Document::from_json(&json, id.clone()).ok_or_else(|| {
            ValidationError::invalid_field(Self::COLLECTION, "document", "not an object")
        })?;
        document.id = id;

        Ok(document)
    }

    fn from_document(document: &Document) -> Result<Self, ValidationError> {
        serde_json::from_value(document.to_json()).map_err(|err| encode_error::<Self>(&err))
    }

    /// Required-field check on the encoded form.
    fn validate(&self) -> Result<(), ValidationError> {
        let document = self.to_document(DocId::new(""))?;

        validate_required(Self::COLLECTION, Self::REQUIRED, &document)
    }
}

fn encode_error<R: Record>(err: &serde_json::Error) -> ValidationError {
    ValidationError::invalid_field(R::COLLECTION, "document", err.to_string())
}

///
/// Stored
/// A decoded record together with its document id.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Stored<R> {
    pub id: DocId,
    pub record: R,
}

impl<R: Record> Stored<R> {
    pub fn from_document(document: &Document) -> Result<Self, ValidationError> {
        Ok(Self {
            id: document.id.clone(),
            record: R::from_document(document)?,
        })
    }
}
