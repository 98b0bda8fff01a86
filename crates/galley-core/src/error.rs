use crate::store::StoreError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level failure for every engine operation. Each layer owns its own
/// enum; this only unifies them for `?` at the call sites.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    #[must_use]
    pub const fn origin(&self) -> ErrorOrigin {
        match self {
            Self::Store(_) => ErrorOrigin::Store,
            Self::Query(_) => ErrorOrigin::Query,
            Self::Validation(_) => ErrorOrigin::Validation,
        }
    }

    /// Message shown to staff when a screen handler gives up on a request.
    ///
    /// Store failures collapse to one generic line; query and validation
    /// failures are actionable and keep their own text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Store(_) => "The request failed. Please try again.".to_string(),
            Self::Query(err) => err.to_string(),
            Self::Validation(err) => err.to_string(),
        }
    }
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, derive_more::Display, Eq, PartialEq)]
pub enum ErrorOrigin {
    #[display("store")]
    Store,
    #[display("query")]
    Query,
    #[display("validation")]
    Validation,
}

///
/// QueryError
///
/// Constraint-set and page-request failures detected before or instead of
/// a remote read.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error("invalid page request: page {page} with page size {page_size}")]
    InvalidPage { page: u32, page_size: u32 },

    #[error("constraint set rejected by store index rules: {reason}")]
    IndexConstraint { reason: String },

    #[error("'in' filter on '{field}' has no values")]
    EmptyInList { field: String },

    #[error("too many matches for '{field}' ({matches} > {limit}), narrow your search")]
    TooManyMatches {
        field: String,
        matches: usize,
        limit: usize,
    },
}

impl QueryError {
    pub(crate) const fn invalid_page(page: u32, page_size: u32) -> Self {
        Self::InvalidPage { page, page_size }
    }

    pub(crate) fn index_constraint(reason: impl Into<String>) -> Self {
        Self::IndexConstraint {
            reason: reason.into(),
        }
    }

    pub(crate) fn too_many_matches(field: impl Into<String>, matches: usize, limit: usize) -> Self {
        Self::TooManyMatches {
            field: field.into(),
            matches,
            limit,
        }
    }
}

///
/// ValidationError
///
/// Write rejected client-side before any network call.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ValidationError {
    #[error("{collection}: required field '{field}' is missing")]
    MissingField { collection: String, field: String },

    #[error("{collection}: field '{field}' is invalid: {reason}")]
    InvalidField {
        collection: String,
        field: String,
        reason: String,
    },
}

impl ValidationError {
    pub fn missing_field(collection: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            collection: collection.into(),
            field: field.into(),
        }
    }

    pub fn invalid_field(
        collection: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            collection: collection.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}
