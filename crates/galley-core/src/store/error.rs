use thiserror::Error as ThisError;

///
/// StoreError
///
/// Any failure reported by the document or object store. The engine never
/// retries; callers decide what to tell staff.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    #[error("permission denied: '{path}'")]
    PermissionDenied { path: String },

    #[error("not found: '{path}'")]
    NotFound { path: String },

    #[error("already exists: '{path}'")]
    AlreadyExists { path: String },

    #[error("query rejected by store: {reason}")]
    Rejected { reason: String },
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Canonical `<collection>/<id>` path used in store error messages.
#[must_use]
pub fn document_path(collection: &str, id: &str) -> String {
    format!("{collection}/{id}")
}
