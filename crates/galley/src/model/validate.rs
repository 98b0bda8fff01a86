use galley_core::{document::Document, error::ValidationError};

/// Reject `document` unless every `required` field is present and non-blank.
///
/// Blank means null, whitespace-only text, or an empty list. The first
/// offending field in `required` order is reported.
pub fn validate_required(
    collection: &str,
    required: &[&str],
    document: &Document,
) -> Result<(), ValidationError> {
    for field in required {
        match document.get(field) {
            Some(value) if !value.is_blank() => {}
            _ => return Err(ValidationError::missing_field(collection, *field)),
        }
    }

    Ok(())
}
