use thiserror::Error;

/// Raised when a raw record lacks a required field or carries it with the wrong type.
///
/// The mapping never substitutes defaults: a malformed upstream record fails here
/// and the caller decides what to do with it.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("field access failed: {0}")]
    FieldAccess(#[from] serde_json::Error),
}
