//! Error types for the record model.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while turning raw input into model types.
///
/// Validation failures are not errors in this sense; they are returned as
/// [`crate::ValidationErrors`].
#[derive(Debug, Error)]
pub enum ModelError {
    /// JSON input has a shape no [`crate::RecordValue`] variant covers.
    #[error("unsupported value shape: {0}")]
    UnsupportedValue(&'static str),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
