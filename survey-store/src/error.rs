//! Error types for the record store.

use survey_model::ValidationErrors;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record failed validation and was not stored.
    #[error("record {name:?} rejected: {errors}")]
    Rejected {
        name: String,
        #[source]
        errors: ValidationErrors,
    },

    /// Storing the record would exceed `max_records`.
    #[error("store is full (max {0} records)")]
    CapacityExceeded(usize),

    /// No record with this name.
    #[error("record not found: {0}")]
    NotFound(String),

    /// Store config could not be parsed.
    #[error("invalid store config: {0}")]
    InvalidConfig(#[from] toml::de::Error),
}

impl StoreError {
    /// Validation failures behind a rejection, if that is what this is.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            StoreError::Rejected { errors, .. } => Some(errors),
            _ => None,
        }
    }
}
