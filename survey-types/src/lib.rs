//! Shared survey types.
//!
//! This crate holds the fixed lookup tables and identifiers the rest of the
//! workspace refers to:
//! - [`Level`]: the ordered frequency scale answers are recorded on
//! - [`Relation`]: who is evaluating whom (self, peer, subordinate, superior)
//! - [`MediaId`]: opaque identifier of an externally owned media entity
//! - [`ResourceConfig`] / [`resolve_resource_url`]: how relative resource
//!   paths become URLs

mod ids;
mod level;
mod relation;
mod resource;

pub use ids::MediaId;
pub use level::Level;
pub use relation::Relation;
pub use resource::{resolve_resource_url, ResourceConfig};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid level code: {0}")]
    InvalidLevel(i64),

    #[error("invalid relation code: {0}")]
    InvalidRelation(String),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
