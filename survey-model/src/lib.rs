//! Key-value record model for survey settings and answers.
//!
//! Defines the record type every setting or answer is persisted as, and the
//! contract a record must satisfy before a store accepts it:
//! - [`KeyValueRecord`]: a name plus a [`RecordValue`] payload and an optional
//!   [`MediaRef`] to an externally owned attachment
//! - [`RecordValue`]: text, number, object, or list of objects
//! - [`RECORD_RULES`] and [`evaluate`]: the field rule table and the generic
//!   validator that walks it
//! - [`validate`] / [`validate_pair`]: check a record or a raw pair, returning
//!   [`ValidationErrors`] as data
//! - [`RecordHandler`]: optional domain checks layered on top of the table
//!
//! Validation is pure. Nothing here performs I/O or holds state, so records
//! can be validated from any thread without coordination.

mod error;
mod handler;
mod media;
mod record;
mod rules;
mod validation;
mod value;

pub use error::{ModelError, ModelResult};
pub use handler::{LevelCodeHandler, RecordHandler};
pub use media::{MediaLookup, MediaRef};
pub use record::KeyValueRecord;
pub use rules::{
    evaluate, Check, Field, FieldInput, FieldRule, Predicate, RecordView, Rule, RECORD_RULES,
};
pub use validation::{validate, validate_pair, validate_with, ValidationErrors, Violation};
pub use value::{RecordValue, ValueKind};
