//! Owning store for survey key-value records.
//!
//! Records reach the store only after passing validation; the store is what
//! keeps names unique. Writing a record under an existing name replaces the
//! whole record.
//!
//! [`MemoryRecordStore`] keeps everything in a `BTreeMap` and is enough for
//! tests and single-process use. Callers that share one across threads wrap it
//! in their own lock.

mod config;
mod error;
mod memory;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryRecordStore;

use survey_model::KeyValueRecord;

/// Storage for validated records, keyed by record name.
pub trait RecordStore {
    /// Validates and stores `record`, returning the record it replaced.
    fn put(&mut self, record: KeyValueRecord) -> StoreResult<Option<KeyValueRecord>>;

    /// Validates every record, then stores all of them or none.
    ///
    /// A name repeated within the batch keeps its last record. Returns the
    /// number of distinct names written.
    fn put_all(&mut self, records: Vec<KeyValueRecord>) -> StoreResult<usize>;

    fn get(&self, name: &str) -> Option<KeyValueRecord>;

    fn remove(&mut self, name: &str) -> StoreResult<KeyValueRecord>;

    /// All records ordered by name.
    fn list(&self) -> Vec<KeyValueRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
