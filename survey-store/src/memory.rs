use crate::{RecordStore, StoreConfig, StoreError, StoreResult};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use survey_model::{validate, validate_with, KeyValueRecord, LevelCodeHandler, RecordHandler};
use tracing::{debug, warn};

/// In-memory [`RecordStore`].
pub struct MemoryRecordStore {
    records: BTreeMap<String, KeyValueRecord>,
    config: StoreConfig,
    handler: Option<Arc<dyn RecordHandler>>,
}

impl MemoryRecordStore {
    /// Creates a store. Names listed in `config.level_fields` get a
    /// [`LevelCodeHandler`].
    pub fn new(config: StoreConfig) -> Self {
        let handler: Option<Arc<dyn RecordHandler>> = if config.level_fields.is_empty() {
            None
        } else {
            Some(Arc::new(LevelCodeHandler::new(config.level_fields.iter().cloned())))
        };
        Self {
            records: BTreeMap::new(),
            config,
            handler,
        }
    }

    /// Creates a store that runs `handler` after the standard field rules.
    pub fn with_handler(config: StoreConfig, handler: Arc<dyn RecordHandler>) -> Self {
        Self {
            records: BTreeMap::new(),
            config,
            handler: Some(handler),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn check(&self, record: &KeyValueRecord) -> StoreResult<()> {
        let result = match &self.handler {
            Some(handler) => validate_with(record, handler.as_ref()),
            None => validate(record),
        };
        result.map_err(|errors| {
            warn!("Rejected record {:?}: {}", record.name(), errors);
            StoreError::Rejected {
                name: record.name().to_string(),
                errors,
            }
        })
    }

    fn check_capacity(&self, new_names: usize) -> StoreResult<()> {
        match self.config.max_records {
            Some(max) if self.records.len() + new_names > max => {
                warn!("Store full: {} records, {} new, max {}", self.records.len(), new_names, max);
                Err(StoreError::CapacityExceeded(max))
            }
            _ => Ok(()),
        }
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl RecordStore for MemoryRecordStore {
    fn put(&mut self, record: KeyValueRecord) -> StoreResult<Option<KeyValueRecord>> {
        self.check(&record)?;
        if !self.records.contains_key(record.name()) {
            self.check_capacity(1)?;
        }
        debug!("Stored record {:?}", record.name());
        Ok(self.records.insert(record.name().to_string(), record))
    }

    fn put_all(&mut self, records: Vec<KeyValueRecord>) -> StoreResult<usize> {
        for record in &records {
            self.check(record)?;
        }
        let new_names: BTreeSet<&str> = records
            .iter()
            .map(KeyValueRecord::name)
            .filter(|name| !self.records.contains_key(*name))
            .collect();
        self.check_capacity(new_names.len())?;

        let mut stored = BTreeSet::new();
        for record in records {
            stored.insert(record.name().to_string());
            self.records.insert(record.name().to_string(), record);
        }
        debug!("Stored batch of {} records", stored.len());
        Ok(stored.len())
    }

    fn get(&self, name: &str) -> Option<KeyValueRecord> {
        self.records.get(name).cloned()
    }

    fn remove(&mut self, name: &str) -> StoreResult<KeyValueRecord> {
        let removed = self
            .records
            .remove(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        debug!("Removed record {:?}", name);
        Ok(removed)
    }

    fn list(&self) -> Vec<KeyValueRecord> {
        self.records.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
