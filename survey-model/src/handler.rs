use crate::{Field, KeyValueRecord, Rule, Violation};
use std::collections::HashSet;

/// Optional domain checks run after the standard field rules.
///
/// Most callers do not need one: [`crate::validate`] covers presence and
/// format. Implement this for checks that depend on what a particular record
/// means, such as "the `rating` answer must be a level code".
pub trait RecordHandler: Send + Sync {
    /// Return violations to reject the record. Only called for records that
    /// already passed [`crate::RECORD_RULES`].
    fn validate(&self, record: &KeyValueRecord) -> Vec<Violation> {
        let _ = record;
        Vec::new()
    }
}

/// Requires the named records to hold a code from the level scale.
#[derive(Debug, Clone, Default)]
pub struct LevelCodeHandler {
    names: HashSet<String>,
}

impl LevelCodeHandler {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn applies_to(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl RecordHandler for LevelCodeHandler {
    fn validate(&self, record: &KeyValueRecord) -> Vec<Violation> {
        if !self.applies_to(record.name()) {
            return Vec::new();
        }
        match record.value() {
            Some(value) if value.as_level().is_none() => {
                vec![Violation::new(Field::Value, Rule::UnknownLevel)]
            }
            _ => Vec::new(),
        }
    }
}
