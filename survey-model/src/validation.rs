use crate::rules::{evaluate, Field, RecordView, Rule, RECORD_RULES};
use crate::{KeyValueRecord, RecordHandler, RecordValue};
use serde::{Deserialize, Serialize};

/// One field-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: Field,
    pub rule: Rule,
    pub message: String,
}

impl Violation {
    /// Violation with the rule's standard message.
    pub fn new(field: Field, rule: Rule) -> Self {
        Self {
            field,
            rule,
            message: rule.message().to_string(),
        }
    }

    pub fn with_message(field: Field, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }
}

/// A record failed validation. Serializes as `{"violations": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("validation failed: {}", summary(.violations))]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

fn summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.rule))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn has_rule(&self, rule: Rule) -> bool {
        self.violations.iter().any(|v| v.rule == rule)
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }

    fn check(violations: Vec<Violation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { violations })
        }
    }
}

/// Validates a record against [`RECORD_RULES`].
pub fn validate(record: &KeyValueRecord) -> Result<(), ValidationErrors> {
    validate_pair(record.name(), record.value())
}

/// Validates a name/value pair without building a record first. Gives the
/// same answer as [`validate`] on the equivalent record.
pub fn validate_pair(name: &str, value: Option<&RecordValue>) -> Result<(), ValidationErrors> {
    ValidationErrors::check(evaluate(RECORD_RULES, &RecordView { name, value }))
}

/// Validates against [`RECORD_RULES`], then runs `handler` on records that
/// passed.
pub fn validate_with(
    record: &KeyValueRecord,
    handler: &dyn RecordHandler,
) -> Result<(), ValidationErrors> {
    validate(record)?;
    ValidationErrors::check(handler.validate(record))
}
