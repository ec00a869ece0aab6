//! The field rule table and the generic validator that walks it.
//!
//! Each [`FieldRule`] lists the checks one field must pass, in order. For a
//! given field only the first failing check is reported, so an empty name is
//! `MissingName` and not also `BlankName`.

use crate::{RecordValue, Violation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A record field that rules apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Value,
}

impl Field {
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Value => "value",
        }
    }

    /// Reads this field from a record view.
    pub fn read<'a>(self, view: &RecordView<'a>) -> FieldInput<'a> {
        match self {
            Field::Name => FieldInput::Text(view.name),
            Field::Value => FieldInput::Value(view.value),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule a violation breaks. Serialized as its code (e.g. `"BlankName"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    MissingName,
    /// Name present but made only of whitespace.
    BlankName,
    MissingValue,
    /// Value is not a code on the level scale. Only raised by
    /// [`crate::LevelCodeHandler`].
    UnknownLevel,
}

impl Rule {
    pub const fn as_str(self) -> &'static str {
        match self {
            Rule::MissingName => "MissingName",
            Rule::BlankName => "BlankName",
            Rule::MissingValue => "MissingValue",
            Rule::UnknownLevel => "UnknownLevel",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Rule::MissingName => "name is required",
            Rule::BlankName => "name must contain a non-whitespace character",
            Rule::MissingValue => "value is required",
            Rule::UnknownLevel => "value is not a level code",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of the fields under validation. Lets a raw name/value pair
/// and a constructed record go through the same rules.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    pub name: &'a str,
    pub value: Option<&'a RecordValue>,
}

/// A single field's content as seen by a predicate.
#[derive(Debug, Clone, Copy)]
pub enum FieldInput<'a> {
    Text(&'a str),
    Value(Option<&'a RecordValue>),
}

/// A condition a field must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Present and not empty.
    Present,
    /// Contains at least one non-whitespace character. Always holds for
    /// non-text input.
    NonWhitespace,
}

impl Predicate {
    pub fn holds(self, input: FieldInput<'_>) -> bool {
        match (self, input) {
            (Predicate::Present, FieldInput::Text(s)) => !s.is_empty(),
            (Predicate::Present, FieldInput::Value(v)) => v.is_some_and(|v| !v.is_empty()),
            (Predicate::NonWhitespace, FieldInput::Text(s)) => s.chars().any(|c| !c.is_whitespace()),
            (Predicate::NonWhitespace, FieldInput::Value(_)) => true,
        }
    }
}

/// A predicate paired with the rule reported when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub predicate: Predicate,
    pub rule: Rule,
}

impl Check {
    pub const fn new(predicate: Predicate, rule: Rule) -> Self {
        Self { predicate, rule }
    }
}

/// Ordered checks for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub checks: &'static [Check],
}

/// Rules every [`crate::KeyValueRecord`] must satisfy.
pub const RECORD_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Name,
        checks: &[
            Check::new(Predicate::Present, Rule::MissingName),
            Check::new(Predicate::NonWhitespace, Rule::BlankName),
        ],
    },
    FieldRule {
        field: Field::Value,
        checks: &[Check::new(Predicate::Present, Rule::MissingValue)],
    },
];

/// Runs `rules` against `view`, returning violations in table order.
pub fn evaluate(rules: &[FieldRule], view: &RecordView<'_>) -> Vec<Violation> {
    rules
        .iter()
        .filter_map(|rule| {
            let input = rule.field.read(view);
            rule.checks
                .iter()
                .find(|check| !check.predicate.holds(input))
                .map(|check| Violation::new(rule.field, check.rule))
        })
        .collect()
}
