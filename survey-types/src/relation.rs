//! Evaluator-to-subject relations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the evaluator relates to the person being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// The subject evaluating themselves.
    #[serde(rename = "SELF")]
    SelfReview,
    #[serde(rename = "PEER")]
    Peer,
    /// The evaluator reports to the subject.
    #[serde(rename = "SUB")]
    Subordinate,
    /// The subject reports to the evaluator.
    #[serde(rename = "SUP")]
    Superior,
}

impl Relation {
    pub const ALL: [Relation; 4] = [
        Relation::SelfReview,
        Relation::Peer,
        Relation::Subordinate,
        Relation::Superior,
    ];

    /// Wire code (`SELF`, `PEER`, `SUB`, `SUP`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Relation::SelfReview => "SELF",
            Relation::Peer => "PEER",
            Relation::Subordinate => "SUB",
            Relation::Superior => "SUP",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Relation::SelfReview => "Self",
            Relation::Peer => "Peer",
            Relation::Subordinate => "Subordinate",
            Relation::Superior => "Superior",
        }
    }
}

impl FromStr for Relation {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.code() == s)
            .ok_or_else(|| crate::Error::InvalidRelation(s.to_string()))
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
