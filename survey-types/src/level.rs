//! The frequency scale survey answers are given on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of the Likert-style frequency scale.
///
/// Codes run from 1 (`Rarely`) to 5 (`Always`) and are what an answer record
/// stores; labels are for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    Rarely = 1,
    Occasionally = 2,
    Sometimes = 3,
    Frequently = 4,
    Always = 5,
}

impl Level {
    /// Every level in ascending order.
    pub const ALL: [Level; 5] = [
        Level::Rarely,
        Level::Occasionally,
        Level::Sometimes,
        Level::Frequently,
        Level::Always,
    ];

    /// Lowest valid code.
    pub const MIN: u8 = 1;
    /// Highest valid code.
    pub const MAX: u8 = 5;

    /// Numeric code stored in answers.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a level by its numeric code.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|l| i64::from(l.code()) == code)
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Level::Rarely => "Rarely",
            Level::Occasionally => "Occasionally",
            Level::Sometimes => "Sometimes",
            Level::Frequently => "Frequently",
            Level::Always => "Always",
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = crate::Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(i64::from(code)).ok_or(crate::Error::InvalidLevel(i64::from(code)))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.code()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
