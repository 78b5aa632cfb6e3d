//! Option index value object (0-4 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Position of a selected answer option within a question (0 to 4).
///
/// Each question offers exactly five options ordered from weakest to
/// strongest, so the index doubles as the maturity signal: a selection
/// at index `i` is worth `i + 1` points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct OptionIndex(u8);

impl OptionIndex {
    /// Highest valid index (questions have five options).
    pub const MAX: u8 = 4;

    /// Creates an OptionIndex, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::out_of_range(
                "option_index",
                0,
                Self::MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw index.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the score contribution for this selection (index + 1, so 1 to 5).
    pub fn points(&self) -> u8 {
        self.0 + 1
    }
}

impl TryFrom<u8> for OptionIndex {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value)
    }
}

impl From<OptionIndex> for u8 {
    fn from(index: OptionIndex) -> u8 {
        index.0
    }
}

impl fmt::Display for OptionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
