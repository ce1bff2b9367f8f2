//! Score value object for audit criteria (0 to 2 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Three-step rating given to every value and risk criterion.
///
/// The discriminant is the number that gets summed, so JSON carries the
/// plain integer rather than the variant name.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Score {
    #[default]
    Low = 0,
    Medium = 1,
    High = 2,
}

impl Score {
    /// All scores in ascending order.
    pub const ALL: [Score; 3] = [Score::Low, Score::Medium, Score::High];

    /// Creates a Score from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            0 => Ok(Score::Low),
            1 => Ok(Score::Medium),
            2 => Ok(Score::High),
            _ => Err(ValidationError::out_of_range("score", 0, 2, value)),
        }
    }

    /// Returns the numeric value used in totals.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label shown on the selector buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Score::Low => "Low (0)",
            Score::Medium => "Medium (1)",
            Score::High => "High (2)",
        }
    }
}

impl TryFrom<u8> for Score {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Score::try_from_u8(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
