//! Priority classification over the two totals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Total value at or above which a project counts as high value.
pub const VALUE_THRESHOLD: u8 = 6;

/// Total risk at or above which a project counts as high risk.
pub const RISK_THRESHOLD: u8 = 6;

/// Highest reachable value total (5 criteria x 2).
pub const MAX_TOTAL_VALUE: u8 = 10;

/// Highest reachable risk total (6 criteria x 2).
pub const MAX_TOTAL_RISK: u8 = 12;

/// Intake priority for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityLevel {
    /// High value, low risk.
    P0,
    /// High value, high risk.
    P1,
    /// Low value, low risk.
    P2,
    /// Low value, high risk.
    #[serde(rename = "WARNING")]
    Warning,
}

impl PriorityLevel {
    /// Classifies a pair of totals.
    ///
    /// Each axis is compared against its own threshold and the four boolean
    /// combinations map to one level each.
    pub fn classify(total_value: u8, total_risk: u8) -> Self {
        let high_value = total_value >= VALUE_THRESHOLD;
        let high_risk = total_risk >= RISK_THRESHOLD;
        match (high_value, high_risk) {
            (true, false) => PriorityLevel::P0,
            (true, true) => PriorityLevel::P1,
            (false, false) => PriorityLevel::P2,
            (false, true) => PriorityLevel::Warning,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PriorityLevel::P0 => "P0",
            PriorityLevel::P1 => "P1",
            PriorityLevel::P2 => "P2",
            PriorityLevel::Warning => "WARNING",
        }
    }

    /// Text shown inside the priority badge.
    pub fn badge(&self) -> &'static str {
        match self {
            PriorityLevel::Warning => "!!",
            other => other.code(),
        }
    }

    pub fn tone(&self) -> PriorityTone {
        match self {
            PriorityLevel::P0 => PriorityTone::Positive,
            PriorityLevel::P1 => PriorityTone::Caution,
            PriorityLevel::P2 => PriorityTone::Neutral,
            PriorityLevel::Warning => PriorityTone::Danger,
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Color family for the priority badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTone {
    Positive,
    Caution,
    Neutral,
    Danger,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_matches_partition_table() {
        assert_eq!(PriorityLevel::classify(6, 0), PriorityLevel::P0);
        assert_eq!(PriorityLevel::classify(6, 6), PriorityLevel::P1);
        assert_eq!(PriorityLevel::classify(0, 0), PriorityLevel::P2);
        assert_eq!(PriorityLevel::classify(0, 6), PriorityLevel::Warning);
    }

    #[test]
    fn classify_value_boundary() {
        assert_eq!(PriorityLevel::classify(5, 0), PriorityLevel::P2);
        assert_eq!(PriorityLevel::classify(5, 5), PriorityLevel::P2);
        assert_eq!(PriorityLevel::classify(6, 5), PriorityLevel::P0);
    }

    #[test]
    fn classify_risk_boundary() {
        assert_eq!(PriorityLevel::classify(10, 5), PriorityLevel::P0);
        assert_eq!(PriorityLevel::classify(10, 6), PriorityLevel::P1);
        assert_eq!(PriorityLevel::classify(5, 6), PriorityLevel::Warning);
    }

    #[test]
    fn classify_extremes() {
        assert_eq!(PriorityLevel::classify(MAX_TOTAL_VALUE, 0), PriorityLevel::P0);
        assert_eq!(
            PriorityLevel::classify(MAX_TOTAL_VALUE, MAX_TOTAL_RISK),
            PriorityLevel::P1
        );
        assert_eq!(PriorityLevel::classify(0, MAX_TOTAL_RISK), PriorityLevel::Warning);
    }

    #[test]
    fn classify_covers_every_pair_with_table_semantics() {
        for v in 0..=MAX_TOTAL_VALUE {
            for r in 0..=MAX_TOTAL_RISK {
                let expected = match (v >= 6, r >= 6) {
                    (true, false) => PriorityLevel::P0,
                    (true, true) => PriorityLevel::P1,
                    (false, false) => PriorityLevel::P2,
                    (false, true) => PriorityLevel::Warning,
                };
                assert_eq!(PriorityLevel::classify(v, r), expected, "v={} r={}", v, r);
            }
        }
    }

    #[test]
    fn warning_badge_is_exclamation() {
        assert_eq!(PriorityLevel::Warning.badge(), "!!");
        assert_eq!(PriorityLevel::P1.badge(), "P1");
    }

    #[test]
    fn tones_follow_level() {
        assert_eq!(PriorityLevel::P0.tone(), PriorityTone::Positive);
        assert_eq!(PriorityLevel::P1.tone(), PriorityTone::Caution);
        assert_eq!(PriorityLevel::P2.tone(), PriorityTone::Neutral);
        assert_eq!(PriorityLevel::Warning.tone(), PriorityTone::Danger);
    }

    #[test]
    fn priority_serializes_as_code() {
        assert_eq!(serde_json::to_string(&PriorityLevel::P0).unwrap(), "\"P0\"");
        assert_eq!(serde_json::to_string(&PriorityLevel::Warning).unwrap(), "\"WARNING\"");
        assert_eq!(PriorityLevel::Warning.to_string(), "WARNING");
    }
}
