//! Decision advice content, keyed by priority level.

use serde::{Deserialize, Serialize};

use super::PriorityLevel;

/// One narrative string per priority level.
///
/// The wording is content, not logic. Swap in a different table to change
/// language or tone; the lookup stays exhaustive over `PriorityLevel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceTable {
    pub p0: String,
    pub p1: String,
    pub p2: String,
    pub warning: String,
}

impl AdviceTable {
    pub fn new(
        p0: impl Into<String>,
        p1: impl Into<String>,
        p2: impl Into<String>,
        warning: impl Into<String>,
    ) -> Self {
        Self {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            warning: warning.into(),
        }
    }

    pub fn advice_for(&self, priority: PriorityLevel) -> &str {
        match priority {
            PriorityLevel::P0 => &self.p0,
            PriorityLevel::P1 => &self.p1,
            PriorityLevel::P2 => &self.p2,
            PriorityLevel::Warning => &self.warning,
        }
    }
}

impl Default for AdviceTable {
    fn default() -> Self {
        Self::new(
            "High value, low risk. A golden project: go after it and staff it with the best people available.",
            "High value, high risk. Real upside but serious challenges; assign a dedicated owner to watch the risk points.",
            "Low value, low risk. Good for filling idle capacity or giving junior staff practice; take it on when there is room.",
            "Low value, high risk. A classic pitfall project; decline it or renegotiate the contract terms substantially.",
        )
    }
}
