//! ProjectState - the audit input as one immutable value.
//!
//! Every update method consumes or borrows the current value and returns a new
//! one. Nothing here mutates in place, which is what lets the store hand out
//! shared snapshots.

use serde::{Deserialize, Serialize};

use super::{Criterion, RiskCriterion, ValueCriterion};
use crate::domain::foundation::Score;

/// One score per value criterion. Sum range 0..=10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueScores {
    pub profit: Score,
    pub portfolio: Score,
    pub client_rel: Score,
    pub training: Score,
    pub fun: Score,
}

impl ValueScores {
    pub fn get(&self, criterion: ValueCriterion) -> Score {
        match criterion {
            ValueCriterion::Profit => self.profit,
            ValueCriterion::Portfolio => self.portfolio,
            ValueCriterion::ClientRel => self.client_rel,
            ValueCriterion::Training => self.training,
            ValueCriterion::Fun => self.fun,
        }
    }

    /// Returns a copy with exactly one entry replaced.
    pub fn with(mut self, criterion: ValueCriterion, score: Score) -> Self {
        let slot = match criterion {
            ValueCriterion::Profit => &mut self.profit,
            ValueCriterion::Portfolio => &mut self.portfolio,
            ValueCriterion::ClientRel => &mut self.client_rel,
            ValueCriterion::Training => &mut self.training,
            ValueCriterion::Fun => &mut self.fun,
        };
        *slot = score;
        self
    }

    /// Entries in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (ValueCriterion, Score)> + '_ {
        ValueCriterion::all().iter().map(move |c| (*c, self.get(*c)))
    }

    pub fn total(&self) -> u8 {
        self.entries().map(|(_, s)| s.value()).sum()
    }
}

/// One score per risk criterion. Sum range 0..=12.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScores {
    pub client_reliability: Score,
    pub participation: Score,
    pub time_pressure: Score,
    pub demands: Score,
    pub capability_gap: Score,
    pub internal_variables: Score,
}

impl RiskScores {
    pub fn get(&self, criterion: RiskCriterion) -> Score {
        match criterion {
            RiskCriterion::ClientReliability => self.client_reliability,
            RiskCriterion::Participation => self.participation,
            RiskCriterion::TimePressure => self.time_pressure,
            RiskCriterion::Demands => self.demands,
            RiskCriterion::CapabilityGap => self.capability_gap,
            RiskCriterion::InternalVariables => self.internal_variables,
        }
    }

    /// Returns a copy with exactly one entry replaced.
    pub fn with(mut self, criterion: RiskCriterion, score: Score) -> Self {
        let slot = match criterion {
            RiskCriterion::ClientReliability => &mut self.client_reliability,
            RiskCriterion::Participation => &mut self.participation,
            RiskCriterion::TimePressure => &mut self.time_pressure,
            RiskCriterion::Demands => &mut self.demands,
            RiskCriterion::CapabilityGap => &mut self.capability_gap,
            RiskCriterion::InternalVariables => &mut self.internal_variables,
        };
        *slot = score;
        self
    }

    /// Entries in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (RiskCriterion, Score)> + '_ {
        RiskCriterion::all().iter().map(move |c| (*c, self.get(*c)))
    }

    pub fn total(&self) -> u8 {
        self.entries().map(|(_, s)| s.value()).sum()
    }
}

/// Everything the user has entered for the project under review.
///
/// Text fields are kept verbatim: no trimming, empty allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectState {
    pub project_name: String,
    pub ae_name: String,
    pub value: ValueScores,
    pub risk: RiskScores,
}

impl ProjectState {
    /// Empty text fields and every score at `Low`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project_name(&self, name: impl Into<String>) -> Self {
        Self {
            project_name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_ae_name(&self, name: impl Into<String>) -> Self {
        Self {
            ae_name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_value_score(&self, criterion: ValueCriterion, score: Score) -> Self {
        Self {
            value: self.value.with(criterion, score),
            ..self.clone()
        }
    }

    pub fn with_risk_score(&self, criterion: RiskCriterion, score: Score) -> Self {
        Self {
            risk: self.risk.with(criterion, score),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_blank_and_low() {
        let state = ProjectState::new();
        assert_eq!(state.project_name, "");
        assert_eq!(state.ae_name, "");
        assert!(state.value.entries().all(|(_, s)| s == Score::Low));
        assert!(state.risk.entries().all(|(_, s)| s == Score::Low));
    }

    #[test]
    fn with_value_score_changes_only_that_entry() {
        let before = ProjectState::new()
            .with_project_name("Spring campaign")
            .with_ae_name("David")
            .with_risk_score(RiskCriterion::Demands, Score::Medium);
        let after = before.with_value_score(ValueCriterion::Profit, Score::High);

        assert_eq!(after.value.profit, Score::High);
        for c in ValueCriterion::all().iter().filter(|c| **c != ValueCriterion::Profit) {
            assert_eq!(after.value.get(*c), before.value.get(*c));
        }
        assert_eq!(after.risk, before.risk);
        assert_eq!(after.project_name, before.project_name);
        assert_eq!(after.ae_name, before.ae_name);
    }

    #[test]
    fn with_risk_score_leaves_value_untouched() {
        let before = ProjectState::new().with_value_score(ValueCriterion::Fun, Score::High);
        let after = before.with_risk_score(RiskCriterion::CapabilityGap, Score::High);

        assert_eq!(after.risk.capability_gap, Score::High);
        assert_eq!(after.risk.total(), 2);
        assert_eq!(after.value, before.value);
    }

    #[test]
    fn builders_do_not_touch_the_original() {
        let original = ProjectState::new();
        let _ = original.with_project_name("x");
        let _ = original.with_value_score(ValueCriterion::Training, Score::High);
        assert_eq!(original, ProjectState::new());
    }

    #[test]
    fn text_is_stored_verbatim() {
        let state = ProjectState::new().with_project_name("  padded  ").with_ae_name("");
        assert_eq!(state.project_name, "  padded  ");
        assert_eq!(state.ae_name, "");
    }

    #[test]
    fn get_and_with_agree_for_every_criterion() {
        for c in ValueCriterion::all() {
            assert_eq!(ValueScores::default().with(*c, Score::Medium).get(*c), Score::Medium);
        }
        for c in RiskCriterion::all() {
            assert_eq!(RiskScores::default().with(*c, Score::High).get(*c), Score::High);
        }
    }

    #[test]
    fn totals_at_extremes() {
        let mut value = ValueScores::default();
        for c in ValueCriterion::all() {
            value = value.with(*c, Score::High);
        }
        let mut risk = RiskScores::default();
        for c in RiskCriterion::all() {
            risk = risk.with(*c, Score::High);
        }
        assert_eq!(value.total(), 10);
        assert_eq!(risk.total(), 12);
    }

    #[test]
    fn serializes_with_criterion_ids() {
        let state = ProjectState::new()
            .with_project_name("Launch film")
            .with_value_score(ValueCriterion::ClientRel, Score::High);
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["projectName"], "Launch film");
        assert_eq!(json["aeName"], "");
        assert_eq!(json["value"]["clientRel"], 2);
        assert_eq!(json["risk"]["internalVariables"], 0);
    }
}
