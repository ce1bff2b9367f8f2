//! Property tests for totals and priority classification.

use proptest::prelude::*;

use priority_audit::domain::analysis::{AnalysisEngine, PriorityLevel, RISK_THRESHOLD};
use priority_audit::domain::audit::{Criterion, ProjectState, RiskCriterion, ValueCriterion};
use priority_audit::domain::foundation::Score;

fn score() -> impl Strategy<Value = Score> {
    prop_oneof![Just(Score::Low), Just(Score::Medium), Just(Score::High)]
}

fn state() -> impl Strategy<Value = ProjectState> {
    (
        prop::collection::vec(score(), 5),
        prop::collection::vec(score(), 6),
        ".*",
        ".*",
    )
        .prop_map(|(values, risks, project_name, ae_name)| {
            let mut state = ProjectState::new()
                .with_project_name(project_name)
                .with_ae_name(ae_name);
            for (criterion, score) in ValueCriterion::all().iter().zip(values) {
                state = state.with_value_score(*criterion, score);
            }
            for (criterion, score) in RiskCriterion::all().iter().zip(risks) {
                state = state.with_risk_score(*criterion, score);
            }
            state
        })
}

proptest! {
    #[test]
    fn totals_are_exact_sums(state in state()) {
        let report = AnalysisEngine::default().analyze(&state);

        let value_sum: u8 = ValueCriterion::all().iter().map(|c| state.value.get(*c).value()).sum();
        let risk_sum: u8 = RiskCriterion::all().iter().map(|c| state.risk.get(*c).value()).sum();

        prop_assert_eq!(report.total_value, value_sum);
        prop_assert_eq!(report.total_risk, risk_sum);
        prop_assert!(report.total_value <= 10);
        prop_assert!(report.total_risk <= 12);
    }

    #[test]
    fn high_risk_flag_matches_threshold(state in state()) {
        let report = AnalysisEngine::default().analyze(&state);
        prop_assert_eq!(report.is_high_risk, report.total_risk >= RISK_THRESHOLD);
    }

    #[test]
    fn priority_matches_partition(state in state()) {
        let report = AnalysisEngine::default().analyze(&state);
        let expected = match (report.total_value >= 6, report.total_risk >= 6) {
            (true, false) => PriorityLevel::P0,
            (true, true) => PriorityLevel::P1,
            (false, false) => PriorityLevel::P2,
            (false, true) => PriorityLevel::Warning,
        };
        prop_assert_eq!(report.priority, expected);
    }

    #[test]
    fn analysis_is_idempotent(state in state()) {
        let engine = AnalysisEngine::default();
        prop_assert_eq!(engine.analyze(&state), engine.analyze(&state));
    }

    #[test]
    fn value_update_is_isolated(state in state(), new_score in score()) {
        let updated = state.with_value_score(ValueCriterion::Profit, new_score);

        prop_assert_eq!(updated.value.profit, new_score);
        for c in ValueCriterion::all().iter().filter(|c| **c != ValueCriterion::Profit) {
            prop_assert_eq!(updated.value.get(*c), state.value.get(*c));
        }
        prop_assert_eq!(updated.risk, state.risk);
        prop_assert_eq!(&updated.project_name, &state.project_name);
        prop_assert_eq!(&updated.ae_name, &state.ae_name);
    }

    #[test]
    fn series_mirror_state_in_catalog_order(state in state()) {
        let report = AnalysisEngine::default().analyze(&state);

        for (point, criterion) in report.value_series.iter().zip(ValueCriterion::all()) {
            prop_assert_eq!(point.criterion_id, criterion.id());
            prop_assert_eq!(point.score, state.value.get(*criterion));
        }
        for (point, criterion) in report.risk_series.iter().zip(RiskCriterion::all()) {
            prop_assert_eq!(point.criterion_id, criterion.id());
            prop_assert_eq!(point.score, state.risk.get(*criterion));
        }
    }
}
