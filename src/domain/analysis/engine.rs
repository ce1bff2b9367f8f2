//! Analysis Engine - `ProjectState` to `AnalysisReport`.

use super::{
    AdviceTable, AnalysisReport, ChartPoint, PriorityLevel, SeverityColor, MAX_TOTAL_RISK,
    MAX_TOTAL_VALUE, RISK_THRESHOLD,
};
use crate::domain::audit::{Criterion, ProjectState};
use crate::domain::foundation::Percentage;

/// Stateless report builder.
///
/// The only thing it carries is the advice content; the same engine and the
/// same state always give an equal report.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    advice: AdviceTable,
}

impl AnalysisEngine {
    pub fn new(advice: AdviceTable) -> Self {
        Self { advice }
    }

    /// Computes the full report.
    ///
    /// Cannot fail: every score is already a valid `Score`.
    pub fn analyze(&self, state: &ProjectState) -> AnalysisReport {
        let total_value = state.value.total();
        let total_risk = state.risk.total();
        let priority = PriorityLevel::classify(total_value, total_risk);

        let value_series = state
            .value
            .entries()
            .map(|(criterion, score)| ChartPoint {
                criterion_id: criterion.id(),
                label: criterion.chart_label(),
                score,
                color: None,
            })
            .collect();

        let risk_series = state
            .risk
            .entries()
            .map(|(criterion, score)| ChartPoint {
                criterion_id: criterion.id(),
                label: criterion.chart_label(),
                score,
                color: Some(SeverityColor::from(score)),
            })
            .collect();

        AnalysisReport {
            total_value,
            total_risk,
            value_fill: Percentage::of(total_value.into(), MAX_TOTAL_VALUE.into()),
            risk_fill: Percentage::of(total_risk.into(), MAX_TOTAL_RISK.into()),
            is_high_risk: total_risk >= RISK_THRESHOLD,
            priority,
            badge: priority.badge(),
            tone: priority.tone(),
            advice_text: self.advice.advice_for(priority).to_string(),
            value_series,
            risk_series,
        }
    }
}
