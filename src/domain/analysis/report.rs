//! The derived audit report and its chart series.

use serde::Serialize;

use super::{PriorityLevel, PriorityTone};
use crate::domain::foundation::{Percentage, Score};

/// Everything the dashboard shows for one `ProjectState`.
///
/// Built only by `AnalysisEngine`; never stored or patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub total_value: u8,
    pub total_risk: u8,
    /// Fill of the value bar (total / 10).
    pub value_fill: Percentage,
    /// Fill of the risk bar (total / 12).
    pub risk_fill: Percentage,
    pub is_high_risk: bool,
    pub priority: PriorityLevel,
    pub badge: &'static str,
    pub tone: PriorityTone,
    pub advice_text: String,
    /// Radar chart input, catalog order.
    pub value_series: Vec<ChartPoint>,
    /// Bar chart input, catalog order.
    pub risk_series: Vec<ChartPoint>,
}

/// A single (label, score) pair on one of the two charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub criterion_id: &'static str,
    pub label: &'static str,
    pub score: Score,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<SeverityColor>,
}

/// Bar color for a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityColor {
    /// Score 2
    Alert,
    /// Score 1
    Warning,
    /// Score 0
    Neutral,
}

impl From<Score> for SeverityColor {
    fn from(score: Score) -> Self {
        match score {
            Score::High => SeverityColor::Alert,
            Score::Medium => SeverityColor::Warning,
            Score::Low => SeverityColor::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_color_from_score() {
        assert_eq!(SeverityColor::from(Score::High), SeverityColor::Alert);
        assert_eq!(SeverityColor::from(Score::Medium), SeverityColor::Warning);
        assert_eq!(SeverityColor::from(Score::Low), SeverityColor::Neutral);
    }

    #[test]
    fn chart_point_omits_missing_color() {
        let point = ChartPoint {
            criterion_id: "profit",
            label: "Profit",
            score: Score::Medium,
            color: None,
        };
        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json["criterionId"], "profit");
        assert_eq!(json["score"], 1);
        assert!(json.get("color").is_none());
    }
}
