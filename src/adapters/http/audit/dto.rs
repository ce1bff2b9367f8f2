//! HTTP DTOs for audit endpoints.
//!
//! `ProjectState` and `AnalysisReport` already serialize in the shape the
//! front-end expects, so only requests and a few wrappers live here.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{RISK_THRESHOLD, VALUE_THRESHOLD};
use crate::domain::audit::{Criterion, CriterionDescriptor, RiskCriterion, ValueCriterion};
use crate::domain::foundation::{ErrorCode, Score, ValidationError};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body for the two free-text fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTextRequest {
    pub value: String,
}

/// Body for a score update.
///
/// Any JSON number is accepted here and range-checked by `score()`, so
/// negative, fractional and oversized values get the same `OUT_OF_RANGE`
/// body as 3.
#[derive(Debug, Clone, Deserialize)]
pub struct SetScoreRequest {
    pub score: serde_json::Number,
}

impl SetScoreRequest {
    /// # Errors
    ///
    /// `ValidationError::OutOfRange` unless the number is exactly 0, 1 or 2.
    pub fn score(&self) -> Result<Score, ValidationError> {
        match self.score.as_u64().and_then(|n| u8::try_from(n).ok()) {
            Some(raw) => Score::try_from_u8(raw),
            None => Err(ValidationError::out_of_range("score", 0, 2, &self.score)),
        }
    }
}

/// Query parameters for the export endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportParams {
    /// "html" (default) or "markdown".
    pub format: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// One button of the three-way selector.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreOption {
    pub value: u8,
    pub label: &'static str,
}

/// Static catalogs the input form is built from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaCatalogResponse {
    pub value: Vec<CriterionDescriptor>,
    pub risk: Vec<CriterionDescriptor>,
    pub scores: Vec<ScoreOption>,
    pub value_threshold: u8,
    pub risk_threshold: u8,
}

impl CriteriaCatalogResponse {
    pub fn build() -> Self {
        Self {
            value: ValueCriterion::all().iter().map(Criterion::describe).collect(),
            risk: RiskCriterion::all().iter().map(Criterion::describe).collect(),
            scores: Score::ALL
                .iter()
                .map(|s| ScoreOption {
                    value: s.value(),
                    label: s.label(),
                })
                .collect(),
            value_threshold: VALUE_THRESHOLD,
            risk_threshold: RISK_THRESHOLD,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_all_criteria_and_scores() {
        let catalog = CriteriaCatalogResponse::build();
        assert_eq!(catalog.value.len(), 5);
        assert_eq!(catalog.risk.len(), 6);
        assert_eq!(catalog.scores.len(), 3);
        assert_eq!(catalog.scores[2].value, 2);
        assert_eq!(catalog.value_threshold, 6);
        assert_eq!(catalog.risk_threshold, 6);
    }

    #[test]
    fn catalog_serializes_camel_case() {
        let json = serde_json::to_value(CriteriaCatalogResponse::build()).unwrap();
        assert_eq!(json["valueThreshold"], 6);
        assert_eq!(json["risk"][0]["id"], "clientReliability");
        assert_eq!(json["scores"][1]["label"], "Medium (1)");
    }

    fn score_request(body: &str) -> SetScoreRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn score_request_accepts_catalog_scores() {
        assert_eq!(score_request(r#"{"score": 0}"#).score().unwrap(), Score::Low);
        assert_eq!(score_request(r#"{"score": 2}"#).score().unwrap(), Score::High);
    }

    #[test]
    fn score_request_rejects_any_other_number_as_out_of_range() {
        for body in [
            r#"{"score": 3}"#,
            r#"{"score": 256}"#,
            r#"{"score": -1}"#,
            r#"{"score": 1.5}"#,
            r#"{"score": 1.0}"#,
        ] {
            let err = score_request(body).score().unwrap_err();
            assert_eq!(err.code(), ErrorCode::OutOfRange, "body {}", body);
        }
    }

    #[test]
    fn score_request_reports_the_number_as_sent() {
        let err = score_request(r#"{"score": -1}"#).score().unwrap_err();
        assert_eq!(err.to_string(), "Field 'score' must be between 0 and 2, got -1");
    }

    #[test]
    fn error_response_uses_code_string() {
        let err = ErrorResponse::new(ErrorCode::InvalidCriterion, "Unknown value criterion 'x'");
        let json = serde_json::to_value(err).unwrap();
        assert_eq!(json["code"], "INVALID_CRITERION");
    }
}
