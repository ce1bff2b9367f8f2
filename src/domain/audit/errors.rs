//! Error types for the audit domain.

use thiserror::Error;

use super::CriterionKind;
use crate::domain::foundation::ErrorCode;

/// Errors raised when mutating a project audit.
///
/// Free text and typed scores cannot fail, so the only way in is an
/// identifier that is not part of a catalog. That is a caller wiring bug,
/// never a user input problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditError {
    #[error("Unknown {kind} criterion '{id}'")]
    InvalidCriterion { kind: CriterionKind, id: String },
}

impl AuditError {
    pub fn invalid_criterion(kind: CriterionKind, id: impl Into<String>) -> Self {
        AuditError::InvalidCriterion {
            kind,
            id: id.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AuditError::InvalidCriterion { .. } => ErrorCode::InvalidCriterion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_criterion_names_kind_and_id() {
        let err = AuditError::invalid_criterion(CriterionKind::Risk, "weather");
        assert_eq!(err.to_string(), "Unknown risk criterion 'weather'");
        assert_eq!(err.code(), ErrorCode::InvalidCriterion);
    }
}
