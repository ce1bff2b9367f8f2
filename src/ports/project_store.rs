//! ProjectStore port - Controlled mutation of the audit input.

use std::sync::Arc;

use crate::domain::audit::{AuditError, ProjectState, RiskCriterion, ValueCriterion};
use crate::domain::foundation::Score;

/// Port for the single `ProjectState` a dashboard works on.
///
/// Implementations must ensure:
/// - Every mutation publishes a fresh snapshot; a previously returned
///   `Arc<ProjectState>` never changes
/// - A mutation touches exactly the field it names
/// - Text is stored verbatim
///
/// There is one writer in practice (the UI event handler), so no
/// transactional semantics are required beyond snapshot replacement.
///
/// # Example
///
/// ```ignore
/// let before = store.get_state();
/// let after = store.set_value_score(ValueCriterion::Profit, Score::High);
/// assert_eq!(before.value.profit, Score::Low);
/// ```
pub trait ProjectStore: Send + Sync {
    /// Current snapshot.
    fn get_state(&self) -> Arc<ProjectState>;

    fn set_project_name(&self, name: String) -> Arc<ProjectState>;

    fn set_ae_name(&self, name: String) -> Arc<ProjectState>;

    fn set_value_score(&self, criterion: ValueCriterion, score: Score) -> Arc<ProjectState>;

    fn set_risk_score(&self, criterion: RiskCriterion, score: Score) -> Arc<ProjectState>;

    /// String-keyed variant of `set_value_score`.
    ///
    /// # Errors
    ///
    /// `AuditError::InvalidCriterion` if `id` is not a value criterion id.
    fn set_value_score_by_id(&self, id: &str, score: Score) -> Result<Arc<ProjectState>, AuditError> {
        let criterion: ValueCriterion = id.parse()?;
        Ok(self.set_value_score(criterion, score))
    }

    /// String-keyed variant of `set_risk_score`.
    ///
    /// # Errors
    ///
    /// `AuditError::InvalidCriterion` if `id` is not a risk criterion id.
    fn set_risk_score_by_id(&self, id: &str, score: Score) -> Result<Arc<ProjectState>, AuditError> {
        let criterion: RiskCriterion = id.parse()?;
        Ok(self.set_risk_score(criterion, score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_store_is_object_safe() {
        fn check<T: ProjectStore + ?Sized>() {}
        check::<dyn ProjectStore>();
    }
}
