//! SetScoreHandler - Command handler for one criterion score.

use std::sync::Arc;

use tracing::error;

use crate::domain::audit::{AuditError, CriterionKind, ProjectState};
use crate::domain::foundation::Score;
use crate::ports::ProjectStore;

/// Command to set one score, addressed by catalog and criterion id.
#[derive(Debug, Clone)]
pub struct SetScoreCommand {
    pub kind: CriterionKind,
    pub criterion_id: String,
    pub score: Score,
}

/// Handler for score updates.
pub struct SetScoreHandler {
    store: Arc<dyn ProjectStore>,
}

impl SetScoreHandler {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    /// Applies the score.
    ///
    /// # Errors
    ///
    /// `AuditError::InvalidCriterion` if the id is not in the named catalog.
    /// The selector only offers catalog ids, so this means the caller is
    /// miswired; it is logged at error level and the state is left as is.
    pub fn handle(&self, cmd: SetScoreCommand) -> Result<Arc<ProjectState>, AuditError> {
        let result = match cmd.kind {
            CriterionKind::Value => self.store.set_value_score_by_id(&cmd.criterion_id, cmd.score),
            CriterionKind::Risk => self.store.set_risk_score_by_id(&cmd.criterion_id, cmd.score),
        };

        if let Err(err) = &result {
            error!(kind = %cmd.kind, id = %cmd.criterion_id, "Rejected score update: {}", err);
        }

        result
    }
}
