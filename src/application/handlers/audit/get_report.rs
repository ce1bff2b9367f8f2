//! GetReportHandler - Query handler for the derived audit report.

use std::sync::Arc;

use tracing::debug;

use crate::domain::analysis::{AnalysisEngine, AnalysisReport};
use crate::domain::audit::ProjectState;
use crate::ports::ProjectStore;

/// A snapshot and the report computed from exactly that snapshot.
#[derive(Debug, Clone)]
pub struct AuditReport {
    pub state: Arc<ProjectState>,
    pub report: AnalysisReport,
}

/// Handler for report reads. Recomputes on every call.
pub struct GetReportHandler {
    store: Arc<dyn ProjectStore>,
    engine: Arc<AnalysisEngine>,
}

impl GetReportHandler {
    pub fn new(store: Arc<dyn ProjectStore>, engine: Arc<AnalysisEngine>) -> Self {
        Self { store, engine }
    }

    pub fn handle(&self) -> AuditReport {
        let state = self.store.get_state();
        let report = self.engine.analyze(&state);
        debug!(
            total_value = report.total_value,
            total_risk = report.total_risk,
            priority = %report.priority,
            "Computed audit report"
        );
        AuditReport { state, report }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProjectStore;
    use crate::domain::analysis::PriorityLevel;
    use crate::domain::audit::ValueCriterion;
    use crate::domain::foundation::Score;

    #[test]
    fn report_tracks_latest_state() {
        let store = Arc::new(InMemoryProjectStore::new());
        let handler = GetReportHandler::new(store.clone(), Arc::new(AnalysisEngine::default()));

        assert_eq!(handler.handle().report.priority, PriorityLevel::P2);

        store.set_value_score(ValueCriterion::Profit, Score::High);
        store.set_value_score(ValueCriterion::Portfolio, Score::High);
        store.set_value_score(ValueCriterion::Fun, Score::High);

        let latest = handler.handle();
        assert_eq!(latest.report.total_value, 6);
        assert_eq!(latest.report.priority, PriorityLevel::P0);
        assert_eq!(latest.state.value.fun, Score::High);
    }

    #[test]
    fn repeated_reads_are_equal() {
        let store = Arc::new(InMemoryProjectStore::new());
        store.set_project_name("Same".to_string());
        let handler = GetReportHandler::new(store, Arc::new(AnalysisEngine::default()));

        assert_eq!(handler.handle().report, handler.handle().report);
    }
}
