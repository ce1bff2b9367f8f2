//! In-memory ProjectStore backed by a swapped `Arc` snapshot.
//!
//! The audit is ephemeral: it lives for the lifetime of the process and is
//! gone on restart.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::domain::audit::{ProjectState, RiskCriterion, ValueCriterion};
use crate::domain::foundation::Score;
use crate::ports::ProjectStore;

/// Holds the current `ProjectState` behind a lock of `Arc` snapshots.
///
/// Writers build a new state from the current one and swap the pointer, so
/// readers holding an older `Arc` keep an unchanged value. The lock only
/// guards the pointer swap, so a poisoned lock still holds a complete
/// snapshot and is recovered rather than propagated.
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    current: RwLock<Arc<ProjectState>>,
}

impl InMemoryProjectStore {
    /// Creates a store holding a blank audit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with an existing state.
    pub fn with_state(state: ProjectState) -> Self {
        Self {
            current: RwLock::new(Arc::new(state)),
        }
    }

    fn replace(&self, update: impl FnOnce(&ProjectState) -> ProjectState) -> Arc<ProjectState> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let current: &ProjectState = &guard;
        let next = Arc::new(update(current));
        *guard = Arc::clone(&next);
        next
    }
}

impl ProjectStore for InMemoryProjectStore {
    fn get_state(&self) -> Arc<ProjectState> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn set_project_name(&self, name: String) -> Arc<ProjectState> {
        debug!(len = name.len(), "Setting project name");
        self.replace(|state| state.with_project_name(name))
    }

    fn set_ae_name(&self, name: String) -> Arc<ProjectState> {
        debug!(len = name.len(), "Setting AE name");
        self.replace(|state| state.with_ae_name(name))
    }

    fn set_value_score(&self, criterion: ValueCriterion, score: Score) -> Arc<ProjectState> {
        debug!(%criterion, %score, "Setting value score");
        self.replace(|state| state.with_value_score(criterion, score))
    }

    fn set_risk_score(&self, criterion: RiskCriterion, score: Score) -> Arc<ProjectState> {
        debug!(%criterion, %score, "Setting risk score");
        self.replace(|state| state.with_risk_score(criterion, score))
    }
}
