//! UpdateProjectInfoHandler - Command handler for the free-text header fields.

use std::sync::Arc;

use crate::domain::audit::ProjectState;
use crate::ports::ProjectStore;

/// Which header field to replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectInfoField {
    ProjectName,
    AeName,
}

/// Command to replace a header field verbatim.
#[derive(Debug, Clone)]
pub struct UpdateProjectInfoCommand {
    pub field: ProjectInfoField,
    pub value: String,
}

/// Handler for header updates. Cannot fail.
pub struct UpdateProjectInfoHandler {
    store: Arc<dyn ProjectStore>,
}

impl UpdateProjectInfoHandler {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, cmd: UpdateProjectInfoCommand) -> Arc<ProjectState> {
        match cmd.field {
            ProjectInfoField::ProjectName => self.store.set_project_name(cmd.value),
            ProjectInfoField::AeName => self.store.set_ae_name(cmd.value),
        }
    }
}
