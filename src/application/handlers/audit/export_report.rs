//! ExportReportHandler - Query handler producing a printable document.

use std::sync::Arc;

use tracing::debug;

use crate::domain::analysis::AnalysisEngine;
use crate::ports::{ExportError, ExportFormat, ExportedDocument, ProjectStore, ReportExporter};

/// Query to export the current audit.
#[derive(Debug, Clone, Copy)]
pub struct ExportReportQuery {
    pub format: ExportFormat,
}

/// Handler for exports; picks the registered exporter for the format.
pub struct ExportReportHandler {
    store: Arc<dyn ProjectStore>,
    engine: Arc<AnalysisEngine>,
    exporters: Vec<Arc<dyn ReportExporter>>,
}

impl ExportReportHandler {
    pub fn new(
        store: Arc<dyn ProjectStore>,
        engine: Arc<AnalysisEngine>,
        exporters: Vec<Arc<dyn ReportExporter>>,
    ) -> Self {
        Self {
            store,
            engine,
            exporters,
        }
    }

    /// # Errors
    ///
    /// - `ExportError::UnsupportedFormat` if no exporter is registered for the format
    /// - whatever the exporter itself reports
    pub fn handle(&self, query: ExportReportQuery) -> Result<ExportedDocument, ExportError> {
        let exporter = self
            .exporters
            .iter()
            .find(|e| e.format() == query.format)
            .ok_or_else(|| ExportError::UnsupportedFormat(query.format.to_string()))?;

        let state = self.store.get_state();
        let report = self.engine.analyze(&state);
        let document = exporter.render(&state, &report)?;

        debug!(
            format = %query.format,
            filename = %document.filename,
            bytes = document.content.len(),
            "Exported audit report"
        );
        Ok(document)
    }
}
