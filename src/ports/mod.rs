//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProjectStore` - Holder of the single in-memory `ProjectState`
//! - `ReportExporter` - Printable rendering of the current audit

mod project_store;
mod report_exporter;

pub use project_store::ProjectStore;
pub use report_exporter::{ExportError, ExportFormat, ExportedDocument, ReportExporter};
