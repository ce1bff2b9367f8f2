//! Audit handlers.
//!
//! ## Commands
//!
//! - `UpdateProjectInfoHandler` - project name / AE name
//! - `SetScoreHandler` - one value or risk score by criterion id
//!
//! ## Queries
//!
//! - `GetReportHandler` - current state plus its derived report
//! - `ExportReportHandler` - printable document of the current audit

mod export_report;
mod get_report;
mod set_score;
mod update_project_info;

pub use export_report::{ExportReportHandler, ExportReportQuery};
pub use get_report::{AuditReport, GetReportHandler};
pub use set_score::{SetScoreCommand, SetScoreHandler};
pub use update_project_info::{ProjectInfoField, UpdateProjectInfoCommand, UpdateProjectInfoHandler};
