//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod audit;

pub use audit::{
    AuditReport, ExportReportHandler, ExportReportQuery, GetReportHandler, ProjectInfoField,
    SetScoreCommand, SetScoreHandler, UpdateProjectInfoCommand, UpdateProjectInfoHandler,
};
