//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands mutate the audit through the `ProjectStore`; queries read a
//! snapshot and run the `AnalysisEngine` over it.

pub mod handlers;

pub use handlers::{
    AuditReport, ExportReportHandler, ExportReportQuery, GetReportHandler, ProjectInfoField,
    SetScoreCommand, SetScoreHandler, UpdateProjectInfoCommand, UpdateProjectInfoHandler,
};
