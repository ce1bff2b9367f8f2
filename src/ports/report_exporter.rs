//! Report Exporter Port - Printable rendering of the current audit.
//!
//! The dashboard's "export" button produces a document of what is on screen.
//! Adapters decide the format; the core only hands over the state and the
//! report it derived from it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::analysis::AnalysisReport;
use crate::domain::audit::ProjectState;

/// Port for rendering an audit into a downloadable document.
pub trait ReportExporter: Send + Sync {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Render the state and its report.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::RenderFailed` if the document cannot be written.
    fn render(
        &self,
        state: &ProjectState,
        report: &AnalysisReport,
    ) -> Result<ExportedDocument, ExportError>;
}

/// Export formats supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Markdown,
    Html,
}

impl ExportFormat {
    /// MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Html => write!(f, "html"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "html" | "htm" => Ok(ExportFormat::Html),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Rendered document with download metadata.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub content: Vec<u8>,
    pub content_type: String,
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Builds a document named after `project_name`.
    pub fn new(content: Vec<u8>, format: ExportFormat, project_name: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", file_stem(project_name), format.extension()),
            format,
        }
    }
}

/// Lowercase ASCII slug of the project name, `priority-audit` when nothing
/// usable is left.
fn file_stem(project_name: &str) -> String {
    let mut slug = String::with_capacity(project_name.len());
    for ch in project_name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "priority-audit".to_string()
    } else {
        slug.to_string()
    }
}

/// Errors that can occur during export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

impl From<std::fmt::Error> for ExportError {
    fn from(err: std::fmt::Error) -> Self {
        ExportError::RenderFailed(err.to_string())
    }
}
