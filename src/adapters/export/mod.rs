//! Printable exports of the current audit.
//!
//! - `MarkdownReportExporter` - plain markdown, suitable for pasting or pandoc
//! - `HtmlReportExporter` - standalone styled page for the browser's print dialog

mod html;
mod markdown;

pub use html::HtmlReportExporter;
pub use markdown::MarkdownReportExporter;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::ports::{ExportFormat, ReportExporter};

const UNTITLED: &str = "Untitled project";
const NO_AE: &str = "-";

/// Exporter for a requested format.
pub fn exporter_for(format: ExportFormat) -> Arc<dyn ReportExporter> {
    match format {
        ExportFormat::Markdown => Arc::new(MarkdownReportExporter::new()),
        ExportFormat::Html => Arc::new(HtmlReportExporter::new()),
    }
}

fn or_placeholder<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.is_empty() {
        placeholder
    } else {
        text
    }
}

fn generated_at(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d %H:%M UTC").to_string()
}
