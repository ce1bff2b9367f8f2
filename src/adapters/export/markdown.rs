//! Markdown rendering of an audit.

use std::fmt::Write;

use chrono::Utc;

use super::{generated_at, or_placeholder, NO_AE, UNTITLED};
use crate::domain::analysis::{AnalysisReport, MAX_TOTAL_RISK, MAX_TOTAL_VALUE};
use crate::domain::audit::{Criterion, ProjectState};
use crate::domain::foundation::Score;
use crate::ports::{ExportError, ExportFormat, ExportedDocument, ReportExporter};

/// Renders the audit as a markdown document.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReportExporter;

impl MarkdownReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// Markdown body without download metadata.
    pub fn to_markdown(
        &self,
        state: &ProjectState,
        report: &AnalysisReport,
    ) -> Result<String, ExportError> {
        let mut out = String::new();

        writeln!(
            out,
            "# Priority Audit: {}",
            or_placeholder(&inline_text(&state.project_name), UNTITLED)
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "- **AE:** {}",
            or_placeholder(&inline_text(&state.ae_name), NO_AE)
        )?;
        writeln!(out, "- **Generated:** {}", generated_at(Utc::now()))?;
        writeln!(out)?;

        writeln!(out, "## Summary")?;
        writeln!(out)?;
        writeln!(out, "| Measure | Score |")?;
        writeln!(out, "|---|---|")?;
        writeln!(out, "| Value | {} / {} |", report.total_value, MAX_TOTAL_VALUE)?;
        writeln!(out, "| Risk | {} / {} |", report.total_risk, MAX_TOTAL_RISK)?;
        writeln!(out, "| Priority | {} |", report.badge)?;
        writeln!(out)?;

        if report.is_high_risk {
            writeln!(out, "> **High-risk project**")?;
            writeln!(out)?;
        }

        writeln!(out, "## Decision Advice")?;
        writeln!(out)?;
        writeln!(out, "{}", inline_text(&report.advice_text))?;
        writeln!(out)?;

        write_table(&mut out, "Value Insights", state.value.entries())?;
        writeln!(out)?;
        write_table(&mut out, "Risk Distribution", state.risk.entries())?;

        Ok(out)
    }
}

/// Free text as a single inline run: line breaks collapse to one space and
/// markdown control characters are backslash-escaped, so user input cannot
/// open headings, table rows or emphasis.
fn inline_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for ch in text.chars() {
        if ch == '\n' || ch == '\r' {
            if !in_break {
                out.push(' ');
            }
            in_break = true;
            continue;
        }
        in_break = false;
        if matches!(
            ch,
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '|' | '~'
        ) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

fn write_table<C: Criterion>(
    out: &mut String,
    heading: &str,
    rows: impl Iterator<Item = (C, Score)>,
) -> std::fmt::Result {
    writeln!(out, "## {}", heading)?;
    writeln!(out)?;
    writeln!(out, "| Criterion | Score |")?;
    writeln!(out, "|---|---|")?;
    for (criterion, score) in rows {
        writeln!(out, "| {} | {} |", criterion.label(), score.label())?;
    }
    Ok(())
}

impl ReportExporter for MarkdownReportExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }

    fn render(
        &self,
        state: &ProjectState,
        report: &AnalysisReport,
    ) -> Result<ExportedDocument, ExportError> {
        let markdown = self.to_markdown(state, report)?;
        Ok(ExportedDocument::new(
            markdown.into_bytes(),
            ExportFormat::Markdown,
            &state.project_name,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::AnalysisEngine;
    use crate::domain::audit::{RiskCriterion, ValueCriterion};

    fn render(state: &ProjectState) -> String {
        let report = AnalysisEngine::default().analyze(state);
        MarkdownReportExporter::new().to_markdown(state, &report).unwrap()
    }

    #[test]
    fn inline_text_collapses_line_breaks() {
        assert_eq!(inline_text("Spring\r\n\nAd"), "Spring Ad");
        assert_eq!(inline_text("plain text"), "plain text");
    }

    #[test]
    fn inline_text_escapes_control_characters() {
        assert_eq!(inline_text("a|b"), "a\\|b");
        assert_eq!(inline_text("*bold* #1"), "\\*bold\\* \\#1");
        assert_eq!(inline_text("<b>"), "\\<b\\>");
    }

    #[test]
    fn free_text_cannot_add_structure() {
        let state = ProjectState::new()
            .with_project_name("Launch\n## Injected\n| Value | 10 / 10 |")
            .with_ae_name("Lin\n# Boss");
        let md = render(&state);

        assert!(md.starts_with(
            "# Priority Audit: Launch \\#\\# Injected \\| Value \\| 10 / 10 \\|\n"
        ));
        assert!(md.contains("- **AE:** Lin \\# Boss\n"));
        assert!(!md.contains("\n## Injected"));
        assert!(!md.contains("\n| Value | 10 / 10 |"));
        assert!(!md.contains("\n# Boss"));
    }

    #[test]
    fn blank_audit_uses_placeholders() {
        let md = render(&ProjectState::new());
        assert!(md.starts_with("# Priority Audit: Untitled project\n"));
        assert!(md.contains("- **AE:** -"));
        assert!(md.contains("| Value | 0 / 10 |"));
        assert!(md.contains("| Risk | 0 / 12 |"));
        assert!(md.contains("| Priority | P2 |"));
        assert!(!md.contains("High-risk project"));
    }

    #[test]
    fn high_risk_banner_and_rows() {
        let state = ProjectState::new()
            .with_project_name("Night shoot")
            .with_ae_name("Lin")
            .with_value_score(ValueCriterion::Profit, Score::High)
            .with_risk_score(RiskCriterion::ClientReliability, Score::High)
            .with_risk_score(RiskCriterion::Participation, Score::High)
            .with_risk_score(RiskCriterion::TimePressure, Score::High);
        let md = render(&state);

        assert!(md.contains("# Priority Audit: Night shoot"));
        assert!(md.contains("- **AE:** Lin"));
        assert!(md.contains("| Priority | !! |"));
        assert!(md.contains("> **High-risk project**"));
        assert!(md.contains("| Profit | High (2) |"));
        assert!(md.contains("| Time Pressure | High (2) |"));
        assert!(md.contains("| Internal Variables | Low (0) |"));
    }

    #[test]
    fn includes_advice_text() {
        let state = ProjectState::new();
        let report = AnalysisEngine::default().analyze(&state);
        let md = MarkdownReportExporter::new().to_markdown(&state, &report).unwrap();
        assert!(md.contains(&report.advice_text));
    }

    #[test]
    fn render_sets_markdown_metadata() {
        let state = ProjectState::new().with_project_name("Brand Film");
        let report = AnalysisEngine::default().analyze(&state);
        let doc = MarkdownReportExporter::new().render(&state, &report).unwrap();
        assert_eq!(doc.format, ExportFormat::Markdown);
        assert_eq!(doc.filename, "brand-film.md");
    }
}
