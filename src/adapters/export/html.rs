//! Standalone HTML rendering of an audit, styled for printing.

use std::fmt::Write;

use chrono::Utc;

use super::{generated_at, or_placeholder, NO_AE, UNTITLED};
use crate::domain::analysis::{
    AnalysisReport, PriorityTone, SeverityColor, MAX_TOTAL_RISK, MAX_TOTAL_VALUE,
};
use crate::domain::audit::{Criterion, ProjectState};
use crate::domain::foundation::Score;
use crate::ports::{ExportError, ExportFormat, ExportedDocument, ReportExporter};

/// Renders the audit as a complete HTML page.
#[derive(Debug, Clone, Copy)]
pub struct HtmlReportExporter {
    include_default_css: bool,
}

impl Default for HtmlReportExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlReportExporter {
    pub fn new() -> Self {
        Self {
            include_default_css: true,
        }
    }

    /// Disable the built-in stylesheet.
    pub fn without_default_css(mut self) -> Self {
        self.include_default_css = false;
        self
    }

    pub fn to_html(
        &self,
        state: &ProjectState,
        report: &AnalysisReport,
    ) -> Result<String, ExportError> {
        let title = or_placeholder(&state.project_name, UNTITLED);
        let mut body = String::new();

        writeln!(body, "<h1>Priority Audit: {}</h1>", html_escape(title))?;
        writeln!(
            body,
            "<p class=\"meta\">AE: {} &middot; Generated {}</p>",
            html_escape(or_placeholder(&state.ae_name, NO_AE)),
            generated_at(Utc::now())
        )?;

        writeln!(body, "<section class=\"summary\">")?;
        writeln!(
            body,
            "<div class=\"total\">Value <strong>{}</strong> / {}<div class=\"bar\"><span style=\"width: {}%\"></span></div></div>",
            report.total_value,
            MAX_TOTAL_VALUE,
            report.value_fill.value()
        )?;
        writeln!(
            body,
            "<div class=\"total{}\">Risk <strong>{}</strong> / {}<div class=\"bar\"><span style=\"width: {}%\"></span></div></div>",
            if report.is_high_risk { " high-risk" } else { "" },
            report.total_risk,
            MAX_TOTAL_RISK,
            report.risk_fill.value()
        )?;
        writeln!(
            body,
            "<div class=\"badge {}\">{}</div>",
            tone_class(report.tone),
            report.badge
        )?;
        writeln!(body, "</section>")?;

        if report.is_high_risk {
            writeln!(body, "<p class=\"alert\">High-risk project</p>")?;
        }

        writeln!(body, "<h2>Decision Advice</h2>")?;
        writeln!(body, "<p class=\"advice\">{}</p>", html_escape(&report.advice_text))?;

        write_table(&mut body, "Value Insights", state.value.entries(), |_| None)?;
        write_table(&mut body, "Risk Distribution", state.risk.entries(), |score| {
            Some(severity_class(SeverityColor::from(score)))
        })?;

        Ok(self.wrap_html(&body, title))
    }

    fn wrap_html(&self, body: &str, title: &str) -> String {
        let css = if self.include_default_css {
            DEFAULT_CSS
        } else {
            ""
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="audit-report">
{body}
    </article>
</body>
</html>"#,
            title = html_escape(title),
            css = css,
            body = body
        )
    }
}

fn write_table<C: Criterion>(
    out: &mut String,
    heading: &str,
    rows: impl Iterator<Item = (C, Score)>,
    row_class: impl Fn(Score) -> Option<&'static str>,
) -> std::fmt::Result {
    writeln!(out, "<h2>{}</h2>", heading)?;
    writeln!(out, "<table>")?;
    writeln!(out, "<tr><th>Criterion</th><th>Score</th></tr>")?;
    for (criterion, score) in rows {
        match row_class(score) {
            Some(class) => writeln!(
                out,
                "<tr class=\"{}\"><td>{}</td><td>{}</td></tr>",
                class,
                criterion.label(),
                score.label()
            )?,
            None => writeln!(
                out,
                "<tr><td>{}</td><td>{}</td></tr>",
                criterion.label(),
                score.label()
            )?,
        }
    }
    writeln!(out, "</table>")
}

fn tone_class(tone: PriorityTone) -> &'static str {
    match tone {
        PriorityTone::Positive => "positive",
        PriorityTone::Caution => "caution",
        PriorityTone::Neutral => "neutral",
        PriorityTone::Danger => "danger",
    }
}

fn severity_class(color: SeverityColor) -> &'static str {
    match color {
        SeverityColor::Alert => "severity-alert",
        SeverityColor::Warning => "severity-warning",
        SeverityColor::Neutral => "severity-neutral",
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl ReportExporter for HtmlReportExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }

    fn render(
        &self,
        state: &ProjectState,
        report: &AnalysisReport,
    ) -> Result<ExportedDocument, ExportError> {
        let html = self.to_html(state, report)?;
        Ok(ExportedDocument::new(
            html.into_bytes(),
            ExportFormat::Html,
            &state.project_name,
        ))
    }
}

const DEFAULT_CSS: &str = r#"
body { font-family: system-ui, sans-serif; color: #1c1917; margin: 2rem; }
.meta { color: #78716c; }
.summary { display: flex; gap: 1.5rem; align-items: center; }
.total strong { font-size: 2rem; }
.bar { background: #f5f5f4; height: 6px; border-radius: 3px; width: 10rem; }
.bar span { display: block; height: 100%; background: #10b981; border-radius: 3px; }
.high-risk strong { color: #dc2626; }
.high-risk .bar span { background: #ef4444; }
.badge { font-size: 2.5rem; font-weight: 900; padding: 0.5rem 1rem; border-radius: 1rem; }
.badge.positive { color: #059669; background: #ecfdf5; }
.badge.caution { color: #d97706; background: #fffbeb; }
.badge.neutral { color: #57534e; background: #fafaf9; }
.badge.danger { color: #dc2626; background: #fef2f2; }
.alert { color: #fff; background: #dc2626; display: inline-block; padding: 0.25rem 0.5rem; font-weight: bold; }
.advice { background: #1c1917; color: #d6d3d1; padding: 1rem; border-radius: 0.75rem; }
table { border-collapse: collapse; margin-bottom: 1.5rem; }
th, td { border: 1px solid #e7e5e4; padding: 0.25rem 0.75rem; text-align: left; }
.severity-alert td:last-child { color: #ef4444; }
.severity-warning td:last-child { color: #f59e0b; }
.severity-neutral td:last-child { color: #94a3b8; }
@media print { body { margin: 0; } }
"#;
