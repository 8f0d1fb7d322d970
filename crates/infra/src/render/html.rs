use std::fmt::Write as _;

use querytap_common::error::ErrorSeverity;
use querytap_core::{DashboardRenderer, DashboardRow, DashboardView};
use querytap_domain::constants::EMPTY_LOG_MESSAGE;

/// HTML fragment for embedding in a web page.
///
/// Rows are coloured by severity (errors red, suggested rows orange,
/// everything else black) and suggestions are shown in blue below their
/// event. All event text is escaped.
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer {
    timestamps: bool,
}

impl HtmlRenderer {
    /// Compact rows without timestamps.
    pub const fn sidebar() -> Self {
        Self { timestamps: false }
    }

    /// Timestamped rows inside a scrollable container.
    pub const fn full_log() -> Self {
        Self { timestamps: true }
    }

    fn write_row(&self, out: &mut String, row: &DashboardRow) {
        let color = severity_color(row.severity);
        let _ = write!(out, "<div class=\"querytap-event\" style=\"color:{color}\"><b>");
        if self.timestamps {
            let _ = write!(out, "[{}] ", row.event.display_time());
        }
        let _ = writeln!(out, "{}:</b> {}</div>", row.event.kind, escape(&row.event.detail));

        if let Some(suggestion) = &row.suggestion {
            let _ = writeln!(
                out,
                "<div class=\"querytap-suggestion\" style=\"color:blue\"><b>Suggestion:</b> {}</div>",
                escape(suggestion)
            );
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::full_log()
    }
}

impl DashboardRenderer for HtmlRenderer {
    fn render(&self, view: &DashboardView) -> String {
        if view.is_empty() {
            return format!("<div class=\"querytap-empty\">{EMPTY_LOG_MESSAGE}</div>");
        }

        let mut out = String::from("<div class=\"querytap-log\">\n");
        for row in &view.rows {
            self.write_row(&mut out, row);
        }
        out.push_str("</div>");
        out
    }
}

fn severity_color(severity: ErrorSeverity) -> &'static str {
    match severity {
        ErrorSeverity::Error | ErrorSeverity::Critical => "red",
        ErrorSeverity::Warning => "orange",
        ErrorSeverity::Info => "black",
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
