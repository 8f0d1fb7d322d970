use std::fmt::Write as _;

use querytap_core::{DashboardRenderer, DashboardView};
use querytap_domain::constants::EMPTY_LOG_MESSAGE;

/// One line per event, suggestions indented underneath.
///
/// ```text
/// [2026-10-19 09:12:44] QUERY: backend: ideas | Args: [] | Kwargs: {}
/// [2026-10-19 09:12:44] ERROR: column reference "id" is ambiguous
///     Suggestion: Use fully qualified column names, e.g., idea_embeddings.id
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl DashboardRenderer for PlainTextRenderer {
    fn render(&self, view: &DashboardView) -> String {
        if view.is_empty() {
            return EMPTY_LOG_MESSAGE.to_string();
        }

        let mut out = String::new();
        for row in &view.rows {
            let _ = writeln!(
                out,
                "[{}] {}: {}",
                row.event.display_time(),
                row.event.kind,
                row.event.detail
            );
            if let Some(suggestion) = &row.suggestion {
                let _ = writeln!(out, "    Suggestion: {suggestion}");
            }
        }
        out
    }
}
