//! Port interface for dashboard output formats

use super::DashboardView;

/// Turns a dashboard snapshot into displayable text.
///
/// Implementations must not fail: an empty view renders an explicit
/// "no events" state and unmatched events render without annotation.
pub trait DashboardRenderer: Send + Sync {
    /// Render one snapshot.
    fn render(&self, view: &DashboardView) -> String;
}
