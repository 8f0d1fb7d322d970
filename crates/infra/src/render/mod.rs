//! Concrete [`DashboardRenderer`](querytap_core::DashboardRenderer)s
//!
//! Both renderers are pure functions of a
//! [`DashboardView`](querytap_core::DashboardView): they never read the log
//! themselves and never fail.

mod html;
mod plain;

pub use html::HtmlRenderer;
pub use plain::PlainTextRenderer;
