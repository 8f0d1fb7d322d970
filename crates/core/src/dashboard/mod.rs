//! Read-only dashboard over the event log
//!
//! A [`Dashboard`] pulls a bounded window of recent events, annotates each
//! one with a classifier suggestion and a severity, and hands the resulting
//! [`DashboardView`] to a [`DashboardRenderer`](ports::DashboardRenderer).

pub mod ports;
mod service;

pub use service::{Dashboard, DashboardRow, DashboardView};
