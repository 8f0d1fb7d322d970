//! Thread-safe bounded log of instrumentation events.

pub mod ports;
mod service;

pub use service::EventLog;
