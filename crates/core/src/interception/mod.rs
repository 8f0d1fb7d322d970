//! Transparent interception of chainable query clients
//!
//! [`Interceptor::wrap`] turns any [`QueryClient`](ports::QueryClient) into
//! a [`TappedClient`] whose queries record a `QUERY` event before each
//! terminal execution and a `RESPONSE` or `ERROR` event after it. Results
//! and failures reach the caller unchanged.

mod interceptor;
pub mod ports;
mod proxy;

pub use interceptor::Interceptor;
pub use proxy::{TappedClient, TappedQuery};
