//! Games service API
//!
//! Endpoint templates and the client that fetches from them.

mod client;
pub mod endpoints;

pub use client::{DiagnosticProbe, StatsClient};
pub use endpoints::{Endpoints, DEFAULT_BASE_URL, DIAGNOSTIC_PATHS, HISTORY_START_DATE};
