//! puzzle-stats: NYT puzzle statistics for a profile README
//!
//! Two binaries share this library:
//! - `puzzle-stats` fetches crossword (and optionally word-game) stats and
//!   splices a markdown section between two markers in a document
//! - `find-user-id` discovers the numeric account id behind a session
//!   cookie by sweeping candidate ids

pub mod api;
pub mod cli;
pub mod document;
pub mod http;
pub mod logging;
pub mod probe;
pub mod render;
pub mod stats;
pub mod sync;

pub use api::{Endpoints, StatsClient};
pub use cli::{SyncArgs, SyncConfig};
pub use document::{update_document, DocumentError, END_MARKER, START_MARKER};
pub use http::{Credential, FetchError, FetchOutcome, Transport};
pub use probe::{run_probe, CandidateSweep, ProbeHit};
pub use sync::{run_sync, SyncReport};
