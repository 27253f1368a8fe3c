//! Identifier discovery
//!
//! Brute-forces candidate account ids against the stats endpoint and
//! reports which ones return a real account's statistics.

pub mod candidates;
mod prober;
pub mod report;

pub use candidates::{CandidateSweep, StepRange};
pub use prober::{
    probe_candidate, run_probe, ProbeEvent, ProbeHit, ProbeOutcome, ProbeResult,
    PROGRESS_INTERVAL,
};
