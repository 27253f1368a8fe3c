//! Probe loop
//!
//! One GET per candidate, strictly sequential, no early exit. Every
//! failure mode classifies the candidate as invalid; the reason is kept on
//! the result for tests and debug logging.

use crate::api::StatsClient;
use crate::http::{FetchError, FetchOutcome};
use crate::stats::CrosswordStats;
use tracing::debug;

/// Progress is reported for every candidate whose index is a multiple of this
pub const PROGRESS_INTERVAL: usize = 10;

/// Classification of one candidate
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// 200 with `results.stats.puzzles_solved > 0`
    Valid(CrosswordStats),
    /// The service answered but the shape does not look like a real account
    NoData,
    /// Transport, status or decode failure
    Failed(FetchError),
}

/// Result for one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub candidate: String,
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Valid(_))
    }

    pub fn stats(&self) -> Option<&CrosswordStats> {
        match &self.outcome {
            ProbeOutcome::Valid(stats) => Some(stats),
            _ => None,
        }
    }
}

/// A candidate that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeHit {
    pub user_id: String,
    pub stats: CrosswordStats,
}

/// Observable progress of [`run_probe`]
#[derive(Debug)]
pub enum ProbeEvent<'a> {
    /// Emitted before probing every `PROGRESS_INTERVAL`th candidate
    Progress {
        /// 1-based
        position: usize,
        total: usize,
        candidate: &'a str,
    },
    /// Emitted right after a candidate validates
    Hit(&'a ProbeHit),
}

/// Probe a single candidate
pub fn probe_candidate(client: &StatsClient, candidate: &str) -> ProbeResult {
    let outcome = match client.fetch_crossword(candidate) {
        FetchOutcome::Found(payload) => match payload.results.and_then(|r| r.stats) {
            Some(stats) if stats.has_solved_puzzles() => ProbeOutcome::Valid(stats),
            _ => ProbeOutcome::NoData,
        },
        FetchOutcome::Empty => ProbeOutcome::NoData,
        FetchOutcome::Failed(err) => ProbeOutcome::Failed(err),
    };

    if let ProbeOutcome::Failed(err) = &outcome {
        debug!(candidate, error = %err, "probe failed");
    }

    ProbeResult {
        candidate: candidate.to_string(),
        outcome,
    }
}

/// Probe every candidate in order and collect the valid ones
pub fn run_probe<F>(client: &StatsClient, candidates: &[String], mut on_event: F) -> Vec<ProbeHit>
where
    F: FnMut(ProbeEvent<'_>),
{
    let total = candidates.len();
    let mut hits = Vec::new();

    for (index, candidate) in candidates.iter().enumerate() {
        if index % PROGRESS_INTERVAL == 0 {
            on_event(ProbeEvent::Progress {
                position: index + 1,
                total,
                candidate,
            });
        }

        let result = probe_candidate(client, candidate);
        if let ProbeOutcome::Valid(stats) = result.outcome {
            let hit = ProbeHit {
                user_id: result.candidate,
                stats,
            };
            on_event(ProbeEvent::Hit(&hit));
            hits.push(hit);
        }
    }

    hits
}
