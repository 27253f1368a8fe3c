//! Statistics model
//!
//! Typed, all-optional views of the games service payloads, plus the
//! snapshot handed to the renderer.

mod lenient;
mod model;
pub mod weekday;

pub use model::{
    CrosswordPayload, CrosswordResults, CrosswordStats, CrosswordStreaks, DayStats,
    GamesPayload, SpellingBeeStats, WordleStats,
};

use chrono::Local;

/// `strftime` format of the "last updated" line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Everything fetched in one synchronization run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSnapshot {
    /// Empty when the fetch failed
    pub crossword: CrosswordPayload,
    /// Empty when not fetched or failed
    pub games: GamesPayload,
    /// Local wall-clock time at fetch, second precision
    pub last_updated: String,
}

impl StatsSnapshot {
    /// Empty snapshot stamped with the current local time
    pub fn now() -> Self {
        Self {
            last_updated: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_now_has_second_precision_timestamp() {
        let snapshot = StatsSnapshot::now();
        // "2024-05-01 09:30:15"
        assert_eq!(snapshot.last_updated.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(&snapshot.last_updated, TIMESTAMP_FORMAT).is_ok());
        assert!(snapshot.crossword.results.is_none());
    }
}
