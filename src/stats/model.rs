//! Payload shapes for the games service
//!
//! The API is undocumented, so every field is optional and every leaf is
//! read leniently: a value of the wrong type reads as absent and only its
//! own row disappears. Counts stay as `serde_json::Number` so they render
//! exactly as the service sent them (`5` stays `5`, `5.0` stays `5.0`).
//! Unknown fields are ignored.

use crate::stats::lenient::{lenient, lenient_map, lenient_seq};
use serde::Deserialize;
use serde_json::Number;
use std::collections::BTreeMap;

/// `stats-and-streaks.json` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CrosswordPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub results: Option<CrosswordResults>,
}

impl CrosswordPayload {
    /// Stats block, if the payload has one
    pub fn stats(&self) -> Option<&CrosswordStats> {
        self.results.as_ref().and_then(|r| r.stats.as_ref())
    }

    /// Streaks block, if the payload has one
    pub fn streaks(&self) -> Option<&CrosswordStreaks> {
        self.results.as_ref().and_then(|r| r.streaks.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CrosswordResults {
    #[serde(default, deserialize_with = "lenient")]
    pub stats: Option<CrosswordStats>,
    #[serde(default, deserialize_with = "lenient")]
    pub streaks: Option<CrosswordStreaks>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CrosswordStats {
    #[serde(default, deserialize_with = "lenient")]
    pub puzzles_solved: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub puzzles_attempted: Option<Number>,
    /// Fraction in `0.0..=1.0`
    #[serde(default, deserialize_with = "lenient")]
    pub solve_rate: Option<f64>,
    /// Seconds
    #[serde(default, deserialize_with = "lenient")]
    pub longest_avg_time: Option<f64>,
    /// Monday-first; a malformed day reads as `None`
    #[serde(default, deserialize_with = "lenient_seq")]
    pub stats_by_day: Option<Vec<Option<DayStats>>>,
}

impl CrosswordStats {
    /// True when `puzzles_solved` is present and greater than zero
    pub fn has_solved_puzzles(&self) -> bool {
        self.puzzles_solved
            .as_ref()
            .and_then(Number::as_f64)
            .is_some_and(|solved| solved > 0.0)
    }
}

/// One weekday's entry in `stats_by_day`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DayStats {
    #[serde(default, deserialize_with = "lenient")]
    pub label: Option<String>,
    /// Seconds
    #[serde(default, deserialize_with = "lenient")]
    pub best_time: Option<f64>,
    /// Seconds
    #[serde(default, deserialize_with = "lenient")]
    pub avg_time: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub solved: Option<Number>,
    /// Older payloads carry the solved count under this name
    #[serde(default, deserialize_with = "lenient")]
    pub avg_denominator: Option<Number>,
}

impl DayStats {
    /// `solved`, falling back to `avg_denominator`
    pub fn solved_count(&self) -> Option<&Number> {
        self.solved.as_ref().or(self.avg_denominator.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CrosswordStreaks {
    #[serde(default, deserialize_with = "lenient")]
    pub current_streak: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub longest_streak: Option<Number>,
    /// Sunday-first; a malformed entry reads as `None`
    #[serde(default, deserialize_with = "lenient_seq")]
    pub day_of_week_streaks: Option<Vec<Option<Number>>>,
}

/// `wordleV2/latests` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GamesPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub wordle: Option<WordleStats>,
    #[serde(rename = "spellingBee", default, deserialize_with = "lenient")]
    pub spelling_bee: Option<SpellingBeeStats>,
}

impl GamesPayload {
    pub fn is_empty(&self) -> bool {
        self.wordle.as_ref().map_or(true, WordleStats::is_empty)
            && self.spelling_bee.as_ref().map_or(true, SpellingBeeStats::is_empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordleStats {
    #[serde(default, deserialize_with = "lenient")]
    pub current_streak: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_streak: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub games_played: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub win_percentage: Option<Number>,
    /// Keyed by guess count `"1"`..`"6"`
    #[serde(default, deserialize_with = "lenient_map")]
    pub guesses: Option<BTreeMap<String, Number>>,
}

impl WordleStats {
    pub fn is_empty(&self) -> bool {
        self.current_streak.is_none()
            && self.max_streak.is_none()
            && self.games_played.is_none()
            && self.win_percentage.is_none()
            && self.guesses.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellingBeeStats {
    #[serde(default, deserialize_with = "lenient")]
    pub current_streak: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_streak: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub games_played: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub genius: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub pangrams: Option<Number>,
}

impl SpellingBeeStats {
    pub fn is_empty(&self) -> bool {
        self.current_streak.is_none()
            && self.max_streak.is_none()
            && self.games_played.is_none()
            && self.genius.is_none()
            && self.pangrams.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_crossword_payload_parses_partial_tree() {
        let payload: CrosswordPayload = serde_json::from_value(json!({
            "status": "OK",
            "results": {
                "stats": {"puzzles_solved": 12, "solve_rate": 0.5}
            }
        }))
        .unwrap();

        let stats = payload.stats().unwrap();
        assert_eq!(stats.puzzles_solved, Some(Number::from(12)));
        assert_eq!(stats.solve_rate, Some(0.5));
        assert!(stats.stats_by_day.is_none());
        assert!(payload.streaks().is_none());
    }

    #[test]
    fn test_missing_results_is_default() {
        let payload: CrosswordPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload, CrosswordPayload::default());
        assert!(payload.stats().is_none());
    }

    #[test]
    fn test_has_solved_puzzles() {
        let mut stats = CrosswordStats::default();
        assert!(!stats.has_solved_puzzles());

        stats.puzzles_solved = Some(Number::from(0));
        assert!(!stats.has_solved_puzzles());

        stats.puzzles_solved = Some(Number::from(5));
        assert!(stats.has_solved_puzzles());

        stats.puzzles_solved = Number::from_f64(2.5);
        assert!(stats.has_solved_puzzles());
    }

    #[test]
    fn test_day_stats_accepts_avg_denominator() {
        let day: DayStats = serde_json::from_value(json!({
            "label": "Monday",
            "avg_denominator": 40,
            "best_time": 301
        }))
        .unwrap();
        assert_eq!(day.solved_count(), Some(&Number::from(40)));
        assert_eq!(day.best_time, Some(301.0));
    }

    #[test]
    fn test_games_payload_camel_case() {
        let games: GamesPayload = serde_json::from_value(json!({
            "wordle": {"currentStreak": 3, "guesses": {"1": 0, "4": 9}},
            "spellingBee": {}
        }))
        .unwrap();

        let wordle = games.wordle.as_ref().unwrap();
        assert_eq!(wordle.current_streak, Some(Number::from(3)));
        assert_eq!(wordle.guesses.as_ref().unwrap().get("4"), Some(&Number::from(9)));
        assert!(games.spelling_bee.as_ref().unwrap().is_empty());
        assert!(!games.is_empty());
    }

    #[test]
    fn test_games_payload_empty() {
        let games: GamesPayload = serde_json::from_str(r#"{"wordle": {}}"#).unwrap();
        assert!(games.is_empty());
    }

    #[test]
    fn test_day_stats_with_both_counts_prefers_solved() {
        let day: DayStats = serde_json::from_value(json!({
            "solved": 3,
            "avg_denominator": 4
        }))
        .unwrap();
        assert_eq!(day.solved_count(), Some(&Number::from(3)));
    }

    #[test]
    fn test_ill_typed_leaves_do_not_sink_the_payload() {
        let payload: CrosswordPayload = serde_json::from_str(
            r#"{"results":{"stats":{"puzzles_solved":5,"puzzles_attempted":6,"longest_avg_time":"n/a"},"streaks":{"current_streak":1,"day_of_week_streaks":[1,null,3,4,5,6,7]}}}"#,
        )
        .unwrap();

        let stats = payload.stats().unwrap();
        assert!(stats.has_solved_puzzles());
        assert!(stats.longest_avg_time.is_none());
        let streaks = payload.streaks().unwrap().day_of_week_streaks.as_ref().unwrap();
        assert_eq!(streaks.len(), 7);
        assert!(streaks[1].is_none());
        assert_eq!(streaks[2], Some(Number::from(3)));
    }

    #[test]
    fn test_malformed_stats_block_reads_as_absent() {
        let payload: CrosswordPayload =
            serde_json::from_value(json!({"results": {"stats": "oops", "streaks": {}}})).unwrap();
        assert!(payload.stats().is_none());
        assert!(payload.streaks().is_some());
    }
}
