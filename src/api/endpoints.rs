//! Endpoint URL templates
//!
//! Reverse-engineered paths; they may change without notice.

/// Production host
pub const DEFAULT_BASE_URL: &str = "https://www.nytimes.com";

/// Earliest date requested from the stats endpoint
pub const HISTORY_START_DATE: &str = "1988-01-01";

/// Paths probed purely for diagnostic logging
pub const DIAGNOSTIC_PATHS: [&str; 3] = [
    "/svc/crosswords/v3/puzzle/daily/stats.json",
    "/svc/crosswords/v3/puzzle/mini/stats.json",
    "/svc/games/state/wordleV2/latests",
];

/// URL builder bound to one host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Trailing slashes on `base_url` are dropped
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Crossword stats and streaks for one account, weeks starting Monday
    pub fn stats_and_streaks(&self, user_id: &str) -> String {
        format!(
            "{}/svc/crosswords/v3/{}/stats-and-streaks.json?date_start={}&start_on_monday=true",
            self.base_url, user_id, HISTORY_START_DATE
        )
    }

    /// Latest word-game state for a puzzle id
    pub fn game_state(&self, puzzle_id: &str) -> String {
        format!(
            "{}/svc/games/state/wordleV2/latests?puzzle_ids={}",
            self.base_url, puzzle_id
        )
    }

    /// Full URLs of the diagnostic endpoints
    pub fn diagnostics(&self) -> Vec<String> {
        DIAGNOSTIC_PATHS
            .iter()
            .map(|path| format!("{}{}", self.base_url, path))
            .collect()
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_and_streaks_url() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.stats_and_streaks("245290511"),
            "https://www.nytimes.com/svc/crosswords/v3/245290511/stats-and-streaks.json?date_start=1988-01-01&start_on_monday=true"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let endpoints = Endpoints::new("http://localhost:8080/");
        assert_eq!(endpoints.base_url(), "http://localhost:8080");
        assert_eq!(
            endpoints.game_state("2329"),
            "http://localhost:8080/svc/games/state/wordleV2/latests?puzzle_ids=2329"
        );
    }

    #[test]
    fn test_diagnostics_urls() {
        let urls = Endpoints::default().diagnostics();
        assert_eq!(urls.len(), 3);
        assert!(urls.iter().all(|u| u.starts_with("https://www.nytimes.com/svc/")));
        assert!(urls[1].ends_with("/mini/stats.json"));
    }
}
