//! Synchronization run
//!
//! Fetch -> render -> splice. Fetch failures degrade to missing sections;
//! only document I/O errors escape.

use crate::api::{DiagnosticProbe, StatsClient};
use crate::cli::SyncConfig;
use crate::document::{update_document, DocumentError, UpdateReport};
use crate::http::{FetchOutcome, OutcomeKind};
use crate::render::render_fragment;
use crate::stats::StatsSnapshot;
use tracing::{debug, info, warn};

/// What one run fetched and wrote
#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    /// Diagnostic endpoint responses, empty when skipped
    pub diagnostics: Vec<DiagnosticProbe>,
    pub crossword: OutcomeKind,
    /// `None` when no Wordle puzzle id was configured
    pub games: Option<OutcomeKind>,
    /// Rendered region body, without markers
    pub fragment: String,
    /// `None` on a dry run
    pub update: Option<UpdateReport>,
}

/// Fetch everything the configuration asks for
///
/// Returns the snapshot plus the outcome of each fetch.
pub fn collect_snapshot(
    client: &StatsClient,
    config: &SyncConfig,
) -> (StatsSnapshot, OutcomeKind, Option<OutcomeKind>) {
    let mut snapshot = StatsSnapshot::now();

    info!(user_id = %config.user_id, "Fetching crossword stats");
    let crossword = client.fetch_crossword(&config.user_id);
    let crossword_kind = crossword.kind();
    match crossword {
        FetchOutcome::Found(payload) => snapshot.crossword = payload,
        FetchOutcome::Empty => warn!("Crossword stats response had no results"),
        FetchOutcome::Failed(err) => warn!(error = %err, "Crossword stats unavailable"),
    }

    let games_kind = config.wordle_puzzle_id.as_deref().map(|puzzle_id| {
        info!(puzzle_id, "Fetching word game stats");
        let games = client.fetch_games(puzzle_id);
        let kind = games.kind();
        match games {
            FetchOutcome::Found(payload) => snapshot.games = payload,
            FetchOutcome::Empty => warn!("Word game response had no stats"),
            FetchOutcome::Failed(err) => warn!(error = %err, "Word game stats unavailable"),
        }
        kind
    });

    (snapshot, crossword_kind, games_kind)
}

/// Hit every diagnostic endpoint; the caller decides how to show them
pub fn run_diagnostics(client: &StatsClient) -> Vec<DiagnosticProbe> {
    let responses = client.probe_diagnostics();
    for response in &responses {
        debug!(url = %response.url, ok = response.result.is_ok(), "diagnostic endpoint");
    }
    responses
}

/// One full synchronization
pub fn run_sync(client: &StatsClient, config: &SyncConfig) -> Result<SyncReport, DocumentError> {
    info!(cookie = %config.credential.preview(), "Using session cookie");

    let diagnostics = if config.run_diagnostics {
        run_diagnostics(client)
    } else {
        Vec::new()
    };

    let (snapshot, crossword, games) = collect_snapshot(client, config);
    let fragment = render_fragment(&snapshot);

    let update = if config.dry_run {
        info!("Dry run, document left untouched");
        None
    } else {
        let report = update_document(&config.readme_path, &fragment)?;
        if report.replaced {
            info!(
                path = %config.readme_path.display(),
                bytes = report.bytes_written,
                changed = report.changed,
                "Document updated"
            );
        }
        Some(report)
    };

    Ok(SyncReport {
        diagnostics,
        crossword,
        games,
        fragment,
        update,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Endpoints;
    use crate::http::{Credential, FakeTransport, Transport};
    use std::path::PathBuf;

    const CROSSWORD: &str = r#"{"results":{"stats":{"puzzles_solved":12,"puzzles_attempted":15,"solve_rate":0.8},"streaks":{"current_streak":3,"longest_streak":9}}}"#;

    fn config(dry_run: bool, wordle: Option<&str>) -> SyncConfig {
        SyncConfig {
            credential: Credential::new("NYT-S=abc").unwrap(),
            user_id: "245290511".to_string(),
            readme_path: PathBuf::from("does-not-exist.md"),
            base_url: "http://fake".to_string(),
            wordle_puzzle_id: wordle.map(str::to_string),
            run_diagnostics: false,
            dry_run,
            timeout_secs: 1,
        }
    }

    fn client(fake: FakeTransport) -> StatsClient {
        StatsClient::new(
            Transport::Fake(fake),
            Endpoints::new("http://fake"),
            Credential::new("NYT-S=abc").unwrap(),
        )
    }

    #[test]
    fn test_dry_run_skips_document() {
        let client = client(FakeTransport::new().route("stats-and-streaks", 200, CROSSWORD));
        let report = run_sync(&client, &config(true, None)).unwrap();

        assert_eq!(report.crossword, OutcomeKind::Found);
        assert!(report.games.is_none());
        assert!(report.update.is_none());
        assert!(report.diagnostics.is_empty());
        assert!(report.fragment.contains("| Total Solved | 12 |"));
    }

    #[test]
    fn test_games_not_fetched_without_puzzle_id() {
        let client = client(FakeTransport::new().route("stats-and-streaks", 200, CROSSWORD));
        run_sync(&client, &config(true, None)).unwrap();

        let fake = client.transport().as_fake().unwrap();
        assert_eq!(fake.requests().len(), 1);
    }

    #[test]
    fn test_failed_crossword_still_renders_header() {
        let client = client(FakeTransport::with_error("connection refused"));
        let report = run_sync(&client, &config(true, Some("1200"))).unwrap();

        assert_eq!(report.crossword, OutcomeKind::Failed);
        assert_eq!(report.games, Some(OutcomeKind::Failed));
        assert!(report.fragment.starts_with("## 🧩 My NYT Puzzle Stats"));
        assert!(!report.fragment.contains("### Crossword"));
    }

    #[test]
    fn test_missing_document_is_an_error() {
        let client = client(FakeTransport::new().route("stats-and-streaks", 200, CROSSWORD));
        let result = run_sync(&client, &config(false, None));
        assert!(matches!(result, Err(DocumentError::NotFound(_))));
    }

    #[test]
    fn test_diagnostics_hit_every_endpoint() {
        let client = client(FakeTransport::new());
        let mut config = config(true, None);
        config.run_diagnostics = true;
        let report = run_sync(&client, &config).unwrap();
        assert_eq!(report.diagnostics.len(), 3);
        assert_eq!(report.diagnostics[0].summary_lines()[2], "404 - endpoint not found");

        let urls: Vec<String> = client
            .transport()
            .as_fake()
            .unwrap()
            .requests()
            .into_iter()
            .map(|r| r.url)
            .collect();
        assert_eq!(urls.len(), 4);
        assert!(urls[0].ends_with("/svc/crosswords/v3/puzzle/daily/stats.json"));
        assert!(urls[3].contains("stats-and-streaks.json"));
    }
}
