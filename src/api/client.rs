//! Games service client
//!
//! Wraps a transport, the endpoint builder and the session credential.
//! Every fetch returns a [`FetchOutcome`]; nothing here panics or
//! propagates past the fetch boundary.

use crate::api::endpoints::Endpoints;
use crate::http::{
    request_headers, Credential, FetchError, FetchOutcome, HttpResponse, SyncTransport, Transport,
};
use crate::stats::{CrosswordPayload, GamesPayload};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Characters of body kept when a diagnostic endpoint answers 200
const OK_PREVIEW_CHARS: usize = 500;
/// Characters of body kept for any other status
const ERROR_PREVIEW_CHARS: usize = 200;

/// Client for the crossword / games endpoints
#[derive(Debug)]
pub struct StatsClient {
    transport: Transport,
    endpoints: Endpoints,
    credential: Credential,
}

impl StatsClient {
    pub fn new(transport: Transport, endpoints: Endpoints, credential: Credential) -> Self {
        Self {
            transport,
            endpoints,
            credential,
        }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Crossword stats and streaks for `user_id`
    ///
    /// `Empty` when the service answers 200 without a `results` block.
    pub fn fetch_crossword(&self, user_id: &str) -> FetchOutcome<CrosswordPayload> {
        let url = self.endpoints.stats_and_streaks(user_id);
        let outcome = match self.get_json::<CrosswordPayload>(&url) {
            Ok(payload) if payload.results.is_some() => FetchOutcome::Found(payload),
            Ok(_) => FetchOutcome::Empty,
            Err(err) => FetchOutcome::Failed(err),
        };
        debug!(user_id, outcome = ?outcome.kind(), "crossword fetch");
        outcome
    }

    /// Wordle / Spelling Bee state for `puzzle_id`
    ///
    /// `Empty` when neither game block carries any known field.
    pub fn fetch_games(&self, puzzle_id: &str) -> FetchOutcome<GamesPayload> {
        let url = self.endpoints.game_state(puzzle_id);
        let outcome = match self.get_json::<GamesPayload>(&url) {
            Ok(games) if !games.is_empty() => FetchOutcome::Found(games),
            Ok(_) => FetchOutcome::Empty,
            Err(err) => FetchOutcome::Failed(err),
        };
        debug!(puzzle_id, outcome = ?outcome.kind(), "games fetch");
        outcome
    }

    /// Hit every diagnostic endpoint once, in order
    pub fn probe_diagnostics(&self) -> Vec<DiagnosticProbe> {
        self.endpoints
            .diagnostics()
            .into_iter()
            .map(|url| {
                let result = self.get(&url);
                DiagnosticProbe { url, result }
            })
            .collect()
    }

    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let headers = request_headers(&self.credential);
        self.transport.get(url, &headers)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.get(url)?;
        if !response.is_ok() {
            return Err(FetchError::Status {
                status: response.status,
                body_preview: response.body_preview(ERROR_PREVIEW_CHARS).to_string(),
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}

/// Response of one diagnostic endpoint; logged, never rendered
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticProbe {
    pub url: String,
    pub result: Result<HttpResponse, FetchError>,
}

impl DiagnosticProbe {
    /// Console lines describing this probe
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Trying endpoint: {}", self.url)];
        match &self.result {
            Ok(response) => {
                lines.push(format!("Response status: {}", response.status));
                match response.status {
                    200 => lines.push(format!(
                        "Response: {}...",
                        response.body_preview(OK_PREVIEW_CHARS)
                    )),
                    404 => lines.push("404 - endpoint not found".to_string()),
                    _ => lines.push(format!(
                        "Response: {}...",
                        response.body_preview(ERROR_PREVIEW_CHARS)
                    )),
                }
            }
            Err(err) => lines.push(format!("Error: {}", err)),
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FakeTransport;

    fn client(fake: FakeTransport) -> StatsClient {
        StatsClient::new(
            Transport::Fake(fake),
            Endpoints::new("http://fake"),
            Credential::new("NYT-S=cookie").unwrap(),
        )
    }

    #[test]
    fn test_fetch_crossword_found() {
        let client = client(FakeTransport::with_response(
            200,
            r#"{"results":{"stats":{"puzzles_solved":5}}}"#,
        ));
        let outcome = client.fetch_crossword("123");
        assert!(matches!(outcome, FetchOutcome::Found(_)));
    }

    #[test]
    fn test_fetch_crossword_without_results_is_empty() {
        let client = client(FakeTransport::with_response(200, r#"{"status":"ERROR"}"#));
        assert_eq!(client.fetch_crossword("123"), FetchOutcome::Empty);
    }

    #[test]
    fn test_fetch_crossword_status_error() {
        let client = client(FakeTransport::new());
        match client.fetch_crossword("123") {
            FetchOutcome::Failed(FetchError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected status failure, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_crossword_non_json_is_decode_error() {
        let client = client(FakeTransport::with_response(200, "<html>login</html>"));
        assert!(matches!(
            client.fetch_crossword("123"),
            FetchOutcome::Failed(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_requests_carry_cookie_and_user_agent() {
        let client = client(FakeTransport::new());
        client.fetch_crossword("42");

        let seen = client.transport().as_fake().unwrap().requests();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].url.contains("/svc/crosswords/v3/42/stats-and-streaks.json"));
        assert_eq!(seen[0].header("Cookie"), Some("NYT-S=cookie"));
        assert_eq!(seen[0].header("User-Agent"), Some(crate::http::USER_AGENT));
    }

    #[test]
    fn test_fetch_games_empty_blocks() {
        let client = client(FakeTransport::with_response(200, r#"{"wordle":{}}"#));
        assert_eq!(client.fetch_games("2329"), FetchOutcome::Empty);
    }

    #[test]
    fn test_diagnostic_summary_lines() {
        let long_body = "x".repeat(600);
        let client = client(
            FakeTransport::new()
                .route("/daily/", 200, &long_body)
                .route_error("/wordleV2/", "connection reset"),
        );
        let probes = client.probe_diagnostics();
        assert_eq!(probes.len(), 3);

        let daily = probes[0].summary_lines();
        assert_eq!(daily[1], "Response status: 200");
        assert_eq!(daily[2].len(), "Response: ".len() + 500 + 3);

        let mini = probes[1].summary_lines();
        assert_eq!(mini[2], "404 - endpoint not found");

        let wordle = probes[2].summary_lines();
        assert_eq!(wordle[1], "Error: Network error: connection reset");
    }
}
