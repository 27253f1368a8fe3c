//! Transport types
//!
//! Common types shared across transport implementations.

/// Raw response as returned by a transport
///
/// Non-2xx statuses are NOT errors at this level. Callers decide what a
/// given status means for them (the diagnostic probe logs 404 bodies, the
/// stats fetch treats anything but 200 as "no data").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body (UTF-8, lossy)
    pub body: String,
}

impl HttpResponse {
    /// Create a response from status and body
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True only for `200 OK`
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// First `max_chars` characters of the body
    pub fn body_preview(&self, max_chars: usize) -> &str {
        match self.body.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.body[..idx],
            None => &self.body,
        }
    }
}

/// Fetch errors
///
/// Kept distinct so tests can tell "transport failed" from "service said
/// no". User-facing output folds all of them into "no data".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Network error (connection refused, DNS, timeout, TLS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-200 status
    #[error("HTTP error {status}: {body_preview}")]
    Status { status: u16, body_preview: String },

    /// Body was not the JSON shape we expected
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Synchronous HTTP transport
///
/// Abstraction over the HTTP client so the probe loop and the synchronizer
/// can be driven by `FakeTransport` in tests.
pub trait SyncTransport: Send + Sync {
    /// Issue a GET with the given headers and return status + body
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, FetchError>;
}
