//! Fake transport for testing
//!
//! Serves fixture strings instead of real HTTP calls. Routes are matched by
//! URL substring in insertion order; unmatched URLs get the fallback reply
//! (404 unless configured otherwise). Every request is recorded.

use crate::http::transport_types::{FetchError, HttpResponse, SyncTransport};
use std::sync::Mutex;

/// What the fake answers for a matched URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeReply {
    /// Return this response
    Response(HttpResponse),
    /// Fail with a network error carrying this message
    NetworkError(String),
}

/// A request seen by the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Fake transport for testing (uses fixture strings)
#[derive(Debug)]
pub struct FakeTransport {
    routes: Vec<(String, FakeReply)>,
    fallback: FakeReply,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    /// Fake that answers 404 to everything
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            fallback: FakeReply::Response(HttpResponse::new(404, "Not Found")),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fake that answers every URL with the given response
    pub fn with_response(status: u16, body: &str) -> Self {
        Self {
            fallback: FakeReply::Response(HttpResponse::new(status, body)),
            ..Self::new()
        }
    }

    /// Fake that fails every URL with a network error
    pub fn with_error(msg: &str) -> Self {
        Self {
            fallback: FakeReply::NetworkError(msg.to_string()),
            ..Self::new()
        }
    }

    /// Answer URLs containing `url_fragment` with `status` and `body`
    pub fn route(mut self, url_fragment: &str, status: u16, body: &str) -> Self {
        self.routes.push((
            url_fragment.to_string(),
            FakeReply::Response(HttpResponse::new(status, body)),
        ));
        self
    }

    /// Fail URLs containing `url_fragment` with a network error
    pub fn route_error(mut self, url_fragment: &str, msg: &str) -> Self {
        self.routes
            .push((url_fragment.to_string(), FakeReply::NetworkError(msg.to_string())));
        self
    }

    /// Requests seen so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn reply_for(&self, url: &str) -> &FakeReply {
        self.routes
            .iter()
            .find(|(fragment, _)| url.contains(fragment.as_str()))
            .map(|(_, reply)| reply)
            .unwrap_or(&self.fallback)
    }
}

impl Default for FakeTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncTransport for FakeTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, FetchError> {
        if let Ok(mut seen) = self.requests.lock() {
            seen.push(RecordedRequest {
                url: url.to_string(),
                headers: headers
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            });
        }

        match self.reply_for(url) {
            FakeReply::Response(response) => Ok(response.clone()),
            FakeReply::NetworkError(msg) => Err(FetchError::Network(msg.clone())),
        }
    }
}
