//! Real HTTP transport using reqwest
//!
//! Synchronous blocking client. One client per run, reused for every request.

use crate::http::transport_types::{FetchError, HttpResponse, SyncTransport};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Real HTTP transport using reqwest's blocking client
#[derive(Debug)]
pub struct ReqwestTransport {
    client: Client,
    /// Timeout in seconds for requests
    timeout: u64,
}

impl ReqwestTransport {
    /// Create transport with custom timeout
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            timeout: timeout_secs,
        })
    }

    /// Configured timeout in seconds
    pub fn timeout_secs(&self) -> u64 {
        self.timeout
    }
}

impl SyncTransport for ReqwestTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, FetchError> {
        let mut request = self.client.get(url);
        for (key, value) in headers {
            request = request.header(*key, *value);
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(url, status, body_len = body.len(), "GET completed");

        Ok(HttpResponse { status, body })
    }
}
