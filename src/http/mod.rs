//! HTTP plumbing shared by both binaries
//!
//! Every request carries the raw session cookie and a fixed desktop browser
//! user-agent. Transports are synchronous; see `transport` for the
//! real/fake split.

mod credential;
pub mod transport;
pub mod transport_fake;
pub mod transport_reqwest;
pub mod transport_types;

pub use credential::Credential;
pub use transport::Transport;
pub use transport_fake::{FakeReply, FakeTransport, RecordedRequest};
pub use transport_reqwest::{ReqwestTransport, DEFAULT_TIMEOUT_SECS};
pub use transport_types::{FetchError, HttpResponse, SyncTransport};

/// Desktop Chrome user-agent sent with every request
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Cookie + user-agent header pair for a request
pub fn request_headers(credential: &Credential) -> [(&'static str, &str); 2] {
    [("Cookie", credential.expose()), ("User-Agent", USER_AGENT)]
}

/// Typed result of a fetch
///
/// `Empty` means the service answered 200 but the payload held nothing we
/// could use; `Failed` carries why the request itself did not succeed.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Found(T),
    Empty,
    Failed(FetchError),
}

impl<T> FetchOutcome<T> {
    /// Short label for logs
    pub fn kind(&self) -> OutcomeKind {
        match self {
            FetchOutcome::Found(_) => OutcomeKind::Found,
            FetchOutcome::Empty => OutcomeKind::Empty,
            FetchOutcome::Failed(_) => OutcomeKind::Failed,
        }
    }
}

/// Payload-free view of a [`FetchOutcome`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Found,
    Empty,
    Failed,
}
