//! Concrete transport selection
//!
//! Enum instead of `Box<dyn SyncTransport>` so the client owns a plain value
//! and tests can reach into the fake after a run.

pub use crate::http::transport_fake::FakeTransport;
pub use crate::http::transport_reqwest::ReqwestTransport;
pub use crate::http::transport_types::{FetchError, HttpResponse, SyncTransport};

/// Concrete transport enum
#[derive(Debug)]
pub enum Transport {
    Real(ReqwestTransport),
    Fake(FakeTransport),
}

impl Transport {
    /// Borrow the fake transport, if this is one
    pub fn as_fake(&self) -> Option<&FakeTransport> {
        match self {
            Transport::Fake(t) => Some(t),
            Transport::Real(_) => None,
        }
    }
}

impl SyncTransport for Transport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, FetchError> {
        match self {
            Transport::Real(t) => t.get(url, headers),
            Transport::Fake(t) => t.get(url, headers),
        }
    }
}

impl From<FakeTransport> for Transport {
    fn from(fake: FakeTransport) -> Self {
        Transport::Fake(fake)
    }
}

impl From<ReqwestTransport> for Transport {
    fn from(real: ReqwestTransport) -> Self {
        Transport::Real(real)
    }
}
