//! Session credential
//!
//! The raw cookie string is forwarded verbatim as the `Cookie` header and
//! never printed in full.

use std::fmt;

/// Number of leading characters shown by [`Credential::preview`]
const PREVIEW_CHARS: usize = 8;

/// Opaque session cookie
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw cookie string; `None` when it is empty or whitespace
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Raw cookie value for the `Cookie` header
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Redacted form safe for logs: first few characters and total length
    pub fn preview(&self) -> String {
        let head: String = self.0.chars().take(PREVIEW_CHARS).collect();
        format!("{}... ({} chars)", head, self.0.chars().count())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", self.preview())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credential_rejected() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   \n").is_none());
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let credential = Credential::new("NYT-S=supersecretvalue; nyt-a=xyz").unwrap();
        let shown = format!("{:?}", credential);
        assert!(!shown.contains("supersecretvalue"));
        assert!(shown.contains("NYT-S=su"));
    }

    #[test]
    fn test_expose_is_verbatim() {
        let credential = Credential::new(" a=b ").unwrap();
        assert_eq!(credential.expose(), " a=b ");
    }
}
