//! CLI module
//!
//! Provides:
//! - Argument parsing for both binaries
//! - Synchronizer configuration (flag -> env -> default)
//! - Interactive credential prompt for the prober

pub mod args;
pub mod config;
pub mod prompt;

// Re-exports
pub use args::{ProbeArgs, SyncArgs};
pub use config::{SyncConfig, COOKIE_ENV, USER_ID_ENV, WORDLE_PUZZLE_ENV};
pub use prompt::prompt_credential;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("NYT_COOKIE environment variable not set")]
    MissingCredential,

    #[error("NYT_USER_ID environment variable not set (run find-user-id to discover it)")]
    MissingIdentifier,

    #[error("{name} must be a decimal number, got '{value}'")]
    InvalidValue { name: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
