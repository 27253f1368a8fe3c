//! Synchronizer configuration
//!
//! Resolution priority for every value:
//! 1. Command-line flag
//! 2. Environment variable
//! 3. Built-in default
//!
//! Built once in `main`; nothing below the entry point reads the
//! environment.

use crate::cli::{Error, Result, SyncArgs};
use crate::http::Credential;
use std::path::PathBuf;

/// Raw session cookie
pub const COOKIE_ENV: &str = "NYT_COOKIE";
/// Numeric crossword account id
pub const USER_ID_ENV: &str = "NYT_USER_ID";
/// Optional Wordle puzzle id enabling the word-game sections
pub const WORDLE_PUZZLE_ENV: &str = "NYT_WORDLE_PUZZLE_ID";

/// Everything a synchronization run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub credential: Credential,
    pub user_id: String,
    pub readme_path: PathBuf,
    pub base_url: String,
    pub wordle_puzzle_id: Option<String>,
    pub run_diagnostics: bool,
    pub dry_run: bool,
    pub timeout_secs: u64,
}

impl SyncConfig {
    /// Resolve against the process environment
    pub fn from_env(args: &SyncArgs) -> Result<Self> {
        Self::from_lookup(args, |name| std::env::var(name).ok())
    }

    /// Resolve with an arbitrary variable lookup
    ///
    /// Blank values count as unset. The credential is checked before the
    /// identifier so each missing piece gets its own message.
    pub fn from_lookup<F>(args: &SyncArgs, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let credential = non_blank(COOKIE_ENV)
            .and_then(Credential::new)
            .ok_or(Error::MissingCredential)?;

        let user_id = non_blank(USER_ID_ENV).ok_or(Error::MissingIdentifier)?;
        require_digits(USER_ID_ENV, &user_id)?;

        let wordle_puzzle_id = match &args.wordle_puzzle_id {
            Some(flag) if !flag.trim().is_empty() => Some(flag.trim().to_string()),
            _ => non_blank(WORDLE_PUZZLE_ENV),
        };
        if let Some(puzzle_id) = &wordle_puzzle_id {
            require_digits(WORDLE_PUZZLE_ENV, puzzle_id)?;
        }

        Ok(Self {
            credential,
            user_id,
            readme_path: args.readme.clone(),
            base_url: args.base_url.clone(),
            wordle_puzzle_id,
            run_diagnostics: !args.skip_diagnostics,
            dry_run: args.dry_run,
            timeout_secs: args.timeout_secs,
        })
    }
}

fn require_digits(name: &'static str, value: &str) -> Result<()> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Error::InvalidValue {
            name,
            value: value.to_string(),
        })
    }
}
