//! CLI argument parsing
//!
//! Two binaries, two parsers:
//! - `puzzle-stats`: refresh the stats region of a markdown document
//! - `find-user-id`: sweep candidate account ids for the current cookie
//!
//! Credentials never come from flags; see `cli::config`.

use crate::api::DEFAULT_BASE_URL;
use crate::http::DEFAULT_TIMEOUT_SECS;
use clap::Parser;
use std::path::PathBuf;

/// Arguments of `puzzle-stats`
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "puzzle-stats",
    version,
    about = "Refresh the NYT puzzle statistics section of a markdown document"
)]
pub struct SyncArgs {
    /// Document holding the stats markers
    #[arg(long, default_value = "README.md")]
    pub readme: PathBuf,

    /// Print the rendered section instead of writing the document
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the diagnostic endpoint sweep
    #[arg(long)]
    pub skip_diagnostics: bool,

    /// Wordle puzzle id for the word-game sections (falls back to NYT_WORDLE_PUZZLE_ID)
    #[arg(long)]
    pub wordle_puzzle_id: Option<String>,

    /// Service origin
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

/// Arguments of `find-user-id`
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "find-user-id",
    version,
    about = "Discover the NYT crossword user id that belongs to a session cookie"
)]
pub struct ProbeArgs {
    /// Service origin
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}
