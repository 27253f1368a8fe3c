//! puzzle-stats: refresh the NYT stats section of a markdown document
//!
//! Flow:
//! - Resolve configuration (flags, NYT_COOKIE, NYT_USER_ID)
//! - Probe diagnostic endpoints unless skipped
//! - Fetch, render, splice between the stats markers
//!
//! Configuration problems and a dangling start marker are reported and the
//! process exits cleanly; document I/O failures are fatal.

use anyhow::Context;
use clap::Parser;

use puzzle_stats::api::{Endpoints, StatsClient};
use puzzle_stats::cli::{SyncArgs, SyncConfig};
use puzzle_stats::http::{OutcomeKind, ReqwestTransport};
use puzzle_stats::logging::init_tracing;
use puzzle_stats::sync::run_sync;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = SyncArgs::parse();

    let config = match SyncConfig::from_env(&args) {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {}", e);
            return Ok(());
        }
    };

    let transport = ReqwestTransport::with_timeout(config.timeout_secs)
        .context("failed to build HTTP client")?;
    let client = StatsClient::new(
        transport.into(),
        Endpoints::new(config.base_url.as_str()),
        config.credential.clone(),
    );

    println!("Fetching NYT puzzle stats for user {}...", config.user_id);
    let report = run_sync(&client, &config)
        .with_context(|| format!("failed to update {}", config.readme_path.display()))?;

    for diagnostic in &report.diagnostics {
        for line in diagnostic.summary_lines() {
            println!("{}", line);
        }
        println!("---");
    }

    if report.crossword != OutcomeKind::Found {
        println!("No crossword stats available; writing header only.");
    }

    match &report.update {
        None => {
            println!("Dry run, rendered section:");
            println!();
            println!("{}", report.fragment);
        }
        Some(update) if !update.replaced => {
            println!(
                "End marker not found after start marker in {}; document left unchanged",
                config.readme_path.display()
            );
        }
        Some(update) if update.changed => {
            println!("Updated {}", config.readme_path.display());
        }
        Some(_) => {
            println!("{} already up to date", config.readme_path.display());
        }
    }

    Ok(())
}
