//! find-user-id: discover the crossword account id behind a session cookie
//!
//! Reads the cookie from stdin, sweeps every candidate id in order and
//! prints the ones that return real statistics. No early exit.

use anyhow::Context;
use clap::Parser;
use std::io;

use puzzle_stats::api::{Endpoints, StatsClient};
use puzzle_stats::cli::{prompt_credential, ProbeArgs};
use puzzle_stats::http::ReqwestTransport;
use puzzle_stats::logging::init_tracing;
use puzzle_stats::probe::report::{hit_detail_lines, summary_lines};
use puzzle_stats::probe::{run_probe, CandidateSweep, ProbeEvent};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = ProbeArgs::parse();

    println!("NYT Crossword User ID Finder");
    println!("{}", "=".repeat(40));
    println!();
    println!("Paste the value of your NYT-S cookie (or the full Cookie header).");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let credential = match prompt_credential(&mut input, &mut stdout, "Cookie: ")
        .context("failed to read cookie from stdin")?
    {
        Some(credential) => credential,
        None => {
            println!("No cookie provided. Exiting.");
            return Ok(());
        }
    };

    let transport =
        ReqwestTransport::with_timeout(args.timeout_secs).context("failed to build HTTP client")?;
    let client = StatsClient::new(
        transport.into(),
        Endpoints::new(args.base_url.as_str()),
        credential,
    );

    let candidates = CandidateSweep::default().generate();
    println!();
    println!("Testing {} candidate user IDs...", candidates.len());

    let hits = run_probe(&client, &candidates, |event| match event {
        ProbeEvent::Progress {
            position,
            total,
            candidate,
        } => println!("Testing ID {}/{}: {}", position, total, candidate),
        ProbeEvent::Hit(hit) => {
            println!("Found valid user ID: {}", hit.user_id);
            for line in hit_detail_lines(hit) {
                println!("{}", line);
            }
        }
    });

    println!();
    for line in summary_lines(&hits) {
        println!("{}", line);
    }

    Ok(())
}
