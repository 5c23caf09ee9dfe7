//! Entry point: parse CLI, set up logging and run the suggest command.

use anyhow::Context;
use clap::Parser;
use fpl_lms::{
    cli::Lms,
    commands::suggest::{handle_suggest, SuggestParams},
    fpl::compute::DefenceLookup,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Lms::parse();
    init_tracing(app.verbose);

    let params = SuggestParams {
        history_path: app.history,
        snapshot_path: app.snapshot,
        base_url: app.base_url,
        dry_run: app.dry_run,
        as_json: app.json,
        lookup: if app.opponent_venue {
            DefenceLookup::OpponentVenue
        } else {
            DefenceLookup::SameVenue
        },
    };

    handle_suggest(params)
        .await
        .context("last-man-standing run aborted")?;

    Ok(())
}
