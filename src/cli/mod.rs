//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use std::path::PathBuf;

/// Default location of the selection history (one lowercase team per line).
pub const DEFAULT_HISTORY_PATH: &str = "lms.txt";

/// Default location of the bootstrap snapshot.
pub const DEFAULT_SNAPSHOT_PATH: &str = "players_data_gw.json";

/// Suggest the strongest team not yet picked in a last-man-standing pool.
///
/// Fetches FPL bootstrap data and fixtures, ranks every team playing in the
/// next gameweek by strength, and records the best unused team.
#[derive(Debug, Parser)]
#[clap(name = "fpl-lms", about = "Fantasy Premier League last-man-standing helper")]
pub struct Lms {
    /// Selection history file; appended to when a team is chosen.
    #[clap(long, default_value = DEFAULT_HISTORY_PATH)]
    pub history: PathBuf,

    /// Where to write the raw bootstrap payload (overwritten each run).
    #[clap(long, default_value = DEFAULT_SNAPSHOT_PATH)]
    pub snapshot: PathBuf,

    /// API root (or set `FPL_BASE_URL` env var).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Print the suggestion without adding it to the history file.
    #[clap(long)]
    pub dry_run: bool,

    /// Output the ranking and suggestion as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,

    /// Compare against the opponent's defence for the venue it actually plays at.
    #[clap(long)]
    pub opponent_venue: bool,

    /// Enable debug logging.
    #[clap(long, short)]
    pub verbose: bool,
}
