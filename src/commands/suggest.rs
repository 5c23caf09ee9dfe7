//! Suggest command: rank next gameweek's teams and record the best unused one.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

use crate::{
    cli::{types::Gameweek, DEFAULT_HISTORY_PATH, DEFAULT_SNAPSHOT_PATH},
    error::FplError,
    fpl::{
        compute::DefenceLookup,
        http::{resolve_base_url, FplClient},
        ranking::{rank_fixtures, RankedTeam, Ranking},
        types::Bootstrap,
    },
    storage::{save_snapshot, SelectionHistory},
    Result,
};

use super::common::{format_ranked_line, title_case};

/// Parameters for the suggest command
#[derive(Debug, Clone)]
pub struct SuggestParams {
    pub history_path: PathBuf,
    pub snapshot_path: PathBuf,
    pub base_url: Option<String>,
    pub dry_run: bool,
    pub as_json: bool,
    pub lookup: DefenceLookup,
}

impl Default for SuggestParams {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            base_url: None,
            dry_run: false,
            as_json: false,
            lookup: DefenceLookup::default(),
        }
    }
}

/// Everything one run worked out.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestReport {
    pub gameweek: Gameweek,
    pub previous_selections: Vec<String>,
    pub ranking: Ranking,
    pub suggestion: Option<RankedTeam>,
    /// Whether the suggestion was appended to the history file.
    pub recorded: bool,
}

/// Handle the suggest command.
///
/// Fetches bootstrap data, writes the snapshot, resolves the current gameweek,
/// ranks the following gameweek's fixtures and appends the strongest team not
/// yet used to the history file. Returns `Ok` with no suggestion when every
/// team has been used.
pub async fn handle_suggest(params: SuggestParams) -> Result<SuggestReport> {
    let client = FplClient::new(resolve_base_url(params.base_url.clone())?)?;

    let raw = client.fetch_bootstrap().await.inspect_err(|_| {
        error!("Error fetching bootstrap data.");
    })?;

    save_snapshot(&params.snapshot_path, &raw)?;
    if params.as_json {
        info!(path = %params.snapshot_path.display(), "FPL data saved");
    } else {
        println!("FPL data saved to {}", params.snapshot_path.display());
    }

    let bootstrap = Bootstrap::deserialize(&raw)?;
    let Some(current) = bootstrap.current_gameweek() else {
        error!("Current gameweek could not be determined.");
        return Err(FplError::NoCurrentGameweek);
    };
    let Some(next_gw) = current.next() else {
        error!("Gameweek {} has no successor.", current);
        return Err(FplError::NoNextGameweek { current });
    };
    info!(current = %current, next = %next_gw, "resolved gameweek");

    let fixtures = client.fetch_fixtures(next_gw).await?;

    let mut history = SelectionHistory::load(&params.history_path)?;
    let previous_selections: Vec<String> = history.iter().map(title_case).collect();

    if !params.as_json {
        println!("\nPrevious selections:");
        for selection in &previous_selections {
            println!("{}", selection);
        }
    }

    let ranking = rank_fixtures(&bootstrap.teams, &fixtures, &history, params.lookup)?;

    if !params.as_json {
        println!("Teams from strongest to weakest for the next gameweek:");
        for team in &ranking.teams {
            println!("{}", format_ranked_line(team));
        }
    }

    let suggestion = ranking.suggestion().cloned();
    let mut recorded = false;

    match &suggestion {
        Some(team) => {
            if !params.as_json {
                println!(
                    "\nSuggested team for Gameweek {}: {} ({}) with strength {:.2}",
                    next_gw, team.name, team.short_name, team.score
                );
            }

            if params.dry_run {
                info!(team = %team.name, "dry run, history left unchanged");
            } else {
                history.record(&params.history_path, &team.name)?;
                recorded = true;
                if !params.as_json {
                    println!("\n{} has been added to the previous selections.", team.name);
                }
            }
        }
        None => {
            info!(gameweek = %next_gw, "every team in the gameweek has been used");
            if !params.as_json {
                println!("No available teams left to choose.");
            }
        }
    }

    let report = SuggestReport {
        gameweek: next_gw,
        previous_selections,
        ranking,
        suggestion,
        recorded,
    };

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(report)
}
