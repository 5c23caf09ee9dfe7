//! Rank every team playing in a gameweek and pick the best one not yet used.

use serde::Serialize;

use crate::{
    error::{FplError, Result},
    fpl::{
        compute::{team_strength, DefenceLookup, Venue},
        types::{Fixture, Team},
    },
    storage::SelectionHistory,
    TeamId,
};


/// One side of a fixture with its strength score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTeam {
    pub name: String,
    pub short_name: String,
    pub venue: Venue,
    pub score: f64,
    pub previously_chosen: bool,
}

/// Teams from strongest to weakest.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ranking {
    pub teams: Vec<RankedTeam>,
}

impl Ranking {
    /// Entries that have not been picked before, strongest first.
    pub fn available(&self) -> impl Iterator<Item = &RankedTeam> {
        self.teams.iter().filter(|t| !t.previously_chosen)
    }

    /// The strongest team not yet picked, or `None` when every team has been used.
    pub fn suggestion(&self) -> Option<&RankedTeam> {
        self.available().next()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

fn find_team(teams: &[Team], id: TeamId) -> Result<&Team> {
    teams
        .iter()
        .find(|t| t.id == id)
        .ok_or(FplError::UnknownTeam { id })
}

/// Score both sides of every fixture and sort descending.
///
/// Entries are pushed home side first, in fixture order; the sort is stable so
/// equal scores keep that order.
pub fn rank_fixtures(
    teams: &[Team],
    fixtures: &[Fixture],
    history: &SelectionHistory,
    lookup: DefenceLookup,
) -> Result<Ranking> {
    let mut ranked = Vec::with_capacity(fixtures.len() * 2);

    for fixture in fixtures {
        let home = find_team(teams, fixture.team_h)?;
        let away = find_team(teams, fixture.team_a)?;

        for (team, opponent, venue) in [(home, away, Venue::Home), (away, home, Venue::Away)] {
            ranked.push(RankedTeam {
                name: team.name.clone(),
                short_name: team.short_name.clone(),
                venue,
                score: team_strength(team, opponent, venue, lookup),
                previously_chosen: history.contains(&team.name),
            });
        }
    }

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(Ranking { teams: ranked })
}
