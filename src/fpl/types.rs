use crate::cli::types::{FixtureId, Gameweek, TeamId};
use crate::fpl::compute::Venue;
use serde::{Deserialize, Serialize};


/// Typed view over `bootstrap-static/`.
///
/// Only the fields the ranking needs are kept; the raw payload is what gets
/// written to the snapshot file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Bootstrap {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl Bootstrap {
    /// The first gameweek flagged `is_current`, if any.
    pub fn current_gameweek(&self) -> Option<Gameweek> {
        current_gameweek(&self.events)
    }
}

/// Scan round records for the one flagged current.
pub fn current_gameweek(events: &[Event]) -> Option<Gameweek> {
    events.iter().find(|e| e.is_current).map(|e| e.id)
}

/// A gameweek record from `bootstrap-static/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Event {
    pub id: Gameweek,
    #[serde(default)]
    pub is_current: bool,
}

/// Premier League team with FPL strength ratings, split by venue.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub strength_attack_home: f64,
    #[serde(default)]
    pub strength_attack_away: f64,
    #[serde(default)]
    pub strength_defence_home: f64,
    #[serde(default)]
    pub strength_defence_away: f64,
    #[serde(default)]
    pub strength_overall_home: f64,
    #[serde(default)]
    pub strength_overall_away: f64,
}

impl Team {
    pub fn attack(&self, venue: Venue) -> f64 {
        match venue {
            Venue::Home => self.strength_attack_home,
            Venue::Away => self.strength_attack_away,
        }
    }

    pub fn defence(&self, venue: Venue) -> f64 {
        match venue {
            Venue::Home => self.strength_defence_home,
            Venue::Away => self.strength_defence_away,
        }
    }

    pub fn overall(&self, venue: Venue) -> f64 {
        match venue {
            Venue::Home => self.strength_overall_home,
            Venue::Away => self.strength_overall_away,
        }
    }
}

/// A single match from `fixtures/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Fixture {
    pub id: FixtureId,
    /// `None` for fixtures not yet assigned to a gameweek.
    #[serde(default)]
    pub event: Option<Gameweek>,
    pub team_h: TeamId,
    pub team_a: TeamId,
}

/// Keep only fixtures scheduled in `round`, preserving upstream order.
pub fn fixtures_for_gameweek(fixtures: Vec<Fixture>, round: Gameweek) -> Vec<Fixture> {
    fixtures
        .into_iter()
        .filter(|f| f.event == Some(round))
        .collect()
}
