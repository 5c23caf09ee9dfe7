//! Heuristic team strength scoring.

use serde::Serialize;

use crate::fpl::types::Team;


/// Weight of the attack rating in the base score.
pub const ATTACK_WEIGHT: f64 = 0.4;
/// Weight of the defence rating in the base score.
pub const DEFENCE_WEIGHT: f64 = 0.4;
/// Weight of the overall rating in the base score.
pub const OVERALL_WEIGHT: f64 = 0.2;

/// Where a team plays a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn opposite(self) -> Self {
        match self {
            Venue::Home => Venue::Away,
            Venue::Away => Venue::Home,
        }
    }
}

/// Which of the opponent's defence ratings a team is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefenceLookup {
    /// The opponent's rating for the scoring team's own venue: a home side
    /// is compared with the opponent's `strength_defence_home`. This is the
    /// historical behaviour and the default.
    #[default]
    SameVenue,
    /// The opponent's rating for the venue the opponent actually plays at.
    OpponentVenue,
}

impl DefenceLookup {
    fn venue_for_opponent(self, venue: Venue) -> Venue {
        match self {
            DefenceLookup::SameVenue => venue,
            DefenceLookup::OpponentVenue => venue.opposite(),
        }
    }
}

/// `attack / opponent_defence`, or exactly 1 when the opponent has no
/// positive defence rating.
pub fn difficulty_adjustment(attack: f64, opponent_defence: f64) -> f64 {
    if opponent_defence > 0.0 {
        attack / opponent_defence
    } else {
        1.0
    }
}

/// Weighted strength score from raw ratings.
pub fn strength_score(attack: f64, defence: f64, overall: f64, opponent_defence: f64) -> f64 {
    let base = ATTACK_WEIGHT * attack + DEFENCE_WEIGHT * defence + OVERALL_WEIGHT * overall;
    base * difficulty_adjustment(attack, opponent_defence)
}

/// Score `team` for a fixture against `opponent`, with `team` playing at `venue`.
pub fn team_strength(team: &Team, opponent: &Team, venue: Venue, lookup: DefenceLookup) -> f64 {
    strength_score(
        team.attack(venue),
        team.defence(venue),
        team.overall(venue),
        opponent.defence(lookup.venue_for_opponent(venue)),
    )
}
