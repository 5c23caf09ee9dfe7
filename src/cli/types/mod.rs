//! Type-safe wrappers for Fantasy Premier League identifiers.

pub mod ids;
pub mod time;

pub use ids::{FixtureId, TeamId};
pub use time::Gameweek;
