//! ID types for Fantasy Premier League.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for FPL team IDs.
///
/// Fixtures refer to teams by id (`team_h`, `team_a`); this keeps those
/// references from being mixed up with gameweek or fixture numbers.
///
/// # Examples
///
/// ```rust
/// use fpl_lms::TeamId;
///
/// let team_id = TeamId::new(14);
/// assert_eq!(team_id.as_u32(), 14);
/// assert_eq!(team_id.to_string(), "14");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Create a new TeamId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for fixture IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixtureId(pub u32);

impl FixtureId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for FixtureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
