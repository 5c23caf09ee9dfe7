//! Gameweek (round) numbering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for Gameweek numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Gameweek(pub u32);

impl Gameweek {
    pub fn new(gw: u32) -> Self {
        Self(gw)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// The round following this one, or `None` past the last representable id.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
