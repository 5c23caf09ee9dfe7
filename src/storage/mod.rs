//! Persistence for the last-man-standing helper
//!
//! Two flat files, neither of them locked:
//! - `history`: append-only list of teams already picked
//! - `snapshot`: the raw bootstrap payload, overwritten each run

pub mod history;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use history::SelectionHistory;
pub use snapshot::save_snapshot;
