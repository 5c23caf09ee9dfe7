//! Fantasy Premier League last-man-standing helper
//!
//! Downloads FPL league data, ranks every team playing in the next gameweek by
//! a heuristic strength score, and suggests the strongest team not already
//! used in a last-man-standing pool.
//!
//! ## Features
//!
//! - **Data Retrieval**: bootstrap data and fixtures from the public FPL API
//! - **Strength Scoring**: weighted attack/defence/overall ratings adjusted for
//!   the opponent's defence
//! - **Selection Filtering**: teams already picked are marked and skipped
//! - **Persistence**: append-only pick history and a raw bootstrap snapshot
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_lms::commands::suggest::{handle_suggest, SuggestParams};
//!
//! # async fn example() -> fpl_lms::Result<()> {
//! let report = handle_suggest(SuggestParams::default()).await?;
//! if let Some(team) = report.suggestion {
//!     println!("Pick {} in gameweek {}", team.name, report.gameweek);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the helper at a different API root (a mirror or a local stub):
//! ```bash
//! export FPL_BASE_URL=http://localhost:8080/api/
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fpl;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{FixtureId, Gameweek, TeamId};
pub use error::{FplError, Result};
pub use fpl::types::{Bootstrap, Event, Fixture, Team};

pub const BASE_URL_ENV_VAR: &str = "FPL_BASE_URL";
