//! Fantasy Premier League API client, data types and team ranking.

pub mod compute;
pub mod http;
pub mod ranking;
pub mod types;
