//! Error types for the FPL last-man-standing helper

use thiserror::Error;

use crate::cli::types::{Gameweek, TeamId};


pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch data from {url} (status {status})")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Current gameweek could not be determined")]
    NoCurrentGameweek,

    #[error("No gameweek follows gameweek {current}")]
    NoNextGameweek { current: Gameweek },

    #[error("Fixture references unknown team id {id}")]
    UnknownTeam { id: TeamId },

    #[error("Invalid base URL: {url}")]
    InvalidBaseUrl { url: String },
}
