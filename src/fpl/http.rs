//! Read-only access to the public FPL API.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    cli::types::Gameweek,
    core::build_client,
    error::{FplError, Result},
    fpl::types::{fixtures_for_gameweek, Fixture},
    BASE_URL_ENV_VAR,
};

#[cfg(test)]
mod tests;

/// Root of the Fantasy Premier League API.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api/";

const BOOTSTRAP_PATH: &str = "bootstrap-static/";
const FIXTURES_PATH: &str = "fixtures/";

/// Pick the API root: explicit value, then `FPL_BASE_URL`, then the public API.
///
/// A trailing slash is added so endpoint paths can be appended directly.
pub fn resolve_base_url(base_url: Option<String>) -> Result<String> {
    let url = base_url
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FPL_BASE_URL.to_string());

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(FplError::InvalidBaseUrl { url });
    }

    if url.ends_with('/') {
        Ok(url)
    } else {
        Ok(format!("{url}/"))
    }
}

/// Thin client over the two endpoints the helper needs.
#[derive(Debug, Clone)]
pub struct FplClient {
    client: Client,
    base_url: String,
}

impl FplClient {
    /// `base_url` must already end with `/` (see [`resolve_base_url`]).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.into(),
        })
    }

    /// GET `base_url + path` and parse the body as JSON.
    ///
    /// A non-success status is logged and returned as [`FplError::Status`].
    pub async fn fetch_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let res = self.client.get(&url).send().await?;
        let status = res.status();
        if !status.is_success() {
            warn!(%status, "Failed to fetch data from {url}.");
            return Err(FplError::Status { url, status });
        }

        Ok(res.json::<Value>().await?)
    }

    /// Raw `bootstrap-static/` payload (teams, players, events).
    pub async fn fetch_bootstrap(&self) -> Result<Value> {
        self.fetch_json(BOOTSTRAP_PATH).await
    }

    /// Every fixture of the season, in upstream order.
    pub async fn fetch_all_fixtures(&self) -> Result<Vec<Fixture>> {
        let v = self.fetch_json(FIXTURES_PATH).await?;
        Ok(serde_json::from_value(v)?)
    }

    /// Fixtures scheduled in `round`.
    pub async fn fetch_fixtures(&self, round: Gameweek) -> Result<Vec<Fixture>> {
        let fixtures = fixtures_for_gameweek(self.fetch_all_fixtures().await?, round);
        debug!(gameweek = %round, count = fixtures.len(), "fixtures for gameweek");
        Ok(fixtures)
    }
}
