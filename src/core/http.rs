//! HTTP utilities for FPL API communication

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("fpl-lms/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every FPL request. The API is public; no cookies needed.
pub fn default_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Build the shared HTTP client.
///
/// No timeout is configured; a request waits as long as the server does.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(default_header_map())
        .build()?;
    Ok(client)
}
