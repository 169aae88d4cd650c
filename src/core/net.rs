// src/core/net.rs
// One blocking GET per run. No JavaScript, no retries; the page is a snapshot.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl { url: String, source: url::ParseError },

    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },
}

pub fn http_get(url: &str) -> Result<String, FetchError> {
    let parsed = url::Url::parse(url)
        .map_err(|source| FetchError::InvalidUrl { url: url.to_string(), source })?;

    let transport = |source| FetchError::Transport { url: url.to_string(), source };

    // Client lives for this call only
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(transport)?;

    info!(%parsed, "fetching page");
    let resp = client.get(parsed).send().map_err(transport)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { url: url.to_string(), status });
    }
    let body = resp.text().map_err(transport)?;
    debug!(bytes = body.len(), "page body received");
    Ok(body)
}
