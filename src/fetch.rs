//! One-shot download of the catalog payload.

use crate::Pokemon;
use gloo_net::http::Request;
use log::{info, warn};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response, or the body could not be read.
    Network(String),
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The body was not a valid catalog.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Could not reach the catalog: {}", msg),
            FetchError::Status(code) => write!(f, "Catalog request failed with HTTP {}", code),
            FetchError::Decode(msg) => write!(f, "Catalog payload is malformed: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<gloo_net::Error> for FetchError {
    fn from(e: gloo_net::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Decode a JSON array of pokemon, keeping payload order.
pub fn parse_catalog(body: &str) -> Result<Vec<Pokemon>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// GET `url` and decode the catalog. Called once per session.
pub async fn fetch_catalog(url: &str) -> Result<Vec<Pokemon>, FetchError> {
    info!("Fetching catalog from {}", url);

    let response = Request::get(url).send().await?;
    if !response.ok() {
        warn!("Catalog request returned {}", response.status());
        return Err(FetchError::Status(response.status()));
    }

    let body = response.text().await?;
    parse_catalog(&body)
}
