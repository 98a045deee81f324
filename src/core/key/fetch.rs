//! Travis API key fetcher.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, trace};

use super::KeySource;
use crate::error::{KeyError, Result};

/// Body of `GET /repos/{repo}/key`.
#[derive(Debug, Deserialize)]
struct KeyResponse {
    key: Option<String>,
    #[serde(default)]
    fingerprint: Option<String>,
}

/// Fetches repository keys from the Travis API over HTTPS.
pub struct HttpKeySource {
    client: Client,
    api_url: String,
}

impl HttpKeySource {
    /// Create a fetcher for the API rooted at `api_url`.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Fetch` if the HTTP client cannot be built.
    pub fn new(api_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("travis-encrypt/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(KeyError::Fetch)?;

        Ok(Self::with_client(client, api_url))
    }

    /// Create a fetcher that sends requests through `client`.
    pub fn with_client(client: Client, api_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

impl KeySource for HttpKeySource {
    fn fetch(&self, repo: &str) -> Result<String> {
        let url = key_url(&self.api_url, repo);
        debug!(url = %url, "fetching public key");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(KeyError::Fetch)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(KeyError::NotFound {
                repo: repo.to_string(),
            }
            .into());
        }

        let body = response
            .error_for_status()
            .and_then(|r| r.bytes())
            .map_err(KeyError::Fetch)?;
        trace!(body_len = body.len(), "key response received");

        parse_key_response(repo, &body)
    }
}

/// URL of the public key endpoint for `repo`.
pub fn key_url(api_url: &str, repo: &str) -> String {
    format!("{}/repos/{}/key", api_url.trim_end_matches('/'), repo)
}

/// Extract the `key` field from a key endpoint response body.
///
/// # Errors
///
/// Returns `KeyError::InvalidResponse` if the body is not JSON, or
/// `KeyError::NotFound` if it has no `key` field.
pub fn parse_key_response(repo: &str, body: &[u8]) -> Result<String> {
    let response: KeyResponse = serde_json::from_slice(body).map_err(KeyError::InvalidResponse)?;

    if let Some(fingerprint) = &response.fingerprint {
        debug!(fingerprint = %fingerprint, "public key fingerprint");
    }

    response.key.ok_or_else(|| {
        KeyError::NotFound {
            repo: repo.to_string(),
        }
        .into()
    })
}
