//! Client for the club backend's all-clubs endpoint.

use clubfinder_core::AppConfig;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::ClientError;
use crate::http::{build_client, json_type_name, parse_url, request_json};

/// Fetches the full, unfiltered club list. Records are returned as raw JSON;
/// normalization happens in `clubfinder_core`.
pub struct ClubsClient {
    client: Client,
    url: Url,
}

impl ClubsClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be built
    /// or [`ClientError::InvalidUrl`] if base URL and path do not form a URL.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_base_url,
            &config.clubs_path,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client for `base_url` + `path` (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`ClubsClient::from_config`].
    pub fn with_base_url(
        base_url: &str,
        path: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let url = parse_url(&join_url(base_url, path))?;
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            url,
        })
    }

    /// URL of the all-clubs endpoint.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetches every club record.
    ///
    /// # Errors
    ///
    /// - [`ClientError::DataShape`] if the body is valid JSON but not an array.
    /// - [`ClientError::Http`] on network failure or non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not JSON.
    pub async fn fetch_all(&self) -> Result<Vec<Value>, ClientError> {
        let body = request_json(&self.client, &self.url).await?;
        match body {
            Value::Array(records) => {
                tracing::info!(count = records.len(), url = %self.url, "fetched clubs");
                Ok(records)
            }
            other => {
                let found = json_type_name(&other);
                tracing::error!(found, url = %self.url, "club list is not an array");
                Err(ClientError::DataShape { found })
            }
        }
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim();
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{}", path.trim_start_matches('/'))
    }
}
