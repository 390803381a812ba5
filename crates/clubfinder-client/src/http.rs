//! Shared `reqwest` plumbing for both clients.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ClientError;

/// Builds a client with the given `User-Agent`; `timeout_secs == 0` leaves
/// requests without a deadline.
pub(crate) fn build_client(timeout_secs: u64, user_agent: &str) -> Result<Client, ClientError> {
    let mut builder = Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent);
    if timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }
    Ok(builder.build()?)
}

pub(crate) fn parse_url(raw: &str) -> Result<Url, ClientError> {
    Url::parse(raw).map_err(|e| ClientError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Sends a GET request, asserts a 2xx HTTP status, and parses the response
/// body as JSON.
///
/// # Errors
///
/// Returns [`ClientError::Http`] on network failure or a non-2xx status.
/// Returns [`ClientError::Deserialize`] if the body is not valid JSON.
pub(crate) async fn request_json(
    client: &Client,
    url: &Url,
) -> Result<serde_json::Value, ClientError> {
    tracing::debug!(%url, "GET");
    let response = client.get(url.clone()).send().await?;
    let response = response.error_for_status()?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
        context: url.to_string(),
        source: e,
    })
}

/// Name of the JSON type of `value`, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
