use thiserror::Error;

/// Errors returned by the geocoding and club backend clients.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure, timeout, or non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Blank address; no request was sent.
    #[error("address must not be empty")]
    EmptyAddress,

    /// The geocoder returned an empty result list.
    #[error("address not found: {query}")]
    AddressNotFound { query: String },

    /// The first geocoder candidate has no usable coordinate.
    #[error("geocoder returned an unusable candidate for {query}: {reason}")]
    InvalidCandidate { query: String, reason: String },

    /// The club list was not a JSON array.
    #[error("club list is not an array (got {found})")]
    DataShape { found: &'static str },
}
