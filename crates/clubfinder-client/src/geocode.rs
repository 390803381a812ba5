//! Geocoding client for a Nominatim-compatible `search` endpoint.
//!
//! Every lookup is sent as `?format=json&q=<locality>, <address>` and only
//! the first candidate is used. There is no retry and no caching; each call
//! queries the service again.

use clubfinder_core::{parse_number, AppConfig, Coordinate};
use reqwest::{Client, Url};

use crate::error::ClientError;
use crate::http::{build_client, parse_url, request_json};
use crate::types::GeocodeCandidate;

/// Client for a Nominatim-style geocoder.
///
/// Use [`GeocodeClient::from_config`] in the binary or
/// [`GeocodeClient::with_endpoint`] to point at a mock server in tests.
pub struct GeocodeClient {
    client: Client,
    endpoint: Url,
    locality: String,
}

impl GeocodeClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be built
    /// or [`ClientError::InvalidUrl`] if the geocoder URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_endpoint(
            &config.geocoder_url,
            &config.locality,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client for an explicit endpoint.
    ///
    /// `locality` is prepended to every address; pass an empty string to
    /// send addresses unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`GeocodeClient::from_config`].
    pub fn with_endpoint(
        endpoint: &str,
        locality: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            endpoint: parse_url(endpoint)?,
            locality: locality.trim().to_string(),
        })
    }

    /// Resolves `address` to the coordinate of the geocoder's first candidate.
    ///
    /// # Errors
    ///
    /// - [`ClientError::EmptyAddress`] for blank input; no request is sent.
    /// - [`ClientError::AddressNotFound`] if the result list is empty.
    /// - [`ClientError::InvalidCandidate`] if the first candidate's `lat`/`lon`
    ///   are not numbers in range.
    /// - [`ClientError::Http`] on network failure or non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not a JSON array of
    ///   candidates.
    pub async fn geocode(&self, address: &str) -> Result<Coordinate, ClientError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ClientError::EmptyAddress);
        }

        let query = self.query_for(address);
        let url = self.build_url(&query);
        let body = request_json(&self.client, &url).await?;

        let candidates: Vec<GeocodeCandidate> =
            serde_json::from_value(body).map_err(|e| ClientError::Deserialize {
                context: format!("geocode(q={query})"),
                source: e,
            })?;

        let Some(first) = candidates.first() else {
            tracing::info!(query = %query, "geocoder returned no candidates");
            return Err(ClientError::AddressNotFound { query });
        };

        let location = candidate_location(first, &query)?;
        tracing::info!(
            query = %query,
            lat = location.lat,
            lon = location.lon,
            display_name = first.display_name.as_deref().unwrap_or_default(),
            candidates = candidates.len(),
            "geocoded address"
        );
        Ok(location)
    }

    /// Free-text query sent to the geocoder for `address`.
    #[must_use]
    pub fn query_for(&self, address: &str) -> String {
        if self.locality.is_empty() {
            address.to_string()
        } else {
            format!("{}, {address}", self.locality)
        }
    }

    fn build_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("q", query);
        url
    }
}

fn candidate_location(candidate: &GeocodeCandidate, query: &str) -> Result<Coordinate, ClientError> {
    let invalid = |reason: String| ClientError::InvalidCandidate {
        query: query.to_string(),
        reason,
    };
    let lat = parse_number(&candidate.lat)
        .ok_or_else(|| invalid(format!("lat is not a number: {}", candidate.lat)))?;
    let lon = parse_number(&candidate.lon)
        .ok_or_else(|| invalid(format!("lon is not a number: {}", candidate.lon)))?;
    Coordinate::new(lat, lon).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn test_client(endpoint: &str, locality: &str) -> GeocodeClient {
        GeocodeClient::with_endpoint(endpoint, locality, 30, "clubfinder-test")
            .expect("client construction should not fail")
    }

    #[test]
    fn query_prefixes_locality() {
        let client = test_client("https://geo.example/search", "Тюмень");
        assert_eq!(client.query_for("ул. Ленина 1"), "Тюмень, ул. Ленина 1");
    }

    #[test]
    fn query_without_locality_is_address() {
        let client = test_client("https://geo.example/search", "  ");
        assert_eq!(client.query_for("Main St 1"), "Main St 1");
    }

    #[test]
    fn build_url_sets_format_and_escapes_query() {
        let client = test_client("https://geo.example/search", "");
        let url = client.build_url("Main St & 5th");
        assert_eq!(
            url.as_str(),
            "https://geo.example/search?format=json&q=Main+St+%26+5th"
        );
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let result = GeocodeClient::with_endpoint("not a url", "", 30, "ua");
        assert!(matches!(result, Err(ClientError::InvalidUrl { .. })));
    }

    #[test]
    fn candidate_accepts_string_coordinates() {
        let candidate: GeocodeCandidate =
            serde_json::from_value(json!({ "lat": "57.15", "lon": "65.53" })).unwrap();
        let loc = candidate_location(&candidate, "q").unwrap();
        assert_eq!(loc, Coordinate::new(57.15, 65.53).unwrap());
    }

    #[test]
    fn candidate_without_lat_is_invalid() {
        let candidate: GeocodeCandidate =
            serde_json::from_value(json!({ "lon": 65.53 })).unwrap();
        let err = candidate_location(&candidate, "q").unwrap_err();
        assert!(matches!(err, ClientError::InvalidCandidate { ref reason, .. } if reason.contains("lat")));
    }

    #[test]
    fn candidate_out_of_range_is_invalid() {
        let candidate: GeocodeCandidate =
            serde_json::from_value(json!({ "lat": 95, "lon": 0 })).unwrap();
        assert!(candidate_location(&candidate, "q").is_err());
    }
}
