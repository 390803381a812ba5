use serde::Deserialize;
use serde_json::Value;

/// One entry of a Nominatim `format=json` search response.
///
/// `lat`/`lon` are kept as raw JSON because Nominatim sends them as strings
/// while other compatible services send numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeCandidate {
    #[serde(default)]
    pub lat: Value,
    #[serde(default)]
    pub lon: Value,
    #[serde(default)]
    pub display_name: Option<String>,
}
