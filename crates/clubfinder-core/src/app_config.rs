use crate::geo::Coordinate;
use crate::schema::ClubFieldKeys;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Base URL of the club backend, e.g. `http://localhost:8000`.
    pub api_base_url: String,
    /// Path of the all-clubs endpoint under `api_base_url`.
    pub clubs_path: String,
    /// Search endpoint of a Nominatim-compatible geocoder.
    pub geocoder_url: String,
    /// Locality prepended to every address before geocoding.
    pub locality: String,
    /// Per-request timeout; `0` disables it.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub map_center: Coordinate,
    pub map_zoom: u8,
    pub field_keys: ClubFieldKeys,
    /// YAML file `field_keys` was read from; `None` means built-in labels.
    pub schema_path: Option<String>,
}
