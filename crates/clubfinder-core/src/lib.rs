pub mod app_config;
pub mod club;
pub mod config;
pub mod filter;
pub mod geo;
pub mod schema;
pub mod session;
pub mod view;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use club::{normalize_club, normalize_clubs, parse_number, Club, RawClub, RecordError};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{filter_clubs, run_pipeline, ClubMatch, FilterCriteria};
pub use geo::{haversine_km, Coordinate, EARTH_RADIUS_KM};
pub use schema::{load_field_keys, ClubFieldKeys};
pub use session::{validate_address, SearchOutcome, SearchSession, SearchState, SearchTicket};
pub use view::{ListEntry, MapMarker, MapView, MarkerKind};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read club schema file {path}: {source}")]
    SchemaFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse club schema file: {0}")]
    SchemaFileParse(#[from] serde_yaml::Error),

    #[error("club schema validation failed: {0}")]
    SchemaValidation(String),
}

/// Domain-level validation errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    #[error("address must not be empty")]
    EmptyAddress,

    #[error("invalid {field}: {value:?} is not a number")]
    InvalidCriterion { field: &'static str, value: String },

    #[error("coordinate out of range: lat={lat}, lon={lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },
}
