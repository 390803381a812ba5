//! HTTP adapters for the club search: a Nominatim-compatible geocoder and
//! the club backend.

pub mod clubs;
pub mod error;
pub mod geocode;
mod http;
pub mod types;

pub use clubs::ClubsClient;
pub use error::ClientError;
pub use geocode::GeocodeClient;
pub use types::GeocodeCandidate;
