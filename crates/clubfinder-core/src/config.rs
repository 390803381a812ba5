use std::path::Path;
use std::str::FromStr;

use crate::app_config::{AppConfig, Environment};
use crate::geo::Coordinate;
use crate::schema::{load_field_keys, ClubFieldKeys};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or the club schema file
/// cannot be loaded.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or the club schema file
/// cannot be loaded.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("CLUBFINDER_ENV", "development"))?;
    let log_level = or_default("CLUBFINDER_LOG_LEVEL", "info");

    let api_base_url = parse_url(
        "CLUBFINDER_API_BASE",
        &or_default("CLUBFINDER_API_BASE", "http://localhost:8000"),
    )?;
    let clubs_path = or_default("CLUBFINDER_CLUBS_PATH", "/all-clubs");
    let geocoder_url = parse_url(
        "CLUBFINDER_GEOCODER_URL",
        &or_default(
            "CLUBFINDER_GEOCODER_URL",
            "https://nominatim.openstreetmap.org/search",
        ),
    )?;
    let locality = or_default("CLUBFINDER_LOCALITY", "Тюмень");

    let request_timeout_secs: u64 = parse_var(
        "CLUBFINDER_REQUEST_TIMEOUT_SECS",
        &or_default("CLUBFINDER_REQUEST_TIMEOUT_SECS", "30"),
    )?;
    let user_agent = or_default("CLUBFINDER_USER_AGENT", "clubfinder/0.1 (club-search)");

    let center_lat: f64 = parse_var(
        "CLUBFINDER_MAP_CENTER_LAT",
        &or_default("CLUBFINDER_MAP_CENTER_LAT", "57.1522"),
    )?;
    let center_lon: f64 = parse_var(
        "CLUBFINDER_MAP_CENTER_LON",
        &or_default("CLUBFINDER_MAP_CENTER_LON", "65.5272"),
    )?;
    let map_center =
        Coordinate::new(center_lat, center_lon).map_err(|e| ConfigError::InvalidEnvVar {
            var: "CLUBFINDER_MAP_CENTER_LAT/CLUBFINDER_MAP_CENTER_LON".to_string(),
            reason: e.to_string(),
        })?;
    let map_zoom: u8 = parse_var(
        "CLUBFINDER_MAP_ZOOM",
        &or_default("CLUBFINDER_MAP_ZOOM", "12"),
    )?;

    let schema_path = lookup("CLUBFINDER_SCHEMA_PATH")
        .ok()
        .map(|path| path.trim().to_string())
        .filter(|path| !path.is_empty());
    let field_keys = match &schema_path {
        Some(path) => load_field_keys(Path::new(path))?,
        None => ClubFieldKeys::default(),
    };

    Ok(AppConfig {
        env,
        log_level,
        api_base_url,
        clubs_path,
        geocoder_url,
        locality,
        request_timeout_secs,
        user_agent,
        map_center,
        map_zoom,
        field_keys,
        schema_path,
    })
}

fn parse_var<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Accepts only absolute `http`/`https` URLs; a trailing slash is dropped.
fn parse_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("'{trimmed}' is not an http(s) URL"),
        });
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CLUBFINDER_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
