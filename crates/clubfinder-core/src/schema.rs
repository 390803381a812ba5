//! Backend field-name mapping for club records.
//!
//! The club backend labels fields with natural-language keys rather than
//! fixed identifiers. [`ClubFieldKeys`] holds those labels so the rest of the
//! pipeline only deals with canonical names. Defaults match the current
//! backend; a YAML file can override any subset of them.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClubFieldKeys {
    pub name: String,
    pub address: String,
    pub opening_hours: String,
    pub rating: String,
    pub latitude: String,
    pub longitude: String,
}

impl Default for ClubFieldKeys {
    fn default() -> Self {
        Self {
            name: "Название".to_string(),
            address: "Адрес".to_string(),
            opening_hours: "Часы работы".to_string(),
            rating: "Рейтинг".to_string(),
            latitude: "Координаты (lat)".to_string(),
            longitude: "Координаты (lon)".to_string(),
        }
    }
}

impl ClubFieldKeys {
    fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("name", self.name.as_str()),
            ("address", self.address.as_str()),
            ("opening_hours", self.opening_hours.as_str()),
            ("rating", self.rating.as_str()),
            ("latitude", self.latitude.as_str()),
            ("longitude", self.longitude.as_str()),
        ]
    }

    /// Checks that every key is non-blank and that no two canonical fields
    /// share a backend key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SchemaValidation`] describing the first problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (field, key) in self.entries() {
            if key.trim().is_empty() {
                return Err(ConfigError::SchemaValidation(format!(
                    "key for '{field}' must not be empty"
                )));
            }
            if !seen.insert(key) {
                return Err(ConfigError::SchemaValidation(format!(
                    "key '{key}' is mapped to more than one field"
                )));
            }
        }
        Ok(())
    }
}

/// Load and validate field keys from a YAML file.
///
/// Fields omitted from the file keep their default labels.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_field_keys(path: &Path) -> Result<ClubFieldKeys, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SchemaFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let keys = parse_field_keys(&content)?;
    tracing::debug!(path = %path.display(), ?keys, "loaded club schema");
    Ok(keys)
}

fn parse_field_keys(content: &str) -> Result<ClubFieldKeys, ConfigError> {
    let keys: ClubFieldKeys = serde_yaml::from_str(content)?;
    keys.validate()?;
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ClubFieldKeys::default().validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let keys = parse_field_keys("rating: score\nname: title\n").unwrap();
        assert_eq!(keys.rating, "score");
        assert_eq!(keys.name, "title");
        assert_eq!(keys.address, "Адрес");
        assert_eq!(keys.latitude, "Координаты (lat)");
    }

    #[test]
    fn blank_key_is_rejected() {
        let err = parse_field_keys("address: '  '\n").unwrap_err();
        assert!(
            matches!(err, ConfigError::SchemaValidation(ref msg) if msg.contains("address")),
            "got {err:?}"
        );
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let err = parse_field_keys("latitude: coord\nlongitude: coord\n").unwrap_err();
        assert!(matches!(err, ConfigError::SchemaValidation(_)), "got {err:?}");
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = parse_field_keys("name: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::SchemaFileParse(_)), "got {err:?}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_field_keys(Path::new("/nonexistent/clubfinder/schema.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::SchemaFileIo { .. }), "got {err:?}");
    }
}
