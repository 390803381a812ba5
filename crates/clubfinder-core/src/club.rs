//! Club records: the loosely-typed backend shape and its validated form.
//!
//! [`RawClub::from_value`] maps backend keys to canonical fields;
//! [`normalize_club`] turns that into a [`Club`] only when latitude,
//! longitude and rating are all usable. Records that fail are dropped by
//! [`normalize_clubs`], never repaired.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::geo::Coordinate;
use crate::schema::ClubFieldKeys;

/// Reasons a raw record is excluded from the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("latitude is missing or not a number")]
    InvalidLatitude,
    #[error("longitude is missing or not a number")]
    InvalidLongitude,
    #[error("rating is missing or not a number")]
    InvalidRating,
    #[error("coordinate is out of range")]
    CoordinateOutOfRange,
}

/// Canonical view of a backend record before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawClub {
    pub name: Option<String>,
    pub address: Option<String>,
    pub opening_hours: Option<String>,
    pub rating: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl RawClub {
    /// Reads the fields named by `keys` out of a backend record.
    ///
    /// Returns `None` when the value is not a JSON object.
    #[must_use]
    pub fn from_value(value: &Value, keys: &ClubFieldKeys) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            name: obj.get(&keys.name).and_then(text_field),
            address: obj.get(&keys.address).and_then(text_field),
            opening_hours: obj.get(&keys.opening_hours).and_then(text_field),
            rating: obj.get(&keys.rating).and_then(parse_number),
            latitude: obj.get(&keys.latitude).and_then(parse_number),
            longitude: obj.get(&keys.longitude).and_then(parse_number),
        })
    }
}

/// A club with a validated location and numeric rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Club {
    pub name: Option<String>,
    pub address: Option<String>,
    pub opening_hours: Option<String>,
    pub rating: f64,
    pub location: Coordinate,
    /// The backend record as received.
    #[serde(skip)]
    pub raw: Value,
}

impl Club {
    /// Display name, falling back to a placeholder for unnamed records.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed club)")
    }
}

/// Validates one backend record.
///
/// # Errors
///
/// Returns the first [`RecordError`] found. Latitude is checked before
/// longitude, longitude before rating.
pub fn normalize_club(value: &Value, keys: &ClubFieldKeys) -> Result<Club, RecordError> {
    let raw = RawClub::from_value(value, keys).ok_or(RecordError::NotAnObject)?;

    let lat = raw.latitude.ok_or(RecordError::InvalidLatitude)?;
    let lon = raw.longitude.ok_or(RecordError::InvalidLongitude)?;
    let rating = raw.rating.ok_or(RecordError::InvalidRating)?;
    let location = Coordinate::new(lat, lon).map_err(|_| RecordError::CoordinateOutOfRange)?;

    Ok(Club {
        name: raw.name,
        address: raw.address,
        opening_hours: raw.opening_hours,
        rating,
        location,
        raw: value.clone(),
    })
}

/// Validates every record, dropping the ones that fail. Input order is kept.
#[must_use]
pub fn normalize_clubs(values: &[Value], keys: &ClubFieldKeys) -> Vec<Club> {
    let clubs: Vec<Club> = values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| match normalize_club(value, keys) {
            Ok(club) => {
                tracing::debug!(
                    index,
                    name = club.display_name(),
                    lat = club.location.lat,
                    lon = club.location.lon,
                    rating = club.rating,
                    "normalized club"
                );
                Some(club)
            }
            Err(reason) => {
                tracing::debug!(index, %reason, record = %value, "dropping club record");
                None
            }
        })
        .collect();

    let dropped = values.len() - clubs.len();
    if dropped > 0 {
        tracing::warn!(
            dropped,
            kept = clubs.len(),
            "club records without usable coordinates or rating were skipped"
        );
    }
    clubs
}

/// Reads a JSON number or numeric string as a finite `f64`.
///
/// Strings are trimmed and a lone decimal comma is accepted (`"4,5"`). When
/// the whole string is not numeric, the longest numeric prefix is used, so
/// `"4.5 stars"` reads as `4.5`. Returns `None` for anything else, including
/// NaN and infinities.
#[must_use]
pub fn parse_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => parse_numeric_str(s)?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn parse_numeric_str(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    let candidate = normalize_decimal_comma(trimmed);
    let candidate = candidate.as_ref();

    if let Ok(n) = candidate.parse::<f64>() {
        return Some(n);
    }

    let prefix = &candidate[..numeric_prefix_len(candidate)];
    prefix.parse::<f64>().ok()
}

/// Reads a lone comma as the decimal separator (`"4,5"` → `"4.5"`).
pub(crate) fn normalize_decimal_comma(s: &str) -> Cow<'_, str> {
    if !s.contains('.') && s.matches(',').count() == 1 {
        Cow::Owned(s.replace(',', "."))
    } else {
        Cow::Borrowed(s)
    }
}

/// Byte length of the longest `[+-]?digits[.digits][(e|E)[+-]?digits]` prefix.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

fn text_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "club_test.rs"]
mod tests;
