//! Threshold filtering of normalized clubs around a user location.

use serde::Serialize;
use serde_json::Value;

use crate::club::{normalize_clubs, normalize_decimal_comma, Club};
use crate::geo::{haversine_km, Coordinate};
use crate::schema::ClubFieldKeys;
use crate::CoreError;

/// Optional lower bound on rating and upper bound on distance.
///
/// Both bounds are inclusive; `None` means no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    pub min_rating: Option<f64>,
    pub max_distance_km: Option<f64>,
}

impl FilterCriteria {
    /// Parses criteria from free-form input text. Blank input leaves the
    /// corresponding bound unset.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCriterion`] when a non-blank value is not
    /// a finite number.
    pub fn parse(min_rating: &str, max_distance_km: &str) -> Result<Self, CoreError> {
        Ok(Self {
            min_rating: parse_bound("minimum rating", min_rating)?,
            max_distance_km: parse_bound("maximum distance", max_distance_km)?,
        })
    }

    /// Returns `true` when a club with `rating` at `distance_km` passes both bounds.
    #[must_use]
    pub fn accepts(&self, rating: f64, distance_km: f64) -> bool {
        self.rating_ok(rating) && self.distance_ok(distance_km)
    }

    fn rating_ok(&self, rating: f64) -> bool {
        self.min_rating.is_none_or(|min| rating >= min)
    }

    fn distance_ok(&self, distance_km: f64) -> bool {
        self.max_distance_km.is_none_or(|max| distance_km <= max)
    }
}

fn parse_bound(field: &'static str, raw: &str) -> Result<Option<f64>, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match normalize_decimal_comma(trimmed).parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(CoreError::InvalidCriterion {
            field,
            value: raw.to_string(),
        }),
    }
}

/// A club that passed the filter, with its distance from the origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubMatch {
    #[serde(flatten)]
    pub club: Club,
    pub distance_km: f64,
}

/// Keeps the clubs that satisfy `criteria` relative to `origin`, in input order.
#[must_use]
pub fn filter_clubs(origin: Coordinate, clubs: Vec<Club>, criteria: &FilterCriteria) -> Vec<ClubMatch> {
    clubs
        .into_iter()
        .filter_map(|club| {
            let distance_km = haversine_km(origin, club.location);
            let accepted = criteria.accepts(club.rating, distance_km);
            tracing::debug!(
                name = club.display_name(),
                distance_km,
                rating = club.rating,
                accepted,
                "evaluated club"
            );
            accepted.then_some(ClubMatch { club, distance_km })
        })
        .collect()
}

/// Normalizes raw backend records and filters them in one pass.
#[must_use]
pub fn run_pipeline(
    origin: Coordinate,
    raw: &[Value],
    keys: &ClubFieldKeys,
    criteria: &FilterCriteria,
) -> Vec<ClubMatch> {
    let clubs = normalize_clubs(raw, keys);
    let normalized = clubs.len();
    let matches = filter_clubs(origin, clubs, criteria);
    tracing::info!(
        received = raw.len(),
        normalized,
        matched = matches.len(),
        "club pipeline finished"
    );
    matches
}
