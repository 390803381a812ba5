//! Presentation models for the map and list views.
//!
//! These are plain serializable structs; drawing tiles or styling markers is
//! left to whatever consumes the JSON.

use serde::Serialize;

use crate::filter::ClubMatch;
use crate::geo::Coordinate;
use crate::session::SearchState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    User,
    Club,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub position: Coordinate,
    /// Popup text, one entry per line.
    pub popup: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

impl MapView {
    /// Builds the map for `state`: the user marker first (when a location is
    /// known), then one marker per result in result order.
    #[must_use]
    pub fn from_state(state: &SearchState, center: Coordinate, zoom: u8) -> Self {
        let user = state.user_location.map(|position| MapMarker {
            kind: MarkerKind::User,
            position,
            popup: vec!["Your location".to_string()],
        });
        let clubs = state.results.iter().map(|m| MapMarker {
            kind: MarkerKind::Club,
            position: m.club.location,
            popup: popup_lines(m),
        });

        Self {
            center,
            zoom,
            markers: user.into_iter().chain(clubs).collect(),
        }
    }
}

fn popup_lines(m: &ClubMatch) -> Vec<String> {
    vec![
        m.club.display_name().to_string(),
        m.club.address.clone().unwrap_or_default(),
        format!("Rating: {}", m.club.rating),
        format!(
            "Opening hours: {}",
            m.club.opening_hours.as_deref().unwrap_or("-")
        ),
    ]
}

/// One row of the list view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub name: String,
    pub address: Option<String>,
    pub rating: f64,
    pub opening_hours: Option<String>,
    pub distance_km: f64,
}

impl From<&ClubMatch> for ListEntry {
    fn from(m: &ClubMatch) -> Self {
        Self {
            name: m.club.display_name().to_string(),
            address: m.club.address.clone(),
            rating: m.club.rating,
            opening_hours: m.club.opening_hours.clone(),
            distance_km: m.distance_km,
        }
    }
}

impl std::fmt::Display for ListEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  Address: {}", self.address.as_deref().unwrap_or("-"))?;
        writeln!(f, "  Rating: {}", self.rating)?;
        writeln!(
            f,
            "  Opening hours: {}",
            self.opening_hours.as_deref().unwrap_or("-")
        )?;
        write!(f, "  Distance: {:.2} km", self.distance_km)
    }
}
