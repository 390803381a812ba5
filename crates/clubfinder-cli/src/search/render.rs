use std::fmt::Write as _;

use clubfinder_core::{AppConfig, ListEntry, MapView, SearchState};

/// Plain list view: one block per club, in result order.
pub(crate) fn render_list(state: &SearchState) -> String {
    let mut out = String::new();
    if let Some(location) = state.user_location {
        let _ = writeln!(out, "Your location: {location}");
    }
    if state.results.is_empty() {
        out.push_str("No clubs found.\n");
        return out;
    }
    let _ = writeln!(out, "Clubs ({}):", state.results.len());
    for m in &state.results {
        let _ = writeln!(out, "{}", ListEntry::from(m));
    }
    out
}

/// JSON document with the map view, the list view and the current notice.
pub(crate) fn render_json(state: &SearchState, config: &AppConfig) -> serde_json::Result<String> {
    let map = MapView::from_state(state, config.map_center, config.map_zoom);
    let clubs: Vec<ListEntry> = state.results.iter().map(ListEntry::from).collect();
    serde_json::to_string_pretty(&serde_json::json!({
        "map": map,
        "clubs": clubs,
        "notice": state.notice,
    }))
}
