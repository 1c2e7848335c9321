//! Marker locations plotted on the map.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A point of interest shown as a marker with a popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerLocation {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MarkerLocation {
    pub fn new(id: &str, lat: f64, lng: f64, title: &str, description: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            lat,
            lng,
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }

    /// Whether the coordinates lie in the usual WGS84 ranges.
    ///
    /// Nothing rejects invalid locations; this only feeds diagnostics.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
            && !self.title.trim().is_empty()
    }

    /// Coordinates in the `[lng, lat]` order used by the map provider.
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

static DEFAULT_LOCATIONS: Lazy<Arc<[MarkerLocation]>> = Lazy::new(|| {
    Arc::from(vec![
        MarkerLocation::new(
            "budapest",
            47.497913,
            19.040236,
            "Budapest",
            Some("Danube bridges and Gellért Hill cliffs"),
        ),
        MarkerLocation::new(
            "vienna",
            48.208176,
            16.373819,
            "Vienna",
            Some("Old Danube water jumps"),
        ),
        MarkerLocation::new(
            "prague",
            50.075538,
            14.4378,
            "Prague",
            Some("Vltava bridges and rooftops"),
        ),
    ])
});

/// The built-in location list.
pub fn default_locations() -> Arc<[MarkerLocation]> {
    Arc::clone(&DEFAULT_LOCATIONS)
}

/// Logs every location with out-of-range coordinates or an empty title.
///
/// Returns the number of invalid entries.
pub fn report_invalid(locations: &[MarkerLocation]) -> usize {
    let mut invalid = 0;
    for location in locations.iter().filter(|l| !l.is_valid()) {
        tracing::warn!(
            id = %location.id,
            lat = location.lat,
            lng = location.lng,
            "location has out-of-range coordinates or an empty title"
        );
        invalid += 1;
    }
    invalid
}
