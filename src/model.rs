//! Data models for Outbreaks Near Me API responses.
//!
//! Marker endpoints return GeoJSON-style feature collections. Each feature's
//! `properties` payload is passed through to callers untouched, since its keys
//! differ between the user-report and CDC endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::geo::Coordinate;

/// Opaque per-marker data (symptom counts, region identifiers, display colors).
///
/// Keys keep the order the API sent them in.
pub type Properties = Map<String, Value>;

/// Merged aggregate counters from the statistics endpoints.
pub type Totals = Map<String, Value>;

/// A collection of markers as returned by `markers/US` and `nonuserstats/US`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A single geotagged marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,

    #[serde(default)]
    pub properties: Properties,
}

/// Marker location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Geometry {
    /// Position as `[longitude, latitude]`. Longitude comes first.
    ///
    /// Kept as raw JSON so one malformed marker does not reject the collection.
    #[serde(default)]
    pub coordinates: Value,
}

impl Feature {
    /// The marker's position, or `None` unless the geometry starts with two numbers.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let coordinates = self.geometry.as_ref()?.coordinates.as_array()?;
        match coordinates.as_slice() {
            [longitude, latitude, ..] => {
                Some(Coordinate::new(latitude.as_f64()?, longitude.as_f64()?))
            }
            _ => None,
        }
    }
}

/// The outcome of a nearest-marker scan.
#[derive(Debug, Clone, Copy)]
pub struct Nearest<'a> {
    pub feature: &'a Feature,
    /// Distance from the query point in kilometres.
    pub distance_km: f64,
}

impl FeatureCollection {
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Find the feature closest to `origin` by full linear scan.
    ///
    /// Features without a usable position are skipped. On equal distances the
    /// earlier feature wins. Returns `None` when nothing is left to rank.
    pub fn nearest(&self, origin: Coordinate) -> Option<Nearest<'_>> {
        self.nearest_index(origin).map(|(index, distance_km)| Nearest {
            feature: &self.features[index],
            distance_km,
        })
    }

    /// Consume the collection and return the nearest feature's properties.
    pub fn into_nearest_properties(mut self, origin: Coordinate) -> Option<Properties> {
        let (index, _) = self.nearest_index(origin)?;
        Some(self.features.swap_remove(index).properties)
    }

    fn nearest_index(&self, origin: Coordinate) -> Option<(usize, f64)> {
        self.features
            .iter()
            .enumerate()
            .filter_map(|(index, feature)| {
                let Some(position) = feature.coordinate() else {
                    tracing::warn!(
                        index,
                        geometry = ?feature.geometry,
                        "Skipping marker without a usable position"
                    );
                    return None;
                };
                Some((index, origin.distance_to(&position)))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}
