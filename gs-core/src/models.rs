//! Wire types exchanged with the footprint backend.
//!
//! Field names follow the backend's JSON exactly, so every struct
//! round-trips through `serde_json` without renames.

use serde::{Deserialize, Serialize};

/// A `(latitude, longitude)` pair, serialized as a two-element JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lon(&self) -> f64 {
        self.1
    }
}

/// A search hit returned by `GET /search-city`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub coordinates: LatLon,
}

/// A city committed as one endpoint of the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedCity {
    pub name: String,
    pub coords: LatLon,
}

impl From<&City> for SelectedCity {
    fn from(city: &City) -> Self {
        Self {
            name: city.name.clone(),
            coords: city.coordinates,
        }
    }
}

/// Body of `POST /calculate-footprint`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start_coords: LatLon,
    pub end_coords: LatLon,
    pub origin_city: String,
    pub destination_city: String,
}

impl RouteRequest {
    pub fn between(origin: &SelectedCity, destination: &SelectedCity) -> Self {
        Self {
            start_coords: origin.coords,
            end_coords: destination.coords,
            origin_city: origin.name.clone(),
            destination_city: destination.name.clone(),
        }
    }
}

/// Footprint of one transport modal for the requested route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintAnalysisEntry {
    pub modal: String,
    pub carbon_footprint_kg: f64,
}

/// Response of `POST /calculate-footprint`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub distance_km: f64,
    /// Precision-5 encoded polyline, see [`crate::polyline`].
    pub route_geometry: String,
    pub footprint_analysis: Vec<FootprintAnalysisEntry>,
}

/// One persisted `(route, modal)` row from `GET /calculations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: i64,
    pub origin_city: String,
    pub destination_city: String,
    pub distance_km: f64,
    pub modal: String,
    pub carbon_footprint_kg: f64,
    /// ISO-8601 timestamp as emitted by the backend (may lack an offset).
    pub created_at: String,
}
