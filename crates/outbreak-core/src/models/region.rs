use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// An administrative or surveillance region. Read-only input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centroid: Option<GeoPoint>,
    /// Boundary ring; closing vertex optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Vec<GeoPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farm_count: Option<u32>,
}

impl Region {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            centroid: None,
            boundary: None,
            density_factor: None,
            farm_count: None,
        }
    }

    pub fn with_centroid(mut self, latitude: f64, longitude: f64) -> Self {
        self.centroid = Some(GeoPoint::new(latitude, longitude));
        self
    }

    pub fn with_boundary(mut self, boundary: Vec<GeoPoint>) -> Self {
        self.boundary = Some(boundary);
        self
    }

    pub fn with_density_factor(mut self, factor: f64) -> Self {
        self.density_factor = Some(factor);
        self
    }

    pub fn with_farm_count(mut self, farms: u32) -> Self {
        self.farm_count = Some(farms);
        self
    }

    /// Density factor, falling back to `default` when the region has none.
    pub fn density_or(&self, default: f64) -> f64 {
        self.density_factor.unwrap_or(default)
    }

    pub fn farm_count_or(&self, default: u32) -> u32 {
        self.farm_count.unwrap_or(default)
    }
}
