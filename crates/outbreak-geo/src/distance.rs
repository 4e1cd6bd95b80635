//! Distances between cases.

use outbreak_core::constants::EARTH_RADIUS_KM;
use outbreak_core::models::{Case, GeoPoint};

/// Great-circle distance in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h marginally outside [0, 1] for antipodal points.
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();
    EARTH_RADIUS_KM * c
}

pub fn case_distance_km(a: &Case, b: &Case) -> f64 {
    haversine_km(a.location(), b.location())
}

/// Fraction of mismatched sites over the shorter sequence.
///
/// Comparison is case-insensitive. Returns 1.0 when either sequence is empty.
pub fn genetic_distance(a: &str, b: &str) -> f64 {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let len = a.len().min(b.len());
    if len == 0 {
        return 1.0;
    }
    let mismatches = a
        .iter()
        .zip(b.iter())
        .filter(|(x, y)| !x.eq_ignore_ascii_case(y))
        .count();
    mismatches as f64 / len as f64
}
