//! Region geometry.

use outbreak_core::models::{GeoPoint, Region};

/// Mean of the boundary vertices, ignoring a repeated closing vertex.
pub fn polygon_centroid(boundary: &[GeoPoint]) -> Option<GeoPoint> {
    let ring = match boundary {
        [first, .., last] if first == last => &boundary[..boundary.len() - 1],
        _ => boundary,
    };
    if ring.is_empty() {
        return None;
    }
    let n = ring.len() as f64;
    let (lat, lon) = ring
        .iter()
        .fold((0.0, 0.0), |(lat, lon), p| (lat + p.latitude, lon + p.longitude));
    Some(GeoPoint::new(lat / n, lon / n))
}

/// Explicit centroid, else the boundary's vertex centroid.
///
/// `None` means the region has no usable geometry and should be skipped.
pub fn resolve_centroid(region: &Region) -> Option<GeoPoint> {
    region
        .centroid
        .or_else(|| region.boundary.as_deref().and_then(polygon_centroid))
}
