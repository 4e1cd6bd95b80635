//! Property tests for outbreak-geo distance and interval math.

use proptest::prelude::*;

use outbreak_core::models::GeoPoint;
use outbreak_geo::{genetic_distance, haversine_km, poisson_interval};

fn point() -> impl Strategy<Value = GeoPoint> {
    (-90.0_f64..90.0, -180.0_f64..180.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
}

// =============================================================================
// Haversine is a metric on the sphere
// =============================================================================
proptest! {
    #[test]
    fn haversine_is_symmetric_and_bounded(a in point(), b in point()) {
        let ab = haversine_km(a, b);
        let ba = haversine_km(b, a);
        prop_assert!((ab - ba).abs() < 1e-6);
        prop_assert!(ab >= 0.0);
        // Half the circumference is the largest possible distance.
        prop_assert!(ab <= std::f64::consts::PI * 6371.0 + 1e-6);
    }

    #[test]
    fn haversine_satisfies_triangle_inequality(a in point(), b in point(), c in point()) {
        prop_assert!(haversine_km(a, c) <= haversine_km(a, b) + haversine_km(b, c) + 1e-3);
    }
}

// =============================================================================
// Genetic distance stays a fraction
// =============================================================================
proptest! {
    #[test]
    fn genetic_distance_in_unit_interval(a in "[ACGT]{0,40}", b in "[ACGT]{0,40}") {
        let d = genetic_distance(&a, &b);
        prop_assert!((0.0..=1.0).contains(&d));
        prop_assert_eq!(d, genetic_distance(&b, &a));
    }
}

// =============================================================================
// Poisson intervals are ordered and non-negative
// =============================================================================
proptest! {
    #[test]
    fn poisson_interval_is_ordered(expected in 0.0_f64..500.0) {
        let ci = poisson_interval(expected);
        prop_assert!(ci.lower >= 0.0);
        prop_assert!(ci.lower <= ci.upper);
        if expected > 0.0 {
            prop_assert!(ci.upper >= expected.floor());
        }
    }
}
