/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Mean Earth radius used by the haversine formula (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate length of one degree of latitude (km).
pub const KM_PER_DEGREE: f64 = 111.32;

/// Minimum number of cases required to infer a transmission network.
pub const MIN_NETWORK_CASES: usize = 2;

/// Window used to compare recent against prior case counts (days).
pub const GROWTH_WINDOW_DAYS: i64 = 14;

/// Transmission interval assumed when a network has no links (days).
pub const DEFAULT_TRANSMISSION_INTERVAL_DAYS: f64 = 7.0;
