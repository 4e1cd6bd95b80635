use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds for transmission network inference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransmissionConfig {
    /// Maximum genetic distance between linked cases.
    pub genetic_threshold: f64,
    /// Maximum days between linked cases.
    pub temporal_window_days: i64,
    /// Maximum great-circle distance between linked cases (km).
    pub spatial_threshold_km: f64,
    /// Default trajectory horizon (days).
    pub trajectory_days_ahead: u32,
}

impl Default for TransmissionConfig {
    fn default() -> Self {
        Self {
            genetic_threshold: defaults::DEFAULT_GENETIC_THRESHOLD,
            temporal_window_days: defaults::DEFAULT_TEMPORAL_WINDOW_DAYS,
            spatial_threshold_km: defaults::DEFAULT_SPATIAL_THRESHOLD_KM,
            trajectory_days_ahead: defaults::DEFAULT_TRAJECTORY_DAYS_AHEAD,
        }
    }
}
