use std::fmt;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Distance-decay model hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceModelConfig {
    /// Power-law exponent applied to distance.
    pub distance_decay: f64,
    /// Maximum case-to-centroid distance considered (km).
    pub transmission_threshold_km: f64,
    /// Cases detected within this many days are active.
    pub time_window_days: i64,
    /// Density factor for regions that do not supply one.
    pub default_density_factor: f64,
}

impl Default for DistanceModelConfig {
    fn default() -> Self {
        Self {
            distance_decay: defaults::DEFAULT_DISTANCE_DECAY,
            transmission_threshold_km: defaults::DEFAULT_TRANSMISSION_THRESHOLD_KM,
            time_window_days: defaults::DEFAULT_ACTIVE_WINDOW_DAYS,
            default_density_factor: defaults::DEFAULT_DENSITY_FACTOR,
        }
    }
}

/// Kind of region-to-region network a network model propagates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkType {
    /// Bird migration routes; scaled by a seasonal factor.
    Migration,
    /// Poultry trade; scaled by current trade volume.
    Trade,
    /// Transport links; unscaled.
    Transport,
}

impl NetworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Migration => "migration",
            Self::Trade => "trade",
            Self::Transport => "transport",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network-propagation model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkModelConfig {
    pub network_type: NetworkType,
    /// Fraction of susceptible units that become cases.
    pub attack_rate: f64,
    /// Fraction of a region's farms that are susceptible.
    pub susceptible_fraction: f64,
    /// Farm count for regions that do not supply one.
    pub default_farm_count: u32,
    /// Edge probability used for connections never observed in training.
    pub unobserved_edge_probability: f64,
    /// Per-edge risk above which a path is reported.
    pub notable_path_threshold: f64,
}

impl Default for NetworkModelConfig {
    fn default() -> Self {
        Self {
            network_type: NetworkType::Migration,
            attack_rate: defaults::DEFAULT_ATTACK_RATE,
            susceptible_fraction: defaults::DEFAULT_SUSCEPTIBLE_FRACTION,
            default_farm_count: defaults::DEFAULT_FARM_COUNT,
            unobserved_edge_probability: defaults::DEFAULT_UNOBSERVED_EDGE_PROBABILITY,
            notable_path_threshold: defaults::DEFAULT_NOTABLE_PATH_THRESHOLD,
        }
    }
}

/// Gaussian-process spatiotemporal model hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussianModelConfig {
    /// Spatial correlation length (km).
    pub spatial_length_scale_km: f64,
    /// Temporal correlation length (days).
    pub temporal_length_scale_days: f64,
    /// Observation noise added to the kernel diagonal.
    pub nugget: f64,
    /// Per-day case count treated as maximal risk.
    pub daily_case_ceiling: f64,
}

impl Default for GaussianModelConfig {
    fn default() -> Self {
        Self {
            spatial_length_scale_km: defaults::DEFAULT_SPATIAL_LENGTH_SCALE_KM,
            temporal_length_scale_days: defaults::DEFAULT_TEMPORAL_LENGTH_SCALE_DAYS,
            nugget: defaults::DEFAULT_NUGGET,
            daily_case_ceiling: defaults::DEFAULT_DAILY_CASE_CEILING,
        }
    }
}
