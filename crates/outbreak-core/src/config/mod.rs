//! Configuration for every subsystem, loadable from TOML.
//! Missing sections and fields fall back to [`defaults`].

pub mod defaults;
mod forecast_config;
mod model_config;
mod observability_config;
mod transmission_config;

pub use forecast_config::ForecastConfig;
pub use model_config::{DistanceModelConfig, GaussianModelConfig, NetworkModelConfig, NetworkType};
pub use observability_config::ObservabilityConfig;
pub use transmission_config::TransmissionConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutbreakConfig {
    pub transmission: TransmissionConfig,
    pub forecast: ForecastConfig,
    pub distance_model: DistanceModelConfig,
    pub network_model: NetworkModelConfig,
    pub gaussian_model: GaussianModelConfig,
    pub observability: ObservabilityConfig,
}

impl OutbreakConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the algorithms meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("transmission.genetic_threshold", self.transmission.genetic_threshold)?;
        positive(
            "transmission.temporal_window_days",
            self.transmission.temporal_window_days as f64,
        )?;
        positive(
            "transmission.spatial_threshold_km",
            self.transmission.spatial_threshold_km,
        )?;
        positive(
            "forecast.evaluation_window_days",
            f64::from(self.forecast.evaluation_window_days),
        )?;
        positive(
            "distance_model.transmission_threshold_km",
            self.distance_model.transmission_threshold_km,
        )?;
        positive(
            "gaussian_model.spatial_length_scale_km",
            self.gaussian_model.spatial_length_scale_km,
        )?;
        positive(
            "gaussian_model.temporal_length_scale_days",
            self.gaussian_model.temporal_length_scale_days,
        )?;
        positive(
            "gaussian_model.daily_case_ceiling",
            self.gaussian_model.daily_case_ceiling,
        )?;
        if !(0.0..=1.0).contains(&self.network_model.attack_rate) {
            return Err(ConfigError::InvalidValue {
                field: "network_model.attack_rate".to_string(),
                reason: format!("{} is outside [0, 1]", self.network_model.attack_rate),
            });
        }
        Ok(())
    }
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("{value} must be a positive number"),
        })
    }
}
