use serde::{Deserialize, Serialize};

use super::defaults;

/// Forecast manager configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Default forecast horizon (days).
    pub days_ahead: u32,
    /// Combine model outputs into an ensemble when more than one succeeds.
    pub use_ensemble: bool,
    /// Backtest window length (days).
    pub evaluation_window_days: u32,
    /// How far back before a backtest window cases count as active (days).
    pub active_lookback_days: i64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            days_ahead: defaults::DEFAULT_FORECAST_DAYS_AHEAD,
            use_ensemble: defaults::DEFAULT_USE_ENSEMBLE,
            evaluation_window_days: defaults::DEFAULT_EVALUATION_WINDOW_DAYS,
            active_lookback_days: defaults::DEFAULT_ACTIVE_LOOKBACK_DAYS,
        }
    }
}
