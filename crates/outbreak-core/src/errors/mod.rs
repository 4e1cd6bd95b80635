//! Error handling for outbreak analytics.
//! One error enum per subsystem, `thiserror` only.

mod config_error;
mod forecast_error;
mod transmission_error;

pub use config_error::ConfigError;
pub use forecast_error::ForecastError;
pub use transmission_error::TransmissionError;

/// Top-level error aggregating every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum OutbreakError {
    #[error("transmission error: {0}")]
    Transmission(#[from] TransmissionError),

    #[error("forecast error: {0}")]
    Forecast(#[from] ForecastError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl OutbreakError {
    /// Whether the caller should treat this as "no result" rather than a failure.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self,
            Self::Transmission(TransmissionError::InsufficientData { .. })
                | Self::Forecast(ForecastError::InsufficientData { .. })
        )
    }
}

/// Convenience alias used across the workspace.
pub type OutbreakResult<T> = Result<T, OutbreakError>;
