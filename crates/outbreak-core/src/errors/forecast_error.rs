/// Forecast model and ensemble errors.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("insufficient data: {reason}")]
    InsufficientData { reason: String },

    #[error("model {model_id} failed to fit: {reason}")]
    ModelFit { model_id: String, reason: String },

    #[error("model {model_id} must be fitted before prediction")]
    NotFitted { model_id: String },

    #[error("no models available: {reason}")]
    NoModelsAvailable { reason: String },

    #[error("unknown model: {model_id}")]
    UnknownModel { model_id: String },

    #[error("model {model_id} requires a region connectivity table")]
    MissingConnectivity { model_id: String },
}
