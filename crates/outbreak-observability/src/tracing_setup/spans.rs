//! Span definitions per operation: inference, training, forecast, evaluation.

/// Create a transmission inference span.
#[macro_export]
macro_rules! inference_span {
    ($case_count:expr) => {
        tracing::info_span!("outbreak.inference", case_count = $case_count)
    };
}

/// Create a model training span.
#[macro_export]
macro_rules! training_span {
    ($model_count:expr, $case_count:expr) => {
        tracing::info_span!(
            "outbreak.training",
            model_count = $model_count,
            case_count = $case_count
        )
    };
}

/// Create a forecast generation span.
#[macro_export]
macro_rules! forecast_span {
    ($days_ahead:expr, $use_ensemble:expr) => {
        tracing::info_span!(
            "outbreak.forecast",
            days_ahead = $days_ahead,
            use_ensemble = $use_ensemble
        )
    };
}

/// Create a backtest evaluation span.
#[macro_export]
macro_rules! evaluation_span {
    ($window_days:expr) => {
        tracing::info_span!("outbreak.evaluation", window_days = $window_days)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INFERENCE: &str = "outbreak.inference";
    pub const TRAINING: &str = "outbreak.training";
    pub const FORECAST: &str = "outbreak.forecast";
    pub const EVALUATION: &str = "outbreak.evaluation";
}
