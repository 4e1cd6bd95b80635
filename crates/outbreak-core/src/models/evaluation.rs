use serde::{Deserialize, Serialize};

/// Backtest accuracy for one model, averaged over all windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub rmse: f64,
    pub mae: f64,
    pub bias: f64,
    /// Fraction of actual counts inside the predicted interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calibration: Option<f64>,
    /// Mean predicted interval width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<f64>,
    pub windows: usize,
}
