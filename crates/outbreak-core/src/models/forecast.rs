use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// A non-negative interval, serialized as `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Builds an interval with `0 <= lower <= upper`.
    pub fn new(lower: f64, upper: f64) -> Self {
        let lower = if lower.is_finite() { lower.max(0.0) } else { 0.0 };
        let upper = if upper.is_finite() { upper.max(lower) } else { lower };
        Self { lower, upper }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl From<(f64, f64)> for ConfidenceInterval {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::new(lower, upper)
    }
}

impl From<ConfidenceInterval> for (f64, f64) {
    fn from(ci: ConfidenceInterval) -> Self {
        (ci.lower, ci.upper)
    }
}

/// A notable region-to-region spread path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmissionPath {
    pub source: String,
    pub target: String,
    pub risk: f64,
}

/// Prediction at an arbitrary point of a caller-supplied grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridPrediction {
    pub location: GeoPoint,
    pub predicted_cases: f64,
    pub std_dev: f64,
}

/// Per-region forecast from one model or from the ensemble.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub risk_by_region: BTreeMap<String, f64>,
    pub predicted_case_count: BTreeMap<String, f64>,
    pub confidence_intervals: BTreeMap<String, ConfidenceInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_weights: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_predictions: Option<BTreeMap<String, ForecastResult>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transmission_paths: Vec<TransmissionPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_grid: Option<Vec<GridPrediction>>,
}

impl ForecastResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one region. Risk is clamped to [0, 1] and the count to >= 0.
    pub fn insert(
        &mut self,
        region_id: impl Into<String>,
        risk: f64,
        expected_cases: f64,
        interval: ConfidenceInterval,
    ) {
        let region_id = region_id.into();
        self.risk_by_region
            .insert(region_id.clone(), clamp_unit(risk));
        self.predicted_case_count
            .insert(region_id.clone(), non_negative(expected_cases));
        self.confidence_intervals.insert(region_id, interval);
    }

    pub fn region_count(&self) -> usize {
        self.risk_by_region.len()
    }

    pub fn risk(&self, region_id: &str) -> Option<f64> {
        self.risk_by_region.get(region_id).copied()
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

/// Risk bucket used by risk maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    ModerateLow,
    Moderate,
    ModerateHigh,
    High,
}

impl RiskLevel {
    pub fn from_risk(risk: f64) -> Self {
        if risk < 0.2 {
            Self::Low
        } else if risk < 0.4 {
            Self::ModerateLow
        } else if risk < 0.6 {
            Self::Moderate
        } else if risk < 0.8 {
            Self::ModerateHigh
        } else {
            Self::High
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRisk {
    pub risk: f64,
    pub level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_cases: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_interval: Option<ConfidenceInterval>,
}

/// Risk per region, bucketed for presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskMap {
    pub regions: BTreeMap<String, RegionRisk>,
}
