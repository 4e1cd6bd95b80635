use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PatternAssessment, TransmissionNetwork};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProjection {
    /// Days after `as_of`, starting at 1.
    pub day: u32,
    pub date: NaiveDate,
    pub projected_new_cases: f64,
    pub cumulative_projected_cases: f64,
    pub uncertainty: f64,
}

/// Short-term case projection derived from an inferred network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryProjection {
    pub reproduction_number: f64,
    pub growth_rate: f64,
    pub average_transmission_interval_days: f64,
    pub days_ahead: u32,
    pub as_of: NaiveDate,
    pub total_projected_new_cases: f64,
    pub daily_projections: Vec<DailyProjection>,
    pub confidence_level: String,
}

/// Network, pattern and trajectory produced in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicsAnalysis {
    pub transmission_network: TransmissionNetwork,
    pub pattern_assessment: PatternAssessment,
    pub trajectory: TrajectoryProjection,
}
