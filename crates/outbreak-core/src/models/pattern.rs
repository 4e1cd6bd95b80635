use std::fmt;

use serde::{Deserialize, Serialize};

/// Overall shape of an outbreak's transmission network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    CommonSource,
    MultipleIntroductions,
    SustainedTransmission,
    Sporadic,
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CommonSource => "common_source",
            Self::MultipleIntroductions => "multiple_introductions",
            Self::SustainedTransmission => "sustained_transmission",
            Self::Sporadic => "sporadic",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeographicFocus {
    Local,
    Regional,
    Widespread,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalPattern {
    Rapid,
    Moderate,
    Extended,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransmissionIntensity {
    Low,
    Moderate,
    High,
}

/// Response priority, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriorityLevel {
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "very high")]
    VeryHigh,
}

impl PriorityLevel {
    /// One level more urgent, saturating at `VeryHigh`.
    pub fn escalate(self) -> Self {
        match self {
            Self::Standard => Self::High,
            Self::High | Self::VeryHigh => Self::VeryHigh,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionRecommendations {
    pub surveillance: Vec<String>,
    pub control: Vec<String>,
    pub priority_level: PriorityLevel,
}

/// Classification of an inferred network with recommended actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAssessment {
    pub pattern_type: PatternType,
    pub geographic_focus: GeographicFocus,
    pub temporal_pattern: TemporalPattern,
    pub transmission_intensity: TransmissionIntensity,
    pub superspreading_evidence: bool,
    pub cluster_count: usize,
    pub average_links_per_case: f64,
    pub intervention_recommendations: InterventionRecommendations,
}
