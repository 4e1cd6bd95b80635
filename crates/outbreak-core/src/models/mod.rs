mod case;
mod connectivity;
mod evaluation;
mod forecast;
mod geo_point;
mod pattern;
mod region;
mod trajectory;
mod transmission;

pub use case::{Case, VirusSubtype};
pub use connectivity::{ConnectivityTable, TradeVolume};
pub use evaluation::EvaluationRecord;
pub use forecast::{
    ConfidenceInterval, ForecastResult, GridPrediction, RegionRisk, RiskLevel, RiskMap,
    TransmissionPath,
};
pub use geo_point::GeoPoint;
pub use pattern::{
    GeographicFocus, InterventionRecommendations, PatternAssessment, PatternType, PriorityLevel,
    TemporalPattern, TransmissionIntensity,
};
pub use region::Region;
pub use trajectory::{DailyProjection, DynamicsAnalysis, TrajectoryProjection};
pub use transmission::{
    ClusterCentralNodes, ClusterMetrics, IndexCaseCandidate, InferenceThresholds,
    NetworkMetrics, SuperspreaderCandidate, TransmissionCluster, TransmissionLink,
    TransmissionNetwork,
};
