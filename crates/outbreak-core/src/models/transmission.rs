use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A plausible case-to-case transmission event.
///
/// `source` was always detected strictly before `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmissionLink {
    pub source: String,
    pub target: String,
    /// Likelihood score in [0, 1].
    pub likelihood: f64,
    pub days_apart: i64,
    pub distance_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genetic_distance: Option<f64>,
}

/// Thresholds an inference call ran with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InferenceThresholds {
    pub genetic_threshold: f64,
    pub temporal_window_days: i64,
    pub spatial_threshold_km: f64,
}

/// Whole-network structural metrics.
///
/// Centrality extremes and path length describe the largest weakly-connected component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    pub node_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub component_count: usize,
    pub largest_component_size: usize,
    pub max_in_degree_centrality: f64,
    pub max_out_degree_centrality: f64,
    pub max_betweenness_centrality: f64,
    pub min_betweenness_centrality: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_path_length: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterMetrics {
    pub size: usize,
    pub edge_count: usize,
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterCentralNodes {
    pub highest_in_degree: String,
    pub highest_betweenness: String,
}

/// A weakly-connected component with at least two cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmissionCluster {
    pub id: String,
    pub cases: Vec<String>,
    pub metrics: ClusterMetrics,
    pub central_nodes: ClusterCentralNodes,
}

impl TransmissionCluster {
    pub fn size(&self) -> usize {
        self.cases.len()
    }
}

/// A case with no inferred source that seeded at least one other case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexCaseCandidate {
    pub case_id: String,
    /// Direct onward links from the candidate.
    pub outbreak_size: usize,
    pub index_score: f64,
    pub temporal_priority: f64,
    pub detection_date: NaiveDate,
}

/// A case with more than one outgoing link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperspreaderCandidate {
    pub case_id: String,
    pub outgoing_links: usize,
    pub superspreader_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub betweenness: Option<f64>,
}

/// Result of one inference call. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmissionNetwork {
    /// Number of cases the network was built from.
    pub cases: usize,
    /// Case ids in detection order.
    pub nodes: Vec<String>,
    pub links: Vec<TransmissionLink>,
    pub network_metrics: NetworkMetrics,
    pub clusters: Vec<TransmissionCluster>,
    pub index_cases: Vec<IndexCaseCandidate>,
    pub superspreaders: Vec<SuperspreaderCandidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_temporal_distance_days: Option<i64>,
    pub thresholds: InferenceThresholds,
}

impl TransmissionNetwork {
    pub fn link(&self, source: &str, target: &str) -> Option<&TransmissionLink> {
        self.links
            .iter()
            .find(|l| l.source == source && l.target == target)
    }

    pub fn has_link(&self, source: &str, target: &str) -> bool {
        self.link(source, target).is_some()
    }

    /// Forward links per case.
    pub fn links_per_case(&self) -> f64 {
        if self.cases == 0 {
            0.0
        } else {
            self.links.len() as f64 / self.cases as f64
        }
    }
}
