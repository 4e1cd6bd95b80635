//! TransmissionEngine: validates input, infers links, builds the graph, and
//! derives metrics, clusters and rankings.

use std::collections::HashSet;

use chrono::NaiveDate;
use outbreak_core::config::TransmissionConfig;
use outbreak_core::constants::MIN_NETWORK_CASES;
use outbreak_core::errors::{OutbreakResult, TransmissionError};
use outbreak_core::models::{
    Case, DynamicsAnalysis, InferenceThresholds, PatternAssessment, TrajectoryProjection,
    TransmissionNetwork,
};
use outbreak_observability::events;
use tracing::debug;

use crate::graph::{centrality, components, dag_enforcement, TransmissionGraph};
use crate::inference::LinkInference;
use crate::{clusters, metrics, pattern, ranking, trajectory};

/// The transmission network inference engine. Holds only its thresholds.
#[derive(Debug, Clone, Default)]
pub struct TransmissionEngine {
    config: TransmissionConfig,
}

impl TransmissionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TransmissionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransmissionConfig {
        &self.config
    }

    pub fn thresholds(&self) -> InferenceThresholds {
        InferenceThresholds {
            genetic_threshold: self.config.genetic_threshold,
            temporal_window_days: self.config.temporal_window_days,
            spatial_threshold_km: self.config.spatial_threshold_km,
        }
    }

    /// Infer a network with the configured thresholds.
    pub fn infer_network(&self, cases: &[Case]) -> OutbreakResult<TransmissionNetwork> {
        infer_network_with(cases, self.thresholds())
    }

    pub fn assess_pattern(&self, network: &TransmissionNetwork) -> PatternAssessment {
        pattern::assess_pattern(network)
    }

    pub fn predict_trajectory(
        &self,
        network: &TransmissionNetwork,
        cases: &[Case],
        days_ahead: u32,
        as_of: Option<NaiveDate>,
    ) -> OutbreakResult<TrajectoryProjection> {
        trajectory::predict_trajectory(network, cases, days_ahead, as_of)
    }

    /// Network, pattern and trajectory over the configured horizon.
    pub fn analyze_dynamics(&self, cases: &[Case]) -> OutbreakResult<DynamicsAnalysis> {
        analyze_dynamics(cases, self.thresholds(), self.config.trajectory_days_ahead)
    }
}

/// Infer a transmission network.
///
/// Fails with `InsufficientData` for fewer than two cases and with
/// `InvalidThreshold` for non-finite, negative or zero-window thresholds.
pub fn infer_network(
    cases: &[Case],
    genetic_threshold: f64,
    temporal_window_days: i64,
    spatial_threshold_km: f64,
) -> OutbreakResult<TransmissionNetwork> {
    infer_network_with(
        cases,
        InferenceThresholds {
            genetic_threshold,
            temporal_window_days,
            spatial_threshold_km,
        },
    )
}

pub fn infer_network_with(
    cases: &[Case],
    thresholds: InferenceThresholds,
) -> OutbreakResult<TransmissionNetwork> {
    if cases.len() < MIN_NETWORK_CASES {
        return Err(TransmissionError::InsufficientData {
            required: MIN_NETWORK_CASES,
            actual: cases.len(),
        }
        .into());
    }
    validate_thresholds(&thresholds)?;
    reject_duplicate_ids(cases)?;

    let span = outbreak_observability::inference_span!(cases.len());
    let _guard = span.enter();

    let mut sorted = cases.to_vec();
    sorted.sort_by_key(|c| c.detection_date);

    let links = LinkInference::new(thresholds).infer_links(&sorted);
    debug!(links = links.len(), "candidate pairs scored");

    let graph = TransmissionGraph::build(&sorted, links);
    debug_assert!(dag_enforcement::is_acyclic(&graph));

    let components = components::weakly_connected_components(&graph);
    let raw_betweenness = if graph.edge_count() > 0 {
        centrality::raw_betweenness(&graph)
    } else {
        vec![0.0; graph.node_count()]
    };

    let network_metrics = metrics::compute_metrics(&graph, &components, &raw_betweenness);
    let clusters = clusters::detect_clusters(&graph, &components, &raw_betweenness);
    let index_cases = ranking::rank_index_cases(&graph);
    let superspreaders = ranking::rank_superspreaders(&graph, &raw_betweenness);
    let nodes = graph
        .nodes()
        .map(|idx| graph.case_id(idx).to_string())
        .collect();
    let links = graph.into_links();
    let max_temporal_distance_days = links.iter().map(|l| l.days_apart).max();

    events::network_inferred(sorted.len(), links.len(), clusters.len());

    Ok(TransmissionNetwork {
        cases: sorted.len(),
        nodes,
        links,
        network_metrics,
        clusters,
        index_cases,
        superspreaders,
        max_temporal_distance_days,
        thresholds,
    })
}

/// Infer, classify and project in one pass.
pub fn analyze_dynamics(
    cases: &[Case],
    thresholds: InferenceThresholds,
    days_ahead: u32,
) -> OutbreakResult<DynamicsAnalysis> {
    let network = infer_network_with(cases, thresholds)?;
    let pattern_assessment = pattern::assess_pattern(&network);
    let trajectory = trajectory::predict_trajectory(&network, cases, days_ahead, None)?;
    Ok(DynamicsAnalysis {
        transmission_network: network,
        pattern_assessment,
        trajectory,
    })
}

fn validate_thresholds(t: &InferenceThresholds) -> Result<(), TransmissionError> {
    if t.temporal_window_days <= 0 {
        return Err(TransmissionError::InvalidThreshold {
            name: "temporal_window_days",
            value: t.temporal_window_days as f64,
        });
    }
    if !(t.spatial_threshold_km.is_finite() && t.spatial_threshold_km >= 0.0) {
        return Err(TransmissionError::InvalidThreshold {
            name: "spatial_threshold_km",
            value: t.spatial_threshold_km,
        });
    }
    if !(t.genetic_threshold.is_finite() && t.genetic_threshold >= 0.0) {
        return Err(TransmissionError::InvalidThreshold {
            name: "genetic_threshold",
            value: t.genetic_threshold,
        });
    }
    Ok(())
}

/// Graph nodes are keyed by case id, so ids must be unique.
fn reject_duplicate_ids(cases: &[Case]) -> Result<(), TransmissionError> {
    let mut seen = HashSet::with_capacity(cases.len());
    for case in cases {
        if !seen.insert(case.id.as_str()) {
            return Err(TransmissionError::DuplicateCaseId {
                case_id: case.id.clone(),
            });
        }
    }
    Ok(())
}
