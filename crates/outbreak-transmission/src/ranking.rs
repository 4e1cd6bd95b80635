//! Index-case and super-spreader rankings.

use std::cmp::Ordering;

use chrono::NaiveDate;
use outbreak_core::models::{IndexCaseCandidate, SuperspreaderCandidate};

use crate::graph::centrality::betweenness_scale;
use crate::graph::TransmissionGraph;

// --- Index cases ---
pub const INDEX_OUT_DEGREE_WEIGHT: f64 = 0.7;
pub const INDEX_TEMPORAL_WEIGHT: f64 = 0.3;
/// Days over which temporal priority falls from 1 to its floor.
pub const TEMPORAL_PRIORITY_HORIZON_DAYS: f64 = 30.0;
pub const MIN_TEMPORAL_PRIORITY: f64 = 0.1;

// --- Super-spreaders ---
pub const SUPERSPREADER_OUT_DEGREE_WEIGHT: f64 = 0.7;
pub const SUPERSPREADER_BETWEENNESS_WEIGHT: f64 = 0.3;
/// Brings normalised betweenness onto the scale of an out-degree.
pub const BETWEENNESS_SCALE: f64 = 30.0;

/// `max(0.1, 1 - days_since_earliest / 30)`.
pub fn temporal_priority(detection_date: NaiveDate, earliest: NaiveDate) -> f64 {
    let days = (detection_date - earliest).num_days() as f64;
    (1.0 - days / TEMPORAL_PRIORITY_HORIZON_DAYS).max(MIN_TEMPORAL_PRIORITY)
}

/// Cases with no inferred source and at least one onward link, best first.
pub fn rank_index_cases(graph: &TransmissionGraph) -> Vec<IndexCaseCandidate> {
    let earliest = match graph.nodes().map(|idx| graph.node(idx).detection_date).min() {
        Some(d) => d,
        None => return Vec::new(),
    };

    let mut candidates: Vec<IndexCaseCandidate> = graph
        .nodes()
        .filter(|&idx| graph.in_degree(idx) == 0)
        .filter_map(|idx| {
            let out = graph.out_degree(idx);
            if out == 0 {
                return None;
            }
            let node = graph.node(idx);
            let priority = temporal_priority(node.detection_date, earliest);
            Some(IndexCaseCandidate {
                case_id: node.case_id.clone(),
                outbreak_size: out,
                index_score: out as f64 * INDEX_OUT_DEGREE_WEIGHT + priority * INDEX_TEMPORAL_WEIGHT,
                temporal_priority: priority,
                detection_date: node.detection_date,
            })
        })
        .collect();

    // Stable sort keeps detection order among equal scores.
    candidates.sort_by(|a, b| descending(a.index_score, b.index_score));
    candidates
}

/// Cases with more than one onward link, best first.
pub fn rank_superspreaders(
    graph: &TransmissionGraph,
    raw_betweenness: &[f64],
) -> Vec<SuperspreaderCandidate> {
    let n = graph.node_count();
    let scale = betweenness_scale(n);

    let mut candidates: Vec<SuperspreaderCandidate> = graph
        .nodes()
        .filter_map(|idx| {
            let out = graph.out_degree(idx);
            if out <= 1 {
                return None;
            }
            let betweenness = (n >= 3).then(|| raw_betweenness[idx.index()] * scale);
            let score = match betweenness {
                Some(b) => {
                    out as f64 * SUPERSPREADER_OUT_DEGREE_WEIGHT
                        + b * BETWEENNESS_SCALE * SUPERSPREADER_BETWEENNESS_WEIGHT
                }
                None => out as f64,
            };
            Some(SuperspreaderCandidate {
                case_id: graph.case_id(idx).to_string(),
                outgoing_links: out,
                superspreader_score: score,
                betweenness,
            })
        })
        .collect();

    candidates.sort_by(|a, b| descending(a.superspreader_score, b.superspreader_score));
    candidates
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
