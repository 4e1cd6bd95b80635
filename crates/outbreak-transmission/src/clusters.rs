//! Cluster detection: weakly-connected components of two or more cases.

use outbreak_core::models::{ClusterCentralNodes, ClusterMetrics, TransmissionCluster};
use petgraph::graph::NodeIndex;

use crate::graph::components::internal_edge_count;
use crate::graph::transmission_graph::directed_density;
use crate::graph::TransmissionGraph;

/// Minimum component size reported as a cluster.
pub const MIN_CLUSTER_SIZE: usize = 2;

/// Clusters numbered `cluster_1`, `cluster_2`, ... in order of earliest member.
pub fn detect_clusters(
    graph: &TransmissionGraph,
    components: &[Vec<NodeIndex>],
    raw_betweenness: &[f64],
) -> Vec<TransmissionCluster> {
    components
        .iter()
        .filter(|c| c.len() >= MIN_CLUSTER_SIZE)
        .enumerate()
        .map(|(i, members)| build_cluster(graph, i + 1, members, raw_betweenness))
        .collect()
}

fn build_cluster(
    graph: &TransmissionGraph,
    number: usize,
    members: &[NodeIndex],
    raw_betweenness: &[f64],
) -> TransmissionCluster {
    let edge_count = internal_edge_count(graph, members);
    let highest_in_degree = argmax_earliest(members, |idx| graph.in_degree(idx) as f64);
    // Normalisation is uniform within a component, so the raw score ranks the same.
    let highest_betweenness = argmax_earliest(members, |idx| raw_betweenness[idx.index()]);

    TransmissionCluster {
        id: format!("cluster_{number}"),
        cases: members
            .iter()
            .map(|&idx| graph.case_id(idx).to_string())
            .collect(),
        metrics: ClusterMetrics {
            size: members.len(),
            edge_count,
            density: directed_density(members.len(), edge_count),
        },
        central_nodes: ClusterCentralNodes {
            highest_in_degree: graph.case_id(highest_in_degree).to_string(),
            highest_betweenness: graph.case_id(highest_betweenness).to_string(),
        },
    }
}

/// First member with the highest score. `members` must be non-empty.
fn argmax_earliest(members: &[NodeIndex], score: impl Fn(NodeIndex) -> f64) -> NodeIndex {
    let mut best = members[0];
    let mut best_score = score(best);
    for &idx in &members[1..] {
        let s = score(idx);
        if s > best_score {
            best = idx;
            best_score = s;
        }
    }
    best
}
