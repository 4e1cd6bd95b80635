//! Whole-network structural metrics.

use outbreak_core::models::NetworkMetrics;
use petgraph::graph::NodeIndex;

use crate::graph::centrality::{self, normalized_degree};
use crate::graph::components::largest_component;
use crate::graph::TransmissionGraph;

/// Counts, density and components for the whole graph; centrality extremes
/// and average path length for its largest weakly-connected component.
pub fn compute_metrics(
    graph: &TransmissionGraph,
    components: &[Vec<NodeIndex>],
    raw_betweenness: &[f64],
) -> NetworkMetrics {
    let largest = largest_component(components).unwrap_or(&[]);
    let mut metrics = NetworkMetrics {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        density: graph.density(),
        component_count: components.len(),
        largest_component_size: largest.len(),
        max_in_degree_centrality: 0.0,
        max_out_degree_centrality: 0.0,
        max_betweenness_centrality: 0.0,
        min_betweenness_centrality: 0.0,
        average_path_length: None,
    };

    if metrics.edge_count == 0 || largest.is_empty() {
        return metrics;
    }

    let n = largest.len();
    metrics.max_in_degree_centrality = largest
        .iter()
        .map(|&idx| normalized_degree(graph.in_degree(idx), n))
        .fold(0.0, f64::max);
    metrics.max_out_degree_centrality = largest
        .iter()
        .map(|&idx| normalized_degree(graph.out_degree(idx), n))
        .fold(0.0, f64::max);

    let betweenness = centrality::component_betweenness(raw_betweenness, largest);
    metrics.max_betweenness_centrality = betweenness.iter().copied().fold(0.0, f64::max);
    metrics.min_betweenness_centrality = betweenness
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    if !metrics.min_betweenness_centrality.is_finite() {
        metrics.min_betweenness_centrality = 0.0;
    }

    metrics.average_path_length = centrality::average_path_length(graph, largest);
    metrics
}
