//! Acyclicity checks.
//!
//! Links only ever point forward in time, so these hold by construction;
//! they exist so callers and tests can verify it.

use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::NodeIndex;

use super::transmission_graph::TransmissionGraph;

pub fn is_acyclic(graph: &TransmissionGraph) -> bool {
    !is_cyclic_directed(&graph.graph)
}

/// Strongly connected components with more than one node.
pub fn find_cycles(graph: &TransmissionGraph) -> Vec<Vec<NodeIndex>> {
    tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .collect()
}
