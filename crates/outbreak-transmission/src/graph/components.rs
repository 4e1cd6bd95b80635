//! Weakly-connected components.

use petgraph::graph::NodeIndex;
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

use super::transmission_graph::TransmissionGraph;

/// Weakly-connected components.
///
/// Members are in detection order and components are ordered by their
/// earliest member, so the result is stable for a given input.
pub fn weakly_connected_components(graph: &TransmissionGraph) -> Vec<Vec<NodeIndex>> {
    let n = graph.node_count();
    let mut sets = UnionFind::<usize>::new(n);
    for edge in graph.graph.edge_references() {
        sets.union(edge.source().index(), edge.target().index());
    }

    let mut by_root: Vec<Option<usize>> = vec![None; n];
    let mut components: Vec<Vec<NodeIndex>> = Vec::new();
    for i in 0..n {
        let root = sets.find(i);
        let slot = match by_root[root] {
            Some(slot) => slot,
            None => {
                components.push(Vec::new());
                by_root[root] = Some(components.len() - 1);
                components.len() - 1
            }
        };
        components[slot].push(NodeIndex::new(i));
    }
    components
}

/// The largest component; the earliest one wins ties.
pub fn largest_component(components: &[Vec<NodeIndex>]) -> Option<&[NodeIndex]> {
    let mut best: Option<&Vec<NodeIndex>> = None;
    for component in components {
        if best.map_or(true, |b| component.len() > b.len()) {
            best = Some(component);
        }
    }
    best.map(Vec::as_slice)
}

/// Edges with both endpoints in `members`.
pub fn internal_edge_count(graph: &TransmissionGraph, members: &[NodeIndex]) -> usize {
    members.iter().map(|&idx| graph.out_degree(idx)).sum()
}
