//! petgraph::Graph wrapper with dense case indices and an arena of links.

use std::collections::HashMap;

use chrono::NaiveDate;
use outbreak_core::models::{Case, TransmissionLink};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::Direction;

/// A node in the transmission graph, representing a case.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseNode {
    pub case_id: String,
    pub detection_date: NaiveDate,
}

/// The underlying directed graph. Edge weights index into the link arena.
pub type TransmissionDiGraph = DiGraph<CaseNode, usize>;

/// Directed case graph.
///
/// Nodes are added in detection order, so a lower `NodeIndex` never means a
/// later detection. Rankings use that order to break ties.
#[derive(Debug, Clone, Default)]
pub struct TransmissionGraph {
    pub graph: TransmissionDiGraph,
    node_index: HashMap<String, NodeIndex>,
    links: Vec<TransmissionLink>,
}

impl TransmissionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from cases already sorted by detection date and their links.
    /// Links whose endpoints are unknown are dropped.
    pub fn build(sorted_cases: &[Case], links: Vec<TransmissionLink>) -> Self {
        let mut graph = Self::new();
        for case in sorted_cases {
            graph.ensure_node(&case.id, case.detection_date);
        }
        for link in links {
            graph.add_link(link);
        }
        graph
    }

    /// Get or create the node for a case. A repeated id returns the existing
    /// node and keeps its first detection date.
    pub fn ensure_node(&mut self, case_id: &str, detection_date: NaiveDate) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(case_id) {
            return idx;
        }
        let idx = self.graph.add_node(CaseNode {
            case_id: case_id.to_string(),
            detection_date,
        });
        self.node_index.insert(case_id.to_string(), idx);
        idx
    }

    pub fn get_node(&self, case_id: &str) -> Option<NodeIndex> {
        self.node_index.get(case_id).copied()
    }

    /// Store a link in the arena and connect its endpoints.
    pub fn add_link(&mut self, link: TransmissionLink) -> Option<EdgeIndex> {
        let source = self.get_node(&link.source)?;
        let target = self.get_node(&link.target)?;
        let slot = self.links.len();
        self.links.push(link);
        Some(self.graph.add_edge(source, target, slot))
    }

    pub fn node(&self, idx: NodeIndex) -> &CaseNode {
        &self.graph[idx]
    }

    pub fn case_id(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].case_id
    }

    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Incoming).count()
    }

    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Outgoing).count()
    }

    /// Node indices in detection order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn links(&self) -> &[TransmissionLink] {
        &self.links
    }

    pub fn into_links(self) -> Vec<TransmissionLink> {
        self.links
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Directed density `m / (n (n - 1))`.
    pub fn density(&self) -> f64 {
        directed_density(self.node_count(), self.edge_count())
    }
}

pub(crate) fn directed_density(nodes: usize, edges: usize) -> f64 {
    if nodes < 2 {
        0.0
    } else {
        edges as f64 / (nodes as f64 * (nodes as f64 - 1.0))
    }
}
