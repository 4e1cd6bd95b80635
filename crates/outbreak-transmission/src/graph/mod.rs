//! Graph layer: petgraph wrapper, DAG enforcement, components, centrality.

pub mod centrality;
pub mod components;
pub mod dag_enforcement;
pub mod transmission_graph;

pub use transmission_graph::{CaseNode, TransmissionGraph};
