//! # outbreak-transmission
//!
//! Infers plausible case-to-case transmission from temporal, spatial and
//! genetic evidence, and analyses the resulting network.
//!
//! | Stage | Module |
//! |-------|--------|
//! | Pair filtering and likelihood | [`inference`] |
//! | Graph, acyclicity, components, centrality | [`graph`] |
//! | Structural metrics | [`metrics`] |
//! | Clusters | [`clusters`] |
//! | Index cases, super-spreaders | [`ranking`] |
//! | Pattern and interventions | [`pattern`] |
//! | Trajectory projection | [`trajectory`] |
//!
//! Every link points strictly forward in time, so the graph is acyclic.
//! Inference is a pure function of its cases and thresholds.

pub mod clusters;
pub mod engine;
pub mod graph;
pub mod inference;
pub mod metrics;
pub mod pattern;
pub mod ranking;
pub mod trajectory;

pub use engine::{analyze_dynamics, infer_network, infer_network_with, TransmissionEngine};
pub use pattern::assess_pattern;
pub use trajectory::predict_trajectory;
