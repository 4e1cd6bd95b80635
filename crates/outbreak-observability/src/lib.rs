//! # outbreak-observability
//!
//! Structured tracing for outbreak analytics: subscriber setup, one span per
//! top-level operation, and structured events for inference and model lifecycle.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_from, init_tracing_with_filter};
