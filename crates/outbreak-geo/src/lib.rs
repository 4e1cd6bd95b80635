//! # outbreak-geo
//!
//! Shared numeric utilities used by both transmission inference and forecasting.
//!
//! | Module | Provides |
//! |--------|----------|
//! | [`distance`] | Haversine great-circle distance, per-site genetic distance |
//! | [`geometry`] | Region centroid resolution |
//! | [`interval`] | Poisson and normal confidence intervals |
//! | [`stats`] | Mean, standard deviation, error summaries |

pub mod distance;
pub mod geometry;
pub mod interval;
pub mod stats;

pub use distance::{case_distance_km, genetic_distance, haversine_km};
pub use geometry::{polygon_centroid, resolve_centroid};
pub use interval::{normal_interval, poisson_interval, poisson_quantile};
