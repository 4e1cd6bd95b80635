//! # outbreak-core
//!
//! Foundation crate for outbreak spread analytics.
//! Defines the case/region data model, transmission and forecast result types,
//! the forecast model trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::OutbreakConfig;
pub use errors::{OutbreakError, OutbreakResult};
pub use models::{Case, GeoPoint, Region, VirusSubtype};
pub use traits::{FitContext, IForecastModel, PredictContext};
