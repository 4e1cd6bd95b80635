//! # outbreak-forecast
//!
//! Regional spread forecasting from independent models, combined into a
//! weighted ensemble whose weights follow backtest accuracy.
//!
//! | Concern | Module |
//! |---------|--------|
//! | Distance-decay, network-propagation, Gaussian-process models | [`models`] |
//! | Registration order and parallel access | [`registry`] |
//! | Ensemble weights and RMSE reweighting | [`weights`] |
//! | Weighted combination of per-model results | [`ensemble`] |
//! | Rolling-window backtests | [`evaluation`] |
//! | Training, forecasting, evaluation entry point | [`manager`] |
//! | Risk-level buckets | [`risk_map`] |

pub mod ensemble;
pub mod evaluation;
pub mod manager;
pub mod models;
pub mod registry;
pub mod risk_map;
pub mod weights;

pub use manager::{ForecastManager, TrainingReport};
pub use models::{DistanceDecayModel, GaussianProcessModel, NetworkPropagationModel};
pub use risk_map::risk_map;
pub use weights::WeightTable;
