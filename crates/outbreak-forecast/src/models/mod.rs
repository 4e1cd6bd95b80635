//! The three spread-model variants.
//!
//! | Model | Family name | Needs |
//! |-------|-------------|-------|
//! | [`DistanceDecayModel`] | `distance_based` | region centroids |
//! | [`NetworkPropagationModel`] | `network_<type>` | connectivity table |
//! | [`GaussianProcessModel`] | `gaussian_process` | region centroids or case locations |

pub mod distance_decay;
pub mod gaussian_process;
pub mod network_propagation;

pub use distance_decay::{DistanceDecayModel, DistanceDecayParams};
pub use gaussian_process::GaussianProcessModel;
pub use network_propagation::NetworkPropagationModel;
