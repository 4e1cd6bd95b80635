//! Feature scaling and the squared-exponential kernel.

use outbreak_geo::stats::{mean, std_dev};

/// Column standardisation. A zero spread is replaced by 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standardizer {
    pub mean: f64,
    pub std: f64,
}

impl Standardizer {
    pub fn fit(values: &[f64]) -> Self {
        let std = std_dev(values);
        Self {
            mean: mean(values),
            std: if std > 0.0 && std.is_finite() { std } else { 1.0 },
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        (value - self.mean) / self.std
    }

    pub fn invert(&self, value: f64) -> f64 {
        value * self.std + self.mean
    }
}

/// Product of RBF kernels over `(lat, lon, day)` with unit signal variance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceTimeKernel {
    /// Length scales in standardised units.
    pub length_scales: [f64; 3],
}

impl SpaceTimeKernel {
    pub fn eval(&self, a: &[f64; 3], b: &[f64; 3]) -> f64 {
        let sq: f64 = (0..3)
            .map(|i| {
                let d = (a[i] - b[i]) / self.length_scales[i];
                d * d
            })
            .sum();
        (-0.5 * sq).exp()
    }
}
