//! Confidence intervals via `statrs`.
//!
//! Poisson quantiles use the smallest `k` with `cdf(k) >= p`.

use outbreak_core::models::ConfidenceInterval;
use statrs::distribution::{ContinuousCDF, DiscreteCDF, Normal, Poisson};

/// Lower quantile of the 95% interval.
pub const LOWER_QUANTILE: f64 = 0.025;
/// Upper quantile of the 95% interval.
pub const UPPER_QUANTILE: f64 = 0.975;

/// Smallest `k` with `P(X <= k) >= p` for `X ~ Poisson(mean)`.
///
/// Returns 0 for non-positive or non-finite means and for `p <= 0`;
/// `p >= 1` has no finite quantile and returns infinity.
pub fn poisson_quantile(mean: f64, p: f64) -> f64 {
    if !(mean.is_finite() && mean > 0.0) || !(p > 0.0) {
        return 0.0;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }
    match Poisson::new(mean) {
        Ok(dist) => dist.inverse_cdf(p) as f64,
        Err(_) => 0.0,
    }
}

/// 95% Poisson interval on an expected count. Zero expectation gives `(0, 0)`.
pub fn poisson_interval(expected: f64) -> ConfidenceInterval {
    if !(expected.is_finite() && expected > 0.0) {
        return ConfidenceInterval::new(0.0, 0.0);
    }
    ConfidenceInterval::new(
        poisson_quantile(expected, LOWER_QUANTILE),
        poisson_quantile(expected, UPPER_QUANTILE),
    )
}

/// Two-sided standard-normal critical value for `level` (0.95 gives ~1.96).
pub fn z_score(level: f64) -> f64 {
    let level = level.clamp(0.0, 0.999_999);
    match Normal::new(0.0, 1.0) {
        Ok(n) => n.inverse_cdf(0.5 + level / 2.0),
        Err(_) => 1.96,
    }
}

/// `center ± z·std_dev·scale`, floored at zero.
pub fn normal_interval(center: f64, std_dev: f64, scale: f64) -> ConfidenceInterval {
    let half = z_score(0.95) * std_dev.abs() * scale.abs();
    ConfidenceInterval::new(center - half, center + half)
}
