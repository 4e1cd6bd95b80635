//! Summary statistics over slices.

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Errors of `predicted` against `actual`, paired by position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorSummary {
    pub rmse: f64,
    pub mae: f64,
    /// Mean of `predicted - actual`.
    pub bias: f64,
}

pub fn error_summary(predicted: &[f64], actual: &[f64]) -> ErrorSummary {
    let n = predicted.len().min(actual.len());
    if n == 0 {
        return ErrorSummary {
            rmse: 0.0,
            mae: 0.0,
            bias: 0.0,
        };
    }
    let (sq, abs, signed) = predicted
        .iter()
        .zip(actual.iter())
        .fold((0.0, 0.0, 0.0), |(sq, abs, signed), (p, a)| {
            let e = p - a;
            (sq + e * e, abs + e.abs(), signed + e)
        });
    let n = n as f64;
    ErrorSummary {
        rmse: (sq / n).sqrt(),
        mae: abs / n,
        bias: signed / n,
    }
}
