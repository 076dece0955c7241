//! Sample statistics and Gaussian densities.
//!
//! Empty and single-sample collections are defined rather than undefined:
//! `mean_var(&[])` is `(0, 0)` and the variance of one sample is `0`.

use std::f64::consts::PI;

/// Mean and sample variance (Bessel-corrected) of a collection.
///
/// | samples | result |
/// |---|---|
/// | 0 | `(0, 0)` |
/// | 1 | `(x, 0)` |
/// | n ≥ 2 | `(mean, Σ(x - mean)² / (n - 1))` |
///
/// # Examples
///
/// ```
/// use knn_bayes::stats::mean_var;
///
/// assert_eq!(mean_var(&[]), (0.0, 0.0));
/// assert_eq!(mean_var(&[4.0]), (4.0, 0.0));
///
/// let (mean, var) = mean_var(&[1.0, 2.0, 3.0]);
/// assert!((mean - 2.0).abs() < 1e-12);
/// assert!((var - 1.0).abs() < 1e-12);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_var(samples: &[f64]) -> (f64, f64) {
    match samples {
        [] => (0.0, 0.0),
        [only] => (*only, 0.0),
        [first, ..] => {
            // Shifting by the first sample keeps identical values at exactly zero variance.
            let n = samples.len() as f64;
            let shifted: f64 = samples.iter().map(|x| x - first).sum();
            let mean = if shifted.is_finite() {
                first + shifted / n
            } else {
                // shifting overflowed on far-apart samples
                samples.iter().map(|x| x / n).sum()
            };
            let sum_sq_diff: f64 = samples
                .iter()
                .map(|x| {
                    let diff = x - mean;
                    diff * diff
                })
                .sum();
            (mean, sum_sq_diff / (n - 1.0))
        }
    }
}

/// Normal density `N(x; mean, variance)`.
///
/// `variance` must be positive; callers add smoothing before calling.
#[must_use]
pub fn gaussian_pdf(x: f64, mean: f64, variance: f64) -> f64 {
    let diff = x - mean;
    (-(diff * diff) / (2.0 * variance)).exp() / (2.0 * PI * variance).sqrt()
}

/// Natural log of [`gaussian_pdf`], finite where the density underflows.
///
/// `-0.5 * ln(2πσ²) - (x-μ)² / (2σ²)`
#[must_use]
pub fn log_gaussian_pdf(x: f64, mean: f64, variance: f64) -> f64 {
    let diff = x - mean;
    -0.5 * (2.0 * PI * variance).ln() - (diff * diff) / (2.0 * variance)
}
