//! Mean, variance and higher moments, composed from kernel reductions
//!
//! Nothing here loops over the data itself: every power sum comes from
//! [`sum`], [`dot`] or [`power_sum`], and the statistics are closed-form arithmetic on
//! those sums.
//!
//! - mean = Σx / n
//! - variance = E[X²] − E[X]², with Σx² from the self dot product
//! - sample variance = n/(n−1) · variance
//! - skew = μ3 / μ2^(3/2), kurt = μ4 / μ2² − 3 (excess)
//!
//! Degenerate inputs return NaN sentinels.

use crate::config::VARIANCE_EPSILON;
use crate::kernels::{dot, power_sum, sum};

/// Descriptive statistics of one sample (population moments).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub skewness: f64,
    /// Excess kurtosis (normal distribution = 0).
    pub kurtosis: f64,
}

impl DescriptiveStats {
    /// Every field set to NaN.
    pub const UNDEFINED: DescriptiveStats = DescriptiveStats {
        mean: f64::NAN,
        variance: f64::NAN,
        std_dev: f64::NAN,
        skewness: f64::NAN,
        kurtosis: f64::NAN,
    };
}

/// Arithmetic mean; NaN when empty.
#[inline]
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    sum(data) / data.len() as f64
}

/// Population variance E[X²] − E[X]²; NaN when empty.
///
/// Tiny negative results from cancellation are clamped to zero.
pub fn variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let n = data.len() as f64;
    let m = sum(data) / n;
    (dot(data, data) / n - m * m).max(0.0)
}

/// Sample variance (ddof = 1); NaN for fewer than two elements.
pub fn sample_variance(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return f64::NAN;
    }
    let n = data.len() as f64;
    variance(data) * n / (n - 1.0)
}

/// Population standard deviation.
pub fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Raw power sums `[Σx, Σx², Σx³, Σx⁴]`.
pub fn moments(data: &[f64]) -> [f64; 4] {
    [
        sum(data),
        dot(data, data),
        power_sum(data, 3),
        power_sum(data, 4),
    ]
}

/// Mean, variance, standard deviation, skewness and excess kurtosis.
///
/// Empty input yields [`DescriptiveStats::UNDEFINED`]. When the variance is
/// zero the skewness and kurtosis are NaN.
pub fn descriptive_stats(data: &[f64]) -> DescriptiveStats {
    if data.is_empty() {
        log::debug!("descriptive_stats: empty input");
        return DescriptiveStats::UNDEFINED;
    }

    let nc = data.len() as f64;
    let [s1, s2, s3, s4] = moments(data);
    let mean = s1 / nc;
    let mu2 = (s2 / nc - mean * mean).max(0.0);

    let (skewness, kurtosis) = if mu2 > VARIANCE_EPSILON {
        let mu3 = (s3 - 3.0 * mean * s2 + 2.0 * mean * mean * mean * nc) / nc;
        let mu4 = (s4 - 4.0 * mean * s3 + 6.0 * mean * mean * s2 - 3.0 * mean * mean * mean * mean * nc)
            / nc;
        (mu3 / mu2.powf(1.5), mu4 / (mu2 * mu2) - 3.0)
    } else {
        log::debug!("descriptive_stats: zero variance, higher moments undefined");
        (f64::NAN, f64::NAN)
    };

    DescriptiveStats {
        mean,
        variance: mu2,
        std_dev: mu2.sqrt(),
        skewness,
        kurtosis,
    }
}
