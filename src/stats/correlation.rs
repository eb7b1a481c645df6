//! Covariance and Pearson correlation
//!
//! cov(X, Y) = E[XY] − E[X]·E[Y]
//! corr(X, Y) = cov(X, Y) / (σx · σy)
//!
//! Both are population statistics built from two sums and the dot products.

use crate::config::VARIANCE_EPSILON;
use crate::kernels::{dot, sum};

/// Population covariance of two equal-length samples; NaN when empty.
pub fn covariance(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return f64::NAN;
    }
    let n = x.len() as f64;
    dot(x, y) / n - (sum(x) / n) * (sum(y) / n)
}

/// Pearson correlation in `[-1, 1]`.
///
/// NaN for fewer than two points or when either sample has zero variance.
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if x.len() < 2 {
        return f64::NAN;
    }

    let n = x.len() as f64;
    let mean_x = sum(x) / n;
    let mean_y = sum(y) / n;
    let var_x = dot(x, x) / n - mean_x * mean_x;
    let var_y = dot(y, y) / n - mean_y * mean_y;

    if var_x <= VARIANCE_EPSILON || var_y <= VARIANCE_EPSILON {
        log::debug!("correlation: zero variance, result undefined");
        return f64::NAN;
    }

    let cov = dot(x, y) / n - mean_x * mean_y;
    (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covariance() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        // var(x) = 1.25, cov = 2 * var(x)
        assert!((covariance(&x, &y) - 2.5).abs() < 1e-12);
        assert!(covariance(&[], &[]).is_nan());
        assert_eq!(covariance(&[3.0], &[4.0]), 0.0);
    }

    #[test]
    fn test_correlation_perfect() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let up = [3.0, 5.0, 7.0, 9.0, 11.0];
        let down = [10.0, 8.0, 6.0, 4.0, 2.0];
        assert!((correlation(&x, &up) - 1.0).abs() < 1e-12);
        assert!((correlation(&x, &down) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_correlation_zero_variance() {
        assert!(correlation(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]).is_nan());
        assert!(correlation(&[1.0], &[1.0]).is_nan());
    }
}
