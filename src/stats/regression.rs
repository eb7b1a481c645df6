//! Ordinary least-squares line fit
//!
//! The fit composes two reductions (Σx, Σy) and three fused folds
//! (Σx², Σy², Σxy) into closed-form results:
//!
//! - slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
//! - intercept = ȳ − slope·x̄
//! - r² = Sxy² / (Sxx·Syy)
//! - std_error = sqrt((Syy − slope·Sxy) / (n − 2))
//!
//! where Sxx, Syy, Sxy are the centred sums. The record is returned by
//! value and is never partially filled.

use crate::config::DEGENERATE_EPSILON;
use crate::kernels::{dot, max, min, sum};

/// Fitted line `y = slope·x + intercept` with quality metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegression {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination. NaN when `y` is constant.
    pub r_squared: f64,
    /// Standard error of estimate; 0 for exactly two points.
    pub std_error: f64,
}

impl LinearRegression {
    /// Every field NaN: fewer than two points or constant `x`.
    pub const UNDEFINED: LinearRegression = LinearRegression {
        slope: f64::NAN,
        intercept: f64::NAN,
        r_squared: f64::NAN,
        std_error: f64::NAN,
    };

    pub fn is_defined(&self) -> bool {
        !self.slope.is_nan()
    }

    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit `y` against `x` (equal lengths).
pub fn linear_regression(x: &[f64], y: &[f64]) -> LinearRegression {
    debug_assert_eq!(x.len(), y.len());
    if x.len() < 2 {
        log::debug!("linear_regression: fewer than two points");
        return LinearRegression::UNDEFINED;
    }

    let n = x.len() as f64;
    let sum_x = sum(x);
    let sum_y = sum(y);
    let sum_xx = dot(x, x);
    let sum_yy = dot(y, y);
    let sum_xy = dot(x, y);

    let denom_x = n * sum_xx - sum_x * sum_x;
    if is_flat(x, denom_x, n * sum_xx) {
        log::debug!("linear_regression: constant x, slope undefined");
        return LinearRegression::UNDEFINED;
    }

    let numer = n * sum_xy - sum_x * sum_y;
    let slope = numer / denom_x;
    let intercept = (sum_y - slope * sum_x) / n;

    // n·S terms, scaled back by n below.
    let denom_y = n * sum_yy - sum_y * sum_y;
    let r_squared = if is_flat(y, denom_y, n * sum_yy) {
        f64::NAN
    } else {
        ((numer * numer) / (denom_x * denom_y)).clamp(0.0, 1.0)
    };

    let std_error = if x.len() == 2 {
        0.0
    } else {
        let ss_res = ((denom_y - slope * numer) / n).max(0.0);
        (ss_res / (n - 2.0)).sqrt()
    };

    LinearRegression {
        slope,
        intercept,
        r_squared,
        std_error,
    }
}

/// True when `v` has no spread: every value identical, or the scaled
/// centred sum `n·Σv² − (Σv)²` is rounding residue relative to `n·Σv²`.
fn is_flat(v: &[f64], denom: f64, scale: f64) -> bool {
    if max(v) == min(v) {
        return true;
    }
    denom.abs() <= DEGENERATE_EPSILON * scale.max(1.0)
}
