//! Percentiles and quartiles over unsorted data
//!
//! Each entry point sorts a private [`SortedCopy`] and interpolates into it;
//! the caller's buffer is never written. Percentile `p` (in `[0, 1]`, clamped)
//! is read at fractional rank `p · (n − 1)` with linear interpolation
//! between the neighbouring order statistics.
//!
//! NaNs in the data sort last and therefore contaminate the upper
//! percentiles; filter them first if that is not wanted.

use crate::error::{FpError, Result};
use crate::stats::scratch::SortedCopy;

/// Q1, median, Q3 and the interquartile range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
}

impl Quartiles {
    pub const UNDEFINED: Quartiles = Quartiles {
        q1: f64::NAN,
        median: f64::NAN,
        q3: f64::NAN,
        iqr: f64::NAN,
    };
}

/// Interpolated percentile of already-sorted data.
///
/// Empty input or NaN `p` gives NaN.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 || p.is_nan() {
        return f64::NAN;
    }

    let rank = p.clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;

    if frac == 0.0 {
        sorted[lo]
    } else {
        sorted[lo] + frac * (sorted[hi] - sorted[lo])
    }
}

/// Percentile `p` of unsorted `data`, leaving `data` untouched.
///
/// Returns `Ok(NaN)` for empty input, `Err` only if scratch allocation fails.
pub fn percentile(data: &[f64], p: f64) -> Result<f64> {
    if data.is_empty() {
        log::debug!("percentile: empty input");
        return Ok(f64::NAN);
    }
    let sorted = SortedCopy::new(data)?;
    Ok(percentile_sorted(&sorted, p))
}

/// Several percentiles from one sort. `results` needs `ps.len()` slots.
///
/// Fails with [`FpError::LengthMismatch`] when `results` is too short; on
/// that or an allocation failure `results` is left untouched.
pub fn percentiles(data: &[f64], ps: &[f64], results: &mut [f64]) -> Result<()> {
    if results.len() < ps.len() {
        return Err(FpError::LengthMismatch {
            expected: ps.len(),
            got: results.len(),
        });
    }
    let results = &mut results[..ps.len()];
    if data.is_empty() {
        results.fill(f64::NAN);
        return Ok(());
    }
    let sorted = SortedCopy::new(data)?;
    for (r, &p) in results.iter_mut().zip(ps) {
        *r = percentile_sorted(&sorted, p);
    }
    Ok(())
}

/// Median (50th percentile).
pub fn median(data: &[f64]) -> Result<f64> {
    percentile(data, 0.5)
}

/// Quartiles of already-sorted data.
pub fn quartiles_sorted(sorted: &[f64]) -> Quartiles {
    if sorted.is_empty() {
        return Quartiles::UNDEFINED;
    }
    let q1 = percentile_sorted(sorted, 0.25);
    let q3 = percentile_sorted(sorted, 0.75);
    Quartiles {
        q1,
        median: percentile_sorted(sorted, 0.5),
        q3,
        iqr: q3 - q1,
    }
}

/// Quartiles of unsorted `data`; every field NaN when empty.
pub fn quartiles(data: &[f64]) -> Result<Quartiles> {
    if data.is_empty() {
        log::debug!("quartiles: empty input");
        return Ok(Quartiles::UNDEFINED);
    }
    let sorted = SortedCopy::new(data)?;
    Ok(quartiles_sorted(&sorted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_median_scenario() {
        let data = [5.0, 1.0, 4.0, 2.0, 3.0];
        assert_eq!(percentile(&data, 0.5).unwrap(), 3.0);
        assert_eq!(data, [5.0, 1.0, 4.0, 2.0, 3.0]);
    }

    #[test]
    fn test_percentile_interpolates() {
        let data = [10.0, 20.0, 30.0, 40.0];
        // rank = 0.5 * 3 = 1.5 -> halfway between 20 and 30
        assert!((percentile(&data, 0.5).unwrap() - 25.0).abs() < 1e-12);
        assert_eq!(percentile(&data, 0.0).unwrap(), 10.0);
        assert_eq!(percentile(&data, 1.0).unwrap(), 40.0);
    }

    #[test]
    fn test_percentile_clamps_p() {
        let data = [3.0, 1.0, 2.0];
        assert_eq!(percentile(&data, -0.5).unwrap(), 1.0);
        assert_eq!(percentile(&data, 7.0).unwrap(), 3.0);
        assert!(percentile(&data, f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_percentile_degenerate() {
        assert!(percentile(&[], 0.5).unwrap().is_nan());
        assert_eq!(percentile(&[42.0], 0.9).unwrap(), 42.0);
    }

    #[test]
    fn test_percentiles_batch() {
        let data = [9.0, 1.0, 5.0, 3.0, 7.0];
        let ps = [0.0, 0.25, 0.5, 1.0];
        let mut out = [0.0; 4];
        percentiles(&data, &ps, &mut out).unwrap();
        assert_eq!(out, [1.0, 3.0, 5.0, 9.0]);
        assert_eq!(data, [9.0, 1.0, 5.0, 3.0, 7.0]);

        let mut short = [0.0; 2];
        assert_eq!(
            percentiles(&data, &ps, &mut short),
            Err(FpError::LengthMismatch { expected: 4, got: 2 })
        );
    }

    #[test]
    fn test_quartiles() {
        let data = [7.0, 1.0, 3.0, 5.0, 9.0];
        let q = quartiles(&data).unwrap();
        assert_eq!(q.q1, 3.0);
        assert_eq!(q.median, 5.0);
        assert_eq!(q.q3, 7.0);
        assert_eq!(q.iqr, 4.0);
    }

    #[test]
    fn test_quartiles_empty() {
        let q = quartiles(&[]).unwrap();
        assert!(q.q1.is_nan() && q.median.is_nan() && q.q3.is_nan() && q.iqr.is_nan());
    }

    #[test]
    fn test_allocation_failure_propagates() {
        use crate::error::fail_injection::fail_next_allocation;

        let data = [4.0, 2.0, 3.0, 1.0];

        fail_next_allocation();
        assert_eq!(percentile(&data, 0.5), Err(FpError::AllocationFailed { len: 4 }));

        fail_next_allocation();
        assert_eq!(quartiles(&data), Err(FpError::AllocationFailed { len: 4 }));

        let mut results = [-1.0; 2];
        fail_next_allocation();
        assert_eq!(
            percentiles(&data, &[0.25, 0.75], &mut results),
            Err(FpError::AllocationFailed { len: 4 })
        );
        assert_eq!(results, [-1.0, -1.0]);

        // Failure is not sticky.
        assert_eq!(median(&data), Ok(2.5));
    }
}
