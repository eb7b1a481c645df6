//! Outlier detection by z-score or interquartile fences
//!
//! Both detectors write a full `bool` mask (one slot per input element,
//! every slot written on every path) and return the number of outliers.
//! The z-score detector composes [`descriptive_stats`]; the IQR detector
//! composes [`quartiles`] and so inherits its sorted-scratch purity.

use crate::config::{DEFAULT_IQR_FACTOR, DEFAULT_ZSCORE_THRESHOLD};
use crate::error::Result;
use crate::stats::moments::descriptive_stats;
use crate::stats::percentile::quartiles;

/// Detection rule for [`detect_outliers`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlierMethod {
    /// |x − mean| / σ > threshold
    ZScore { threshold: f64 },
    /// x outside [Q1 − k·IQR, Q3 + k·IQR]
    Iqr { k: f64 },
}

impl Default for OutlierMethod {
    fn default() -> Self {
        OutlierMethod::Iqr {
            k: DEFAULT_IQR_FACTOR,
        }
    }
}

impl OutlierMethod {
    pub fn zscore() -> Self {
        OutlierMethod::ZScore {
            threshold: DEFAULT_ZSCORE_THRESHOLD,
        }
    }
}

/// Run the selected detector.
pub fn detect_outliers(data: &[f64], method: OutlierMethod, mask: &mut [bool]) -> Result<usize> {
    match method {
        OutlierMethod::ZScore { threshold } => Ok(detect_outliers_zscore(data, threshold, mask)),
        OutlierMethod::Iqr { k } => detect_outliers_iqr(data, k, mask),
    }
}

/// Flag points more than `threshold` population standard deviations from
/// the mean. Fewer than two points, or zero spread, flags nothing.
pub fn detect_outliers_zscore(data: &[f64], threshold: f64, mask: &mut [bool]) -> usize {
    let mask = &mut mask[..data.len()];
    mask.fill(false);
    if data.len() < 2 {
        return 0;
    }

    let stats = descriptive_stats(data);
    if stats.std_dev == 0.0 || !stats.std_dev.is_finite() {
        log::debug!("detect_outliers_zscore: no spread, nothing flagged");
        return 0;
    }

    let mut flagged = 0;
    for (m, &x) in mask.iter_mut().zip(data) {
        let z = (x - stats.mean) / stats.std_dev;
        if z.abs() > threshold {
            *m = true;
            flagged += 1;
        }
    }
    flagged
}

/// Flag points outside the Tukey fences `Q1 − k·IQR` and `Q3 + k·IQR`.
///
/// Fewer than four points, or a zero IQR, flags nothing. `data` is left
/// untouched; on allocation failure the mask is all `false`.
pub fn detect_outliers_iqr(data: &[f64], k: f64, mask: &mut [bool]) -> Result<usize> {
    let mask = &mut mask[..data.len()];
    mask.fill(false);
    if data.len() < 4 {
        return Ok(0);
    }

    let q = quartiles(data)?;
    if q.iqr == 0.0 {
        log::debug!("detect_outliers_iqr: zero IQR, nothing flagged");
        return Ok(0);
    }

    let lower = q.q1 - k * q.iqr;
    let upper = q.q3 + k * q.iqr;

    let mut flagged = 0;
    for (m, &x) in mask.iter_mut().zip(data) {
        if x < lower || x > upper {
            *m = true;
            flagged += 1;
        }
    }
    Ok(flagged)
}
