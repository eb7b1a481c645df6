//! Trailing-window statistics
//!
//! For a window of `w` elements the output slot `i` covers `data[i..i + w]`,
//! so there are `n − w + 1` outputs. When `w == 0` or `w > n` nothing is
//! written and the functions return 0. Every function returns the number of
//! outputs written.
//!
//! Window statistics are compositions: a window reduction is just a kernel
//! reduction applied to a subslice via [`rolling_reduce`].

#![allow(clippy::needless_range_loop)]

use crate::config::VARIANCE_EPSILON;
use crate::element::Element;
use crate::kernels;
use crate::stats::moments::variance;

#[inline]
fn output_len(n: usize, window: usize) -> usize {
    if window == 0 || window > n {
        0
    } else {
        n - window + 1
    }
}

/// Apply `f` to every trailing window.
pub fn rolling_reduce<T, U, F>(data: &[T], window: usize, output: &mut [U], f: F) -> usize
where
    F: Fn(&[T]) -> U,
{
    let out_len = output_len(data.len(), window);
    for (o, w) in output[..out_len].iter_mut().zip(data.windows(window.max(1))) {
        *o = f(w);
    }
    out_len
}

pub fn rolling_sum<T: Element>(data: &[T], window: usize, output: &mut [T]) -> usize {
    rolling_reduce(data, window, output, kernels::sum::<T>)
}

pub fn rolling_min<T: Element>(data: &[T], window: usize, output: &mut [T]) -> usize {
    rolling_reduce(data, window, output, |w| kernels::min(w).unwrap_or(w[0]))
}

pub fn rolling_max<T: Element>(data: &[T], window: usize, output: &mut [T]) -> usize {
    rolling_reduce(data, window, output, |w| kernels::max(w).unwrap_or(w[0]))
}

/// Window mean with an O(1) sliding update: add the entering element,
/// subtract the leaving one.
///
/// NaN and ±inf cannot be subtracted back out, so while the window holds
/// any non-finite value its sum is taken directly, and the running sum is
/// reseeded once the last one leaves.
pub fn rolling_mean(data: &[f64], window: usize, output: &mut [f64]) -> usize {
    let out_len = output_len(data.len(), window);
    if out_len == 0 {
        return 0;
    }

    let scale = 1.0 / window as f64;
    let mut non_finite = kernels::count(&data[..window], |v: &f64| !v.is_finite());
    let mut acc = kernels::sum(&data[..window]);
    output[0] = acc * scale;
    for i in 1..out_len {
        let leaving = data[i - 1];
        let entering = data[i + window - 1];
        if !leaving.is_finite() {
            non_finite -= 1;
        }
        if !entering.is_finite() {
            non_finite += 1;
        }

        acc = if non_finite > 0 || !leaving.is_finite() {
            kernels::sum(&data[i..i + window])
        } else {
            acc - leaving + entering
        };
        output[i] = acc * scale;
    }
    out_len
}

/// Window max − window min.
pub fn rolling_range(data: &[f64], window: usize, output: &mut [f64]) -> usize {
    rolling_reduce(data, window, output, |w| {
        match (kernels::max(w), kernels::min(w)) {
            (Some(hi), Some(lo)) => hi - lo,
            _ => f64::NAN,
        }
    })
}

/// Population variance of each window.
pub fn rolling_variance(data: &[f64], window: usize, output: &mut [f64]) -> usize {
    rolling_reduce(data, window, output, variance)
}

/// Population standard deviation of each window.
pub fn rolling_std(data: &[f64], window: usize, output: &mut [f64]) -> usize {
    rolling_reduce(data, window, output, |w| variance(w).sqrt())
}

// ============================================================================
// Multi-moment window pass
// ============================================================================

/// Bitmask for selecting which moments to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MomentsMask {
    bits: u8,
}

impl MomentsMask {
    pub const MEAN: u8 = 1 << 0;
    pub const STD: u8 = 1 << 1;
    pub const SKEW: u8 = 1 << 2;
    pub const KURT: u8 = 1 << 3;
    pub const COUNT: u8 = 1 << 4;

    pub fn new(bits: u8) -> Self {
        Self { bits }
    }

    pub fn all() -> Self {
        Self {
            bits: Self::MEAN | Self::STD | Self::SKEW | Self::KURT | Self::COUNT,
        }
    }

    pub fn has(self, flag: u8) -> bool {
        (self.bits & flag) != 0
    }

    fn max_moment_needed(self) -> u8 {
        if self.has(Self::KURT) {
            4
        } else if self.has(Self::SKEW) {
            3
        } else if self.has(Self::STD) {
            2
        } else {
            1
        }
    }
}

/// Requested per-window moments, each `n − w + 1` long.
#[derive(Debug, Clone, Default)]
pub struct RollingMoments {
    pub mean: Option<Vec<f64>>,
    pub std: Option<Vec<f64>>,
    pub skew: Option<Vec<f64>>,
    pub kurt: Option<Vec<f64>>,
    pub count: Option<Vec<f64>>,
}

impl RollingMoments {
    fn new(len: usize, mask: MomentsMask) -> Self {
        let slot = |flag| mask.has(flag).then(|| vec![f64::NAN; len]);
        Self {
            mean: slot(MomentsMask::MEAN),
            std: slot(MomentsMask::STD),
            skew: slot(MomentsMask::SKEW),
            kurt: slot(MomentsMask::KURT),
            count: slot(MomentsMask::COUNT),
        }
    }
}

/// Mean, std, skew, excess kurtosis and valid count of every trailing
/// window, from one set of raw power sums per window.
///
/// NaNs inside a window are skipped. A window with fewer than
/// `min_periods` valid values (default: `window`) yields NaN. `std` is the
/// sample standard deviation (ddof = 1); skew and kurtosis use population
/// central moments and are NaN when the window has no spread.
pub fn rolling_moments(
    data: &[f64],
    window: usize,
    min_periods: Option<usize>,
    mask: MomentsMask,
) -> RollingMoments {
    let out_len = output_len(data.len(), window);
    let min_periods = min_periods.unwrap_or(window);
    let max_moment = mask.max_moment_needed();
    let mut output = RollingMoments::new(out_len, mask);

    for i in 0..out_len {
        let (mut s1, mut s2, mut s3, mut s4) = (0.0, 0.0, 0.0, 0.0);
        let mut count = 0usize;

        for &val in &data[i..i + window] {
            if val.is_nan() {
                continue;
            }
            s1 += val;
            if max_moment >= 2 {
                s2 += val * val;
            }
            if max_moment >= 3 {
                s3 += val * val * val;
            }
            if max_moment >= 4 {
                s4 += val * val * val * val;
            }
            count += 1;
        }

        if count == 0 || count < min_periods {
            continue;
        }

        let nc = count as f64;
        let mean = s1 / nc;
        if let Some(ref mut v) = output.mean {
            v[i] = mean;
        }
        if let Some(ref mut v) = output.count {
            v[i] = nc;
        }

        if count < 2 || max_moment < 2 {
            continue;
        }

        let var = ((s2 - s1 * s1 / nc) / (nc - 1.0)).max(0.0);
        if let Some(ref mut v) = output.std {
            v[i] = var.sqrt();
        }
        if var <= VARIANCE_EPSILON {
            continue;
        }

        let mu2 = var * (nc - 1.0) / nc;
        if count >= 3 {
            if let Some(ref mut v) = output.skew {
                let mu3 = (s3 - 3.0 * mean * s2 + 2.0 * mean * mean * mean * nc) / nc;
                v[i] = mu3 / mu2.powf(1.5);
            }
        }
        if count >= 4 {
            if let Some(ref mut v) = output.kurt {
                let mu4 = (s4 - 4.0 * mean * s3 + 6.0 * mean * mean * s2
                    - 3.0 * mean * mean * mean * mean * nc)
                    / nc;
                v[i] = mu4 / (mu2 * mu2) - 3.0;
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_sum_and_mean() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut sums = [0.0; 5];
        assert_eq!(rolling_sum(&data, 3, &mut sums), 3);
        assert_eq!(&sums[..3], &[6.0, 9.0, 12.0]);

        let mut means = [0.0; 5];
        assert_eq!(rolling_mean(&data, 3, &mut means), 3);
        for (m, e) in means[..3].iter().zip([2.0, 3.0, 4.0]) {
            assert!((m - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rolling_mean_recovers_after_nan() {
        let data = [1.0, f64::NAN, 2.0, 3.0, 4.0];
        let mut means = [0.0; 5];
        let mut sums = [0.0; 5];
        let n = rolling_mean(&data, 2, &mut means);
        rolling_sum(&data, 2, &mut sums);
        assert_eq!(n, 4);
        assert!(means[0].is_nan() && means[1].is_nan());
        assert_eq!(&means[2..4], &[2.5, 3.5]);
        for i in 2..n {
            assert_eq!(means[i], sums[i] / 2.0);
        }
    }

    #[test]
    fn test_rolling_mean_recovers_after_infinity() {
        let data = [f64::INFINITY, 1.0, 2.0, 3.0];
        let mut means = [0.0; 4];
        let n = rolling_mean(&data, 2, &mut means);
        assert_eq!(n, 3);
        assert_eq!(means[0], f64::INFINITY);
        assert_eq!(&means[1..3], &[1.5, 2.5]);

        let data = [1.0, f64::NEG_INFINITY, f64::INFINITY, 2.0, 4.0];
        let n = rolling_mean(&data, 2, &mut means);
        assert_eq!(means[0], f64::NEG_INFINITY);
        assert!(means[1].is_nan());
        assert_eq!(means[2], f64::INFINITY);
        assert_eq!(means[n - 1], 3.0);
    }

    #[test]
    fn test_rolling_window_bounds() {
        let data = [1i64, 2, 3];
        let mut out = [0i64; 3];
        assert_eq!(rolling_sum(&data, 0, &mut out), 0);
        assert_eq!(rolling_sum(&data, 4, &mut out), 0);
        assert_eq!(rolling_sum(&data, 3, &mut out), 1);
        assert_eq!(out[0], 6);
    }

    #[test]
    fn test_rolling_min_max_range() {
        let data = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
        let mut lo = [0.0; 6];
        let mut hi = [0.0; 6];
        let mut rg = [0.0; 6];
        let n = rolling_min(&data, 3, &mut lo);
        rolling_max(&data, 3, &mut hi);
        rolling_range(&data, 3, &mut rg);
        assert_eq!(&lo[..n], &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(&hi[..n], &[4.0, 4.0, 5.0, 9.0]);
        assert_eq!(&rg[..n], &[3.0, 3.0, 4.0, 8.0]);
    }

    #[test]
    fn test_rolling_variance_std() {
        let data = [1.0, 3.0, 1.0, 3.0];
        let mut var = [0.0; 4];
        let mut sd = [0.0; 4];
        let n = rolling_variance(&data, 2, &mut var);
        rolling_std(&data, 2, &mut sd);
        for i in 0..n {
            assert!((var[i] - 1.0).abs() < 1e-12);
            assert!((sd[i] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rolling_moments_mean_std() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let mask = MomentsMask::new(MomentsMask::MEAN | MomentsMask::STD);
        let out = rolling_moments(&data, 3, None, mask);

        let means = out.mean.unwrap();
        let stds = out.std.unwrap();
        assert_eq!(means.len(), 3);
        assert!((means[0] - 2.0).abs() < 1e-10);
        assert!((means[2] - 4.0).abs() < 1e-10);
        assert!((stds[1] - 1.0).abs() < 1e-10);
        assert!(out.skew.is_none());
    }

    #[test]
    fn test_rolling_moments_nan_and_min_periods() {
        let data = vec![1.0, f64::NAN, 3.0, 4.0, 5.0];
        let mask = MomentsMask::new(MomentsMask::MEAN | MomentsMask::COUNT);

        let strict = rolling_moments(&data, 3, None, mask);
        let means = strict.mean.unwrap();
        assert!(means[0].is_nan());
        assert!(means[1].is_nan());
        assert!((means[2] - 4.0).abs() < 1e-10);

        let relaxed = rolling_moments(&data, 3, Some(2), mask);
        let means = relaxed.mean.unwrap();
        let counts = relaxed.count.unwrap();
        assert!((counts[0] - 2.0).abs() < 1e-10);
        assert!((means[0] - 2.0).abs() < 1e-10);
        assert!((means[1] - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_rolling_moments_skew_kurt() {
        let data = vec![0.0, 1.0, 1.0, 1.0, 10.0, 1.0, 1.0];
        let out = rolling_moments(&data, 4, None, MomentsMask::all());

        let skews = out.skew.unwrap();
        // [0,1,1,1] leans left, [1,1,1,10] leans right
        assert!(skews[0] < -0.5, "Expected negative skew, got {}", skews[0]);
        assert!(skews[1] > 0.5, "Expected positive skew, got {}", skews[1]);

        let kurts = out.kurt.unwrap();
        assert!(!kurts[1].is_nan());
    }

    #[test]
    fn test_rolling_moments_flat_window() {
        let data = vec![2.0; 6];
        let out = rolling_moments(&data, 4, None, MomentsMask::all());
        assert_eq!(out.std.as_ref().unwrap()[0], 0.0);
        assert!(out.skew.as_ref().unwrap()[0].is_nan());
        assert!(out.kurt.as_ref().unwrap()[0].is_nan());
    }
}
