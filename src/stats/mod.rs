//! Statistical composition layer (f64)
//!
//! Statistics are closed-form arithmetic over kernel reductions and fused
//! folds. Order-dependent statistics (percentiles, quartiles, IQR outliers)
//! work on a private sorted copy so the caller's buffer is never modified.

pub mod correlation;
pub mod moments;
pub mod moving_average;
pub mod outliers;
pub mod percentile;
pub mod regression;
pub mod rolling;
pub mod scratch;

pub use correlation::{correlation, covariance};
pub use moments::{
    descriptive_stats, mean, moments, sample_variance, std_dev, variance, DescriptiveStats,
};
pub use moving_average::{ema, sma, wma};
pub use outliers::{detect_outliers, detect_outliers_iqr, detect_outliers_zscore, OutlierMethod};
pub use percentile::{
    median, percentile, percentile_sorted, percentiles, quartiles, quartiles_sorted, Quartiles,
};
pub use regression::{linear_regression, LinearRegression};
pub use rolling::{
    rolling_max, rolling_mean, rolling_min, rolling_moments, rolling_range, rolling_reduce,
    rolling_std, rolling_sum, rolling_variance, MomentsMask, RollingMoments,
};
pub use scratch::SortedCopy;
