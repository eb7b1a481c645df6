//! Tuning constants shared across layers.
//!
//! The library has no runtime configuration; per-call behaviour is selected
//! through parameter types such as `OutlierMethod` and `MomentsMask`.

/// Subranges at or below this length are finished with insertion sort.
pub const INSERTION_SORT_THRESHOLD: usize = 16;

/// Number of interleaved partial accumulators used by reductions.
pub const ACCUMULATOR_LANES: usize = 4;

/// Denominators below this magnitude are treated as zero (regression).
pub const DEGENERATE_EPSILON: f64 = 1e-15;

/// Variances at or below this value are treated as zero (higher moments).
pub const VARIANCE_EPSILON: f64 = 1e-14;

/// Conventional Tukey fence multiplier.
pub const DEFAULT_IQR_FACTOR: f64 = 1.5;

/// Conventional z-score cutoff.
pub const DEFAULT_ZSCORE_THRESHOLD: f64 = 3.0;
