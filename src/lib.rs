//! foldkit: pure functional array-processing kernels
//!
//! Every operation borrows its inputs immutably and either returns a value
//! or writes into a caller-provided output slice, returning how many
//! elements it wrote. Nothing is mutated in place except by the explicit
//! `sort`/`transform_in_place` entry points.
//!
//! Layers, bottom up:
//! - [`kernels`]: reductions, fused folds, elementwise transforms, scans
//! - [`sequence`]: filter/partition/take/drop/slice/reverse/search
//! - [`ordering`]: hybrid quicksort, sorted-set algebra, grouping, generators
//! - [`stats`]: descriptive statistics, percentiles, regression, outliers,
//!   rolling windows; order-dependent statistics sort a private copy
//! - [`generic`]: the same shapes over any `Clone` type with closure callbacks

pub mod config;
pub mod element;
pub mod error;
pub mod generic;
pub mod kernels;
pub mod ordering;
pub mod sequence;
pub mod stats;

pub use element::Element;
pub use error::{FpError, Result};
pub use kernels::{dot, max, min, product, sum};
pub use ordering::{sort, sort_copy};
pub use stats::{
    descriptive_stats, linear_regression, mean, percentile, DescriptiveStats, LinearRegression,
    Quartiles,
};
