//! Kernel layer: reductions, fused folds, elementwise transforms, scans

pub mod fold;
pub mod reduce;
pub mod transform;

pub use fold::{dot, fused_fold, power_sum, sum_abs_diff, sum_squares, FoldOp};
pub use reduce::{all, all_zip, any, count, max, min, product, reduce, sum, ReduceOp};
pub use transform::{
    abs, axpy, clamp, offset, scale, scan_add, sqrt, transform, transform_in_place, zip_add,
    zip_with,
};
