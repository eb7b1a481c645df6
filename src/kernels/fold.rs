//! Fused folds: per-element transform and accumulation in one pass
//!
//! These kernels never materialize the intermediate sequence
//! (`x^k`, `a*b`, `|a-b|`). They share the four-lane accumulation
//! strategy of the reductions.

use crate::config::ACCUMULATOR_LANES;
use crate::element::Element;

/// Binary fused-fold operator for [`fused_fold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoldOp {
    /// Σ a[i]², `b` ignored.
    SumSquares,
    /// Σ a[i]·b[i]
    Dot,
    /// Σ |a[i] − b[i]|
    SumAbsDiff,
}

/// Evaluate `op` over `a` (and `b` for the binary operators).
///
/// `a` and `b` must have equal length for `Dot` and `SumAbsDiff`.
pub fn fused_fold<T: Element>(op: FoldOp, a: &[T], b: &[T]) -> T {
    match op {
        FoldOp::SumSquares => sum_squares(a),
        FoldOp::Dot => dot(a, b),
        FoldOp::SumAbsDiff => sum_abs_diff(a, b),
    }
}

#[inline(always)]
fn lane_fold2<T: Element>(a: &[T], b: &[T], term: impl Fn(T, T) -> T) -> T {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len().min(b.len());
    let (a, b) = (&a[..n], &b[..n]);

    let mut acc = [T::zero(); ACCUMULATOR_LANES];
    let ca = a.chunks_exact(ACCUMULATOR_LANES);
    let cb = b.chunks_exact(ACCUMULATOR_LANES);
    let (ta, tb) = (ca.remainder(), cb.remainder());

    for (x, y) in ca.zip(cb) {
        acc[0] = acc[0].acc_add(term(x[0], y[0]));
        acc[1] = acc[1].acc_add(term(x[1], y[1]));
        acc[2] = acc[2].acc_add(term(x[2], y[2]));
        acc[3] = acc[3].acc_add(term(x[3], y[3]));
    }

    let mut total = acc[0].acc_add(acc[1]).acc_add(acc[2].acc_add(acc[3]));
    for (&x, &y) in ta.iter().zip(tb) {
        total = total.acc_add(term(x, y));
    }
    total
}

#[inline(always)]
fn lane_fold1<T: Element>(x: &[T], term: impl Fn(T) -> T) -> T {
    let mut acc = [T::zero(); ACCUMULATOR_LANES];
    let chunks = x.chunks_exact(ACCUMULATOR_LANES);
    let tail = chunks.remainder();

    for c in chunks {
        acc[0] = acc[0].acc_add(term(c[0]));
        acc[1] = acc[1].acc_add(term(c[1]));
        acc[2] = acc[2].acc_add(term(c[2]));
        acc[3] = acc[3].acc_add(term(c[3]));
    }

    let mut total = acc[0].acc_add(acc[1]).acc_add(acc[2].acc_add(acc[3]));
    for &v in tail {
        total = total.acc_add(term(v));
    }
    total
}

/// Power sum Σ x[i]^k. `k == 0` counts the elements.
#[inline]
pub fn power_sum<T: Element>(x: &[T], k: u32) -> T {
    lane_fold1(x, |v| {
        let mut p = T::one();
        for _ in 0..k {
            p = p.acc_mul(v);
        }
        p
    })
}

/// Sum of squares, computed as the self dot product.
#[inline]
pub fn sum_squares<T: Element>(x: &[T]) -> T {
    dot(x, x)
}

/// Dot product Σ a[i]·b[i].
#[inline]
pub fn dot<T: Element>(a: &[T], b: &[T]) -> T {
    lane_fold2(a, b, T::acc_mul)
}

/// Sum of absolute differences Σ |a[i] − b[i]|.
#[inline]
pub fn sum_abs_diff<T: Element>(a: &[T], b: &[T]) -> T {
    lane_fold2(a, b, |x, y| x.acc_sub(y).abs_val())
}
