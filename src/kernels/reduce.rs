//! Reductions: sum, product, max/min and short-circuit boolean folds
//!
//! Sum and product use four interleaved partial accumulators combined as
//! `(a0 + a1) + (a2 + a3)` before folding in the tail. For `i64` the result
//! is exact (wrapping arithmetic is associative). For `f64` the result is
//! reproducible for a given input but may differ in the low bits from a
//! naive left-to-right loop.

use crate::config::ACCUMULATOR_LANES;
use crate::element::Element;

/// Reduction operator for [`reduce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReduceOp {
    Add,
    Mul,
    Min,
    Max,
}

/// Reduce `input` with `op`.
///
/// Returns `None` only for `Min`/`Max` over an empty input. `Add` and `Mul`
/// return their identity (0 and 1) when empty.
pub fn reduce<T: Element>(op: ReduceOp, input: &[T]) -> Option<T> {
    match op {
        ReduceOp::Add => Some(sum(input)),
        ReduceOp::Mul => Some(product(input)),
        ReduceOp::Min => min(input),
        ReduceOp::Max => max(input),
    }
}

/// Interleaved-lane fold shared by `sum` and `product`.
#[inline(always)]
fn lane_fold<T: Element>(input: &[T], identity: T, combine: impl Fn(T, T) -> T) -> T {
    let mut acc = [identity; ACCUMULATOR_LANES];
    let chunks = input.chunks_exact(ACCUMULATOR_LANES);
    let tail = chunks.remainder();

    for c in chunks {
        acc[0] = combine(acc[0], c[0]);
        acc[1] = combine(acc[1], c[1]);
        acc[2] = combine(acc[2], c[2]);
        acc[3] = combine(acc[3], c[3]);
    }

    let mut total = combine(combine(acc[0], acc[1]), combine(acc[2], acc[3]));
    for &v in tail {
        total = combine(total, v);
    }
    total
}

/// Sum of all elements (NaN propagates).
#[inline]
pub fn sum<T: Element>(input: &[T]) -> T {
    lane_fold(input, T::zero(), T::acc_add)
}

/// Product of all elements.
#[inline]
pub fn product<T: Element>(input: &[T]) -> T {
    lane_fold(input, T::one(), T::acc_mul)
}

/// Largest element, `None` when empty. Any NaN makes the result NaN.
pub fn max<T: Element>(input: &[T]) -> Option<T> {
    let (&first, rest) = input.split_first()?;
    Some(rest.iter().fold(first, |acc, &v| acc.max_of(v)))
}

/// Smallest element, `None` when empty. Any NaN makes the result NaN.
pub fn min<T: Element>(input: &[T]) -> Option<T> {
    let (&first, rest) = input.split_first()?;
    Some(rest.iter().fold(first, |acc, &v| acc.min_of(v)))
}

// ============================================================================
// Boolean reductions
// ============================================================================

/// True when every element satisfies `pred`; stops at the first failure.
/// Vacuously true on empty input.
#[inline]
pub fn all<T, P>(input: &[T], pred: P) -> bool
where
    P: Fn(&T) -> bool,
{
    for v in input {
        if !pred(v) {
            return false;
        }
    }
    true
}

/// True when some element satisfies `pred`; stops at the first success.
/// False on empty input.
#[inline]
pub fn any<T, P>(input: &[T], pred: P) -> bool
where
    P: Fn(&T) -> bool,
{
    for v in input {
        if pred(v) {
            return true;
        }
    }
    false
}

/// Pairwise `all` over two equal-length inputs.
pub fn all_zip<T, P>(a: &[T], b: &[T], pred: P) -> bool
where
    P: Fn(&T, &T) -> bool,
{
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).all(|(x, y)| pred(x, y))
}

/// Number of elements satisfying `pred`.
pub fn count<T, P>(input: &[T], pred: P) -> usize
where
    P: Fn(&T) -> bool,
{
    input.iter().filter(|v| pred(*v)).count()
}
