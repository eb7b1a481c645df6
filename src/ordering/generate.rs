//! Unfold-style generators
//!
//! Generators take no input sequence; they fill a caller-sized output from a
//! seed and a step or factor in O(n) with O(1) state.

use crate::element::Element;

/// `[start, start + step, start + 2·step, ...]` for `output.len()` terms.
pub fn arithmetic_sequence<T: Element>(output: &mut [T], start: T, step: T) {
    let mut v = start;
    for o in output.iter_mut() {
        *o = v;
        v = v.acc_add(step);
    }
}

/// `[start, start·factor, start·factor², ...]` for `output.len()` terms.
pub fn geometric_sequence<T: Element>(output: &mut [T], start: T, factor: T) {
    let mut v = start;
    for o in output.iter_mut() {
        *o = v;
        v = v.acc_mul(factor);
    }
}

/// Half-open integer range `[start, end)`.
///
/// Writes `max(0, end - start)` values and returns that count; `output`
/// must have room for them.
pub fn range(output: &mut [i64], start: i64, end: i64) -> usize {
    if end <= start {
        return 0;
    }
    let n = end.abs_diff(start) as usize;
    arithmetic_sequence(&mut output[..n], start, 1);
    n
}
