//! Grouping and run-length encoding
//!
//! One forward scan: a group opens at the first element, closes when the
//! value changes or the input ends, and is emitted as (value, run length).
//! NaN never equals itself, so each NaN forms its own group.

use crate::element::Element;

/// Emit one (value, count) pair per run of equal adjacent values into two
/// parallel outputs. Both outputs need `input.len()` slots in the worst
/// case. Returns the number of groups.
pub fn group<T>(input: &[T], values_out: &mut [T], counts_out: &mut [usize]) -> usize
where
    T: Copy + PartialEq,
{
    let mut groups = 0;
    for_each_run(input, |value, len| {
        values_out[groups] = value;
        counts_out[groups] = len;
        groups += 1;
    });
    groups
}

/// Interleaved run-length encoding `[v0, n0, v1, n1, ...]`.
///
/// `output` needs `2 * input.len()` slots in the worst case. Returns the
/// number of elements written (twice the number of runs).
pub fn run_length_encode<T: Element>(input: &[T], output: &mut [T]) -> usize {
    let mut w = 0;
    for_each_run(input, |value, len| {
        output[w] = value;
        output[w + 1] = T::from_count(len);
        w += 2;
    });
    w
}

/// Expand (value, count) groups back into a flat sequence.
///
/// `output` needs `counts.iter().sum()` slots. Returns the number written.
pub fn run_length_decode<T: Copy>(values: &[T], counts: &[usize], output: &mut [T]) -> usize {
    debug_assert_eq!(values.len(), counts.len());
    let mut w = 0;
    for (&v, &c) in values.iter().zip(counts) {
        output[w..w + c].fill(v);
        w += c;
    }
    w
}

#[inline]
fn for_each_run<T, F>(input: &[T], mut emit: F)
where
    T: Copy + PartialEq,
    F: FnMut(T, usize),
{
    let Some((&first, rest)) = input.split_first() else {
        return;
    };

    let mut current = first;
    let mut len = 1;
    for &v in rest {
        if v == current {
            len += 1;
        } else {
            emit(current, len);
            current = v;
            len = 1;
        }
    }
    emit(current, len);
}
