//! Sorting with a caller-supplied comparator
//!
//! - [`quicksort`]: copy, then the shared in-place hybrid engine
//!   ([`crate::ordering::sort_by`]). Not stable, no allocation.
//! - [`merge_sort`]: stable bottom-up merge sort, O(n log n) comparisons in
//!   the worst case, O(n) auxiliary space. Preferred when comparisons or
//!   moves are expensive and worst-case bounds matter more than memory.
//!
//! The merge sort first insertion-sorts runs of `INSERTION_SORT_THRESHOLD`
//! elements, then doubles the run width each pass, ping-ponging between
//! `output` and the auxiliary buffer.

use std::cmp::Ordering;

use crate::config::INSERTION_SORT_THRESHOLD;
use crate::error::{try_with_capacity, Result};
use crate::generic::Comparator;
use crate::ordering::sort_by;

/// Sort a copy of `input` into `output[..input.len()]`.
pub fn quicksort<T, C>(input: &[T], output: &mut [T], cmp: C)
where
    T: Clone,
    C: Comparator<T>,
{
    let out = &mut output[..input.len()];
    out.clone_from_slice(input);
    sort_by(out, &|a: &T, b: &T| cmp.compare(a, b) == Ordering::Less);
}

/// Stable sort of `input` into `output[..input.len()]`.
///
/// Allocates an auxiliary buffer of `input.len()` elements and fails with
/// [`FpError::AllocationFailed`](crate::FpError::AllocationFailed) if it
/// cannot; `output` is then left unwritten.
pub fn merge_sort<T, C>(input: &[T], output: &mut [T], cmp: C) -> Result<()>
where
    T: Clone,
    C: Comparator<T>,
{
    if input.len() < 2 {
        output[..input.len()].clone_from_slice(input);
        return Ok(());
    }

    log::trace!("merge_sort: acquiring auxiliary buffer of {} elements", input.len());
    let mut aux = try_with_capacity(input.len())?;
    aux.extend_from_slice(input);
    merge_sort_with_buffer(input, output, &mut aux, cmp);
    Ok(())
}

/// [`merge_sort`] with a caller-provided auxiliary buffer of at least
/// `input.len()` elements. The contents of `aux` afterwards are
/// unspecified.
pub fn merge_sort_with_buffer<T, C>(input: &[T], output: &mut [T], aux: &mut [T], cmp: C)
where
    T: Clone,
    C: Comparator<T>,
{
    let n = input.len();
    let out = &mut output[..n];
    out.clone_from_slice(input);
    if n < 2 {
        return;
    }

    for run in out.chunks_mut(INSERTION_SORT_THRESHOLD) {
        insertion_sort_stable(run, &cmp);
    }

    let mut src: &mut [T] = out;
    let mut dst: &mut [T] = &mut aux[..n];
    let mut in_output = true;

    let mut width = INSERTION_SORT_THRESHOLD;
    while width < n {
        let mut lo = 0;
        while lo < n {
            let mid = (lo + width).min(n);
            let hi = (lo + 2 * width).min(n);
            merge(&src[lo..hi], mid - lo, &mut dst[lo..hi], &cmp);
            lo = hi;
        }
        std::mem::swap(&mut src, &mut dst);
        in_output = !in_output;
        width *= 2;
    }

    if !in_output {
        // src is aux, dst is output
        dst.clone_from_slice(src);
    }
}

/// Merge the sorted halves `src[..mid]` and `src[mid..]` into `dst`.
/// Ties take from the left half.
fn merge<T, C>(src: &[T], mid: usize, dst: &mut [T], cmp: &C)
where
    T: Clone,
    C: Comparator<T>,
{
    let (left, right) = src.split_at(mid);
    let (mut i, mut j) = (0, 0);
    for slot in dst.iter_mut() {
        let take_left = j >= right.len()
            || (i < left.len() && cmp.compare(&right[j], &left[i]) != Ordering::Less);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

fn insertion_sort_stable<T, C>(v: &mut [T], cmp: &C)
where
    C: Comparator<T>,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && cmp.compare(&v[j], &v[j - 1]) == Ordering::Less {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
