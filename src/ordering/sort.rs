//! Hybrid in-place quicksort
//!
//! ## Algorithm
//! - Median-of-three pivot (first, middle, last) moved to the front of the
//!   range, then a two-scan partition that stops on equal keys, so runs of
//!   duplicates split evenly instead of degrading to O(n²).
//! - Ranges of `INSERTION_SORT_THRESHOLD` elements or fewer are finished with
//!   insertion sort.
//! - After each partition the smaller side is sorted recursively and the
//!   larger side is handled by the enclosing loop. Every recursive call
//!   therefore covers at most half of its parent's range, bounding the stack
//!   depth by log2(n) regardless of input.
//!
//! The sort is not stable.
//!
//! ## NaN policy
//! [`sort`] first moves every NaN to the high end of the buffer in one pass,
//! then sorts the ordered prefix. NaNs end up after all other values; their
//! relative order is whatever that pass's swaps produce (deterministic for a
//! given input, otherwise unspecified). `-0.0` and `0.0` compare equal.

use crate::config::INSERTION_SORT_THRESHOLD;
use crate::element::Element;

/// Sort `data` ascending in place, NaNs last.
pub fn sort<T: Element>(data: &mut [T]) {
    let ordered = partition_unordered(data);
    sort_by(&mut data[..ordered], &|a: &T, b: &T| a < b);
}

/// Copy `input` into `output` and sort the copy; `input` is untouched.
pub fn sort_copy<T: Element>(input: &[T], output: &mut [T]) {
    let out = &mut output[..input.len()];
    out.copy_from_slice(input);
    sort(out);
}

/// True when `input` is non-decreasing with any NaNs at the end.
pub fn is_sorted<T: Element>(input: &[T]) -> bool {
    let ordered = input
        .iter()
        .position(|v| v.is_unordered())
        .unwrap_or(input.len());
    input[ordered..].iter().all(|v| v.is_unordered())
        && input[..ordered].windows(2).all(|w| !(w[1] < w[0]))
}

/// Sort with a caller-supplied strict weak ordering `less`.
///
/// This is the engine shared by [`sort`] and the generic layer.
pub fn sort_by<T, F>(data: &mut [T], less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    quicksort(data, less);
}

/// Move all unordered values to the tail; returns the ordered prefix length.
fn partition_unordered<T: Element>(data: &mut [T]) -> usize {
    let mut w = 0;
    for i in 0..data.len() {
        if !data[i].is_unordered() {
            data.swap(w, i);
            w += 1;
        }
    }
    w
}

fn quicksort<T, F>(mut v: &mut [T], less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    loop {
        if v.len() <= INSERTION_SORT_THRESHOLD {
            insertion_sort(v, less);
            return;
        }

        let p = partition(v, less);
        let (left, rest) = std::mem::take(&mut v).split_at_mut(p);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quicksort(left, less);
            v = right;
        } else {
            quicksort(right, less);
            v = left;
        }
    }
}

/// Order `v[0]`, `v[mid]`, `v[last]` and leave their median at `v[0]`.
///
/// Afterwards `v[mid] <= v[0] <= v[last]`, which serves as a sentinel for
/// both partition scans.
#[inline]
fn median_of_three<T, F>(v: &mut [T], less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let last = v.len() - 1;
    let mid = last / 2;
    if less(&v[mid], &v[0]) {
        v.swap(mid, 0);
    }
    if less(&v[last], &v[0]) {
        v.swap(last, 0);
    }
    if less(&v[last], &v[mid]) {
        v.swap(last, mid);
    }
    v.swap(0, mid);
}

/// Partition around the median-of-three pivot; returns the pivot's final
/// index. Requires `v.len() >= 3`.
fn partition<T, F>(v: &mut [T], less: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    median_of_three(v, less);

    let mut i = 1;
    let mut j = v.len() - 1;
    loop {
        // v[last] is not less than the pivot, so this scan stops in range.
        while less(&v[i], &v[0]) {
            i += 1;
        }
        // The pivot itself stops this scan.
        while less(&v[0], &v[j]) {
            j -= 1;
        }
        if i >= j {
            break;
        }
        v.swap(i, j);
        i += 1;
        j -= 1;
    }
    v.swap(0, j);
    j
}

fn insertion_sort<T, F>(v: &mut [T], less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
