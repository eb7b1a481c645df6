//! Generic layer: the sequence and ordering operations over any `Clone`
//! element type, driven by caller callbacks.
//!
//! Callbacks are plain closures. [`Comparator`] and [`Predicate`] are
//! blanket-implemented for the matching `Fn` signatures, so whatever a
//! closure captures plays the role of the callback context. Callbacks must
//! be pure and must not re-enter the operation that calls them; a
//! comparator must be a strict weak ordering. None of this can be checked
//! here, and a comparator that breaks it yields an unspecified (but
//! memory-safe) permutation.
//!
//! Inputs are borrowed immutably; results go to caller-provided outputs
//! sized at least as large as the documented worst case.

use std::cmp::Ordering;

pub mod hof;
pub mod sort;

pub use hof::{drop, filter, find, fold, map, partition, reverse, take, zip_with};
pub use sort::{merge_sort, merge_sort_with_buffer, quicksort};

/// Three-way comparison of two elements.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Boolean test of one element.
pub trait Predicate<T: ?Sized> {
    fn test(&self, x: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, x: &T) -> bool {
        self(x)
    }
}
