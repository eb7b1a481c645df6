//! Sequence layer: selection, structural copies and search
//!
//! Built only on predicate and equality contracts, so these functions accept
//! any `Copy` element, not just the numeric [`Element`](crate::Element) types.

pub mod filter;
pub mod search;
pub mod slice;

pub use filter::{drop_while, filter, partition, take_while};
pub use search::{contains, count_eq, find_index, zip_with_index};
pub use slice::{concat, drop, replicate, reverse, slice, take};
