//! Ordering and set layer: sorting, sorted-set algebra, grouping, generators

pub mod generate;
pub mod group;
pub mod set;
pub mod sort;

pub use generate::{arithmetic_sequence, geometric_sequence, range};
pub use group::{group, run_length_decode, run_length_encode};
pub use set::{difference, intersect, union, unique};
pub use sort::{is_sorted, sort, sort_by, sort_copy};
