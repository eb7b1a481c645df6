//! Sorted scratch copies for order-dependent statistics
//!
//! Percentiles, quartiles and IQR fences are defined over sorted data but
//! must accept unsorted caller buffers without touching them. Each such
//! statistic acquires a [`SortedCopy`]:
//!
//! 1. reserve exactly `data.len()` slots, failing with
//!    [`FpError::AllocationFailed`] instead of aborting
//! 2. copy the caller's data in
//! 3. sort the copy with [`ordering::sort`](crate::ordering::sort)
//!
//! The buffer is released when the guard drops, which covers success,
//! early return on degenerate input, and `?` propagation alike.

use std::ops::Deref;

use crate::error::{try_with_capacity, Result};
use crate::ordering::sort;

/// Owned, sorted copy of a caller's buffer.
///
/// Usage pattern:
/// ```
/// use foldkit::stats::SortedCopy;
///
/// let data = [5.0, 1.0, 4.0];
/// let sorted = SortedCopy::new(&data).unwrap();
/// assert_eq!(&*sorted, &[1.0, 4.0, 5.0]);
/// assert_eq!(data, [5.0, 1.0, 4.0]);
/// ```
#[derive(Debug)]
pub struct SortedCopy {
    buf: Vec<f64>,
}

impl SortedCopy {
    /// Copy and sort `data` (NaNs last).
    pub fn new(data: &[f64]) -> Result<Self> {
        log::trace!("acquiring sorted scratch of {} elements", data.len());
        let mut buf = try_with_capacity(data.len())?;
        buf.extend_from_slice(data);
        sort(&mut buf);
        Ok(SortedCopy { buf })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.buf
    }
}

impl Deref for SortedCopy {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.buf
    }
}
