//! Error type for foldkit operations.
//!
//! Only resource failure is reported through `Err`. Degenerate but valid
//! inputs (empty sequences, zero variance) produce sentinel values instead,
//! and caller-contract violations are not validated.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FpError {
    #[error("scratch allocation of {len} elements failed")]
    AllocationFailed { len: usize },

    #[error("buffer length mismatch: expected at least {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, FpError>;

/// Reserve exactly `len` slots in a fresh vector, reporting failure
/// instead of aborting.
pub(crate) fn try_with_capacity<T>(len: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    if injected_failure() || buf.try_reserve_exact(len).is_err() {
        log::warn!("scratch allocation failed for {} elements", len);
        return Err(FpError::AllocationFailed { len });
    }
    Ok(buf)
}

#[cfg(not(test))]
#[inline(always)]
fn injected_failure() -> bool {
    false
}

#[cfg(test)]
fn injected_failure() -> bool {
    fail_injection::take()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = FpError::AllocationFailed { len: 42 };
        assert_eq!(e.to_string(), "scratch allocation of 42 elements failed");

        let e = FpError::LengthMismatch { expected: 4, got: 2 };
        assert_eq!(e.to_string(), "buffer length mismatch: expected at least 4, got 2");
    }

    #[test]
    fn test_try_with_capacity() {
        let buf: Vec<f64> = try_with_capacity(128).unwrap();
        assert!(buf.capacity() >= 128);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_forced_failure_is_one_shot() {
        fail_injection::fail_next_allocation();
        let err = try_with_capacity::<f64>(8).unwrap_err();
        assert_eq!(err, FpError::AllocationFailed { len: 8 });
        assert!(try_with_capacity::<f64>(8).is_ok());
    }

    #[test]
    fn test_try_with_capacity_overflow() {
        let err = try_with_capacity::<f64>(usize::MAX).unwrap_err();
        assert_eq!(err, FpError::AllocationFailed { len: usize::MAX });
    }
}
