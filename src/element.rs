//! Numeric element types accepted by the typed kernels.
//!
//! Exactly two types implement [`Element`]: `i64` and `f64`. Integer
//! accumulation wraps on overflow, so integer reductions are exact and
//! independent of accumulation order. Float accumulation follows IEEE 754.

use std::fmt::Debug;

use num_traits::{AsPrimitive, One, Zero};

mod sealed {
    pub trait Sealed {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

pub trait Element: Copy + PartialOrd + Debug + Zero + One + AsPrimitive<f64> + sealed::Sealed {
    /// Accumulating addition (wrapping for integers).
    fn acc_add(self, rhs: Self) -> Self;
    /// Accumulating subtraction (wrapping for integers).
    fn acc_sub(self, rhs: Self) -> Self;
    /// Accumulating multiplication (wrapping for integers).
    fn acc_mul(self, rhs: Self) -> Self;
    fn abs_val(self) -> Self;
    /// True for values outside the total order (NaN).
    fn is_unordered(self) -> bool;
    /// Larger of two values; NaN wins.
    fn max_of(self, rhs: Self) -> Self;
    /// Smaller of two values; NaN wins.
    fn min_of(self, rhs: Self) -> Self;
    fn from_count(n: usize) -> Self;
}

impl Element for i64 {
    #[inline(always)]
    fn acc_add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    #[inline(always)]
    fn acc_sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }

    #[inline(always)]
    fn acc_mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }

    #[inline(always)]
    fn abs_val(self) -> Self {
        self.wrapping_abs()
    }

    #[inline(always)]
    fn is_unordered(self) -> bool {
        false
    }

    #[inline(always)]
    fn max_of(self, rhs: Self) -> Self {
        self.max(rhs)
    }

    #[inline(always)]
    fn min_of(self, rhs: Self) -> Self {
        self.min(rhs)
    }

    #[inline(always)]
    fn from_count(n: usize) -> Self {
        n as i64
    }
}

impl Element for f64 {
    #[inline(always)]
    fn acc_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn acc_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline(always)]
    fn acc_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn abs_val(self) -> Self {
        self.abs()
    }

    #[inline(always)]
    fn is_unordered(self) -> bool {
        self.is_nan()
    }

    #[inline(always)]
    fn max_of(self, rhs: Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            f64::NAN
        } else if rhs > self {
            rhs
        } else {
            self
        }
    }

    #[inline(always)]
    fn min_of(self, rhs: Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            f64::NAN
        } else if rhs < self {
            rhs
        } else {
            self
        }
    }

    #[inline(always)]
    fn from_count(n: usize) -> Self {
        n as f64
    }
}
