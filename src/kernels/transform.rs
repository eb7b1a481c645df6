//! Elementwise transforms and prefix scan
//!
//! Transform shape: `(input, output)`, input read-only, output written for
//! the first `input.len()` slots. `output` must be at least as long as
//! `input`.

use crate::element::Element;

/// Map `f` over `input` into `output`.
#[inline]
pub fn transform<T, U, F>(input: &[T], output: &mut [U], f: F)
where
    T: Copy,
    F: Fn(T) -> U,
{
    debug_assert!(output.len() >= input.len());
    for (o, &v) in output[..input.len()].iter_mut().zip(input) {
        *o = f(v);
    }
}

/// Map `f` over a buffer the caller explicitly hands over for in-place use.
#[inline]
pub fn transform_in_place<T, F>(data: &mut [T], f: F)
where
    T: Copy,
    F: Fn(T) -> T,
{
    for v in data.iter_mut() {
        *v = f(*v);
    }
}

/// Combine two equal-length inputs elementwise.
#[inline]
pub fn zip_with<T, U, F>(a: &[T], b: &[T], output: &mut [U], f: F)
where
    T: Copy,
    F: Fn(T, T) -> U,
{
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    for ((o, &x), &y) in output[..n].iter_mut().zip(a).zip(&b[..n]) {
        *o = f(x, y);
    }
}

/// out[i] = c · x[i]
pub fn scale<T: Element>(input: &[T], output: &mut [T], c: T) {
    transform(input, output, |v| v.acc_mul(c));
}

/// out[i] = x[i] + c
pub fn offset<T: Element>(input: &[T], output: &mut [T], c: T) {
    transform(input, output, |v| v.acc_add(c));
}

/// out[i] = c · x[i] + y[i]
pub fn axpy<T: Element>(x: &[T], y: &[T], output: &mut [T], c: T) {
    zip_with(x, y, output, |a, b| c.acc_mul(a).acc_add(b));
}

/// out[i] = a[i] + b[i]
pub fn zip_add<T: Element>(a: &[T], b: &[T], output: &mut [T]) {
    zip_with(a, b, output, T::acc_add);
}

/// Clamp every element into `[lo, hi]`. NaN passes through unchanged.
pub fn clamp<T: Element>(input: &[T], output: &mut [T], lo: T, hi: T) {
    debug_assert!(!(hi < lo));
    transform(input, output, |v| {
        if v < lo {
            lo
        } else if v > hi {
            hi
        } else {
            v
        }
    });
}

/// Absolute value (wrapping for `i64::MIN`).
pub fn abs<T: Element>(input: &[T], output: &mut [T]) {
    transform(input, output, T::abs_val);
}

/// Square root; negative inputs yield NaN.
pub fn sqrt(input: &[f64], output: &mut [f64]) {
    transform(input, output, f64::sqrt);
}

/// Inclusive prefix sum: out[i] = x[0] + ... + x[i].
pub fn scan_add<T: Element>(input: &[T], output: &mut [T]) {
    let mut acc = T::zero();
    for (o, &v) in output[..input.len()].iter_mut().zip(input) {
        acc = acc.acc_add(v);
        *o = acc;
    }
}
