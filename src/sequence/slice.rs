//! Structural operations: take, drop, slice, reverse, concat, replicate

/// Copy the first `count` elements (fewer if the input is shorter).
pub fn take<T: Copy>(input: &[T], output: &mut [T], count: usize) -> usize {
    let n = count.min(input.len());
    output[..n].copy_from_slice(&input[..n]);
    n
}

/// Copy everything after the first `count` elements.
pub fn drop<T: Copy>(input: &[T], output: &mut [T], count: usize) -> usize {
    let rest = &input[count.min(input.len())..];
    output[..rest.len()].copy_from_slice(rest);
    rest.len()
}

/// Copy `input[start..end]`.
///
/// Requires `start <= end <= input.len()`; `start == end` is a valid empty
/// slice. Violations panic on the out-of-range index.
pub fn slice<T: Copy>(input: &[T], output: &mut [T], start: usize, end: usize) -> usize {
    debug_assert!(start <= end && end <= input.len());
    let src = &input[start..end];
    output[..src.len()].copy_from_slice(src);
    src.len()
}

/// Write `input` in reverse order.
pub fn reverse<T: Copy>(input: &[T], output: &mut [T]) {
    for (o, v) in output[..input.len()].iter_mut().zip(input.iter().rev()) {
        *o = *v;
    }
}

/// Write `a` followed by `b`; `output` needs `a.len() + b.len()` slots.
pub fn concat<T: Copy>(a: &[T], b: &[T], output: &mut [T]) -> usize {
    let (head, tail) = output.split_at_mut(a.len());
    head.copy_from_slice(a);
    tail[..b.len()].copy_from_slice(b);
    a.len() + b.len()
}

/// Fill `output` with `value`.
pub fn replicate<T: Copy>(output: &mut [T], value: T) {
    output.fill(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_drop() {
        let input = [1i64, 2, 3, 4, 5];
        let mut out = [0i64; 5];
        assert_eq!(take(&input, &mut out, 2), 2);
        assert_eq!(&out[..2], &[1, 2]);
        assert_eq!(take(&input, &mut out, 99), 5);

        let n = drop(&input, &mut out, 3);
        assert_eq!(&out[..n], &[4, 5]);
        assert_eq!(drop(&input, &mut out, 99), 0);
    }

    #[test]
    fn test_slice_empty_is_valid() {
        let input = [1.0, 2.0, 3.0];
        let mut out = [0.0; 3];
        assert_eq!(slice(&input, &mut out, 2, 2), 0);
        let n = slice(&input, &mut out, 1, 3);
        assert_eq!(&out[..n], &[2.0, 3.0]);
    }

    #[test]
    #[should_panic]
    fn test_slice_end_past_input_panics() {
        let mut out = [0i64; 8];
        slice(&[1i64, 2], &mut out, 0, 5);
    }

    #[test]
    fn test_reverse() {
        let mut out = [0i64; 4];
        reverse(&[1i64, 2, 3, 4], &mut out);
        assert_eq!(out, [4, 3, 2, 1]);
    }

    #[test]
    fn test_concat_replicate() {
        let mut out = [0i64; 5];
        assert_eq!(concat(&[1i64, 2], &[3, 4, 5], &mut out), 5);
        assert_eq!(out, [1, 2, 3, 4, 5]);

        replicate(&mut out, 7);
        assert_eq!(out, [7; 5]);
    }
}
