//! Set algebra over sorted sequences
//!
//! All operands must already be sorted ascending; this is not checked. The
//! statistical layer sorts private copies before calling in here. `union`,
//! `intersect` and `difference` walk two cursors forward, advancing at least
//! one per step, so they finish in O(n + m) with O(1) extra space.
//!
//! Output minimums: `unique` needs `input.len()`, `union` needs
//! `a.len() + b.len()`, `intersect` needs `min(a.len(), b.len())`,
//! `difference` needs `a.len()`.

/// Collapse runs of equal adjacent values to one element each.
pub fn unique<T>(input: &[T], output: &mut [T]) -> usize
where
    T: Copy + PartialEq,
{
    let mut w = 0;
    for &v in input {
        if w == 0 || output[w - 1] != v {
            output[w] = v;
            w += 1;
        }
    }
    w
}

/// Merge two sorted sequences, emitting shared values once.
pub fn union<T>(a: &[T], b: &[T], output: &mut [T]) -> usize
where
    T: Copy + PartialOrd,
{
    let (mut i, mut j, mut w) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            output[w] = a[i];
            i += 1;
        } else if b[j] < a[i] {
            output[w] = b[j];
            j += 1;
        } else {
            output[w] = a[i];
            i += 1;
            j += 1;
        }
        w += 1;
    }
    for &v in a[i..].iter().chain(&b[j..]) {
        output[w] = v;
        w += 1;
    }
    w
}

/// Values present in both sorted sequences.
pub fn intersect<T>(a: &[T], b: &[T], output: &mut [T]) -> usize
where
    T: Copy + PartialOrd,
{
    let (mut i, mut j, mut w) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            i += 1;
        } else if b[j] < a[i] {
            j += 1;
        } else {
            output[w] = a[i];
            w += 1;
            i += 1;
            j += 1;
        }
    }
    w
}

/// Values of sorted `a` not present in sorted `b`.
pub fn difference<T>(a: &[T], b: &[T], output: &mut [T]) -> usize
where
    T: Copy + PartialOrd,
{
    let (mut i, mut j, mut w) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            output[w] = a[i];
            w += 1;
            i += 1;
        } else if b[j] < a[i] {
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }
    for &v in &a[i..] {
        output[w] = v;
        w += 1;
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique() {
        let mut out = [0i64; 7];
        let n = unique(&[1, 2, 2, 3, 3, 3, 4], &mut out);
        assert_eq!(&out[..n], &[1, 2, 3, 4]);
        assert_eq!(unique::<i64>(&[], &mut out), 0);
    }

    #[test]
    fn test_union_scenario() {
        let a = [1i64, 3, 5, 7, 9];
        let b = [2i64, 3, 5, 8];
        let mut out = [0i64; 9];
        let n = union(&a, &b, &mut out);
        assert_eq!(&out[..n], &[1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_intersect_scenario() {
        let a = [1i64, 3, 5, 7, 9];
        let b = [2i64, 3, 5, 8];
        let mut out = [0i64; 4];
        let n = intersect(&a, &b, &mut out);
        assert_eq!(&out[..n], &[3, 5]);
    }

    #[test]
    fn test_empty_operands() {
        let mut out = [0.0; 3];
        assert_eq!(union(&[], &[1.0, 2.0], &mut out), 2);
        assert_eq!(&out[..2], &[1.0, 2.0]);
        assert_eq!(intersect(&[1.0], &[], &mut out), 0);
    }

    #[test]
    fn test_difference() {
        let mut out = [0i64; 5];
        let n = difference(&[1, 2, 3, 4, 5], &[2, 4, 6], &mut out);
        assert_eq!(&out[..n], &[1, 3, 5]);
    }

    #[test]
    fn test_intersect_self_is_unique() {
        let a = [1i64, 1, 2, 3, 3, 3, 9];
        let mut inter = [0i64; 7];
        let mut uniq = [0i64; 7];
        let ni = intersect(&a, &a, &mut inter);
        let nu = unique(&a, &mut uniq);
        // Duplicates pair up one-to-one, so collapse the intersection too.
        let mut collapsed = [0i64; 7];
        let nc = unique(&inter[..ni], &mut collapsed);
        assert_eq!(&collapsed[..nc], &uniq[..nu]);
    }
}
