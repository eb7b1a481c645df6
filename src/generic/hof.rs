//! Higher-order functions over arbitrary element types
//!
//! Same shapes as the typed layers: reducers return a value, transforms
//! write into `output` and return the count written.

use crate::generic::Predicate;

/// Left fold: `f(...f(f(init, x0), x1)..., xn-1)`.
pub fn fold<T, A, F>(input: &[T], init: A, f: F) -> A
where
    F: Fn(A, &T) -> A,
{
    input.iter().fold(init, |acc, x| f(acc, x))
}

/// `output[i] = f(&input[i])`. Output capacity ≥ `input.len()`.
pub fn map<T, U, F>(input: &[T], output: &mut [U], f: F) -> usize
where
    F: Fn(&T) -> U,
{
    for (o, x) in output[..input.len()].iter_mut().zip(input) {
        *o = f(x);
    }
    input.len()
}

/// Keep elements passing `pred`, in order. Output capacity ≥ `input.len()`.
pub fn filter<T, P>(input: &[T], output: &mut [T], pred: P) -> usize
where
    T: Clone,
    P: Predicate<T>,
{
    let mut w = 0;
    for x in input {
        if pred.test(x) {
            output[w] = x.clone();
            w += 1;
        }
    }
    w
}

/// Pairwise combine; writes `min(a.len(), b.len())` results.
pub fn zip_with<A, B, U, F>(a: &[A], b: &[B], output: &mut [U], f: F) -> usize
where
    F: Fn(&A, &B) -> U,
{
    let n = a.len().min(b.len());
    for ((o, x), y) in output[..n].iter_mut().zip(a).zip(b) {
        *o = f(x, y);
    }
    n
}

/// Split into passing and failing elements, both in input order.
/// Returns `(pass_count, fail_count)`, which always sum to `input.len()`.
pub fn partition<T, P>(input: &[T], pass: &mut [T], fail: &mut [T], pred: P) -> (usize, usize)
where
    T: Clone,
    P: Predicate<T>,
{
    let (mut p, mut f) = (0, 0);
    for x in input {
        if pred.test(x) {
            pass[p] = x.clone();
            p += 1;
        } else {
            fail[f] = x.clone();
            f += 1;
        }
    }
    (p, f)
}

/// First `min(n, len)` elements.
pub fn take<T: Clone>(input: &[T], n: usize, output: &mut [T]) -> usize {
    let n = n.min(input.len());
    output[..n].clone_from_slice(&input[..n]);
    n
}

/// Everything after the first `n` elements.
pub fn drop<T: Clone>(input: &[T], n: usize, output: &mut [T]) -> usize {
    let rest = &input[n.min(input.len())..];
    output[..rest.len()].clone_from_slice(rest);
    rest.len()
}

pub fn reverse<T: Clone>(input: &[T], output: &mut [T]) -> usize {
    for (o, x) in output[..input.len()].iter_mut().zip(input.iter().rev()) {
        *o = x.clone();
    }
    input.len()
}

/// Index of the first element passing `pred`.
pub fn find<T, P>(input: &[T], pred: P) -> Option<usize>
where
    P: Predicate<T>,
{
    input.iter().position(|x| pred.test(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Trade {
        id: u32,
        qty: i64,
    }

    fn trades() -> Vec<Trade> {
        vec![
            Trade { id: 1, qty: 10 },
            Trade { id: 2, qty: -4 },
            Trade { id: 3, qty: 7 },
            Trade { id: 4, qty: -1 },
        ]
    }

    #[test]
    fn test_fold_sums_field() {
        let total = fold(&trades(), 0i64, |acc, t| acc + t.qty);
        assert_eq!(total, 12);
        assert_eq!(fold(&[] as &[Trade], 5i64, |acc, t| acc + t.qty), 5);
    }

    #[test]
    fn test_map_to_other_type() {
        let mut ids = [0u32; 4];
        assert_eq!(map(&trades(), &mut ids, |t| t.id * 10), 4);
        assert_eq!(ids, [10, 20, 30, 40]);
    }

    #[test]
    fn test_filter_with_captured_context() {
        let min_qty = 5;
        let mut out = vec![Trade::default(); 4];
        let n = filter(&trades(), &mut out, |t: &Trade| t.qty >= min_qty);
        assert_eq!(n, 2);
        assert_eq!(out[0].id, 1);
        assert_eq!(out[1].id, 3);
    }

    #[test]
    fn test_zip_with_shorter_side() {
        let names = ["a", "b", "c"];
        let mut out = vec![String::new(); 3];
        let n = zip_with(&names, &[1usize, 2], &mut out, |s: &&str, k: &usize| s.repeat(*k));
        assert_eq!(n, 2);
        assert_eq!(&out[..n], &["a".to_string(), "bb".to_string()]);
    }

    #[test]
    fn test_partition_complementary() {
        let input = trades();
        let mut buys = vec![Trade::default(); 4];
        let mut sells = vec![Trade::default(); 4];
        let (p, f) = partition(&input, &mut buys, &mut sells, |t: &Trade| t.qty > 0);
        assert_eq!((p, f), (2, 2));
        assert_eq!(buys[..p].iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(sells[..f].iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_take_drop_reverse() {
        let words: Vec<String> = ["x", "y", "z"].iter().map(|s| s.to_string()).collect();
        let mut out = vec![String::new(); 3];

        assert_eq!(take(&words, 2, &mut out), 2);
        assert_eq!(&out[..2], &words[..2]);
        assert_eq!(take(&words, 10, &mut out), 3);

        assert_eq!(drop(&words, 1, &mut out), 2);
        assert_eq!(&out[..2], &words[1..]);
        assert_eq!(drop(&words, 5, &mut out), 0);

        assert_eq!(reverse(&words, &mut out), 3);
        assert_eq!(out, vec!["z".to_string(), "y".to_string(), "x".to_string()]);
    }

    #[test]
    fn test_find() {
        let input = trades();
        assert_eq!(find(&input, |t: &Trade| t.qty < 0), Some(1));
        assert_eq!(find(&input, |t: &Trade| t.qty > 100), None);
    }
}
