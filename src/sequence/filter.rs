//! Predicate-driven selection: filter, partition, take-while, drop-while
//!
//! Outputs must be sized for the worst case (`input.len()`), since how many
//! elements pass is data dependent. Every function returns the number of
//! elements written.

/// Copy the elements satisfying `pred` into `output`, preserving order.
pub fn filter<T, P>(input: &[T], output: &mut [T], pred: P) -> usize
where
    T: Copy,
    P: Fn(&T) -> bool,
{
    let mut w = 0;
    for v in input {
        if pred(v) {
            output[w] = *v;
            w += 1;
        }
    }
    w
}

/// Split `input` into passing and failing elements in a single pass.
///
/// Returns the pass count; the fail count is `input.len() - pass`.
/// Both outputs preserve input order.
pub fn partition<T, P>(input: &[T], out_pass: &mut [T], out_fail: &mut [T], pred: P) -> usize
where
    T: Copy,
    P: Fn(&T) -> bool,
{
    let (mut p, mut f) = (0, 0);
    for v in input {
        if pred(v) {
            out_pass[p] = *v;
            p += 1;
        } else {
            out_fail[f] = *v;
            f += 1;
        }
    }
    p
}

/// Copy the longest prefix satisfying `pred`.
pub fn take_while<T, P>(input: &[T], output: &mut [T], pred: P) -> usize
where
    T: Copy,
    P: Fn(&T) -> bool,
{
    let n = prefix_len(input, pred);
    output[..n].copy_from_slice(&input[..n]);
    n
}

/// Copy everything after the longest prefix satisfying `pred`.
pub fn drop_while<T, P>(input: &[T], output: &mut [T], pred: P) -> usize
where
    T: Copy,
    P: Fn(&T) -> bool,
{
    let skip = prefix_len(input, pred);
    let rest = &input[skip..];
    output[..rest.len()].copy_from_slice(rest);
    rest.len()
}

#[inline]
fn prefix_len<T, P>(input: &[T], pred: P) -> usize
where
    P: Fn(&T) -> bool,
{
    input.iter().position(|v| !pred(v)).unwrap_or(input.len())
}
