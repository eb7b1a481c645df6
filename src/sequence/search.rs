//! Linear search and membership

/// Index of the first element equal to `target`.
pub fn find_index<T: PartialEq>(input: &[T], target: &T) -> Option<usize> {
    input.iter().position(|v| v == target)
}

pub fn contains<T: PartialEq>(input: &[T], target: &T) -> bool {
    find_index(input, target).is_some()
}

/// Number of elements equal to `target`.
pub fn count_eq<T: PartialEq>(input: &[T], target: &T) -> usize {
    input.iter().filter(|v| *v == target).count()
}

/// Interleave `(index, value)` pairs; `output` needs `2 * input.len()` slots.
///
/// Returns the number of elements written.
pub fn zip_with_index(input: &[i64], output: &mut [i64]) -> usize {
    let output = &mut output[..2 * input.len()];
    for (i, (pair, &v)) in output.chunks_exact_mut(2).zip(input).enumerate() {
        pair[0] = i as i64;
        pair[1] = v;
    }
    2 * input.len()
}
