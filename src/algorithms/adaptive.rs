use crate::SortValue;

/// The run-aware adaptive entry in the benchmark set: delegates to the
/// standard library's stable sort, which detects and merges existing
/// ascending runs (linear on already-sorted input).
pub fn adaptive_sort<T: SortValue>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.key_cmp(b));
    sorted
}
