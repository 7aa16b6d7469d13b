use std::cmp::Ordering;

use crate::{Dataset, SortValue};

/// Checks a sorted dataset against the input it came from.
pub trait OutputVerifier {
    fn verify(&self, input: &Dataset, output: &Dataset) -> Result<(), String>;
}

/// Verifies that the output is non-decreasing and a permutation of the
/// input's multiset of values.
pub struct OrderVerifier;

impl OrderVerifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OrderVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputVerifier for OrderVerifier {
    fn verify(&self, input: &Dataset, output: &Dataset) -> Result<(), String> {
        match (input, output) {
            (Dataset::Integer(before), Dataset::Integer(after)) => verify_values(before, after),
            (Dataset::Float(before), Dataset::Float(after)) => verify_values(before, after),
            _ => Err("output domain differs from input domain".to_string()),
        }
    }
}

fn verify_values<T: SortValue>(before: &[T], after: &[T]) -> Result<(), String> {
    if before.len() != after.len() {
        return Err(format!(
            "expected {} elements, found {}",
            before.len(),
            after.len()
        ));
    }

    for (index, pair) in after.windows(2).enumerate() {
        if pair[0].key_cmp(&pair[1]) == Ordering::Greater {
            return Err(format!(
                "sort order violation at element {}: {} > {}",
                index, pair[0], pair[1]
            ));
        }
    }

    let mut expected = before.to_vec();
    expected.sort_by(|a, b| a.key_cmp(b));
    for (rank, (want, got)) in expected.iter().zip(after.iter()).enumerate() {
        if want.key_cmp(got) != Ordering::Equal {
            return Err(format!(
                "output is not a permutation of the input (first divergence at rank {rank}: expected {want}, found {got})"
            ));
        }
    }
    Ok(())
}
