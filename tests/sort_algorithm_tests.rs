mod common;

use common::algorithm_behavior as behavior;
use sortbench::{Dataset, SortAlgorithm};

fn full_contract(algorithm: SortAlgorithm) {
    behavior::sorts_generated_lengths(algorithm);
    behavior::idempotent_on_sorted_input(algorithm);
    behavior::sorts_adversarial_shapes(algorithm);
    behavior::sorts_duplicates(algorithm);
}

#[test]
fn quick_sort_contract() {
    full_contract(SortAlgorithm::Quick);
}

#[test]
fn merge_sort_contract() {
    full_contract(SortAlgorithm::Merge);
}

#[test]
fn adaptive_sort_contract() {
    full_contract(SortAlgorithm::Adaptive);
}

#[test]
fn bucket_sort_contract() {
    full_contract(SortAlgorithm::Bucket);
}

#[test]
fn radix_sort_contract() {
    full_contract(SortAlgorithm::Radix);
}

#[test]
fn heap_sort_contract() {
    full_contract(SortAlgorithm::Heap);
}

#[test]
fn radix_sort_known_sequence() {
    let input = Dataset::Integer(vec![170, 45, 75, 90, 802, 24, 2, 66]);
    let sorted = SortAlgorithm::Radix.sort(&input).unwrap();
    assert_eq!(sorted, Dataset::Integer(vec![2, 24, 45, 66, 75, 90, 170, 802]));
}

#[test]
fn radix_sort_rejects_float_datasets() {
    let input = Dataset::Float(vec![1.0, 2.0]);
    assert!(SortAlgorithm::Radix.sort(&input).is_err());
}

#[test]
fn radix_sort_rejects_negative_values() {
    let input = Dataset::Integer(vec![3, -1, 2]);
    assert!(SortAlgorithm::Radix.sort(&input).is_err());
}

#[test]
fn bucket_sort_all_equal_dataset() {
    let input = Dataset::Integer(vec![42; 5]);
    let sorted = SortAlgorithm::Bucket.sort(&input).unwrap();
    assert_eq!(sorted, Dataset::Integer(vec![42, 42, 42, 42, 42]));
}

#[test]
fn algorithm_names_are_unique() {
    let names: std::collections::HashSet<_> =
        SortAlgorithm::ALL.iter().map(|a| a.name()).collect();
    assert_eq!(names.len(), SortAlgorithm::ALL.len());
}
