#![allow(dead_code)]

pub mod algorithm_behavior;

use std::cmp::Ordering;

use sortbench::Dataset;

/// Assert `output` is a non-decreasing permutation of `input`'s multiset.
pub fn assert_sorted_permutation(input: &Dataset, output: &Dataset) {
    assert!(output.is_non_decreasing(), "output is not non-decreasing");
    match (input, output) {
        (Dataset::Integer(before), Dataset::Integer(after)) => {
            let mut expected = before.clone();
            expected.sort_unstable();
            assert_eq!(after, &expected);
        }
        (Dataset::Float(before), Dataset::Float(after)) => {
            let mut expected = before.clone();
            expected.sort_by(|a, b| a.total_cmp(b));
            assert_eq!(after.len(), expected.len());
            for (got, want) in after.iter().zip(expected.iter()) {
                assert_eq!(got.total_cmp(want), Ordering::Equal);
            }
        }
        _ => panic!("output domain differs from input domain"),
    }
}
