#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use sortbench::{datagen, Dataset, OrderingKind, SortAlgorithm, ValueDomain};

use super::assert_sorted_permutation;

fn supported_domains(algorithm: SortAlgorithm) -> Vec<ValueDomain> {
    [ValueDomain::Integer, ValueDomain::Float]
        .into_iter()
        .filter(|&domain| algorithm.supports(domain))
        .collect()
}

/// Lengths 0, 1, 2 and a larger N across every supported domain.
pub fn sorts_generated_lengths(algorithm: SortAlgorithm) {
    let mut rng = StdRng::seed_from_u64(7);
    for domain in supported_domains(algorithm) {
        for size in [0usize, 1, 2, 257] {
            let dataset = datagen::generate(size, OrderingKind::Random, domain, &mut rng);
            let sorted = algorithm.sort(&dataset).unwrap();
            assert_eq!(sorted.len(), size);
            assert_sorted_permutation(&dataset, &sorted);
        }
    }
}

/// Already-sorted input comes back as the identical sequence.
pub fn idempotent_on_sorted_input(algorithm: SortAlgorithm) {
    let mut rng = StdRng::seed_from_u64(11);
    for domain in supported_domains(algorithm) {
        let dataset = datagen::generate(300, OrderingKind::Sorted, domain, &mut rng);
        let sorted = algorithm.sort(&dataset).unwrap();
        assert_eq!(sorted, dataset);
    }
}

/// Reverse-sorted and partially-sorted shapes still sort fully.
pub fn sorts_adversarial_shapes(algorithm: SortAlgorithm) {
    let mut rng = StdRng::seed_from_u64(13);
    for domain in supported_domains(algorithm) {
        for characteristic in [OrderingKind::Reverse, OrderingKind::PartiallySorted] {
            let dataset = datagen::generate(200, characteristic, domain, &mut rng);
            let sorted = algorithm.sort(&dataset).unwrap();
            assert_sorted_permutation(&dataset, &sorted);
        }
    }
}

/// All-equal and duplicate-heavy inputs terminate and sort correctly.
pub fn sorts_duplicates(algorithm: SortAlgorithm) {
    let all_equal = Dataset::Integer(vec![42; 17]);
    let sorted = algorithm.sort(&all_equal).unwrap();
    assert_eq!(sorted, all_equal);

    let few_distinct = Dataset::Integer((0..500).map(|i| i % 3).collect());
    let sorted = algorithm.sort(&few_distinct).unwrap();
    assert_sorted_permutation(&few_distinct, &sorted);
}
