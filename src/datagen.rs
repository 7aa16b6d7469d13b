//! Synthetic dataset generation.

use rand::Rng;

use crate::{Dataset, OrderingKind, SortValue, ValueDomain};

/// Inclusive upper bound for generated integers.
const INTEGER_MAX: i64 = 1000;

/// Exclusive upper bound for generated floats.
const FLOAT_MAX: f64 = 1000.0;

/// Draw `size` uniform samples from `domain` and shape them with
/// `characteristic`. Every call produces an independent dataset; `size = 0`
/// yields an empty one.
pub fn generate(
    size: usize,
    characteristic: OrderingKind,
    domain: ValueDomain,
    rng: &mut impl Rng,
) -> Dataset {
    match domain {
        ValueDomain::Integer => {
            let values = (0..size).map(|_| rng.random_range(0..=INTEGER_MAX)).collect();
            Dataset::Integer(apply_characteristic(values, characteristic))
        }
        ValueDomain::Float => {
            let values = (0..size).map(|_| rng.random_range(0.0..FLOAT_MAX)).collect();
            Dataset::Float(apply_characteristic(values, characteristic))
        }
    }
}

fn apply_characteristic<T: SortValue>(mut values: Vec<T>, characteristic: OrderingKind) -> Vec<T> {
    match characteristic {
        OrderingKind::Random => {}
        OrderingKind::Sorted => values.sort_by(|a, b| a.key_cmp(b)),
        OrderingKind::Reverse => values.sort_by(|a, b| b.key_cmp(a)),
        OrderingKind::PartiallySorted => {
            // First half ascending, second half left as drawn.
            let half = values.len() / 2;
            values[..half].sort_by(|a, b| a.key_cmp(b));
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_size_yields_empty_dataset() {
        let mut rng = StdRng::seed_from_u64(1);
        for domain in [ValueDomain::Integer, ValueDomain::Float] {
            let dataset = generate(0, OrderingKind::Random, domain, &mut rng);
            assert!(dataset.is_empty());
        }
    }

    #[test]
    fn integer_values_stay_in_domain() {
        let mut rng = StdRng::seed_from_u64(2);
        let dataset = generate(5000, OrderingKind::Random, ValueDomain::Integer, &mut rng);
        match dataset {
            Dataset::Integer(values) => {
                assert_eq!(values.len(), 5000);
                assert!(values.iter().all(|&v| (0..=INTEGER_MAX).contains(&v)));
            }
            Dataset::Float(_) => panic!("expected integer dataset"),
        }
    }

    #[test]
    fn float_values_stay_in_domain() {
        let mut rng = StdRng::seed_from_u64(3);
        let dataset = generate(5000, OrderingKind::Random, ValueDomain::Float, &mut rng);
        match dataset {
            Dataset::Float(values) => {
                assert_eq!(values.len(), 5000);
                assert!(values.iter().all(|&v| (0.0..FLOAT_MAX).contains(&v)));
            }
            Dataset::Integer(_) => panic!("expected float dataset"),
        }
    }

    #[test]
    fn sorted_characteristic_is_non_decreasing() {
        let mut rng = StdRng::seed_from_u64(4);
        let dataset = generate(500, OrderingKind::Sorted, ValueDomain::Integer, &mut rng);
        assert!(dataset.is_non_decreasing());
    }

    #[test]
    fn reverse_characteristic_is_non_increasing() {
        let mut rng = StdRng::seed_from_u64(5);
        match generate(500, OrderingKind::Reverse, ValueDomain::Integer, &mut rng) {
            Dataset::Integer(values) => {
                assert!(values.windows(2).all(|pair| pair[0] >= pair[1]));
            }
            Dataset::Float(_) => panic!("expected integer dataset"),
        }
    }

    #[test]
    fn partially_sorted_prefix_is_non_decreasing() {
        let mut rng = StdRng::seed_from_u64(6);
        match generate(10, OrderingKind::PartiallySorted, ValueDomain::Integer, &mut rng) {
            Dataset::Integer(values) => {
                assert_eq!(values.len(), 10);
                assert!(values[..5].windows(2).all(|pair| pair[0] <= pair[1]));
            }
            Dataset::Float(_) => panic!("expected integer dataset"),
        }
    }
}
