use std::cmp::Ordering;

use crate::SortValue;

/// Bucket sort with one bucket per element.
///
/// Bucket index for value v is `floor((v - min) / (max - min + 1) * (n - 1))`
/// computed in f64. The `+ 1` in the span keeps an all-equal dataset
/// (min == max) from dividing by zero; every element then lands in bucket 0.
pub fn bucket_sort<T: SortValue>(values: &[T]) -> Vec<T> {
    if values.is_empty() {
        return Vec::new();
    }

    let mut min = values[0];
    let mut max = values[0];
    for &value in &values[1..] {
        if value.key_cmp(&min) == Ordering::Less {
            min = value;
        }
        if value.key_cmp(&max) == Ordering::Greater {
            max = value;
        }
    }

    let bucket_count = values.len();
    let span = max.as_f64() - min.as_f64() + 1.0;
    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); bucket_count];
    for &value in values {
        let index = ((value.as_f64() - min.as_f64()) / span * (bucket_count - 1) as f64) as usize;
        buckets[index].push(value);
    }

    let mut sorted = Vec::with_capacity(values.len());
    for mut bucket in buckets {
        bucket.sort_by(|a, b| a.key_cmp(b));
        sorted.extend(bucket);
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_empty() {
        assert!(bucket_sort::<i64>(&[]).is_empty());
    }

    #[test]
    fn all_equal_values_terminate_in_bucket_zero() {
        assert_eq!(bucket_sort(&[42i64; 5]), vec![42; 5]);
    }

    #[test]
    fn extremes_stay_in_index_range() {
        assert_eq!(
            bucket_sort(&[1000i64, 0, 500, 999, 1]),
            vec![0, 1, 500, 999, 1000]
        );
    }

    #[test]
    fn sorts_floats() {
        let sorted = bucket_sort(&[3.5f64, 0.1, 999.9, 250.0, 0.1]);
        assert_eq!(sorted, vec![0.1, 0.1, 3.5, 250.0, 999.9]);
    }
}
