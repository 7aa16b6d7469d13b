//! The fixed set of sorting strategies under benchmark.

mod adaptive;
mod bucket;
mod heap;
mod merge;
mod quick;
mod radix;

pub use adaptive::adaptive_sort;
pub use bucket::bucket_sort;
pub use heap::heap_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use radix::radix_sort;

use std::fmt;

use crate::error::BenchmarkError;
use crate::{Dataset, SortValue, ValueDomain};

/// One case per benchmarked algorithm. The set is closed: result-handling
/// code matches on it exhaustively instead of looking strategies up by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Quick,
    Merge,
    Adaptive,
    Bucket,
    Radix,
    Heap,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
        SortAlgorithm::Adaptive,
        SortAlgorithm::Bucket,
        SortAlgorithm::Radix,
        SortAlgorithm::Heap,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Adaptive => "Adaptive Sort",
            SortAlgorithm::Bucket => "Bucket Sort",
            SortAlgorithm::Radix => "Radix Sort",
            SortAlgorithm::Heap => "Heap Sort",
        }
    }

    /// Whether the algorithm can execute over datasets from `domain`.
    /// Radix sort only handles non-negative integers.
    pub fn supports(&self, domain: ValueDomain) -> bool {
        match self {
            SortAlgorithm::Radix => domain == ValueDomain::Integer,
            _ => true,
        }
    }

    /// All algorithms valid for `domain`, in enumeration order.
    pub fn supporting(domain: ValueDomain) -> Vec<SortAlgorithm> {
        Self::ALL
            .into_iter()
            .filter(|algorithm| algorithm.supports(domain))
            .collect()
    }

    /// Sort `dataset` into a fresh, non-decreasing dataset holding the same
    /// multiset of values.
    pub fn sort(&self, dataset: &Dataset) -> Result<Dataset, BenchmarkError> {
        match dataset {
            Dataset::Integer(values) => match self {
                SortAlgorithm::Radix => Ok(Dataset::Integer(radix_sort(values)?)),
                _ => Ok(Dataset::Integer(self.sort_comparable(values))),
            },
            Dataset::Float(values) => match self {
                SortAlgorithm::Radix => Err(BenchmarkError::InvalidInputDomain {
                    algorithm: self.name(),
                    detail: "floating-point datasets are not supported".to_string(),
                }),
                _ => Ok(Dataset::Float(self.sort_comparable(values))),
            },
        }
    }

    fn sort_comparable<T: SortValue>(&self, values: &[T]) -> Vec<T> {
        match self {
            SortAlgorithm::Quick => quick_sort(values),
            SortAlgorithm::Merge => merge_sort(values),
            SortAlgorithm::Adaptive => adaptive_sort(values),
            SortAlgorithm::Bucket => bucket_sort(values),
            SortAlgorithm::Heap => heap_sort(values),
            SortAlgorithm::Radix => unreachable!("radix sort dispatches through sort()"),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
