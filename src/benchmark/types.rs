use crate::algorithms::SortAlgorithm;
use crate::{OrderingKind, ValueDomain};

/// Full configuration for one benchmark run.
///
/// Dataset sizes are drawn uniformly from `[min_size, max_size]` during
/// planning; `num_sizes` fixes how many are drawn. `seed` makes size
/// selection and dataset generation reproducible.
#[derive(Clone)]
pub struct BenchmarkConfig {
    pub min_size: usize,
    pub max_size: usize,
    pub num_sizes: usize,
    pub characteristics: Vec<OrderingKind>,
    pub algorithms: Vec<SortAlgorithm>,
    pub value_domain: ValueDomain,
    pub seed: Option<u64>,
    pub verify: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            min_size: 10_000,
            max_size: 1_000_000,
            num_sizes: 2,
            characteristics: OrderingKind::ALL.to_vec(),
            algorithms: SortAlgorithm::ALL.to_vec(),
            value_domain: ValueDomain::Integer,
            seed: None,
            verify: false,
        }
    }
}

/// One timed (size, characteristic, algorithm) attempt. Immutable once
/// created; the attempt index is unique and monotonic across the run.
#[derive(Clone, Debug)]
pub struct BenchmarkResult {
    pub attempt: usize,
    pub algorithm: SortAlgorithm,
    pub size: usize,
    pub characteristic: OrderingKind,
    pub elapsed_seconds: f64,
    pub value_domain: ValueDomain,
}

/// Results in execution order. Append-only while the run is live; handed
/// wholesale to the consumer once the run finalizes.
#[derive(Default, Debug)]
pub struct ResultCollection {
    results: Vec<BenchmarkResult>,
}

impl ResultCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkResult> {
        self.results.iter()
    }
}
