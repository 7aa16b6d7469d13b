use std::time::Instant;

use crate::algorithms::SortAlgorithm;
use crate::error::BenchmarkError;
use crate::Dataset;

/// A sorted dataset together with how long the sort took.
pub struct TimedSort {
    pub sorted: Dataset,
    pub elapsed_seconds: f64,
}

/// Run `algorithm` over `dataset` under a monotonic clock.
///
/// The timed region covers only the sort call; dataset generation and result
/// handling happen outside it.
pub fn measure(algorithm: SortAlgorithm, dataset: &Dataset) -> Result<TimedSort, BenchmarkError> {
    let start = Instant::now();
    let sorted = algorithm.sort(dataset)?;
    let elapsed_seconds = start.elapsed().as_secs_f64();
    Ok(TimedSort {
        sorted,
        elapsed_seconds,
    })
}
