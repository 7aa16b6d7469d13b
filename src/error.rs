//! Error types for benchmark configuration and execution.

use thiserror::Error;

/// Errors surfaced while configuring or executing a benchmark run.
///
/// There is no retry path anywhere: every variant is fatal to the run that
/// raised it.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// The configured dataset size range is inverted.
    #[error("invalid dataset size range: min {min} exceeds max {max}")]
    InvalidSizeRange { min: usize, max: usize },

    /// Sizes, characteristics or algorithms resolved to an empty schedule.
    #[error("nothing to benchmark: sizes, characteristics and algorithms must all be non-empty")]
    EmptyPlan,

    /// An (algorithm, data type) pair that can never execute was scheduled.
    #[error("{algorithm} does not support {domain} data and cannot be scheduled")]
    IncompatibleAlgorithm {
        algorithm: &'static str,
        domain: &'static str,
    },

    /// An algorithm received values outside its supported domain at call
    /// time. The driver validates compatibility while planning, so this
    /// indicates a configuration bug rather than a recoverable condition.
    #[error("{algorithm} received input outside its supported domain: {detail}")]
    InvalidInputDomain {
        algorithm: &'static str,
        detail: String,
    },

    /// Writing the header or flushing the sink failed.
    #[error("failed to persist results: {0}")]
    Sink(#[from] std::io::Error),

    /// Writing one result row failed. Partial, unflushed results are not a
    /// useful deliverable, so the run aborts here.
    #[error(
        "failed to write result row for attempt {attempt} \
         ({algorithm}, size {size}, {characteristic}): {source}"
    )]
    SinkWrite {
        attempt: usize,
        algorithm: &'static str,
        size: usize,
        characteristic: &'static str,
        source: std::io::Error,
    },

    /// Output verification found an incorrect sort.
    #[error("sorted output verification failed for {algorithm} (size {size}, {characteristic}): {detail}")]
    VerificationFailed {
        algorithm: &'static str,
        size: usize,
        characteristic: &'static str,
        detail: String,
    },
}
