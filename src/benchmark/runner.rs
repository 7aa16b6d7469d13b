use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithms::SortAlgorithm;
use crate::datagen;
use crate::error::BenchmarkError;
use crate::OrderingKind;

use super::reporting::ResultConsumer;
use super::sink::ResultSink;
use super::timing;
use super::types::{BenchmarkConfig, BenchmarkResult, ResultCollection};
use super::verification::{OrderVerifier, OutputVerifier};

/// Driver lifecycle. `Done` is terminal; the collection is immutable past it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunnerState {
    Idle,
    Configuring,
    Running,
    Finalizing,
    Done,
}

/// The validated schedule for one run: the drawn sizes crossed with the
/// configured characteristics and algorithms.
#[derive(Clone, Debug)]
pub struct BenchmarkPlan {
    pub sizes: Vec<usize>,
    pub characteristics: Vec<OrderingKind>,
    pub algorithms: Vec<SortAlgorithm>,
}

impl BenchmarkPlan {
    pub fn planned_attempts(&self) -> usize {
        self.sizes.len() * self.characteristics.len() * self.algorithms.len()
    }
}

/// Sequential benchmark driver.
///
/// Runs the full (size, characteristic, algorithm) cross-product with sizes
/// outermost and algorithms innermost, generating a fresh dataset per
/// combination so no algorithm ever sees a dataset another attempt touched.
/// Results stream to the sink as they are produced and accumulate in the
/// collection handed to the consumer during finalization.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    state: RunnerState,
    plan: Option<BenchmarkPlan>,
    rng: StdRng,
    consumer: Option<Box<dyn ResultConsumer>>,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            state: RunnerState::Idle,
            plan: None,
            rng,
            consumer: None,
        }
    }

    pub fn set_consumer(&mut self, consumer: Box<dyn ResultConsumer>) {
        self.consumer = Some(consumer);
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    /// Validate the configuration and draw this run's dataset sizes.
    ///
    /// Incompatible (algorithm, data type) pairs are rejected here so they
    /// can never be discovered mid-run.
    pub fn plan(&mut self) -> Result<BenchmarkPlan, BenchmarkError> {
        assert!(
            matches!(self.state, RunnerState::Idle | RunnerState::Configuring),
            "plan() may only be called before the run starts"
        );
        self.state = RunnerState::Configuring;

        if self.config.min_size > self.config.max_size {
            return Err(BenchmarkError::InvalidSizeRange {
                min: self.config.min_size,
                max: self.config.max_size,
            });
        }
        if self.config.num_sizes == 0
            || self.config.characteristics.is_empty()
            || self.config.algorithms.is_empty()
        {
            return Err(BenchmarkError::EmptyPlan);
        }
        for &algorithm in &self.config.algorithms {
            if !algorithm.supports(self.config.value_domain) {
                return Err(BenchmarkError::IncompatibleAlgorithm {
                    algorithm: algorithm.name(),
                    domain: self.config.value_domain.label(),
                });
            }
        }

        let sizes: Vec<usize> = (0..self.config.num_sizes)
            .map(|_| {
                self.rng
                    .random_range(self.config.min_size..=self.config.max_size)
            })
            .collect();

        let plan = BenchmarkPlan {
            sizes,
            characteristics: self.config.characteristics.clone(),
            algorithms: self.config.algorithms.clone(),
        };
        self.plan = Some(plan.clone());
        Ok(plan)
    }

    /// Execute every planned attempt and return the collection. Plans first
    /// if `plan()` has not been called yet.
    pub fn run(&mut self, sink: &mut dyn ResultSink) -> Result<ResultCollection, BenchmarkError> {
        assert!(
            matches!(self.state, RunnerState::Idle | RunnerState::Configuring),
            "run() may only be called once"
        );
        let plan = match self.plan.clone() {
            Some(plan) => plan,
            None => self.plan()?,
        };
        self.state = RunnerState::Running;

        let planned = plan.planned_attempts();
        self.print_run_header(&plan);

        sink.write_header()?;

        let verifier = OrderVerifier::new();
        let mut collection = ResultCollection::new();
        let mut attempt = 0usize;

        for &size in &plan.sizes {
            for &characteristic in &plan.characteristics {
                for &algorithm in &plan.algorithms {
                    let dataset = datagen::generate(
                        size,
                        characteristic,
                        self.config.value_domain,
                        &mut self.rng,
                    );
                    let timed = timing::measure(algorithm, &dataset)?;
                    attempt += 1;

                    if self.config.verify {
                        if let Err(detail) = verifier.verify(&dataset, &timed.sorted) {
                            return Err(BenchmarkError::VerificationFailed {
                                algorithm: algorithm.name(),
                                size,
                                characteristic: characteristic.label(),
                                detail,
                            });
                        }
                    }

                    let result = BenchmarkResult {
                        attempt,
                        algorithm,
                        size,
                        characteristic,
                        elapsed_seconds: timed.elapsed_seconds,
                        value_domain: self.config.value_domain,
                    };

                    sink.write_result(&result)
                        .map_err(|source| BenchmarkError::SinkWrite {
                            attempt,
                            algorithm: algorithm.name(),
                            size,
                            characteristic: characteristic.label(),
                            source,
                        })?;

                    println!(
                        "  [{:>3}/{}] {:<13} size {:>9}  {:<16} {:>12.6} s",
                        attempt,
                        planned,
                        algorithm.name(),
                        size,
                        characteristic.label(),
                        result.elapsed_seconds
                    );

                    collection.push(result);
                }
            }
        }

        self.state = RunnerState::Finalizing;
        sink.flush()?;
        if let Some(consumer) = self.consumer.as_mut() {
            consumer.consume(&collection)?;
        }

        self.state = RunnerState::Done;
        Ok(collection)
    }

    fn print_run_header(&self, plan: &BenchmarkPlan) {
        println!("\n{}", "=".repeat(80));
        println!("Sorting benchmark");
        println!("{}", "=".repeat(80));
        println!("Data type: {}", self.config.value_domain);
        println!("Dataset sizes: {:?}", plan.sizes);
        println!(
            "Characteristics: {}",
            plan.characteristics
                .iter()
                .map(|c| c.label())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!(
            "Algorithms: {}",
            plan.algorithms
                .iter()
                .map(|a| a.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Planned attempts: {}", plan.planned_attempts());
        println!();
    }
}
