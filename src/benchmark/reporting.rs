//! Console reporting and chart-series construction.

use crate::algorithms::SortAlgorithm;
use crate::error::BenchmarkError;
use crate::OrderingKind;

use super::types::ResultCollection;

/// Receives the finished collection when the run finalizes.
pub trait ResultConsumer {
    fn consume(&mut self, results: &ResultCollection) -> Result<(), BenchmarkError>;
}

/// One elapsed-vs-size line for a single algorithm. `elapsed_seconds` holds
/// one entry per chart size, in the same order.
pub struct ChartLine {
    pub algorithm: SortAlgorithm,
    pub elapsed_seconds: Vec<f64>,
}

/// All lines for one ordering characteristic; `sizes` is ascending.
pub struct CharacteristicChart {
    pub characteristic: OrderingKind,
    pub sizes: Vec<usize>,
    pub lines: Vec<ChartLine>,
    /// Algorithms that ran somewhere in the collection but are missing a
    /// data point for at least one size here; their lines are omitted.
    pub skipped: Vec<SortAlgorithm>,
}

/// Build per-characteristic chart series: sizes ascending on the x-axis, one
/// line per algorithm that has a point for every size. An algorithm with a
/// missing point lands in `skipped` instead of failing the build.
pub fn build_charts(results: &ResultCollection) -> Vec<CharacteristicChart> {
    let scheduled: Vec<SortAlgorithm> = SortAlgorithm::ALL
        .into_iter()
        .filter(|algorithm| results.iter().any(|r| r.algorithm == *algorithm))
        .collect();

    let mut charts = Vec::new();
    for characteristic in OrderingKind::ALL {
        let subset: Vec<_> = results
            .iter()
            .filter(|r| r.characteristic == characteristic)
            .collect();
        if subset.is_empty() {
            continue;
        }

        let mut sizes: Vec<usize> = subset.iter().map(|r| r.size).collect();
        sizes.sort_unstable();
        sizes.dedup();

        let mut lines = Vec::new();
        let mut skipped = Vec::new();
        for &algorithm in &scheduled {
            let points: Vec<Option<f64>> = sizes
                .iter()
                .map(|&size| {
                    subset
                        .iter()
                        .find(|r| r.algorithm == algorithm && r.size == size)
                        .map(|r| r.elapsed_seconds)
                })
                .collect();

            if points.iter().any(|point| point.is_none()) {
                skipped.push(algorithm);
                continue;
            }
            lines.push(ChartLine {
                algorithm,
                elapsed_seconds: points.into_iter().flatten().collect(),
            });
        }

        charts.push(CharacteristicChart {
            characteristic,
            sizes,
            lines,
            skipped,
        });
    }
    charts
}

/// Renders each characteristic's chart as a size-by-algorithm table on
/// stdout, with diagnostics for omitted lines on stderr.
pub struct ChartReporter;

impl ChartReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChartReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultConsumer for ChartReporter {
    fn consume(&mut self, results: &ResultCollection) -> Result<(), BenchmarkError> {
        if results.is_empty() {
            println!("\nNo results to report.");
            return Ok(());
        }

        for chart in build_charts(results) {
            print_chart(&chart);
        }
        Ok(())
    }
}

fn print_chart(chart: &CharacteristicChart) {
    println!("\n{}", "=".repeat(100));
    println!(
        "Sort time (s) vs dataset size: {} data",
        chart.characteristic.label()
    );
    println!("{}", "-".repeat(100));

    let mut header = format!("{:<12}", "size");
    for line in &chart.lines {
        header.push_str(&format!(" {:>14}", line.algorithm.name()));
    }
    println!("{}", header);

    for (row, &size) in chart.sizes.iter().enumerate() {
        let mut rendered = format!("{:<12}", size);
        for line in &chart.lines {
            rendered.push_str(&format!(" {:>14.6}", line.elapsed_seconds[row]));
        }
        println!("{}", rendered);
    }
    println!("{}", "=".repeat(100));

    for algorithm in &chart.skipped {
        eprintln!(
            "note: {} is missing data points for {} data; line omitted",
            algorithm.name(),
            chart.characteristic.label()
        );
    }
}
