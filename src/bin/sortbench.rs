use clap::Parser;
use sortbench::{
    BenchmarkConfig, BenchmarkRunner, ChartReporter, CsvFileSink, OrderingKind, SortAlgorithm,
    ValueDomain,
};
use std::path::PathBuf;

#[derive(Parser)]
struct BenchArgs {
    /// Value domain to benchmark: "integer" or "float"
    #[arg(long, default_value = "integer")]
    data_type: String,

    /// Smallest dataset size that may be drawn
    #[arg(long, default_value = "10000")]
    min_size: usize,

    /// Largest dataset size that may be drawn
    #[arg(long, default_value = "1000000")]
    max_size: usize,

    /// How many dataset sizes to draw from [min_size, max_size]
    #[arg(long, default_value = "2")]
    num_sizes: usize,

    /// Output CSV file for the result rows
    #[arg(short, long, default_value = "sorting_results.csv")]
    output: PathBuf,

    /// Seed for size selection and dataset generation (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Verify each sorted output against its input
    #[arg(short, long)]
    verify: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = BenchArgs::parse();

    let value_domain = match args.data_type.as_str() {
        "integer" => ValueDomain::Integer,
        "float" => ValueDomain::Float,
        other => {
            return Err(format!("unknown data type '{}' (expected integer or float)", other).into())
        }
    };

    let config = BenchmarkConfig {
        min_size: args.min_size,
        max_size: args.max_size,
        num_sizes: args.num_sizes,
        characteristics: OrderingKind::ALL.to_vec(),
        algorithms: SortAlgorithm::supporting(value_domain),
        value_domain,
        seed: args.seed,
        verify: args.verify,
    };

    let mut sink = CsvFileSink::create(&args.output)?;
    let mut runner = BenchmarkRunner::new(config);
    runner.set_consumer(Box::new(ChartReporter::new()));

    let results = runner.run(&mut sink)?;

    println!(
        "\nWrote {} result rows to {}",
        results.len(),
        args.output.display()
    );
    Ok(())
}
