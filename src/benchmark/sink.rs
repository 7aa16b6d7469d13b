use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::types::BenchmarkResult;

/// Receives one result row at a time, header first. Rows must be durable
/// once `flush` returns.
pub trait ResultSink {
    fn write_header(&mut self) -> io::Result<()>;
    fn write_result(&mut self, result: &BenchmarkResult) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

/// CSV sink writing one row per attempt through a buffered writer.
pub struct CsvFileSink {
    writer: BufWriter<File>,
}

impl CsvFileSink {
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl ResultSink for CsvFileSink {
    fn write_header(&mut self) -> io::Result<()> {
        writeln!(
            self.writer,
            "attempt,algorithm,size,characteristic,elapsed_seconds,data_type"
        )
    }

    fn write_result(&mut self, result: &BenchmarkResult) -> io::Result<()> {
        writeln!(
            self.writer,
            "{},{},{},{},{:.6},{}",
            result.attempt,
            result.algorithm.name(),
            result.size,
            result.characteristic.label(),
            result.elapsed_seconds,
            result.value_domain.label(),
        )
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// In-memory sink for tests and dry runs.
#[derive(Default)]
pub struct MemorySink {
    pub header_writes: usize,
    pub rows: Vec<BenchmarkResult>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for MemorySink {
    fn write_header(&mut self) -> io::Result<()> {
        self.header_writes += 1;
        Ok(())
    }

    fn write_result(&mut self, result: &BenchmarkResult) -> io::Result<()> {
        self.rows.push(result.clone());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
