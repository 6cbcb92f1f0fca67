// 🔀 Ingestion Pipeline - Fan-out decode, fan-in collect
// One decode job per file, a join barrier that tolerates per-file failure,
// and a single merged record collection released only after the barrier

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::pool::{FileOutcome, PoolConfig, WorkerPool};
use crate::violation::TrafficViolation;

/// A file that contributed no records, with the reason it failed
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

/// ViolationSink - single destination collection for every decoded record
///
/// Workers never touch this directly: they hand whole per-file batches to the
/// coordinator thread, which is the sink's only writer. Batches merge whole,
/// so no record is lost or duplicated regardless of completion interleaving,
/// and the final size equals the sum of records across decoded files.
#[derive(Debug, Default)]
pub struct ViolationSink {
    violations: Vec<TrafficViolation>,
    decoded_files: usize,
    failures: Vec<FileFailure>,
}

impl ViolationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb one settled decode task. A failure is recorded and logged,
    /// never re-raised - a bad file must not abort the batch.
    pub fn absorb(&mut self, outcome: FileOutcome) {
        match outcome.result {
            Ok(mut records) => {
                self.decoded_files += 1;
                self.violations.append(&mut records);
            }
            Err(error) => {
                eprintln!("⚠️  Skipping {}: {:#}", outcome.path.display(), error);
                self.failures.push(FileFailure {
                    path: outcome.path,
                    error,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Everything the fan-out/fan-in phase produced
#[derive(Debug)]
pub struct IngestReport {
    /// Merged records from every successfully decoded file. Record order is
    /// a completion-order artifact; consumers must not depend on it.
    pub violations: Vec<TrafficViolation>,
    pub decoded_files: usize,
    pub failures: Vec<FileFailure>,
    pub elapsed: Duration,
}

impl IngestReport {
    pub fn total_files(&self) -> usize {
        self.decoded_files + self.failures.len()
    }
}

/// Decode every input file on the worker pool and merge the results.
///
/// Returns only after every dispatched job has settled. Failed files are
/// reported in the result instead of aborting the run; zero input files is
/// not an error and yields an empty collection.
pub fn ingest_files(files: &[PathBuf], config: &PoolConfig) -> IngestReport {
    let started = Instant::now();

    let pool = WorkerPool::start(config);
    for path in files {
        pool.dispatch(path.clone());
    }

    // Join barrier - nothing downstream sees partial results
    let mut sink = ViolationSink::new();
    for outcome in pool.join() {
        sink.absorb(outcome);
    }

    IngestReport {
        violations: sink.violations,
        decoded_files: sink.decoded_files,
        failures: sink.failures,
        elapsed: started.elapsed(),
    }
}
