// 👷 Worker Pool - Bounded-parallel file decoding
// A fixed number of decode slots fed from a shared job channel

use anyhow::Result;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crate::decoder::decode_file;
use crate::violation::TrafficViolation;

/// Configuration for the decode worker pool
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub num_workers: usize,
}

impl PoolConfig {
    /// Size the pool from the machine's logical CPU count
    pub fn auto() -> Self {
        PoolConfig {
            num_workers: num_cpus::get(),
        }
    }

    pub fn with_workers(num_workers: usize) -> Self {
        PoolConfig {
            num_workers: num_workers.max(1),
        }
    }
}

impl Default for PoolConfig {
    // 8 slots: 4 and 8 read mid-size batches at about the same speed,
    // 8 pulls ahead as file count and size grow
    fn default() -> Self {
        PoolConfig { num_workers: 8 }
    }
}

/// Per-task result. A failed file is a value here, never a propagated error,
/// so one bad file cannot take the batch down with it.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<Vec<TrafficViolation>>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Number of records this file contributed (0 for a failed file)
    pub fn record_count(&self) -> usize {
        self.result.as_ref().map(|records| records.len()).unwrap_or(0)
    }
}

/// WorkerPool - N decode slots over a shared job queue
///
/// Jobs queue without bound; each worker pulls the next path, runs the
/// decoder, and reports a `FileOutcome` on the results channel. Tasks are
/// independent and completion order is unspecified.
pub struct WorkerPool {
    jobs: Sender<PathBuf>,
    outcomes: Receiver<FileOutcome>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn the worker threads. Nothing runs until jobs are dispatched.
    pub fn start(config: &PoolConfig) -> Self {
        let (job_tx, job_rx) = unbounded::<PathBuf>();
        let (outcome_tx, outcome_rx) = unbounded::<FileOutcome>();

        let mut workers = Vec::with_capacity(config.num_workers);
        for worker_id in 0..config.num_workers {
            let jobs = job_rx.clone();
            let outcomes = outcome_tx.clone();
            workers.push(thread::spawn(move || worker_loop(worker_id, jobs, outcomes)));
        }
        // Workers hold the only outcome senders left; the results channel
        // disconnects exactly when the last worker exits

        WorkerPool {
            jobs: job_tx,
            outcomes: outcome_rx,
            workers,
        }
    }

    /// Queue one file for decoding
    pub fn dispatch(&self, path: PathBuf) {
        // Send only fails if every worker is already gone; the join drain
        // then surfaces the shortfall as missing outcomes
        let _ = self.jobs.send(path);
    }

    /// Join barrier: stop accepting jobs, then wait for every dispatched job
    /// to settle. Outcomes arrive in completion order, failures included.
    pub fn join(self) -> Vec<FileOutcome> {
        let WorkerPool {
            jobs,
            outcomes,
            workers,
        } = self;

        // Closing the job channel is the shutdown signal; workers drain what
        // is already queued and exit. Shutdown therefore always happens after
        // dispatch, never before.
        drop(jobs);

        let mut settled = Vec::new();
        while let Ok(outcome) = outcomes.recv() {
            settled.push(outcome);
        }

        for worker in workers {
            let _ = worker.join();
        }

        settled
    }

    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }
}

fn worker_loop(_worker_id: usize, jobs: Receiver<PathBuf>, outcomes: Sender<FileOutcome>) {
    while let Ok(path) = jobs.recv() {
        let result = decode_file(&path);
        if outcomes.send(FileOutcome { path, result }).is_err() {
            // Receiver gone - nobody is waiting for results anymore
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_file(dir: &std::path::Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_pool_size_is_eight() {
        assert_eq!(PoolConfig::default().num_workers, 8);
    }

    #[test]
    fn test_with_workers_floors_at_one() {
        assert_eq!(PoolConfig::with_workers(0).num_workers, 1);
    }

    #[test]
    fn test_outcomes_cover_every_dispatched_file() {
        let dir = tempfile::tempdir().unwrap();

        // More files than workers - excess jobs queue until a slot frees up
        let mut paths = Vec::new();
        for i in 0..12 {
            paths.push(write_file(
                dir.path(),
                &format!("batch_{i}.json"),
                r#"[{"type":"SPEEDING","fine_amount":10.00}]"#,
            ));
        }

        let pool = WorkerPool::start(&PoolConfig::with_workers(3));
        assert_eq!(pool.num_workers(), 3);
        for path in &paths {
            pool.dispatch(path.clone());
        }

        let outcomes = pool.join();
        assert_eq!(outcomes.len(), 12, "every dispatched job must settle");
        assert!(outcomes.iter().all(FileOutcome::is_success));
        assert_eq!(
            outcomes.iter().map(FileOutcome::record_count).sum::<usize>(),
            12
        );
    }

    #[test]
    fn test_failed_file_does_not_block_others() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_file(
            dir.path(),
            "good.json",
            r#"[{"type":"PARKING","fine_amount":25.00}]"#,
        );
        let bad = write_file(dir.path(), "bad.json", "not json at all");

        let pool = WorkerPool::start(&PoolConfig::with_workers(2));
        pool.dispatch(bad.clone());
        pool.dispatch(good.clone());

        let outcomes = pool.join();
        assert_eq!(outcomes.len(), 2);

        let failed: Vec<_> = outcomes.iter().filter(|o| !o.is_success()).collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].path, bad);

        let succeeded: Vec<_> = outcomes.iter().filter(|o| o.is_success()).collect();
        assert_eq!(succeeded.len(), 1);
        assert_eq!(succeeded[0].path, good);
        assert_eq!(succeeded[0].record_count(), 1);
    }

    #[test]
    fn test_join_with_no_jobs_returns_immediately() {
        let pool = WorkerPool::start(&PoolConfig::default());
        let outcomes = pool.join();
        assert!(outcomes.is_empty());
    }
}
