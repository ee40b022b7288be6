//! Status tracking for batch conversions.
//!
//! Every job is a record keyed by a [`JobId`]. Workers update their own
//! record; the driver reads snapshots. The store is owned by the command
//! that creates it and shared by reference.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Identifier handed out by [`JobStore::insert`].
pub type JobId = usize;

/// Lifecycle of one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    /// Waiting for a worker.
    Queued,
    /// Being decoded or processed.
    Running,
    /// Output written.
    Completed,
    /// Stopped with an error.
    Failed,
}

/// Snapshot of one job.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    /// Source file.
    pub input: PathBuf,
    /// Destination file.
    pub output: PathBuf,
    /// Current status.
    pub status: JobStatus,
    /// Fraction of effects finished, 0 to 1.
    pub progress: f32,
    /// Label of the most recent step.
    pub step: String,
    /// Error message once failed.
    pub error: Option<String>,
}

/// Mutex-guarded map of job records.
#[derive(Debug, Default)]
pub struct JobStore {
    jobs: Mutex<BTreeMap<JobId, JobRecord>>,
}

impl JobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<JobId, JobRecord>> {
        self.jobs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a queued job and return its id.
    pub fn insert(&self, input: PathBuf, output: PathBuf) -> JobId {
        let mut jobs = self.lock();
        let id = jobs.len();
        jobs.insert(
            id,
            JobRecord {
                input,
                output,
                status: JobStatus::Queued,
                progress: 0.0,
                step: "queued".to_string(),
                error: None,
            },
        );
        id
    }

    fn update(&self, id: JobId, f: impl FnOnce(&mut JobRecord)) {
        if let Some(record) = self.lock().get_mut(&id) {
            f(record);
        }
    }

    /// Mark a job as picked up by a worker.
    pub fn start(&self, id: JobId) {
        self.update(id, |r| {
            r.status = JobStatus::Running;
            r.step = "decoding".to_string();
        });
    }

    /// Record that effect `index` of `total` finished.
    pub fn progress(&self, id: JobId, index: usize, total: usize, step: &str) {
        self.update(id, |r| {
            r.progress = if total == 0 {
                0.0
            } else {
                index as f32 / total as f32
            };
            r.step = step.to_string();
        });
    }

    /// Record the outcome of a job.
    ///
    /// A failed job keeps the step it failed in.
    pub fn finish(&self, id: JobId, result: Result<(), String>) {
        self.update(id, |r| match result {
            Ok(()) => {
                r.status = JobStatus::Completed;
                r.progress = 1.0;
                r.step = "done".to_string();
            }
            Err(message) => {
                r.status = JobStatus::Failed;
                r.error = Some(message);
            }
        });
    }

    /// Copy of one job's record.
    pub fn get(&self, id: JobId) -> Option<JobRecord> {
        self.lock().get(&id).cloned()
    }

    /// Copy of every record in id order.
    pub fn snapshot(&self) -> Vec<(JobId, JobRecord)> {
        self.lock()
            .iter()
            .map(|(id, record)| (*id, record.clone()))
            .collect()
    }

    /// Number of jobs with the given status.
    pub fn count(&self, status: JobStatus) -> usize {
        self.lock().values().filter(|r| r.status == status).count()
    }
}
