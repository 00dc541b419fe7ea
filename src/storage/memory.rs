//! In-memory storage collaborators.
//!
//! Back the integration tests and single-process deployments. Each type
//! exposes read accessors so tests can observe what the pipeline wrote.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::Mutex;

use crate::domain::{FeedbackRecord, JobAction, JobResult};
use crate::error::Result;
use crate::storage::{FeedbackQueue, JobStateStore, RetryScheduler};

/// Terminal completion entry for one job execution.
#[derive(Debug, Clone)]
pub struct CompletedExecution {
    pub action: JobAction,
    pub completed_at: DateTime<Utc>,
}

/// Job state store keyed by job id. `mark_complete` is an overwrite, so
/// repeated marking of the same execution is harmless.
#[derive(Debug, Default)]
pub struct InMemoryJobStateStore {
    completed: DashMap<String, CompletedExecution>,
}

impl InMemoryJobStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_complete(&self, job_id: &str) -> bool {
        self.completed.contains_key(job_id)
    }

    pub fn completed_action(&self, job_id: &str) -> Option<JobAction> {
        self.completed.get(job_id).map(|entry| entry.action)
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}

#[async_trait]
impl JobStateStore for InMemoryJobStateStore {
    async fn mark_complete(&self, results: Vec<JobResult>) -> Result<()> {
        for result in results {
            self.completed.insert(
                result.job.job_id.clone(),
                CompletedExecution {
                    action: result.action,
                    completed_at: Utc::now(),
                },
            );
        }
        Ok(())
    }
}

/// Append-only feedback queue buffer.
#[derive(Debug, Default)]
pub struct InMemoryFeedbackQueue {
    records: Mutex<Vec<FeedbackRecord>>,
}

impl InMemoryFeedbackQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<FeedbackRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

#[async_trait]
impl FeedbackQueue for InMemoryFeedbackQueue {
    async fn add(&self, records: Vec<FeedbackRecord>) -> Result<()> {
        self.records.lock().extend(records);
        Ok(())
    }
}

/// Retry scheduler that records what it was handed.
#[derive(Debug, Default)]
pub struct InMemoryRetryScheduler {
    scheduled: Mutex<Vec<JobResult>>,
}

impl InMemoryRetryScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheduled(&self) -> Vec<JobResult> {
        self.scheduled.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.scheduled.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.scheduled.lock().is_empty()
    }
}

#[async_trait]
impl RetryScheduler for InMemoryRetryScheduler {
    async fn schedule(&self, results: Vec<JobResult>) -> Result<()> {
        self.scheduled.lock().extend(results);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Job;
    use std::sync::Arc;

    fn result_for(job_id: &str) -> JobResult {
        JobResult::new(
            Arc::new(Job::new(job_id, "client_group")),
            JobAction::ExecuteSuccess,
        )
    }

    #[test]
    fn test_mark_complete_is_idempotent() {
        tokio_test::block_on(async {
            let store = InMemoryJobStateStore::new();

            store.mark_complete(vec![result_for("job-1")]).await.unwrap();
            store.mark_complete(vec![result_for("job-1")]).await.unwrap();

            assert_eq!(store.len(), 1);
            assert_eq!(
                store.completed_action("job-1"),
                Some(JobAction::ExecuteSuccess)
            );
        });
    }

    #[test]
    fn test_feedback_queue_appends_in_order() {
        tokio_test::block_on(async {
            let queue = InMemoryFeedbackQueue::new();

            let first = FeedbackRecord::from_result(&result_for("job-1"));
            let second = FeedbackRecord::from_result(&result_for("job-2"));
            queue.add(vec![first]).await.unwrap();
            queue.add(vec![second]).await.unwrap();

            let records = queue.records();
            assert_eq!(records.len(), 2);
            assert_eq!(records[0].result.job.job_id, "job-1");
            assert_eq!(records[1].result.job.job_id, "job-2");
        });
    }
}
