//! Hands retry-eligible results to the retry/dispatch subsystem.

use std::sync::Arc;

use tracing::debug;

use crate::domain::JobResult;
use crate::error::Result;
use crate::storage::RetryScheduler;

/// Accepts classified "needs retry" results. The retry subsystem owns
/// incrementing each job's retry count and rescheduling execution; nothing
/// here mutates the count.
pub struct RetryEnqueuer {
    scheduler: Arc<dyn RetryScheduler>,
}

impl RetryEnqueuer {
    pub fn new(scheduler: Arc<dyn RetryScheduler>) -> Self {
        Self { scheduler }
    }

    /// Empty input is a silent no-op.
    pub async fn on_complete(&self, results: Vec<JobResult>) -> Result<()> {
        if results.is_empty() {
            return Ok(());
        }

        debug!(count = results.len(), "handing results to the retry scheduler");
        self.scheduler.schedule(results).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Job, JobAction};
    use crate::storage::InMemoryRetryScheduler;

    #[tokio::test]
    async fn test_empty_input_is_a_no_op() {
        let scheduler = Arc::new(InMemoryRetryScheduler::new());
        let enqueuer = RetryEnqueuer::new(scheduler.clone());

        enqueuer.on_complete(Vec::new()).await.unwrap();

        assert!(scheduler.is_empty());
    }

    #[tokio::test]
    async fn test_batch_reaches_the_scheduler() {
        let scheduler = Arc::new(InMemoryRetryScheduler::new());
        let enqueuer = RetryEnqueuer::new(scheduler.clone());

        let job = Arc::new(Job::new("job-1", "client_group"));
        enqueuer
            .on_complete(vec![JobResult::new(job, JobAction::ExecuteLater)])
            .await
            .unwrap();

        assert_eq!(scheduler.len(), 1);
    }
}
