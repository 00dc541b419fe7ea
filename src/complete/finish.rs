//! Marks execution results terminally complete in the job state store.

use std::sync::Arc;

use tracing::debug;

use crate::domain::JobResult;
use crate::error::Result;
use crate::storage::JobStateStore;

/// Accepts classified "no further action" results. Completion marking is
/// idempotent in the store, so concurrent or repeated invocations for the
/// same result are harmless.
pub struct FinishRecorder {
    store: Arc<dyn JobStateStore>,
}

impl FinishRecorder {
    pub fn new(store: Arc<dyn JobStateStore>) -> Self {
        Self { store }
    }

    /// Empty input is a silent no-op.
    pub async fn on_complete(&self, results: Vec<JobResult>) -> Result<()> {
        if results.is_empty() {
            return Ok(());
        }

        debug!(count = results.len(), "marking results complete");
        self.store.mark_complete(results).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Job, JobAction};
    use crate::storage::InMemoryJobStateStore;

    #[tokio::test]
    async fn test_empty_input_is_a_no_op() {
        let store = Arc::new(InMemoryJobStateStore::new());
        let recorder = FinishRecorder::new(store.clone());

        recorder.on_complete(Vec::new()).await.unwrap();

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_finishing_twice_matches_finishing_once() {
        let store = Arc::new(InMemoryJobStateStore::new());
        let recorder = FinishRecorder::new(store.clone());

        let job = Arc::new(Job::new("job-1", "client_group"));
        let result = JobResult::new(job, JobAction::ExecuteSuccess);

        recorder.on_complete(vec![result.clone()]).await.unwrap();
        recorder.on_complete(vec![result]).await.unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.is_complete("job-1"));
    }
}
