//! # Completion Chain
//!
//! Orchestrates one completion request end to end: classify every reported
//! result, partition the batch into retry / feedback / finish buckets, and
//! drive the three downstream collaborators.
//!
//! ## Key Properties
//!
//! - Every result is routed to exactly one bucket; none are dropped, none
//!   are routed twice.
//! - Dispatch to collaborators is fire-and-forget from the orchestrator's
//!   perspective: client delivery settles on its own task, and bucket
//!   dispatches are fired in isolation so one failing bucket cannot starve
//!   the others.
//! - Safe to call from many transport connections concurrently; the only
//!   shared state is configuration captured at construction.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::complete::classifier::{Disposition, OutcomeClassifier};
use crate::complete::finish::FinishRecorder;
use crate::complete::notifier::{ClientDelivery, ClientNotifier, ClientNotifyHandler};
use crate::complete::retry::RetryEnqueuer;
use crate::config::CoreConfig;
use crate::domain::{CompletionRequest, FeedbackRecord, JobResult};
use crate::error::Result;
use crate::storage::{FeedbackQueue, JobStateStore, RetryScheduler};
use crate::transport::CompletionAck;

/// Processes completion requests reported by task trackers.
pub struct CompletionChain {
    classifier: OutcomeClassifier,
    notifier: ClientNotifier,
    retry_handler: RetryEnqueuer,
    finish_handler: FinishRecorder,
}

impl CompletionChain {
    /// Wire the chain against its collaborators. The global retry ceiling
    /// is captured from `config` here and never re-read.
    pub fn new(
        config: &CoreConfig,
        scheduler: Arc<dyn RetryScheduler>,
        store: Arc<dyn JobStateStore>,
        feedback_queue: Arc<dyn FeedbackQueue>,
        delivery: Arc<dyn ClientDelivery>,
    ) -> Self {
        let handler = Arc::new(ChainNotifyHandler {
            finish_handler: FinishRecorder::new(store.clone()),
            feedback_queue,
        });
        let notifier = ClientNotifier::new(
            delivery,
            handler,
            Duration::from_millis(config.delivery_timeout_ms),
        );

        Self {
            classifier: OutcomeClassifier::new(config.max_retry_times),
            notifier,
            retry_handler: RetryEnqueuer::new(scheduler),
            finish_handler: FinishRecorder::new(store),
        }
    }

    /// Route every result in the request and acknowledge the transport.
    ///
    /// Returns once all three buckets have been dispatched; client delivery
    /// settles asynchronously after this returns.
    pub async fn process(&self, request: &CompletionRequest) -> Result<CompletionAck> {
        let results = &request.results;
        debug!(
            request_id = %request.request_id,
            task_tracker = %request.task_tracker_identity,
            count = results.len(),
            "processing completion request"
        );

        if results.is_empty() {
            return Ok(CompletionAck);
        }

        if results.len() == 1 {
            self.process_single(results).await?;
        } else {
            self.process_batch(results).await?;
        }

        Ok(CompletionAck)
    }

    /// Fast path for the common single-result report: route directly
    /// without partition buckets. Same routing as the batch path.
    async fn process_single(&self, results: &[JobResult]) -> Result<()> {
        let result = &results[0];

        match self.classifier.classify(result) {
            Disposition::Retry => self.retry_handler.on_complete(results.to_vec()).await,
            Disposition::Feedback => {
                self.notifier.send(results.to_vec());
                Ok(())
            }
            Disposition::Finish => self.finish_handler.on_complete(results.to_vec()).await,
        }
    }

    /// Partition the batch into the three buckets, then dispatch feedback,
    /// finish and retry in that order. Each dispatch fires even when an
    /// earlier one failed; the first error surfaces after all three ran.
    async fn process_batch(&self, results: &[JobResult]) -> Result<()> {
        let mut retry_results = Vec::new();
        let mut feedback_results = Vec::new();
        let mut finish_results = Vec::new();

        for result in results {
            match self.classifier.classify(result) {
                Disposition::Retry => retry_results.push(result.clone()),
                Disposition::Feedback => feedback_results.push(result.clone()),
                Disposition::Finish => finish_results.push(result.clone()),
            }
        }

        info!(
            retry = retry_results.len(),
            feedback = feedback_results.len(),
            finish = finish_results.len(),
            "completion batch partitioned"
        );

        self.notifier.send(feedback_results);

        let mut first_error = None;

        if let Err(e) = self.finish_handler.on_complete(finish_results).await {
            error!(error = %e, "finish dispatch failed");
            first_error.get_or_insert(e);
        }

        if let Err(e) = self.retry_handler.on_complete(retry_results).await {
            error!(error = %e, "retry dispatch failed");
            first_error.get_or_insert(e);
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Routes settled deliveries: confirmed results are finished directly;
/// failed ones are persisted to the feedback queue first, so a crash
/// between the two steps leaves a record that can be reconciled.
struct ChainNotifyHandler {
    finish_handler: FinishRecorder,
    feedback_queue: Arc<dyn FeedbackQueue>,
}

#[async_trait]
impl ClientNotifyHandler for ChainNotifyHandler {
    async fn on_delivery_success(&self, results: Vec<JobResult>) {
        if let Err(e) = self.finish_handler.on_complete(results).await {
            error!(error = %e, "failed to finish delivered results");
        }
    }

    async fn on_delivery_failure(&self, results: Vec<JobResult>) {
        if results.is_empty() {
            return;
        }

        let records: Vec<FeedbackRecord> =
            results.iter().map(FeedbackRecord::from_result).collect();

        // Queue write comes strictly before the finish step. If it fails,
        // the results stay unfinished rather than vanishing silently.
        if let Err(e) = self.feedback_queue.add(records).await {
            error!(
                error = %e,
                count = results.len(),
                "failed to persist feedback records; leaving results unfinished"
            );
            return;
        }

        if let Err(e) = self.finish_handler.on_complete(results).await {
            error!(error = %e, "failed to finish undelivered results");
        }
    }
}
