//! # Client Notifier
//!
//! Asynchronous delivery of execution outcomes to submitting clients.
//!
//! ## Overview
//!
//! `send` hands the batch to a background task and returns immediately; the
//! orchestrator never waits on network delivery. On that task, results are
//! grouped by submit node group and pushed through the [`ClientDelivery`]
//! collaborator. Each group's outcome is a partition of the attempted
//! sub-batch, so the success and failure handlers always receive disjoint
//! sub-batches — both may fire for one `send` call.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::JobResult;

/// Failure of one delivery attempt to a client group.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("delivery to group '{group}' timed out after {timeout_ms}ms")]
    Timeout { group: String, timeout_ms: u64 },

    #[error("group '{group}' unreachable: {reason}")]
    Unreachable { group: String, reason: String },
}

/// Outcome of one delivery attempt: a partition of the attempted batch.
#[derive(Debug, Default)]
pub struct DeliveryOutcome {
    /// Results the client confirmed receiving
    pub delivered: Vec<JobResult>,
    /// Results the client did not confirm
    pub undelivered: Vec<JobResult>,
}

impl DeliveryOutcome {
    pub fn all_delivered(results: &[JobResult]) -> Self {
        Self {
            delivered: results.to_vec(),
            undelivered: Vec::new(),
        }
    }

    pub fn none_delivered(results: &[JobResult]) -> Self {
        Self {
            delivered: Vec::new(),
            undelivered: results.to_vec(),
        }
    }
}

/// Transport-side collaborator that pushes a batch of results to one client
/// group. Returns a partition of exactly the attempted results; an `Err`
/// means the group could not be reached at all.
#[async_trait]
pub trait ClientDelivery: Send + Sync {
    async fn deliver(
        &self,
        node_group: &str,
        results: &[JobResult],
    ) -> std::result::Result<DeliveryOutcome, NotifyError>;
}

/// Downstream handling for settled deliveries. Both methods run on the
/// notifier's background task, never on the caller's thread of control.
#[async_trait]
pub trait ClientNotifyHandler: Send + Sync {
    /// The client has the results; nothing further to reconcile.
    async fn on_delivery_success(&self, results: Vec<JobResult>);

    /// Delivery failed; the results must not be lost silently.
    async fn on_delivery_failure(&self, results: Vec<JobResult>);
}

/// Sends execution outcomes back to submitting clients.
pub struct ClientNotifier {
    delivery: Arc<dyn ClientDelivery>,
    handler: Arc<dyn ClientNotifyHandler>,
    delivery_timeout: Duration,
}

impl ClientNotifier {
    pub fn new(
        delivery: Arc<dyn ClientDelivery>,
        handler: Arc<dyn ClientNotifyHandler>,
        delivery_timeout: Duration,
    ) -> Self {
        Self {
            delivery,
            handler,
            delivery_timeout,
        }
    }

    /// Queue a batch for delivery and return without waiting for it to
    /// settle. Empty input is a silent no-op.
    pub fn send(&self, results: Vec<JobResult>) {
        if results.is_empty() {
            return;
        }

        let delivery = Arc::clone(&self.delivery);
        let handler = Arc::clone(&self.handler);
        let timeout = self.delivery_timeout;

        tokio::spawn(async move {
            let (succeeded, failed) = deliver_by_group(delivery, timeout, results).await;

            if !succeeded.is_empty() {
                handler.on_delivery_success(succeeded).await;
            }
            if !failed.is_empty() {
                handler.on_delivery_failure(failed).await;
            }
        });
    }
}

/// Deliver a batch group by group, accumulating the disjoint success and
/// failure sub-batches. Groups are delivered concurrently; accumulation
/// order follows first-seen group order.
async fn deliver_by_group(
    delivery: Arc<dyn ClientDelivery>,
    timeout: Duration,
    results: Vec<JobResult>,
) -> (Vec<JobResult>, Vec<JobResult>) {
    let deliveries = group_by_submit_group(results)
        .into_iter()
        .map(|(group, batch)| {
            let delivery = Arc::clone(&delivery);
            async move {
                let outcome = deliver_group(&*delivery, timeout, &group, &batch).await;
                (group, batch, outcome)
            }
        });

    let mut succeeded = Vec::new();
    let mut failed = Vec::new();

    for (group, batch, outcome) in futures::future::join_all(deliveries).await {
        match outcome {
            Ok(outcome) => {
                debug_assert_eq!(
                    outcome.delivered.len() + outcome.undelivered.len(),
                    batch.len(),
                    "delivery outcome must partition the attempted batch"
                );
                debug!(
                    group = %group,
                    delivered = outcome.delivered.len(),
                    undelivered = outcome.undelivered.len(),
                    "client delivery settled"
                );
                succeeded.extend(outcome.delivered);
                failed.extend(outcome.undelivered);
            }
            Err(e) => {
                error!(group = %group, error = %e, count = batch.len(), "client delivery failed");
                failed.extend(batch);
            }
        }
    }

    (succeeded, failed)
}

/// One bounded delivery attempt to one client group.
async fn deliver_group(
    delivery: &dyn ClientDelivery,
    timeout: Duration,
    group: &str,
    batch: &[JobResult],
) -> std::result::Result<DeliveryOutcome, NotifyError> {
    match tokio::time::timeout(timeout, delivery.deliver(group, batch)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(NotifyError::Timeout {
            group: group.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        }),
    }
}

/// Group results by submit node group, preserving first-seen group order
/// and result order within each group.
fn group_by_submit_group(results: Vec<JobResult>) -> Vec<(String, Vec<JobResult>)> {
    let mut groups: Vec<(String, Vec<JobResult>)> = Vec::new();
    for result in results {
        let group = result.job.submit_node_group.clone();
        match groups.iter_mut().find(|(name, _)| *name == group) {
            Some((_, batch)) => batch.push(result),
            None => groups.push((group, vec![result])),
        }
    }
    groups
}
