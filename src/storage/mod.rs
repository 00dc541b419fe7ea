//! # Storage Collaborator Contracts
//!
//! Narrow contracts for the externally-owned resources the completion
//! pipeline writes to: the job state store, the durable feedback queue and
//! the retry/dispatch subsystem. Persistent engines live outside this
//! crate; the in-memory implementations here back tests and single-process
//! deployments.

pub mod memory;

use async_trait::async_trait;

use crate::domain::{FeedbackRecord, JobResult};
use crate::error::Result;

pub use memory::{InMemoryFeedbackQueue, InMemoryJobStateStore, InMemoryRetryScheduler};

/// Job state store owned by the wider job tracker.
#[async_trait]
pub trait JobStateStore: Send + Sync {
    /// Mark each result's execution terminally complete.
    ///
    /// Must be idempotent: marking the same execution twice leaves the
    /// store in the same state as marking it once.
    async fn mark_complete(&self, results: Vec<JobResult>) -> Result<()>;
}

/// Durable queue of feedback records awaiting redelivery or inspection.
#[async_trait]
pub trait FeedbackQueue: Send + Sync {
    /// Append a batch of records. Durable once this returns.
    async fn add(&self, records: Vec<FeedbackRecord>) -> Result<()>;
}

/// Retry/dispatch subsystem. Increments each job's retry count and requeues
/// it for execution; the completion pipeline only gates eligibility.
#[async_trait]
pub trait RetryScheduler: Send + Sync {
    async fn schedule(&self, results: Vec<JobResult>) -> Result<()>;
}
