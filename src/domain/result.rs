//! Per-attempt execution results as reported by task trackers, and the
//! batched completion request that carries them over one transport exchange.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::job::Job;

/// Worker's outcome classification for one execution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobAction {
    /// Attempt finished successfully
    ExecuteSuccess,
    /// Worker asked for the job to be run again later
    ExecuteLater,
    /// Attempt died with an unexpected error
    ExecuteException,
    /// Attempt ran to completion and reported failure
    ExecuteFailed,
}

/// One task tracker's report for one job execution attempt.
///
/// The job descriptor is shared with, and outlives, the completion request
/// that carries the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResult {
    /// Descriptor of the job this attempt belongs to
    pub job: Arc<Job>,
    /// Outcome of the attempt
    pub action: JobAction,
    /// Free-form message from the worker (error text, notes)
    pub message: Option<String>,
    /// When the worker finished the attempt
    pub complete_time: DateTime<Utc>,
    /// Identity of the reporting task tracker
    pub task_tracker_identity: Option<String>,
}

impl JobResult {
    pub fn new(job: Arc<Job>, action: JobAction) -> Self {
        Self {
            job,
            action,
            message: None,
            complete_time: Utc::now(),
            task_tracker_identity: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// One batch of execution outcomes reported in a single transport exchange.
///
/// Order is preserved but carries no semantics; every result is routed to
/// exactly one downstream bucket by the completion chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Request identity, for correlating acknowledgement and logs
    pub request_id: Uuid,
    /// Node group of the reporting task tracker
    pub task_tracker_node_group: String,
    /// Identity of the reporting task tracker
    pub task_tracker_identity: String,
    /// The reported results; all belong to this one report batch
    pub results: Vec<JobResult>,
    /// When the job tracker received the request
    pub received_at: DateTime<Utc>,
}

impl CompletionRequest {
    pub fn new(
        task_tracker_node_group: impl Into<String>,
        task_tracker_identity: impl Into<String>,
        results: Vec<JobResult>,
    ) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            task_tracker_node_group: task_tracker_node_group.into(),
            task_tracker_identity: task_tracker_identity.into(),
            results,
            received_at: Utc::now(),
        }
    }
}
