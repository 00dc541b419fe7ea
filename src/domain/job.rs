//! Job descriptor shared between the submitting client, the dispatch queue
//! and the completion pipeline. Immutable from this crate's point of view:
//! `retry_times` is advanced by the retry subsystem, never here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A unit of work submitted to the cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Cluster-wide job identity
    pub job_id: String,
    /// Client-side identity, unique within the submitting group
    pub task_id: String,
    /// Node group of the submitting client; empty means there is no
    /// addressable client to notify
    pub submit_node_group: String,
    /// Whether the submitting client opted in to receive the outcome
    pub need_feedback: bool,
    /// Retry attempts already consumed, as observed at report time
    pub retry_times: u32,
    /// Per-job retry ceiling; `None` leaves only the cluster-wide ceiling
    pub max_retry_times: Option<u32>,
    /// Opaque job parameters, round-tripped to the client on feedback
    pub payload: Value,
}

impl Job {
    pub fn new(job_id: impl Into<String>, submit_node_group: impl Into<String>) -> Self {
        let job_id = job_id.into();
        Self {
            task_id: job_id.clone(),
            job_id,
            submit_node_group: submit_node_group.into(),
            need_feedback: false,
            retry_times: 0,
            max_retry_times: None,
            payload: Value::Null,
        }
    }

    pub fn with_feedback(mut self, need_feedback: bool) -> Self {
        self.need_feedback = need_feedback;
        self
    }

    pub fn with_retry_times(mut self, retry_times: u32) -> Self {
        self.retry_times = retry_times;
        self
    }

    pub fn with_max_retry_times(mut self, max_retry_times: u32) -> Self {
        self.max_retry_times = Some(max_retry_times);
        self
    }
}
