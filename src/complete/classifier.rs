//! # Outcome Classification
//!
//! Pure decision logic for reported execution results. Given one result,
//! decides whether it must be retried, fed back to the submitting client,
//! or finished silently. Categorization depends only on the result, the
//! job descriptor and the ceilings captured at construction; there is no
//! hidden state and no side effect.

use serde::{Deserialize, Serialize};

use crate::domain::{Job, JobAction, JobResult};

/// The three disjoint routes a reported result can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Hand to the retry subsystem for another attempt
    Retry,
    /// Notify the submitting client of the outcome
    Feedback,
    /// No notification, no retry; mark terminally complete
    Finish,
}

/// Classifies reported results against the retry and feedback policy.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeClassifier {
    /// Cluster-wide retry ceiling, immutable after construction.
    max_retry_times: u32,
}

impl OutcomeClassifier {
    pub fn new(max_retry_times: u32) -> Self {
        Self { max_retry_times }
    }

    /// Classification is total: every result maps to exactly one route.
    pub fn classify(&self, result: &JobResult) -> Disposition {
        if self.needs_retry(result) {
            Disposition::Retry
        } else if self.needs_feedback(&result.job) {
            Disposition::Feedback
        } else {
            Disposition::Finish
        }
    }

    /// Whether the result should be handed to the retry subsystem.
    ///
    /// Only `ExecuteLater` and `ExecuteException` are retry-eligible, and
    /// an eligible result is retried only while the observed retry count is
    /// below both the cluster-wide ceiling and any per-job ceiling.
    pub fn needs_retry(&self, result: &JobResult) -> bool {
        if !matches!(
            result.action,
            JobAction::ExecuteLater | JobAction::ExecuteException
        ) {
            return false;
        }

        let job = &result.job;
        if job.retry_times >= self.max_retry_times {
            return false;
        }
        match job.max_retry_times {
            Some(job_ceiling) => job.retry_times < job_ceiling,
            None => true,
        }
    }

    /// Whether the submitting client must be notified.
    ///
    /// A job with no submit node group has no addressable client, so
    /// feedback is suppressed even when the job requested it.
    pub fn needs_feedback(&self, job: &Job) -> bool {
        !job.submit_node_group.is_empty() && job.need_feedback
    }
}
