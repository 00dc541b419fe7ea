//! Durable record of a client notification that could not be delivered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::result::JobResult;

/// Written to the feedback queue when delivery to the submitting client
/// fails, so the outcome can be redelivered or inspected later. Carries the
/// full result; nothing about the failed notification is lost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Record identity within the feedback queue
    pub id: Uuid,
    /// The result whose notification failed
    pub result: JobResult,
    /// When the record was created
    pub recorded_at: DateTime<Utc>,
}

impl FeedbackRecord {
    pub fn from_result(result: &JobResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            result: result.clone(),
            recorded_at: Utc::now(),
        }
    }
}
