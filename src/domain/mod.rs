//! # Domain Types for Completion Processing
//!
//! Data carried by one completion exchange between a task tracker and the
//! job tracker: the job descriptor, the per-attempt execution result, the
//! batched completion request, and the durable feedback record written when
//! a client notification cannot be delivered.

pub mod feedback;
pub mod job;
pub mod result;

pub use feedback::FeedbackRecord;
pub use job::Job;
pub use result::{CompletionRequest, JobAction, JobResult};
