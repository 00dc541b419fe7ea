#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # GridTask Core
//!
//! Completion-processing core of the GridTask distributed job-scheduling
//! cluster. The job tracker hosts this pipeline: task trackers report how
//! job executions finished, and every reported result is routed to exactly
//! one of three destinations — the retry subsystem, a client notification,
//! or silent terminal completion.
//!
//! ## Architecture
//!
//! One [`complete::CompletionChain`] instance serves all transport
//! connections. Per request it classifies each result with the pure
//! [`complete::OutcomeClassifier`], partitions the batch, and dispatches:
//!
//! - **Retry**: handed to the retry/dispatch subsystem, which owns the
//!   retry counter and rescheduling
//! - **Feedback**: delivered to the submitting client asynchronously;
//!   failed deliveries are persisted as durable feedback records before
//!   the results are finished
//! - **Finish**: marked terminally complete in the job state store
//!
//! Storage engines, transport framing and routing policy are collaborator
//! contracts ([`storage`], [`transport`], [`loadbalance`]); this crate is
//! invoked in-process after request decoding.
//!
//! ## Module Organization
//!
//! - [`domain`] - Jobs, execution results, completion requests, feedback records
//! - [`complete`] - Classifier, completion chain, client notifier, retry/finish seams
//! - [`storage`] - Job state store, feedback queue and retry scheduler contracts
//! - [`transport`] - Acknowledgement type and connection lifecycle hooks
//! - [`loadbalance`] - Node selection policies for consistent routing
//! - [`config`] - Runtime configuration with environment overrides
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured tracing initialization

pub mod complete;
pub mod config;
pub mod domain;
pub mod error;
pub mod loadbalance;
pub mod logging;
pub mod storage;
pub mod transport;

pub use complete::{
    ClientDelivery, ClientNotifier, ClientNotifyHandler, CompletionChain, DeliveryOutcome,
    Disposition, FinishRecorder, NotifyError, OutcomeClassifier, RetryEnqueuer,
};
pub use config::CoreConfig;
pub use domain::{CompletionRequest, FeedbackRecord, Job, JobAction, JobResult};
pub use error::{GridTaskError, Result};
pub use loadbalance::{LoadBalance, RandomLoadBalance, SeedHashLoadBalance};
pub use storage::{FeedbackQueue, JobStateStore, RetryScheduler};
pub use transport::{CompletionAck, ConnectionEventHandler, IdleState, NoopConnectionHandler};
