//! # Completion Processing
//!
//! The decision pipeline run for every batch of execution outcomes a task
//! tracker reports back to the job tracker.
//!
//! ## Core Components
//!
//! - [`OutcomeClassifier`]: pure retry/feedback/finish policy per result
//! - [`CompletionChain`]: classifies a request's results, partitions them
//!   into buckets and drives the downstream collaborators
//! - [`ClientNotifier`]: asynchronous outcome delivery to submitting
//!   clients, with differentiated success/failure handling
//! - [`RetryEnqueuer`] / [`FinishRecorder`]: thin seams over the retry
//!   subsystem and the job state store

pub mod chain;
pub mod classifier;
pub mod finish;
pub mod notifier;
pub mod retry;

pub use chain::CompletionChain;
pub use classifier::{Disposition, OutcomeClassifier};
pub use finish::FinishRecorder;
pub use notifier::{
    ClientDelivery, ClientNotifier, ClientNotifyHandler, DeliveryOutcome, NotifyError,
};
pub use retry::RetryEnqueuer;
