use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GridTaskError {
    StorageError(String),
    QueueError(String),
    SchedulingError(String),
    NotificationError(String),
    ConfigurationError(String),
    TransportError(String),
}

impl fmt::Display for GridTaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridTaskError::StorageError(msg) => write!(f, "Storage error: {msg}"),
            GridTaskError::QueueError(msg) => write!(f, "Queue error: {msg}"),
            GridTaskError::SchedulingError(msg) => write!(f, "Scheduling error: {msg}"),
            GridTaskError::NotificationError(msg) => write!(f, "Notification error: {msg}"),
            GridTaskError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
            GridTaskError::TransportError(msg) => write!(f, "Transport error: {msg}"),
        }
    }
}

impl std::error::Error for GridTaskError {}

pub type Result<T> = std::result::Result<T, GridTaskError>;
