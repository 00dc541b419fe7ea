use crate::error::{GridTaskError, Result};

/// Default cluster-wide ceiling on retry attempts per job.
pub const DEFAULT_MAX_RETRY_TIMES: u32 = 2;

/// Default upper bound on a single client delivery attempt.
pub const DEFAULT_DELIVERY_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Cluster-wide retry ceiling; enforced together with any per-job ceiling.
    pub max_retry_times: u32,
    /// Milliseconds allowed for one delivery attempt to a client group.
    pub delivery_timeout_ms: u64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            max_retry_times: DEFAULT_MAX_RETRY_TIMES,
            delivery_timeout_ms: DEFAULT_DELIVERY_TIMEOUT_MS,
        }
    }
}

impl CoreConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(max_retry) = std::env::var("GRIDTASK_MAX_RETRY_TIMES") {
            config.max_retry_times = max_retry.parse().map_err(|e| {
                GridTaskError::ConfigurationError(format!("Invalid max_retry_times: {e}"))
            })?;
        }

        if let Ok(timeout) = std::env::var("GRIDTASK_DELIVERY_TIMEOUT_MS") {
            config.delivery_timeout_ms = timeout.parse().map_err(|e| {
                GridTaskError::ConfigurationError(format!("Invalid delivery_timeout_ms: {e}"))
            })?;
        }

        Ok(config)
    }
}
