use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("explanation backend '{backend}' request failed: {reason}")]
    ServiceFailed { backend: String, reason: String },

    #[error("explanation backend '{backend}' returned a malformed response: {reason}")]
    MalformedResponse { backend: String, reason: String },

    #[error("explanation timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("explanation backend not configured: {reason}")]
    NotConfigured { reason: String },
}

impl ExplainError {
    /// `true` for failures a caller may retry (with backoff).
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ExplainError::ServiceFailed { .. } | ExplainError::Timeout { .. }
        )
    }
}

pub type ExplainResult<T> = Result<T, ExplainError>;
