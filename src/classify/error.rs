use thiserror::Error;

use crate::constants::ThresholdError;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("invalid classifier configuration: {0}")]
    InvalidConfiguration(#[from] ThresholdError),

    #[error("classifier invariant violated: {reason}")]
    InvariantViolation { reason: String },
}
