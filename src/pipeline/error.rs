use thiserror::Error;

use crate::classify::ClassifierError;
use crate::explain::ExplainError;
use crate::retrieval::RetrievalError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    InvalidCorpus(RetrievalError),

    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("external service error: {0}")]
    ExternalService(#[from] ExplainError),

    #[error("pipeline invariant violated: {reason}")]
    InvariantViolation { reason: String },
}

impl From<RetrievalError> for PipelineError {
    fn from(err: RetrievalError) -> Self {
        PipelineError::InvalidCorpus(err)
    }
}

impl From<ClassifierError> for PipelineError {
    fn from(err: ClassifierError) -> Self {
        match err {
            ClassifierError::InvalidConfiguration(threshold) => {
                PipelineError::InvalidConfiguration {
                    reason: threshold.to_string(),
                }
            }
            ClassifierError::InvariantViolation { reason } => {
                PipelineError::InvariantViolation { reason }
            }
        }
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
