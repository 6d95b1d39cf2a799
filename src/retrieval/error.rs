use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("invalid corpus: {reason}")]
    InvalidCorpus { reason: String },

    #[error("failed to read corpus file {path}: {source}")]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type RetrievalResult<T> = Result<T, RetrievalError>;
