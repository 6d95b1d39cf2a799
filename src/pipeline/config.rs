use std::time::Duration;

use super::error::{PipelineError, PipelineResult};
use crate::classify::ClassifierConfig;
use crate::constants::{DEFAULT_CACHE_CAPACITY, DEFAULT_EXPLAIN_TIMEOUT_SECS, DEFAULT_TOP_K};

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Passages retrieved per question. Default: `1`.
    pub top_k: usize,

    /// Append the correct answer to the retrieval query. Default: `false`.
    pub include_answer_in_query: bool,

    /// Upper bound on one explanation backend call. Default: 30s.
    pub explain_timeout: Duration,

    /// Max cached explanations; `0` disables the cache. Default: `10_000`.
    pub cache_capacity: u64,

    pub classifier: ClassifierConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            include_answer_in_query: false,
            explain_timeout: Duration::from_secs(DEFAULT_EXPLAIN_TIMEOUT_SECS),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            classifier: ClassifierConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_answer_in_query(mut self, include: bool) -> Self {
        self.include_answer_in_query = include;
        self
    }

    pub fn with_explain_timeout(mut self, timeout: Duration) -> Self {
        self.explain_timeout = timeout;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn validate(&self) -> PipelineResult<()> {
        if self.top_k == 0 {
            return Err(PipelineError::InvalidConfiguration {
                reason: "top_k must be at least 1".to_string(),
            });
        }
        if self.explain_timeout.is_zero() {
            return Err(PipelineError::InvalidConfiguration {
                reason: "explain_timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
