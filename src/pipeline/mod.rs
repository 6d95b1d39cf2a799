//! End-to-end orchestration: retrieve, classify, explain, assemble.
//!
//! ```text
//! QuizAnswer ──► Retriever (top-k passages)
//!            ──► AnswerClassifier (category, confidence)
//!            ──► ExplanationBackend (cache ► timeout ► text)
//!            ──► XaiResult
//! ```
//!
//! [`Pipeline::explain`] surfaces backend failures; [`Pipeline::explain_or_fallback`] replaces
//! them with the rule-based explanation.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod types;


use std::sync::Arc;

pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};
pub use orchestrator::Pipeline;
pub use types::{Explanation, QuizAnswer, XaiResult};

use crate::explain::ExplanationBackend;
use crate::retrieval::{Corpus, RetrieverHandle};

/// One-shot run over `corpus` with `k` passages and no explanation cache.
///
/// Returns the first failure from any stage.
pub async fn run(
    question: &str,
    student_answer: &str,
    correct_answer: &str,
    corpus: impl Into<Corpus>,
    k: usize,
    backend: Arc<dyn ExplanationBackend>,
) -> PipelineResult<XaiResult> {
    let config = PipelineConfig::default()
        .with_top_k(k)
        .with_cache_capacity(0);
    config.validate()?;

    let pipeline = Pipeline::new(RetrieverHandle::from_corpus(corpus)?, backend, config)?;
    pipeline
        .explain(&QuizAnswer::new(question, student_answer, correct_answer))
        .await
}
