//! Explainable feedback for multiple-choice quiz answers.
//!
//! Given a question, the student's answer, the correct answer and a lecture corpus, the pipeline
//! retrieves the most relevant passages (TF-IDF), classifies the answer with an ordered rule
//! table, and asks an explanation backend to justify the outcome against that evidence.
//!
//! # Public API Surface
//!
//! ## Core
//! - [`Retriever`], [`Corpus`], [`RetrieverHandle`] - passage indexing and ranking
//! - [`AnswerClassifier`], [`ClassifierConfig`], [`classify`] - rule-based answer categories
//! - [`ExplanationBackend`] - explanation boundary, with [`GenaiExplainer`] and
//!   [`RuleBasedExplainer`]
//! - [`Pipeline`], [`run`] - orchestration into an [`XaiResult`]
//!
//! ## Server
//! - [`Config`], [`ConfigError`] - `XAI_*` environment configuration
//! - [`gateway`] - Axum routes
//!
//! ## Test/Mock Support
//! [`MockExplainer`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod classify;
pub mod config;
pub mod constants;
pub mod explain;
pub mod gateway;
pub mod pipeline;
pub mod retrieval;
pub mod text;

pub use classify::{
    AnswerCategory, AnswerClassifier, AnswerStatus, ClassificationResult, ClassifierConfig,
    ClassifierError, RuleId, classify,
};
pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD, DEFAULT_TOP_K, ThresholdError,
    validate_thresholds,
};
#[cfg(any(test, feature = "mock"))]
pub use explain::MockExplainer;
pub use explain::{
    ExplainError, ExplanationBackend, ExplanationCache, ExplanationRequest, GenaiConfig,
    GenaiExplainer, RuleBasedExplainer,
};
pub use gateway::{GatewayError, GatewayState, XAI_STATUS_HEADER, create_router};
pub use pipeline::{
    Explanation, Pipeline, PipelineConfig, PipelineError, PipelineResult, QuizAnswer, XaiResult,
    run,
};
pub use retrieval::{
    Corpus, PassageScore, RankedPassage, RetrievalError, Retriever, RetrieverHandle,
    TermWeightModel,
};
