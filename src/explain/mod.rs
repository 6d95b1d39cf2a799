//! Explanation generation boundary.
//!
//! The pipeline hands an [`ExplanationRequest`] (ranked passages plus the classification) to any
//! [`ExplanationBackend`] and treats the returned text as opaque.
//!
//! Backends:
//! - [`GenaiExplainer`] - chat completion through `genai` (explicit API key)
//! - [`RuleBasedExplainer`] - deterministic offline template, also the failure fallback
//! - [`MockExplainer`] - scripted replies (tests / `mock` feature)

pub mod backend;
pub mod cache;
pub mod error;
pub mod llm;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod prompt;
pub mod request;
pub mod rule_based;


pub use backend::ExplanationBackend;
pub use cache::{CacheKey, ExplanationCache};
pub use error::{ExplainError, ExplainResult};
pub use llm::{GenaiConfig, GenaiExplainer};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MOCK_BACKEND, MockExplainer};
pub use prompt::{NO_CONTEXT_LINE, Prompt, SYSTEM_PROMPT, user_prompt};
pub use request::ExplanationRequest;
pub use rule_based::{RULE_BASED_BACKEND, RuleBasedExplainer, excerpt, review_topic};
