//! Rule-based classification of a student answer against the correct answer.
//!
//! Rules are evaluated in strict priority order and the first match wins:
//!
//! | Rule | Condition | Category | Confidence |
//! |------|-----------|----------|------------|
//! | `exact_match` | normalized strings identical | `EXACT_MATCH` | 1.0 |
//! | `high_overlap` | overlap >= high threshold | `PARAPHRASE` | overlap |
//! | `partial_overlap` | overlap > low threshold | `PARTIAL_OVERLAP` | overlap |
//! | `fallback` | always | `UNRELATED` | overlap |
//!
//! Overlap is token-set Jaccard similarity. The fallback rule makes classification total.

pub mod classifier;
pub mod config;
pub mod error;
pub mod rules;
pub mod types;


pub use classifier::{AnswerClassifier, classify};
pub use config::ClassifierConfig;
pub use error::ClassifierError;
pub use rules::{AnswerFeatures, RULES, Rule};
pub use types::{AnswerCategory, AnswerStatus, ClassificationResult, RuleId};
