//! Cross-cutting, shared constants.
//!
//! These are the defaults used when no explicit configuration is supplied. Runtime code should
//! read them through [`crate::config::Config`], [`crate::classify::ClassifierConfig`] or
//! [`crate::pipeline::PipelineConfig`] rather than referencing them directly.
//!
//! # Threshold Invariants
//!
//! The classifier thresholds must satisfy `0 <= low < high <= 1`. The defaults below are checked
//! against that ordering by [`validate_thresholds`], which every configuration path calls.

pub const DEFAULT_LOW_THRESHOLD: f32 = 0.3;
pub const DEFAULT_HIGH_THRESHOLD: f32 = 0.8;

pub const DEFAULT_TOP_K: usize = 1;

pub const DEFAULT_EXPLAIN_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Tokens shorter than this are never indexed for retrieval.
pub const MIN_TOKEN_LEN: usize = 2;

/// Evidence excerpts quoted in rule-based explanations are cut to this many characters.
pub const EVIDENCE_EXCERPT_CHARS: usize = 100;

/// Threshold ordering violations.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ThresholdError {
    /// A threshold is NaN or infinite.
    #[error("thresholds must be finite (low: {low}, high: {high})")]
    NotFinite { low: f32, high: f32 },

    /// A threshold falls outside `[0, 1]`.
    #[error("thresholds must lie in [0, 1] (low: {low}, high: {high})")]
    OutOfRange { low: f32, high: f32 },

    /// `low` is not strictly below `high`.
    #[error("low threshold {low} must be strictly below high threshold {high}")]
    NotOrdered { low: f32, high: f32 },
}

/// Checks `0 <= low < high <= 1`.
pub fn validate_thresholds(low: f32, high: f32) -> Result<(), ThresholdError> {
    if !low.is_finite() || !high.is_finite() {
        return Err(ThresholdError::NotFinite { low, high });
    }
    if !(0.0..=1.0).contains(&low) || !(0.0..=1.0).contains(&high) {
        return Err(ThresholdError::OutOfRange { low, high });
    }
    if low >= high {
        return Err(ThresholdError::NotOrdered { low, high });
    }
    Ok(())
}
