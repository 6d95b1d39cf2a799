use serde::Serialize;

use super::error::ClassifierError;
use crate::constants::{DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD, validate_thresholds};

/// Overlap thresholds that separate the rule brackets.
///
/// Always satisfies `0 <= low < high <= 1`; the only way to build one is through
/// [`ClassifierConfig::new`] or [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassifierConfig {
    low_threshold: f32,
    high_threshold: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_LOW_THRESHOLD,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

impl ClassifierConfig {
    pub fn new(low_threshold: f32, high_threshold: f32) -> Result<Self, ClassifierError> {
        validate_thresholds(low_threshold, high_threshold)?;
        Ok(Self {
            low_threshold,
            high_threshold,
        })
    }

    #[inline]
    pub fn low_threshold(&self) -> f32 {
        self.low_threshold
    }

    #[inline]
    pub fn high_threshold(&self) -> f32 {
        self.high_threshold
    }
}
