use tracing::debug;

use super::config::ClassifierConfig;
use super::error::ClassifierError;
use super::rules::{AnswerFeatures, RULES};
use super::types::ClassificationResult;

/// Deterministic answer classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnswerClassifier {
    config: ClassifierConfig,
}

impl AnswerClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn classify(
        &self,
        student_answer: &str,
        correct_answer: &str,
    ) -> Result<ClassificationResult, ClassifierError> {
        classify(student_answer, correct_answer, &self.config)
    }
}

/// Runs the rule table over one answer pair.
///
/// Errors only with [`ClassifierError::InvariantViolation`], which means the rule table itself
/// is broken (no rule fired or a confidence left `[0, 1]`).
pub fn classify(
    student_answer: &str,
    correct_answer: &str,
    config: &ClassifierConfig,
) -> Result<ClassificationResult, ClassifierError> {
    let features = AnswerFeatures::extract(student_answer, correct_answer);

    let rule = RULES
        .iter()
        .find(|rule| rule.matches(&features, config))
        .ok_or_else(|| ClassifierError::InvariantViolation {
            reason: format!("no rule matched (overlap: {})", features.overlap),
        })?;

    let confidence = rule.confidence(&features);
    if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
        return Err(ClassifierError::InvariantViolation {
            reason: format!("rule {} produced confidence {}", rule.id, confidence),
        });
    }

    debug!(
        rule = %rule.id,
        category = %rule.category,
        confidence,
        overlap = features.overlap,
        "Classified answer pair"
    );

    Ok(ClassificationResult {
        category: rule.category,
        confidence,
        rule: rule.id,
        overlap: features.overlap,
    })
}
