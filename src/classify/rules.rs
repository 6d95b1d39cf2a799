//! Ordered rule table. The first rule whose predicate holds decides the category.

use super::config::ClassifierConfig;
use super::types::{AnswerCategory, RuleId};
use crate::text::{jaccard, normalize, token_set};

/// Comparison features extracted once per answer pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerFeatures {
    /// Normalized strings are identical.
    pub exact: bool,
    /// Token-set Jaccard overlap.
    pub overlap: f32,
}

impl AnswerFeatures {
    pub fn extract(student_answer: &str, correct_answer: &str) -> Self {
        let exact = normalize(student_answer) == normalize(correct_answer);
        let overlap = jaccard(&token_set(student_answer), &token_set(correct_answer));
        Self { exact, overlap }
    }
}

pub struct Rule {
    pub id: RuleId,
    pub category: AnswerCategory,
    matches: fn(&AnswerFeatures, &ClassifierConfig) -> bool,
    confidence: fn(&AnswerFeatures) -> f32,
}

impl Rule {
    #[inline]
    pub fn matches(&self, features: &AnswerFeatures, config: &ClassifierConfig) -> bool {
        (self.matches)(features, config)
    }

    #[inline]
    pub fn confidence(&self, features: &AnswerFeatures) -> f32 {
        (self.confidence)(features)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("category", &self.category)
            .finish()
    }
}

/// Rules in priority order. `Fallback` must stay last and unconditional.
pub static RULES: [Rule; 4] = [
    Rule {
        id: RuleId::ExactMatch,
        category: AnswerCategory::ExactMatch,
        matches: |features, _| features.exact,
        confidence: |_| 1.0,
    },
    Rule {
        id: RuleId::HighOverlap,
        category: AnswerCategory::Paraphrase,
        matches: |features, config| features.overlap >= config.high_threshold(),
        confidence: |features| features.overlap,
    },
    Rule {
        id: RuleId::PartialOverlap,
        category: AnswerCategory::PartialOverlap,
        matches: |features, config| features.overlap > config.low_threshold(),
        confidence: |features| features.overlap,
    },
    Rule {
        id: RuleId::Fallback,
        category: AnswerCategory::Unrelated,
        matches: |_, _| true,
        confidence: |features| features.overlap,
    },
];
