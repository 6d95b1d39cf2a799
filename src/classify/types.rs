use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Relationship between a student answer and the correct answer.
pub enum AnswerCategory {
    /// Identical after normalization.
    ExactMatch,
    /// Same wording up to order, punctuation or minor extra words.
    Paraphrase,
    /// Some shared vocabulary, not enough to count as the same answer.
    PartialOverlap,
    /// Little or no shared vocabulary.
    Unrelated,
}

impl AnswerCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerCategory::ExactMatch => "EXACT_MATCH",
            AnswerCategory::Paraphrase => "PARAPHRASE",
            AnswerCategory::PartialOverlap => "PARTIAL_OVERLAP",
            AnswerCategory::Unrelated => "UNRELATED",
        }
    }

    /// Binary verdict shown to the student.
    pub fn status(&self) -> AnswerStatus {
        match self {
            AnswerCategory::ExactMatch | AnswerCategory::Paraphrase => AnswerStatus::Correct,
            AnswerCategory::PartialOverlap | AnswerCategory::Unrelated => AnswerStatus::Incorrect,
        }
    }
}

impl std::fmt::Display for AnswerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerStatus {
    Correct,
    Incorrect,
}

impl AnswerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerStatus::Correct => "correct",
            AnswerStatus::Incorrect => "incorrect",
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerStatus::Correct)
    }
}

impl std::fmt::Display for AnswerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Identifies the rule that produced a classification.
pub enum RuleId {
    ExactMatch,
    HighOverlap,
    PartialOverlap,
    Fallback,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::ExactMatch => "exact_match",
            RuleId::HighOverlap => "high_overlap",
            RuleId::PartialOverlap => "partial_overlap",
            RuleId::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Outcome of classifying one answer pair.
pub struct ClassificationResult {
    pub category: AnswerCategory,
    /// Finite, in `[0, 1]`.
    pub confidence: f32,
    /// Rule that fired.
    pub rule: RuleId,
    /// Token-set Jaccard overlap between the two answers.
    pub overlap: f32,
}

impl ClassificationResult {
    pub fn status(&self) -> AnswerStatus {
        self.category.status()
    }
}

impl std::fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (rule: {}, confidence: {:.2})",
            self.category, self.rule, self.confidence
        )
    }
}
