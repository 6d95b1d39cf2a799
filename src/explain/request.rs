use serde::Serialize;

use crate::classify::ClassificationResult;
use crate::retrieval::RankedPassage;

/// Structured input for an explanation backend.
///
/// `passages` are already ranked (best first) and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationRequest {
    pub question: String,
    pub student_answer: String,
    pub correct_answer: String,
    pub passages: Vec<RankedPassage>,
    pub classification: ClassificationResult,
}

impl ExplanationRequest {
    pub fn new(
        question: impl Into<String>,
        student_answer: impl Into<String>,
        correct_answer: impl Into<String>,
        passages: Vec<RankedPassage>,
        classification: ClassificationResult,
    ) -> Self {
        Self {
            question: question.into(),
            student_answer: student_answer.into(),
            correct_answer: correct_answer.into(),
            passages,
            classification,
        }
    }

    pub fn has_context(&self) -> bool {
        !self.passages.is_empty()
    }

    /// Best-ranked passage, if any.
    pub fn top_passage(&self) -> Option<&RankedPassage> {
        self.passages.first()
    }
}
