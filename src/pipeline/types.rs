use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classify::{AnswerStatus, ClassificationResult};
use crate::retrieval::RankedPassage;

/// One student answer to explain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub question: String,
    pub student_answer: String,
    pub correct_answer: String,
    /// Overrides the configured `top_k` for this call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,
}

impl QuizAnswer {
    pub fn new(
        question: impl Into<String>,
        student_answer: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            student_answer: student_answer.into(),
            correct_answer: correct_answer.into(),
            top_k: None,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
/// Explanation text and where it came from.
pub enum Explanation {
    /// Fresh output of the configured backend.
    Generated { text: String, backend: String },
    /// Earlier output of the same backend for identical inputs.
    Cached { text: String, backend: String },
    /// Rule-based text used because the backend failed.
    Fallback { text: String, reason: String },
}

impl Explanation {
    pub fn text(&self) -> &str {
        match self {
            Explanation::Generated { text, .. }
            | Explanation::Cached { text, .. }
            | Explanation::Fallback { text, .. } => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Explanation::Fallback { .. })
    }

    pub fn is_cached(&self) -> bool {
        matches!(self, Explanation::Cached { .. })
    }

    /// Short label for logs and response headers.
    pub fn source(&self) -> &'static str {
        match self {
            Explanation::Generated { .. } => "generated",
            Explanation::Cached { .. } => "cached",
            Explanation::Fallback { .. } => "fallback",
        }
    }
}

/// Final, immutable output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XaiResult {
    pub request_id: Uuid,
    pub question: String,
    pub student_answer: String,
    pub correct_answer: String,
    pub status: AnswerStatus,
    pub passages: Vec<RankedPassage>,
    pub classification: ClassificationResult,
    pub explanation: Explanation,
    pub review_topic: String,
    pub created_at: DateTime<Utc>,
}

impl XaiResult {
    pub fn has_context(&self) -> bool {
        !self.passages.is_empty()
    }
}
