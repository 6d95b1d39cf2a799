//! Deterministic, offline explanations built from the rule outcome.
//!
//! Used when no text-generation backend is configured and as the fallback text when a backend
//! call fails.

use async_trait::async_trait;

use super::backend::ExplanationBackend;
use super::error::ExplainResult;
use super::request::ExplanationRequest;
use crate::classify::{AnswerCategory, AnswerStatus};
use crate::constants::EVIDENCE_EXCERPT_CHARS;
use crate::retrieval::RankedPassage;

pub const RULE_BASED_BACKEND: &str = "rule-based";

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedExplainer;

impl RuleBasedExplainer {
    pub fn new() -> Self {
        Self
    }

    /// Builds the explanation synchronously; never fails.
    pub fn render(&self, request: &ExplanationRequest) -> String {
        let mut sentences = vec![category_hint(request)];

        match request.top_passage() {
            Some(passage) => sentences.push(format!(
                "The most relevant lecture material says: \"{}\"",
                excerpt(&passage.text)
            )),
            None => {
                sentences.push("No supporting context was found in the lecture material.".into())
            }
        }

        sentences.push(review_topic(
            request.classification.status(),
            request.top_passage(),
        ));

        sentences.join(" ")
    }
}

#[async_trait]
impl ExplanationBackend for RuleBasedExplainer {
    fn name(&self) -> &str {
        RULE_BASED_BACKEND
    }

    async fn explain(&self, request: &ExplanationRequest) -> ExplainResult<String> {
        Ok(self.render(request))
    }
}

fn category_hint(request: &ExplanationRequest) -> String {
    match request.classification.category {
        AnswerCategory::ExactMatch => {
            "Your answer is correct! You have a good understanding of this concept.".to_string()
        }
        AnswerCategory::Paraphrase => format!(
            "Your answer is correct. Your wording differs slightly from the expected answer \
             (\"{}\") but expresses the same idea.",
            request.correct_answer
        ),
        AnswerCategory::PartialOverlap => format!(
            "Your answer is incorrect, although it shares some key terms with the correct answer \
             (\"{}\"). It only partly matches the concept the question is focusing on.",
            request.correct_answer
        ),
        AnswerCategory::Unrelated => format!(
            "Your answer is incorrect. The selected option appears to be related to a different \
             concept than what the question is focusing on; the correct answer is \"{}\".",
            request.correct_answer
        ),
    }
}

/// Suggestion for what the student should study next.
pub fn review_topic(status: AnswerStatus, evidence: Option<&RankedPassage>) -> String {
    match (status, evidence) {
        (AnswerStatus::Correct, _) => {
            "You have mastered this topic. Consider reviewing related advanced concepts."
                .to_string()
        }
        (AnswerStatus::Incorrect, Some(passage)) => format!(
            "You should review the lecture section mentioned in the evidence: \"{}\". Focus on \
             understanding the key concepts and their relationships.",
            excerpt(&passage.text)
        ),
        (AnswerStatus::Incorrect, None) => {
            "You should review the lecture material related to this question. Pay special \
             attention to the key concepts and definitions it relies on."
                .to_string()
        }
    }
}

/// First [`EVIDENCE_EXCERPT_CHARS`] characters of `text`, with an ellipsis when cut.
pub fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(EVIDENCE_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head.trim_end())
    } else {
        head
    }
}
