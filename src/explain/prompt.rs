//! Prompt assembly for text-generation backends.

use super::request::ExplanationRequest;

pub const SYSTEM_PROMPT: &str = "You are an Explainable AI assistant for a university MCQ system. \
You must explain answers in simple, clear terms that help students understand both why their \
answer is correct or incorrect and what concepts they should review. Keep explanations concise \
(3-6 sentences) and educational. Ground the explanation in the lecture evidence when it is \
provided and do not invent lecture content.";

pub const NO_CONTEXT_LINE: &str = "No supporting context found in the lecture material.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    pub fn for_request(request: &ExplanationRequest) -> Self {
        Self {
            system: SYSTEM_PROMPT.to_string(),
            user: user_prompt(request),
        }
    }
}

pub fn user_prompt(request: &ExplanationRequest) -> String {
    let classification = &request.classification;

    let evidence = if request.passages.is_empty() {
        NO_CONTEXT_LINE.to_string()
    } else {
        request
            .passages
            .iter()
            .enumerate()
            .map(|(rank, passage)| {
                format!(
                    "[{}] (passage {}, relevance {:.3}) {}",
                    rank + 1,
                    passage.passage_id,
                    passage.score,
                    passage.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let assessment = format!(
        "Rule-based assessment: {} (status: {}, rule: {}, confidence: {:.2}, word overlap: {:.2})",
        classification.category,
        classification.status(),
        classification.rule,
        classification.confidence,
        classification.overlap
    );

    [
        format!("Question: {}", request.question),
        format!("Student answer: {}", request.student_answer),
        format!("Correct answer: {}", request.correct_answer),
        String::new(),
        "Evidence from lecture:".to_string(),
        evidence,
        String::new(),
        assessment,
        String::new(),
        "Write a short explanation (3-6 sentences) for the student. Start with whether they are \
         correct or not, then mention the related topic and key concepts they should understand."
            .to_string(),
    ]
    .join("\n")
}
