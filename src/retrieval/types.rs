use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Similarity of one passage to a query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassageScore {
    /// Position of the passage in the corpus.
    pub passage_id: usize,
    /// Cosine similarity in `[0, 1]`.
    pub score: f32,
}

impl PassageScore {
    pub fn new(passage_id: usize, score: f32) -> Self {
        Self { passage_id, score }
    }

    /// Ranking order: descending score, then ascending passage id.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.passage_id.cmp(&other.passage_id))
    }
}

/// A ranked passage with its text, as handed to the explanation stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPassage {
    pub passage_id: usize,
    pub text: String,
    pub score: f32,
}

impl RankedPassage {
    pub fn new(passage_id: usize, text: impl Into<String>, score: f32) -> Self {
        Self {
            passage_id,
            text: text.into(),
            score,
        }
    }
}
