//! TF-IDF term weights fitted once over a corpus.

use std::collections::BTreeMap;

use tracing::debug;

use super::corpus::Corpus;
use super::error::{RetrievalError, RetrievalResult};
use crate::text::content_terms;

/// Sparse weight vector: `(term column, weight)` pairs sorted by column, L2-normalized.
pub type SparseVector = Vec<(usize, f32)>;

/// Immutable TF-IDF model over a fixed corpus.
///
/// Weights are raw term frequency times the smoothed inverse document frequency
/// `ln((1 + n) / (1 + df)) + 1`, which is finite for every `df` in `1..=n` and never increases
/// as `df` grows. Each passage vector is L2-normalized so a dot product is a cosine.
#[derive(Debug, Clone)]
pub struct TermWeightModel {
    vocabulary: BTreeMap<String, usize>,
    document_frequency: Vec<usize>,
    idf: Vec<f32>,
    passage_vectors: Vec<SparseVector>,
}

impl TermWeightModel {
    pub fn fit(corpus: &Corpus) -> RetrievalResult<Self> {
        if corpus.is_empty() {
            return Err(RetrievalError::InvalidCorpus {
                reason: "corpus contains no passages".to_string(),
            });
        }

        if corpus.iter().all(|passage| passage.trim().is_empty()) {
            return Err(RetrievalError::InvalidCorpus {
                reason: "all passages are empty or whitespace-only".to_string(),
            });
        }

        let term_counts: Vec<BTreeMap<String, u32>> =
            corpus.iter().map(count_terms).collect();

        let mut vocabulary = BTreeMap::new();
        for counts in &term_counts {
            for term in counts.keys() {
                vocabulary.entry(term.clone()).or_insert(0usize);
            }
        }

        if vocabulary.is_empty() {
            return Err(RetrievalError::InvalidCorpus {
                reason: "no passage contains an indexable term".to_string(),
            });
        }

        for (column, slot) in vocabulary.values_mut().enumerate() {
            *slot = column;
        }

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for counts in &term_counts {
            for term in counts.keys() {
                document_frequency[vocabulary[term]] += 1;
            }
        }

        let n = corpus.len();
        let idf: Vec<f32> = document_frequency
            .iter()
            .map(|&df| smoothed_idf(n, df))
            .collect();

        let passage_vectors = term_counts
            .iter()
            .map(|counts| {
                let weights = counts
                    .iter()
                    .map(|(term, &tf)| {
                        let column = vocabulary[term];
                        (column, tf as f32 * idf[column])
                    })
                    .collect();
                l2_normalize(weights)
            })
            .collect();

        debug!(
            num_passages = n,
            vocabulary_size = vocabulary.len(),
            "Fitted term weight model"
        );

        Ok(Self {
            vocabulary,
            document_frequency,
            idf,
            passage_vectors,
        })
    }

    /// Projects `text` onto the fitted vocabulary.
    ///
    /// Returns `None` when no term of `text` is in the vocabulary.
    pub fn vectorize(&self, text: &str) -> Option<SparseVector> {
        let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
        for term in content_terms(text) {
            if let Some(&column) = self.vocabulary.get(&term) {
                *counts.entry(column).or_insert(0) += 1;
            }
        }

        if counts.is_empty() {
            return None;
        }

        let weights = counts
            .into_iter()
            .map(|(column, tf)| (column, tf as f32 * self.idf[column]))
            .collect();
        Some(l2_normalize(weights))
    }

    /// Cosine similarity between a projected query and passage `passage_id`.
    pub fn similarity(&self, query: &[(usize, f32)], passage_id: usize) -> f32 {
        self.passage_vectors
            .get(passage_id)
            .map(|passage| sparse_dot(query, passage).clamp(0.0, 1.0))
            .unwrap_or(0.0)
    }

    pub fn num_passages(&self) -> usize {
        self.passage_vectors.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    pub fn document_frequency(&self, term: &str) -> Option<usize> {
        self.vocabulary
            .get(term)
            .map(|&column| self.document_frequency[column])
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.vocabulary.get(term).map(|&column| self.idf[column])
    }
}

fn count_terms(passage: &str) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for term in content_terms(passage) {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

#[inline]
fn smoothed_idf(num_documents: usize, document_frequency: usize) -> f32 {
    (((1 + num_documents) as f32) / ((1 + document_frequency) as f32)).ln() + 1.0
}

fn l2_normalize(mut weights: SparseVector) -> SparseVector {
    let norm = weights.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, w) in &mut weights {
            *w /= norm;
        }
    }
    weights
}

fn sparse_dot(a: &[(usize, f32)], b: &[(usize, f32)]) -> f32 {
    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0f32;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot
}
