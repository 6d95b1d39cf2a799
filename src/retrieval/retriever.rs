use tracing::debug;

use super::corpus::Corpus;
use super::error::RetrievalResult;
use super::model::TermWeightModel;
use super::types::{PassageScore, RankedPassage};

/// TF-IDF cosine retriever over a fixed corpus.
///
/// The fitted model is never mutated, so a `Retriever` can be shared across threads behind an
/// `Arc`. A corpus change means building a new one (see [`RetrieverHandle`](super::RetrieverHandle)).
#[derive(Debug, Clone)]
pub struct Retriever {
    corpus: Corpus,
    model: TermWeightModel,
}

impl Retriever {
    pub fn new(corpus: impl Into<Corpus>) -> RetrievalResult<Self> {
        let corpus = corpus.into();
        let model = TermWeightModel::fit(&corpus)?;
        Ok(Self { corpus, model })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn model(&self) -> &TermWeightModel {
        &self.model
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Top-`k` passages by cosine similarity to `query`.
    ///
    /// Passages with zero similarity are never returned. A query with no vocabulary overlap, an
    /// empty query, or `k == 0` yields an empty list.
    pub fn retrieve(&self, query: &str, k: usize) -> Vec<PassageScore> {
        if k == 0 {
            return Vec::new();
        }

        let Some(query_vector) = self.model.vectorize(query) else {
            debug!(query_len = query.len(), "Query shares no terms with the corpus");
            return Vec::new();
        };

        let mut scored: Vec<PassageScore> = (0..self.model.num_passages())
            .map(|id| PassageScore::new(id, self.model.similarity(&query_vector, id)))
            .filter(|candidate| candidate.score > 0.0)
            .collect();

        scored.sort_by(PassageScore::rank_cmp);
        scored.truncate(k);

        debug!(
            query_terms = query_vector.len(),
            k,
            returned = scored.len(),
            top_score = scored.first().map(|s| s.score),
            "Retrieved passages"
        );

        scored
    }

    /// Like [`Retriever::retrieve`], with passage text attached.
    pub fn retrieve_passages(&self, query: &str, k: usize) -> Vec<RankedPassage> {
        self.retrieve(query, k)
            .into_iter()
            .filter_map(|hit| {
                self.corpus
                    .get(hit.passage_id)
                    .map(|text| RankedPassage::new(hit.passage_id, text, hit.score))
            })
            .collect()
    }
}
