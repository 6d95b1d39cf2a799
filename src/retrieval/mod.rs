//! Lecture passage retrieval via TF-IDF cosine similarity.
//!
//! A [`Retriever`] fits a [`TermWeightModel`] once over a [`Corpus`] and then scores arbitrary
//! query text against every passage without refitting. Ranking is deterministic: descending
//! score, ties broken by ascending passage id.

pub mod corpus;
pub mod error;
pub mod handle;
pub mod model;
pub mod retriever;
pub mod types;

#[cfg(test)]
mod tests;

pub use corpus::Corpus;
pub use error::{RetrievalError, RetrievalResult};
pub use handle::RetrieverHandle;
pub use model::{SparseVector, TermWeightModel};
pub use retriever::Retriever;
pub use types::{PassageScore, RankedPassage};
