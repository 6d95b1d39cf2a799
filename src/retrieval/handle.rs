use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

use super::corpus::Corpus;
use super::error::RetrievalResult;
use super::retriever::Retriever;

/// Shared reference to the current [`Retriever`].
///
/// Readers take an `Arc` snapshot and release the lock immediately, so a swap never waits on
/// in-flight retrievals and those retrievals keep the corpus they started with.
#[derive(Debug, Clone)]
pub struct RetrieverHandle {
    current: Arc<RwLock<Arc<Retriever>>>,
}

impl RetrieverHandle {
    pub fn new(retriever: Retriever) -> Self {
        Self::from_arc(Arc::new(retriever))
    }

    pub fn from_arc(retriever: Arc<Retriever>) -> Self {
        Self {
            current: Arc::new(RwLock::new(retriever)),
        }
    }

    pub fn from_corpus(corpus: impl Into<Corpus>) -> RetrievalResult<Self> {
        Ok(Self::new(Retriever::new(corpus)?))
    }

    /// Snapshot of the current retriever.
    #[inline]
    pub fn load(&self) -> Arc<Retriever> {
        Arc::clone(&self.current.read())
    }

    /// Installs `retriever` and returns the previous one.
    pub fn swap(&self, retriever: Retriever) -> Arc<Retriever> {
        let next = Arc::new(retriever);
        std::mem::replace(&mut *self.current.write(), next)
    }

    /// Builds a retriever for `corpus` outside the lock, then swaps it in.
    ///
    /// On error the current retriever stays in place.
    pub fn rebuild(&self, corpus: impl Into<Corpus>) -> RetrievalResult<Arc<Retriever>> {
        let retriever = Retriever::new(corpus)?;
        let num_passages = retriever.len();
        let previous = self.swap(retriever);
        info!(
            num_passages,
            previous_passages = previous.len(),
            "Swapped retriever"
        );
        Ok(self.load())
    }
}
