use std::ops::Index;
use std::path::Path;
use std::sync::Arc;

use super::error::{RetrievalError, RetrievalResult};

/// Ordered, immutable collection of lecture passages.
///
/// A passage's identity is its position. Cloning is cheap (shared slice).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    passages: Arc<[String]>,
}

impl Corpus {
    pub fn new<I, S>(passages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            passages: passages.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits a document into paragraphs on blank lines.
    ///
    /// Paragraphs are trimmed and empty ones are skipped, so the result may be empty.
    pub fn from_text(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n");
        Self::new(
            normalized
                .split("\n\n")
                .map(str::trim)
                .filter(|paragraph| !paragraph.is_empty()),
        )
    }

    /// Reads a UTF-8 file and splits it with [`Corpus::from_text`].
    pub fn from_file(path: impl AsRef<Path>) -> RetrievalResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RetrievalError::CorpusRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.passages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    #[inline]
    pub fn get(&self, id: usize) -> Option<&str> {
        self.passages.get(id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.passages.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.passages
    }

    /// Three short lecture notes used when no corpus file is configured.
    pub fn sample_lectures() -> Self {
        Self::new(SAMPLE_LECTURES)
    }
}

const SAMPLE_LECTURES: [&str; 3] = [
    "Week 3: TF-IDF (Term Frequency-Inverse Document Frequency) is used to measure how important \
     a word is in a document relative to the entire corpus. It helps identify keywords that are \
     distinctive to a particular document.",
    "Week 5: Explainable AI (XAI) aims to provide transparency and human-understandable reasons \
     for model outputs. It helps users understand why an AI system made a particular decision or \
     prediction.",
    "Week 7: Text mining involves extracting useful information from unstructured text data. \
     Common techniques include tokenization, stemming, and vectorization methods like TF-IDF.",
];

impl Index<usize> for Corpus {
    type Output = str;

    fn index(&self, id: usize) -> &str {
        &self.passages[id]
    }
}

impl<S: Into<String>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<String>> for Corpus {
    fn from(passages: Vec<String>) -> Self {
        Self {
            passages: passages.into(),
        }
    }
}
