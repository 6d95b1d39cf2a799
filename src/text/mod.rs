//! Shared text normalization.
//!
//! Retrieval and classification split words the same way; retrieval then filters further. Both go
//! through the helpers here:
//!
//! - [`normalize`] case-folds and collapses whitespace (used for exact-match comparison)
//! - [`tokenize`] splits on every non-alphanumeric character and keeps every word, however short
//!   (used for answer comparison, where "Type 1" and "Type 2" must differ)
//! - [`content_terms`] is [`tokenize`] minus English stop words and tokens shorter than
//!   [`MIN_TOKEN_LEN`](crate::constants::MIN_TOKEN_LEN) (used for retrieval)

mod stop_words;

use std::collections::BTreeSet;

use crate::constants::MIN_TOKEN_LEN;

pub use stop_words::is_stop_word;

/// Lowercases `text` and collapses every whitespace run into a single space.
///
/// Leading and trailing whitespace is removed, so `"  Paris \n"` and `"paris"` normalize to the
/// same string.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-folded word tokens in document order (duplicates kept).
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Indexable tokens: at least [`MIN_TOKEN_LEN`] characters and not a stop word.
pub fn content_terms(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN && !is_stop_word(token))
        .collect()
}

/// Distinct tokens of `text`, ordered.
pub fn token_set(text: &str) -> BTreeSet<String> {
    tokenize(text).into_iter().collect()
}

/// Token-set Jaccard similarity: `|A ∩ B| / |A ∪ B|`.
///
/// Two empty sets have similarity `0.0`; callers that need "identical empty input" semantics
/// compare normalized strings first.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f32 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f32 / union as f32
}
