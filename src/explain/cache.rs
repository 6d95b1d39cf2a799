//! In-memory explanation cache.
//!
//! Keys are BLAKE3 hashes over the backend name and both prompts, so the same answer pair with
//! the same evidence and rule outcome is always served the same text.

use blake3::Hasher;
use moka::sync::Cache;

use super::prompt::Prompt;

pub type CacheKey = [u8; 32];

#[derive(Clone)]
pub struct ExplanationCache {
    entries: Cache<CacheKey, String>,
}

impl std::fmt::Debug for ExplanationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplanationCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

impl ExplanationCache {
    /// Creates a cache holding at most `capacity` explanations.
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            entries: Cache::builder().max_capacity(capacity).build(),
        }
    }

    pub fn key(backend: &str, prompt: &Prompt) -> CacheKey {
        let mut hasher = Hasher::new();
        hasher.update(backend.as_bytes());
        hasher.update(b"|");
        hasher.update(prompt.system.as_bytes());
        hasher.update(b"|");
        hasher.update(prompt.user.as_bytes());
        *hasher.finalize().as_bytes()
    }

    #[inline]
    pub fn get(&self, key: &CacheKey) -> Option<String> {
        self.entries.get(key)
    }

    #[inline]
    pub fn insert(&self, key: CacheKey, explanation: String) {
        self.entries.insert(key, explanation);
    }

    pub fn clear(&self) {
        self.entries.invalidate_all();
    }

    /// Approximate entry count (moka applies writes lazily).
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
