// Bounded memo of word -> stem for one extraction run.

use hashbrown::HashMap;

use crate::stemmer::Stemmer;

/// Longest word (in characters) that is cached. Longer words are rare and
/// stemmed every time.
const MAX_CACHED_WORD_LEN: usize = 32;

/// Default number of entries kept.
pub const DEFAULT_CAPACITY: usize = 4096;

/// A word -> stem cache with a fixed entry limit.
///
/// Once full, new words are stemmed but not stored; existing entries stay.
/// Stemming is a pure function of the word, so the cache never changes a
/// result.
#[derive(Debug, Clone)]
pub struct StemCache {
    entries: HashMap<String, String>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for StemCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl StemCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Stem `word` with `stemmer`, reusing a cached stem when present.
    pub fn stem(&mut self, word: &str, stemmer: &dyn Stemmer) -> String {
        if let Some(stem) = self.entries.get(word) {
            self.hits += 1;
            return stem.clone();
        }
        self.misses += 1;
        let stem = stemmer.stem(word);
        if self.entries.len() < self.capacity && word.chars().count() <= MAX_CACHED_WORD_LEN {
            self.entries.insert(word.to_string(), stem.clone());
        }
        stem
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
