// Stemmer capability handed to consumers such as the prominent-word
// extractor.

use std::sync::Arc;

use crate::morphology::MorphologyData;

/// Maps a word to its stem.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;

    /// Language of the underlying rule table, `None` for the identity stemmer.
    fn language(&self) -> Option<&str>;
}

/// Returns every word unchanged. Used when no rule table exists for a language.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }

    fn language(&self) -> Option<&str> {
        None
    }
}

/// Stems with a shared rule table.
#[derive(Debug, Clone)]
pub struct LanguageStemmer {
    data: Arc<MorphologyData>,
}

impl LanguageStemmer {
    pub fn new(data: Arc<MorphologyData>) -> Self {
        Self { data }
    }
}

impl Stemmer for LanguageStemmer {
    fn stem(&self, word: &str) -> String {
        self.data.stem(word)
    }

    fn language(&self) -> Option<&str> {
        Some(self.data.language())
    }
}
