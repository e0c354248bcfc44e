// MorphologyRegistry: language code -> shared rule table.
//
// The registry is what a consumer asks for morphology data. Built-in tables
// are parsed once per process; tables loaded from disk replace them per
// language.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use hashbrown::HashMap;
use once_cell::sync::Lazy;

use lexstem_core::RuleTableError;

use crate::morphology::MorphologyData;
use crate::stemmer::{IdentityStemmer, LanguageStemmer, Stemmer};

static FRENCH: Lazy<Option<Arc<MorphologyData>>> =
    Lazy::new(|| parse_builtin("fr", include_str!("../data/french.json")));

static SPANISH: Lazy<Option<Arc<MorphologyData>>> =
    Lazy::new(|| parse_builtin("es", include_str!("../data/spanish.json")));

fn parse_builtin(language: &str, json: &str) -> Option<Arc<MorphologyData>> {
    match MorphologyData::from_json(json) {
        Ok(data) => Some(Arc::new(data)),
        Err(err) => {
            tracing::error!(language, error = %err, "built-in rule table failed to load");
            None
        }
    }
}

/// Built-in rule table for `language`, parsed on first use.
pub fn builtin(language: &str) -> Option<Arc<MorphologyData>> {
    match language {
        "fr" => FRENCH.clone(),
        "es" => SPANISH.clone(),
        _ => None,
    }
}

/// Languages with a built-in rule table.
pub const BUILTIN_LANGUAGES: &[&str] = &["es", "fr"];

/// Rule tables keyed by ISO 639-1 language code.
#[derive(Debug, Clone, Default)]
pub struct MorphologyRegistry {
    tables: HashMap<String, Arc<MorphologyData>>,
}

impl MorphologyRegistry {
    /// An empty registry. Every language falls back to identity stemming.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in table.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for &language in BUILTIN_LANGUAGES {
            if let Some(data) = builtin(language) {
                registry.tables.insert(language.to_string(), data);
            }
        }
        registry
    }

    /// Register `data` under its own language, replacing any previous table.
    pub fn insert(&mut self, data: MorphologyData) {
        self.insert_shared(Arc::new(data));
    }

    pub fn insert_shared(&mut self, data: Arc<MorphologyData>) {
        self.tables.insert(data.language().to_string(), data);
    }

    pub fn get(&self, language: &str) -> Option<Arc<MorphologyData>> {
        self.tables.get(language).cloned()
    }

    pub fn contains(&self, language: &str) -> bool {
        self.tables.contains_key(language)
    }

    /// Registered language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Load one rule table file and register it. Returns its language.
    pub fn load_file(&mut self, path: &Path) -> Result<&'static str, RuleTableError> {
        let data = MorphologyData::from_file(path)?;
        let language = data.language();
        tracing::debug!(language, path = %path.display(), "loaded rule table");
        self.insert(data);
        Ok(language)
    }

    /// Load every `*.json` file in `dir`. Returns the number of tables loaded.
    ///
    /// Files are loaded in name order, so of two tables for the same
    /// language the one whose name sorts last wins.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, RuleTableError> {
        let io_err = |source: std::io::Error| RuleTableError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            self.load_file(path)?;
        }
        Ok(paths.len())
    }

    /// Stemmer for `language`, or the identity stemmer when no table is
    /// registered for it.
    pub fn stemmer(&self, language: &str) -> Box<dyn Stemmer> {
        match self.get(language) {
            Some(data) => Box::new(LanguageStemmer::new(data)),
            None => {
                tracing::debug!(language, "no morphology data, using identity stemmer");
                Box::new(IdentityStemmer)
            }
        }
    }
}
