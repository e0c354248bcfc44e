// Prominent-word extraction: the words a text is most about, grouped by stem.
//
// The extractor never decides how to stem by itself. It asks the
// researcher's registry for a stemmer capability for the paper's language,
// which is the identity stemmer when no rule table is registered.

pub mod function_words;
pub mod tokenize;

use hashbrown::HashMap;

use lexstem_core::case::{CaseType, detect_case, lowercase};

use crate::cache::{DEFAULT_CAPACITY, StemCache};
use crate::registry::MorphologyRegistry;
use crate::stemmer::Stemmer;

pub use function_words::{function_words, is_function_word};
pub use tokenize::tokenize;

/// A text together with its locale (`fr_FR`, `es-MX`, `fr`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paper {
    text: String,
    locale: String,
}

impl Paper {
    pub fn new(text: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            locale: locale.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Language code: the locale up to the first `_` or `-`, lowercased.
    pub fn language(&self) -> String {
        let end = self.locale.find(['_', '-']).unwrap_or(self.locale.len());
        lowercase(&self.locale[..end])
    }
}

/// Extraction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// Minimum occurrences of a stem for it to be reported.
    pub min_occurrences: usize,
    /// Maximum number of words reported.
    pub max_words: usize,
    /// Entry limit of the per-extraction stem cache.
    pub cache_capacity: usize,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            min_occurrences: 5,
            max_words: 20,
            cache_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Supplies morphology data and settings to the extractor.
#[derive(Debug, Clone, Default)]
pub struct Researcher {
    registry: MorphologyRegistry,
    options: ExtractorOptions,
}

impl Researcher {
    pub fn new(registry: MorphologyRegistry) -> Self {
        Self {
            registry,
            options: ExtractorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExtractorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &MorphologyRegistry {
        &self.registry
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }
}

/// One reported word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProminentWord {
    pub stem: String,
    /// Most frequent surface form of the stem (alphabetically first on ties).
    pub word: String,
    pub occurrences: usize,
}

/// Extract the prominent words of `paper`.
pub fn extract(paper: &Paper, researcher: &Researcher) -> Vec<ProminentWord> {
    let language = paper.language();
    let stemmer = researcher.registry().stemmer(&language);
    extract_with(paper.text(), &language, stemmer.as_ref(), researcher.options())
}

/// Extract prominent words from `text` with an explicit stemmer.
pub fn extract_with(
    text: &str,
    language: &str,
    stemmer: &dyn Stemmer,
    options: &ExtractorOptions,
) -> Vec<ProminentWord> {
    let mut cache = StemCache::new(options.cache_capacity);
    let mut groups: HashMap<String, HashMap<String, usize>> = HashMap::new();

    for token in tokenize(text) {
        let lower = lowercase(token);
        if is_function_word(language, &lower) {
            continue;
        }
        let (stem, form) = if is_abbreviation(token) {
            (token.to_string(), token.to_string())
        } else {
            (cache.stem(&lower, stemmer), lower)
        };
        *groups.entry(stem).or_default().entry(form).or_default() += 1;
    }

    tracing::debug!(
        language,
        stems = groups.len(),
        cache_hits = cache.hits(),
        cache_misses = cache.misses(),
        "grouped tokens by stem"
    );

    let mut words: Vec<ProminentWord> = groups
        .into_iter()
        .map(|(stem, forms)| {
            let occurrences = forms.values().sum();
            ProminentWord {
                stem,
                word: most_frequent_form(forms),
                occurrences,
            }
        })
        .filter(|word| word.occurrences >= options.min_occurrences)
        .collect();

    words.sort_by(|a, b| b.occurrences.cmp(&a.occurrences).then_with(|| a.stem.cmp(&b.stem)));
    words.truncate(options.max_words);
    words
}

/// All-uppercase tokens of two or more characters ("ONU", "UE", "G7").
fn is_abbreviation(token: &str) -> bool {
    detect_case(token) == CaseType::AllUpper && token.chars().count() >= 2
}

fn most_frequent_form(forms: HashMap<String, usize>) -> String {
    forms
        .into_iter()
        .max_by(|(a_form, a_count), (b_form, b_count)| a_count.cmp(b_count).then_with(|| b_form.cmp(a_form)))
        .map(|(form, _)| form)
        .unwrap_or_default()
}
