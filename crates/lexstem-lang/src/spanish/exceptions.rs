// Spanish exception lists consulted ahead of the suffix stages.

use hashbrown::{HashMap, HashSet};
use serde::Deserialize;

/// Exception lists as written in the rule table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawExceptionLists {
    full_forms: HashMap<String, String>,
    clitic_non_verbs: HashMap<String, String>,
    clitic_verbs: HashMap<String, String>,
    diminutive_exceptions: HashMap<String, String>,
    non_diminutives: HashSet<String>,
    stems_belonging_together: HashMap<String, Vec<String>>,
}

/// Exact-match exception lists.
///
/// `stems_belonging_together` is written as canonical stem -> members and
/// stored inverted, so every member (and the canonical stem itself) maps to
/// the canonical stem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawExceptionLists")]
pub struct ExceptionLists {
    full_forms: HashMap<String, String>,
    clitic_non_verbs: HashMap<String, String>,
    clitic_verbs: HashMap<String, String>,
    diminutive_exceptions: HashMap<String, String>,
    non_diminutives: HashSet<String>,
    together: HashMap<String, String>,
}

impl From<RawExceptionLists> for ExceptionLists {
    fn from(raw: RawExceptionLists) -> Self {
        let mut together = HashMap::new();
        for (canonical, members) in raw.stems_belonging_together {
            for member in members {
                together.insert(member, canonical.clone());
            }
            together.insert(canonical.clone(), canonical);
        }
        Self {
            full_forms: raw.full_forms,
            clitic_non_verbs: raw.clitic_non_verbs,
            clitic_verbs: raw.clitic_verbs,
            diminutive_exceptions: raw.diminutive_exceptions,
            non_diminutives: raw.non_diminutives,
            together,
        }
    }
}

impl ExceptionLists {
    /// Literal stem for a known irregular surface form.
    ///
    /// Probes, in order: full forms, clitic-looking non-verbs, irregular
    /// diminutives, stems belonging together.
    pub fn irregular_stem(&self, word: &str) -> Option<&str> {
        self.full_forms
            .get(word)
            .or_else(|| self.clitic_non_verbs.get(word))
            .or_else(|| self.diminutive_exceptions.get(word))
            .or_else(|| self.together.get(word))
            .map(String::as_str)
    }

    /// The verb with its attached pronoun removed, for listed clitic verbs.
    pub fn strip_clitic_verb(&self, word: &str) -> Option<&str> {
        self.clitic_verbs.get(word).map(String::as_str)
    }

    /// Whether `word` looks diminutive but is not.
    pub fn is_non_diminutive(&self, word: &str) -> bool {
        self.non_diminutives.contains(word)
    }

    /// Canonical stem of a group of stems that belong together.
    pub fn canonical_stem(&self, stem: &str) -> Option<&str> {
        self.together.get(stem).map(String::as_str)
    }
}
