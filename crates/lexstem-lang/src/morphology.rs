// Morphology data: one rule table per supported language.

use std::fs;
use std::path::Path;

use lexstem_core::RuleTableError;

use crate::french::{self, FrenchRules};
use crate::spanish::{self, SpanishRules};

/// A parsed rule table together with the pipeline that interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MorphologyData {
    French(FrenchRules),
    Spanish(SpanishRules),
}

impl MorphologyData {
    /// Parse a rule table. The table's `"language"` field selects the pipeline.
    pub fn from_json(json: &str) -> Result<Self, RuleTableError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let language = value
            .get("language")
            .and_then(serde_json::Value::as_str)
            .ok_or(RuleTableError::MissingLanguage)?
            .to_string();
        match language.as_str() {
            "fr" => Ok(Self::French(serde_json::from_value(value)?)),
            "es" => Ok(Self::Spanish(serde_json::from_value(value)?)),
            _ => Err(RuleTableError::UnsupportedLanguage(language)),
        }
    }

    /// Read and parse a rule table file.
    pub fn from_file(path: &Path) -> Result<Self, RuleTableError> {
        let json = fs::read_to_string(path).map_err(|source| RuleTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// ISO 639-1 code of the table's language.
    pub fn language(&self) -> &'static str {
        match self {
            Self::French(_) => "fr",
            Self::Spanish(_) => "es",
        }
    }

    /// Stem `word` with this table.
    pub fn stem(&self, word: &str) -> String {
        match self {
            Self::French(rules) => french::stem(word, rules),
            Self::Spanish(rules) => spanish::stem(word, rules),
        }
    }
}

/// Stem `word` with `data`. Never fails; an empty word stems to itself.
pub fn stem(word: &str, data: &MorphologyData) -> String {
    data.stem(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_field_selects_pipeline() {
        let fr = MorphologyData::from_json(r#"{ "language": "fr" }"#).unwrap();
        assert_eq!(fr.language(), "fr");
        assert!(matches!(fr, MorphologyData::French(_)));
        let es = MorphologyData::from_json(r#"{ "language": "es" }"#).unwrap();
        assert_eq!(es.language(), "es");
    }

    #[test]
    fn missing_language_is_an_error() {
        let err = MorphologyData::from_json(r#"{ "regions": {} }"#).unwrap_err();
        assert!(matches!(err, RuleTableError::MissingLanguage));
    }

    #[test]
    fn unknown_language_is_an_error() {
        let err = MorphologyData::from_json(r#"{ "language": "pl" }"#).unwrap_err();
        assert!(matches!(err, RuleTableError::UnsupportedLanguage(ref l) if l == "pl"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = MorphologyData::from_json("{ not json").unwrap_err();
        assert!(matches!(err, RuleTableError::Parse(_)));
    }

    #[test]
    fn wrongly_shaped_stage_is_a_parse_error() {
        let err = MorphologyData::from_json(r#"{ "language": "fr", "standardSuffixes": 3 }"#).unwrap_err();
        assert!(matches!(err, RuleTableError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = MorphologyData::from_file(Path::new("/nonexistent/lexstem/fr.json")).unwrap_err();
        assert!(matches!(err, RuleTableError::Io { .. }));
    }

    #[test]
    fn empty_table_stems_to_lowercase() {
        let data = MorphologyData::from_json(r#"{ "language": "es" }"#).unwrap();
        assert_eq!(stem("Casas", &data), "casas");
    }
}
