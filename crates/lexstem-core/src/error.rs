// Errors raised while loading rule tables.
//
// Stemming itself never fails; only turning external data into a rule
// table can.

use std::path::PathBuf;

/// Error type for rule table loading.
#[derive(Debug, thiserror::Error)]
pub enum RuleTableError {
    /// The rule table file could not be read.
    #[error("failed to read rule table {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rule table is not valid JSON or does not have the expected shape.
    #[error("failed to parse rule table: {0}")]
    Parse(#[from] serde_json::Error),

    /// The table does not say which language it is for.
    #[error("rule table has no \"language\" field")]
    MissingLanguage,

    /// No stemmer pipeline exists for the table's language.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}
