// Compiled regex patterns and rewrite pairs used by rule tables.
//
// Rule tables are hand-authored data. A pattern that fails to compile is
// kept as an inert pattern that never matches, so a broken entry disables
// only the rule that carries it.

use std::fmt;

use regex::Regex;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};

/// A regex pattern from a rule table.
///
/// Offsets returned by the search methods are byte offsets into the searched
/// string, which is what region boundaries are expressed in as well.
#[derive(Clone, Default)]
pub struct Pattern {
    source: String,
    regex: Option<Regex>,
}

impl Pattern {
    /// Compile a pattern. Invalid sources produce an inert pattern and a warning.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let regex = match Regex::new(&source) {
            Ok(regex) => Some(regex),
            Err(err) => {
                tracing::warn!(pattern = %source, error = %err, "invalid rule pattern, rule disabled");
                None
            }
        };
        Self { source, regex }
    }

    /// A pattern that never matches. Used for absent rule data.
    pub fn never() -> Self {
        Self::default()
    }

    /// The pattern source as written in the rule table.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the pattern compiled and can match anything at all.
    pub fn is_active(&self) -> bool {
        self.regex.is_some()
    }

    /// Whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Start offset of the leftmost match.
    pub fn search(&self, text: &str) -> Option<usize> {
        self.find(text).map(|(start, _)| start)
    }

    /// Start and end offsets of the leftmost match.
    pub fn find(&self, text: &str) -> Option<(usize, usize)> {
        let m = self.regex.as_ref()?.find(text)?;
        Some((m.start(), m.end()))
    }

    /// Replace the leftmost match with `replacement`.
    ///
    /// `replacement` may refer to capture groups as `${1}`, `${2}`, ...
    pub fn replace_first(&self, text: &str, replacement: &str) -> String {
        match &self.regex {
            Some(re) => re.replace(text, replacement).into_owned(),
            None => text.to_string(),
        }
    }

    /// Replace every non-overlapping match with `replacement`.
    pub fn replace_all(&self, text: &str, replacement: &str) -> String {
        match &self.regex {
            Some(re) => re.replace_all(text, replacement).into_owned(),
            None => text.to_string(),
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl From<&str> for Pattern {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Pattern::new)
    }
}

// ---------------------------------------------------------------------------
// Rewrite
// ---------------------------------------------------------------------------

/// An unconditional `[pattern, replacement]` rewrite.
///
/// Written in rule tables as a two-element array, or a three-element array
/// whose last element is `true` when every match should be replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub pattern: Pattern,
    pub replacement: String,
    pub all: bool,
}

impl Rewrite {
    /// Rewrite the first match only.
    pub fn first(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: Pattern::new(pattern),
            replacement: replacement.to_string(),
            all: false,
        }
    }

    /// Rewrite every match.
    pub fn all(pattern: &str, replacement: &str) -> Self {
        Self {
            all: true,
            ..Self::first(pattern, replacement)
        }
    }

    /// A rewrite that never changes anything. Stands in for incomplete entries.
    pub fn inert() -> Self {
        Self {
            pattern: Pattern::never(),
            replacement: String::new(),
            all: false,
        }
    }

    /// Apply the rewrite to `text`.
    pub fn apply(&self, text: &str) -> String {
        if self.all {
            self.pattern.replace_all(text, &self.replacement)
        } else {
            self.pattern.replace_first(text, &self.replacement)
        }
    }
}

impl<'de> Deserialize<'de> for Rewrite {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RewriteVisitor;

        impl<'de> Visitor<'de> for RewriteVisitor {
            type Value = Rewrite;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a [pattern, replacement] or [pattern, replacement, all] array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Rewrite, A::Error> {
                let Some(pattern) = seq.next_element::<String>()? else {
                    tracing::warn!("empty rewrite, rewrite disabled");
                    return Ok(Rewrite::inert());
                };
                let Some(replacement) = seq.next_element::<String>()? else {
                    tracing::warn!(pattern = %pattern, "rewrite without replacement, rewrite disabled");
                    return Ok(Rewrite::inert());
                };
                let all: bool = seq.next_element()?.unwrap_or(false);
                Ok(Rewrite {
                    pattern: Pattern::new(pattern),
                    replacement,
                    all,
                })
            }
        }

        deserializer.deserialize_seq(RewriteVisitor)
    }
}
