// Stemming regions R1, R2 and RV.
//
// A region is the tail of a word in which a suffix may be removed. It is
// represented by its start offset; a region that could not be located
// starts at the end of the word and therefore admits no suffix.

use serde::Deserialize;

use crate::pattern::Pattern;
use crate::rule::Gate;

/// Which of the three regions a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    R1,
    R2,
    Rv,
}

/// Start of a region as a byte offset into the word it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    start: usize,
    found: bool,
}

impl Region {
    /// A region found at `start`.
    pub fn at(start: usize) -> Self {
        Self { start, found: true }
    }

    /// The sentinel region for `word`: starts at its end.
    pub fn end_of(word: &str) -> Self {
        Self {
            start: word.len(),
            found: false,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Whether the boundary was located, as opposed to being the sentinel.
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Whether a match starting at `pos` lies inside the region.
    pub fn admits(&self, pos: usize) -> bool {
        pos >= self.start
    }
}

/// The three regions of one word. Computed once per stemming call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Regions {
    pub r1: Region,
    pub r2: Region,
    pub rv: Region,
}

impl Regions {
    /// All three regions set to the sentinel for `word`.
    pub fn empty(word: &str) -> Self {
        let end = Region::end_of(word);
        Self {
            r1: end,
            r2: end,
            rv: end,
        }
    }

    pub fn get(&self, kind: RegionKind) -> Region {
        match kind {
            RegionKind::R1 => self.r1,
            RegionKind::R2 => self.r2,
            RegionKind::Rv => self.rv,
        }
    }

    /// Whether a match starting at `pos` passes `gate`.
    pub fn admits(&self, gate: Gate, pos: usize) -> bool {
        match gate.region() {
            None => true,
            Some(kind) => self.get(kind).admits(pos),
        }
    }
}

/// Patterns that locate the region boundaries for one language.
///
/// - `r1` matches a vowel followed by a non-vowel; R1 starts after the first
///   such match, R2 after the first such match inside R1.
/// - `rv_prefixes` are word-initial patterns; RV starts at the end of the
///   first one that matches.
/// - `rv_fallback` matches a vowel; when no prefix applies, RV starts after
///   its first match past the first character. Without it RV is the sentinel.
/// - `r1_min_chars` moves a found R1 forward to at least that many characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegionPatterns {
    pub r1: Pattern,
    pub rv_prefixes: Vec<Pattern>,
    pub rv_fallback: Option<Pattern>,
    pub r1_min_chars: usize,
}
