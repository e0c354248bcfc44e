// Spanish stemmer pipeline.
//
// Exception lists are consulted before any suffix stage. Then:
//   regions -> attached pronouns -> diminutives, or standard suffixes ->
//   y-verb suffixes -> other verb suffixes -> residual suffixes ->
//   stems belonging together -> unaccent

pub mod exceptions;

use serde::Deserialize;

use lexstem_core::case::lowercase;
use lexstem_core::pattern::Rewrite;
use lexstem_core::region::{RegionPatterns, Regions};
use lexstem_core::rule::SuffixRule;
use lexstem_engine::{apply_rewrites, apply_stage, compute_regions};

pub use exceptions::ExceptionLists;

use crate::branch::VerbBranch;

/// Spanish rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpanishRules {
    pub regions: RegionPatterns,
    /// Pronouns attached to gerunds and infinitives (`-ándolo`, `-arse`, ...).
    pub attached_pronouns: Vec<SuffixRule>,
    pub diminutives: Vec<SuffixRule>,
    pub standard_suffixes: Vec<SuffixRule>,
    /// Verb suffixes beginning with `y` after `u`.
    pub y_verb_suffixes: Vec<SuffixRule>,
    pub other_verb_suffixes: Vec<SuffixRule>,
    pub residual_suffixes: Vec<SuffixRule>,
    pub unaccent: Vec<Rewrite>,
    pub exceptions: ExceptionLists,
}

/// Stem a Spanish word.
pub fn stem(word: &str, rules: &SpanishRules) -> String {
    let word = lowercase(word);
    if let Some(stem) = rules.exceptions.irregular_stem(&word) {
        tracing::trace!(word = %word, stem, "spanish exception");
        return stem.to_string();
    }

    let word = match rules.exceptions.strip_clitic_verb(&word) {
        Some(verb) => verb.to_string(),
        None => word,
    };
    let regions = compute_regions(&word, &rules.regions);
    let word = apply_stage(&word, &rules.attached_pronouns, &regions).word;

    let stem = remove_suffixes(&word, rules, &regions);
    let stem = match rules.exceptions.canonical_stem(&stem) {
        Some(canonical) => canonical.to_string(),
        None => stem,
    };

    let stem = lowercase(&apply_rewrites(&stem, &rules.unaccent));
    tracing::trace!(word = %word, stem = %stem, "spanish stem");
    stem
}

/// Diminutive stage, or the standard / verb / residual sequence.
fn remove_suffixes(word: &str, rules: &SpanishRules, regions: &Regions) -> String {
    if !rules.exceptions.is_non_diminutive(word) {
        let diminutive = apply_stage(word, &rules.diminutives, regions);
        if diminutive.fired {
            return diminutive.word;
        }
    }

    let after_standard = apply_stage(word, &rules.standard_suffixes, regions).word;
    let branch = VerbBranch::run(
        &after_standard,
        after_standard == word,
        &rules.y_verb_suffixes,
        regions,
    );
    let word = if branch.allows_other_verb_suffixes(&after_standard) {
        apply_stage(&branch.word, &rules.other_verb_suffixes, regions).word
    } else {
        branch.word
    };
    apply_stage(&word, &rules.residual_suffixes, regions).word
}
