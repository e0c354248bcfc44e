// French stemmer pipeline.
//
// Stage order:
//   pre-processing -> regions -> standard suffixes -> verb suffixes starting
//   with i -> other verb suffixes -> residual suffixes or y/ç endings ->
//   consonant undoubling -> unaccent

use serde::Deserialize;

use lexstem_core::case::lowercase;
use lexstem_core::pattern::{Pattern, Rewrite};
use lexstem_core::region::RegionPatterns;
use lexstem_core::rule::SuffixRule;
use lexstem_engine::{apply_rewrites, apply_stage, compute_regions};

use crate::branch::VerbBranch;

/// French rule table.
///
/// Every field is optional in the JSON form; a missing stage is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrenchRules {
    pub regions: RegionPatterns,
    /// Vowel/semivowel disambiguation (`u`, `i`, `y` -> `U`, `I`, `Y`).
    pub pre_processing: Vec<Rewrite>,
    pub standard_suffixes: Vec<SuffixRule>,
    /// Matched against the original word to force the i-verb stage.
    pub ment_suffixes: Pattern,
    pub verb_suffixes_with_i: Vec<SuffixRule>,
    pub other_verb_suffixes: Vec<SuffixRule>,
    /// Final `s` removal, run before `residual_suffixes`.
    pub residual_s_ending: Vec<SuffixRule>,
    pub residual_suffixes: Vec<SuffixRule>,
    pub y_and_soft_c_endings: Vec<SuffixRule>,
    pub final_consonant_undoubling: Vec<Rewrite>,
    pub unaccent: Vec<Rewrite>,
}

/// Stem a French word.
pub fn stem(word: &str, rules: &FrenchRules) -> String {
    let original = lowercase(word);
    let word = apply_rewrites(&original, &rules.pre_processing);
    let regions = compute_regions(&word, &rules.regions);

    let after_standard = apply_stage(&word, &rules.standard_suffixes, &regions).word;

    let attempted = lowercase(&after_standard) == original || rules.ment_suffixes.is_match(&original);
    let branch = VerbBranch::run(&after_standard, attempted, &rules.verb_suffixes_with_i, &regions);
    let mut word = if branch.allows_other_verb_suffixes(&after_standard) {
        apply_stage(&branch.word, &rules.other_verb_suffixes, &regions).word
    } else {
        branch.word
    };

    if lowercase(&word) == original {
        word = apply_stage(&word, &rules.residual_s_ending, &regions).word;
        word = apply_stage(&word, &rules.residual_suffixes, &regions).word;
    } else {
        word = apply_stage(&word, &rules.y_and_soft_c_endings, &regions).word;
    }

    let word = apply_rewrites(&word, &rules.final_consonant_undoubling);
    let stem = lowercase(&apply_rewrites(&word, &rules.unaccent));
    tracing::trace!(word = %original, stem = %stem, "french stem");
    stem
}
