// Verb-suffix branch selection shared by the language pipelines.
//
// Both pipelines run a first verb stage only under a language-specific
// condition, and a second verb stage only when the first one was attempted
// and left the word exactly as the standard-suffix stage produced it.

use lexstem_core::region::Regions;
use lexstem_core::rule::SuffixRule;
use lexstem_engine::apply_stage;

/// Outcome of the first verb-suffix stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbBranch {
    pub word: String,
    /// Whether the stage's entry condition held, independent of whether any
    /// rule in it fired.
    pub attempted: bool,
}

impl VerbBranch {
    /// Run `rules` on `word` if `attempted`, otherwise pass `word` through.
    pub fn run(word: &str, attempted: bool, rules: &[SuffixRule], regions: &Regions) -> Self {
        let word = if attempted {
            apply_stage(word, rules, regions).word
        } else {
            word.to_string()
        };
        Self { word, attempted }
    }

    /// Whether the second verb stage applies: the first stage was attempted
    /// and the word still equals `after_standard`.
    pub fn allows_other_verb_suffixes(&self, after_standard: &str) -> bool {
        self.attempted && self.word == after_standard
    }
}
