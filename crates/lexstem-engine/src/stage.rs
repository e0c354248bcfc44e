// Stage interpreter: ordered suffix rules, first match wins.
//
// Region offsets stay those computed for the word entering the pipeline.
// Rewrites only touch the end of the word, so earlier offsets keep their
// meaning for every later stage and nested rule.

use lexstem_core::region::Regions;
use lexstem_core::rule::{Action, Claim, SuffixRule};

use crate::MAX_NESTING_DEPTH;

/// Result of running one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    pub word: String,
    /// Whether some arm fired. A rule that claims the stage on match without
    /// firing leaves this `false`.
    pub fired: bool,
}

impl StageOutcome {
    fn unchanged(word: &str) -> Self {
        Self {
            word: word.to_string(),
            fired: false,
        }
    }
}

enum RuleResult {
    /// An arm fired and produced this word.
    Fired(String),
    /// A rule matched and ended the stage without firing.
    Claimed,
    /// No rule applied.
    Skipped,
}

/// Run `rules` against `word`.
///
/// Rules are tried in order. A rule applies when its pattern matches and all
/// of its `requires` conditions hold. Its arms are then tried in order; the
/// first whose gate admits the match start fires its action and then runs
/// its nested rules on the rewritten word. If no arm fires, a
/// [`Claim::OnMatch`] rule ends the stage with the word unchanged, and a
/// [`Claim::OnFire`] rule lets the next rule be tried.
pub fn apply_stage(word: &str, rules: &[SuffixRule], regions: &Regions) -> StageOutcome {
    match eval_rules(word, rules, regions, 0) {
        RuleResult::Fired(word) => StageOutcome { word, fired: true },
        RuleResult::Claimed | RuleResult::Skipped => StageOutcome::unchanged(word),
    }
}

fn eval_rules(word: &str, rules: &[SuffixRule], regions: &Regions, depth: usize) -> RuleResult {
    if depth > MAX_NESTING_DEPTH {
        if !rules.is_empty() {
            tracing::debug!(depth, word, "nested suffix rules too deep, skipped");
        }
        return RuleResult::Skipped;
    }

    for rule in rules {
        let Some((start, _)) = rule.pattern.find(word) else {
            continue;
        };
        if !conditions_hold(word, rule, regions) {
            continue;
        }

        for arm in &rule.arms {
            if !regions.admits(arm.gate, start) {
                continue;
            }
            let rewritten = match &arm.action {
                Action::Delete => word[..start].to_string(),
                Action::Replace(replacement) => rule.pattern.replace_first(word, replacement),
            };
            let rewritten = match eval_rules(&rewritten, &arm.then, regions, depth + 1) {
                RuleResult::Fired(nested) => nested,
                RuleResult::Claimed | RuleResult::Skipped => rewritten,
            };
            return RuleResult::Fired(rewritten);
        }

        if rule.claim == Claim::OnMatch {
            return RuleResult::Claimed;
        }
    }

    RuleResult::Skipped
}

fn conditions_hold(word: &str, rule: &SuffixRule, regions: &Regions) -> bool {
    rule.requires.iter().all(|cond| {
        cond.pattern
            .search(word)
            .is_some_and(|pos| regions.admits(cond.gate, pos))
    })
}
