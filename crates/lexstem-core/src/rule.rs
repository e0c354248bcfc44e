// Suffix rules: the records a stage interpreter walks through.
//
// A stage is an ordered list of `SuffixRule`s. The first rule that claims
// the stage wins. Inside a rule, `arms` are tiers tried in order: the first
// arm whose gate admits the match position fires its action, then runs its
// nested `then` rules against the rewritten word.

use serde::Deserialize;

use crate::pattern::Pattern;
use crate::region::RegionKind;

/// Region a match must start in for an arm or condition to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gate {
    /// Anywhere in the word.
    #[default]
    None,
    R1,
    R2,
    Rv,
}

impl Gate {
    /// The region this gate refers to, if any.
    pub fn region(self) -> Option<RegionKind> {
        match self {
            Gate::None => None,
            Gate::R1 => Some(RegionKind::R1),
            Gate::R2 => Some(RegionKind::R2),
            Gate::Rv => Some(RegionKind::Rv),
        }
    }
}

/// What an arm does to the word once it fires.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Truncate the word at the match start.
    Delete,
    /// Substitute the match with a replacement template (`${n}` allowed).
    Replace(String),
}

/// One gated tier of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Arm {
    #[serde(default)]
    pub gate: Gate,
    pub action: Action,
    /// Preceding-context rules applied to the rewritten word, first match wins.
    #[serde(default)]
    pub then: Vec<SuffixRule>,
}

impl Arm {
    pub fn new(gate: Gate, action: Action) -> Self {
        Self {
            gate,
            action,
            then: Vec::new(),
        }
    }

    pub fn then(mut self, rules: Vec<SuffixRule>) -> Self {
        self.then = rules;
        self
    }
}

/// Extra pattern that must match inside a region before the rule is considered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Condition {
    pub pattern: Pattern,
    #[serde(default)]
    pub gate: Gate,
}

/// When a rule stops the stage it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Claim {
    /// Only when one of its arms fires.
    #[default]
    OnFire,
    /// As soon as its pattern matches, even if no arm's gate admits the match.
    OnMatch,
}

/// A suffix detection pattern with its gated actions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuffixRule {
    /// Missing from the table means the rule never matches.
    #[serde(default)]
    pub pattern: Pattern,
    #[serde(default)]
    pub requires: Vec<Condition>,
    /// Missing from the table means the rule never fires.
    #[serde(default)]
    pub arms: Vec<Arm>,
    #[serde(default)]
    pub claim: Claim,
}

impl SuffixRule {
    /// A rule with a single arm.
    pub fn new(pattern: &str, gate: Gate, action: Action) -> Self {
        Self {
            pattern: Pattern::new(pattern),
            requires: Vec::new(),
            arms: vec![Arm::new(gate, action)],
            claim: Claim::OnFire,
        }
    }

    /// A rule that deletes the match when it starts inside `gate`.
    pub fn delete(pattern: &str, gate: Gate) -> Self {
        Self::new(pattern, gate, Action::Delete)
    }

    /// A rule that replaces the match when it starts inside `gate`.
    pub fn replace(pattern: &str, gate: Gate, replacement: &str) -> Self {
        Self::new(pattern, gate, Action::Replace(replacement.to_string()))
    }

    /// A rule whose arms are tried in order.
    pub fn tiered(pattern: &str, arms: Vec<Arm>) -> Self {
        Self {
            pattern: Pattern::new(pattern),
            requires: Vec::new(),
            arms,
            claim: Claim::OnFire,
        }
    }

    /// Nested rules for the first arm.
    pub fn then(mut self, rules: Vec<SuffixRule>) -> Self {
        if let Some(arm) = self.arms.first_mut() {
            arm.then = rules;
        }
        self
    }

    pub fn requiring(mut self, pattern: &str, gate: Gate) -> Self {
        self.requires.push(Condition {
            pattern: Pattern::new(pattern),
            gate,
        });
        self
    }

    pub fn claim_on_match(mut self) -> Self {
        self.claim = Claim::OnMatch;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_maps_to_region() {
        assert_eq!(Gate::None.region(), None);
        assert_eq!(Gate::R2.region(), Some(RegionKind::R2));
        assert_eq!(Gate::Rv.region(), Some(RegionKind::Rv));
    }

    #[test]
    fn deserialize_simple_rule() {
        let rule: SuffixRule = serde_json::from_str(
            r#"{ "pattern": "(logie|logies)$", "arms": [ { "gate": "r2", "action": { "replace": "log" } } ] }"#,
        )
        .unwrap();
        assert_eq!(rule, SuffixRule::replace("(logie|logies)$", Gate::R2, "log"));
    }

    #[test]
    fn deserialize_nested_rule() {
        let rule: SuffixRule = serde_json::from_str(
            r#"{
                "pattern": "(ité|ités)$",
                "arms": [ { "gate": "r2", "action": "delete", "then": [
                    { "pattern": "abil$", "claim": "on_match", "arms": [
                        { "gate": "r2", "action": "delete" },
                        { "action": { "replace": "abl" } }
                    ] }
                ] } ]
            }"#,
        )
        .unwrap();
        let nested = &rule.arms[0].then[0];
        assert_eq!(nested.claim, Claim::OnMatch);
        assert_eq!(nested.arms.len(), 2);
        assert_eq!(nested.arms[1].gate, Gate::None);
        assert_eq!(nested.arms[1].action, Action::Replace("abl".to_string()));
    }

    #[test]
    fn deserialize_requires() {
        let rule: SuffixRule = serde_json::from_str(
            r#"{ "pattern": "ion$", "requires": [ { "pattern": "[st]ion$", "gate": "rv" } ],
                 "arms": [ { "gate": "r2", "action": "delete" } ] }"#,
        )
        .unwrap();
        assert_eq!(rule, SuffixRule::delete("ion$", Gate::R2).requiring("[st]ion$", Gate::Rv));
    }

    #[test]
    fn unknown_gate_is_rejected() {
        let err = serde_json::from_str::<SuffixRule>(
            r#"{ "pattern": "x$", "arms": [ { "gate": "r3", "action": "delete" } ] }"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn rule_without_pattern_never_matches() {
        let rule: SuffixRule = serde_json::from_str(r#"{ "arms": [ { "action": "delete" } ] }"#).unwrap();
        assert!(!rule.pattern.is_active());
        assert!(!rule.pattern.is_match("chevaux"));
    }

    #[test]
    fn rule_without_arms_has_no_actions() {
        let rule: SuffixRule = serde_json::from_str(r#"{ "pattern": "aux$" }"#).unwrap();
        assert!(rule.pattern.is_active());
        assert!(rule.arms.is_empty());
        assert_eq!(rule.claim, Claim::OnFire);
    }

    #[test]
    fn builder_then_attaches_to_first_arm() {
        let rule = SuffixRule::delete("ement$", Gate::Rv).then(vec![SuffixRule::delete("iv$", Gate::R2)]);
        assert_eq!(rule.arms[0].then.len(), 1);
    }
}
