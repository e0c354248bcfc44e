//! Shared types for lexstem rule-driven stemmers.
//!
//! A stemmer is described entirely by data: a set of region patterns, a few
//! rewrite lists and ordered stages of suffix rules. This crate holds that
//! data model plus the small text utilities every layer needs.
//!
//! - [`pattern`] -- compiled regex patterns and `[pattern, replacement]` rewrites
//! - [`rule`] -- suffix rules, gates and actions
//! - [`region`] -- R1 / R2 / RV region values and the patterns that locate them
//! - [`case`] / [`character`] -- case folding and character classification
//! - [`error`] -- rule table loading errors

pub mod case;
pub mod character;
pub mod error;
pub mod pattern;
pub mod region;
pub mod rule;

pub use error::RuleTableError;
pub use pattern::{Pattern, Rewrite};
pub use region::{Region, RegionKind, RegionPatterns, Regions};
pub use rule::{Action, Arm, Claim, Condition, Gate, SuffixRule};
