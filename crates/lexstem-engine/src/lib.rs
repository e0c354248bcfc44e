//! Rule interpreter for lexstem stemmers.
//!
//! Nothing in this crate knows about a particular language. It evaluates the
//! data model from `lexstem-core` against a word:
//!
//! - [`region`] -- locate R1, R2 and RV from a language's region patterns
//! - [`stage`] -- run one ordered stage of suffix rules, first match wins
//! - [`rewrite`] -- apply unconditional `[pattern, replacement]` lists
//!
//! Language pipelines decide which stages run and in what order.

pub mod region;
pub mod rewrite;
pub mod stage;

pub use region::compute_regions;
pub use rewrite::apply_rewrites;
pub use stage::{StageOutcome, apply_stage};

/// Deepest level of nested `then` rules that is still evaluated.
///
/// Rule tables loaded from disk are not trusted to be shallow; rules below
/// this depth are skipped.
pub const MAX_NESTING_DEPTH: usize = 8;
