//! French and Spanish stemmers built on the lexstem rule interpreter.
//!
//! Each language is a fixed pipeline of stages over a JSON rule table. The
//! tables for both languages are compiled in; tables loaded at runtime can
//! replace them through a [`MorphologyRegistry`].
//!
//! # Modules
//!
//! - [`french`] -- French pipeline and rule table type
//! - [`spanish`] -- Spanish pipeline, exception lists and rule table type
//! - [`morphology`] -- [`MorphologyData`]: a parsed table of either language
//! - [`registry`] -- language code -> table, built-in tables
//! - [`stemmer`] -- the [`Stemmer`] capability and its identity fallback
//! - [`cache`] -- bounded word -> stem memo
//! - [`prominent`] -- prominent-word extraction (feature `prominent`)
//!
//! # Example
//!
//! ```
//! use lexstem_lang::{MorphologyRegistry, Stemmer};
//!
//! let registry = MorphologyRegistry::with_builtin();
//! let stemmer = registry.stemmer("es");
//! assert_eq!(stemmer.stem("saltaron"), "salt");
//! ```

mod branch;
pub mod cache;
pub mod french;
pub mod morphology;
#[cfg(feature = "prominent")]
pub mod prominent;
pub mod registry;
pub mod spanish;
pub mod stemmer;

pub use cache::StemCache;
pub use morphology::{MorphologyData, stem};
pub use registry::MorphologyRegistry;
pub use stemmer::{IdentityStemmer, LanguageStemmer, Stemmer};
