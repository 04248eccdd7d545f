//! Pronoun registry, resolution and selection.
//!
//! This crate turns pronoun strings such as `"he"`, `"they"` or `"he/they"`
//! into records carrying the five grammatical forms of a pronoun, and draws
//! forms from them either deterministically or at random.
//!
//! ## Core Types
//!
//! - [`PronounRecord`] - subject, object, possessive, possessive adjective
//!   and reflexive forms of one identity
//! - [`Registry`] - identity lookup with deep search and fallback
//! - [`PronounGroup`] - the pronouns one person uses
//! - [`Selection`] - index / random / quiet-failure parameters
//!
//! ## Example
//!
//! ```
//! use layered_pronouns::{PronounForm, Registry, Selection};
//!
//! let registry = Registry::new();
//! let group = registry.create_group("he", "/").unwrap();
//! assert_eq!(group.subject(Selection::new()).unwrap(), "he");
//! assert_eq!(group.object(Selection::new()).unwrap(), "him");
//!
//! assert_eq!(registry.identify("theirs").unwrap(), PronounForm::Possessive);
//! ```
//!
//! Template rendering lives in the `layered-pronoun-template` crate.

mod config;
mod defaults;
mod errors;
mod form;
mod group;
mod record;
mod registry;
mod selector;

pub use config::{RegistryConfig, DEFAULT_FALLBACK};
pub use errors::{IndexTarget, PronounError, PronounResult};
pub use form::PronounForm;
pub use group::{Member, PronounGroup};
pub use record::{OneOrMany, PronounRecord, RecordForms};
pub use registry::{Registry, DEFAULT_DELIMITER};
pub use selector::{select_position, Position, Selection};

#[cfg(test)]
mod tests;
