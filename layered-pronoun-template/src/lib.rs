//! Pronoun templates for layered-pronouns.
//!
//! Renders text such as `"{Subject} likes {object}self."` with one pronoun
//! record chosen per render, so every placeholder in a sentence agrees.
//!
//! ## Usage
//!
//! ```
//! use layered_pronoun_template::{render_str, Template};
//! use layered_pronouns::Registry;
//!
//! let registry = Registry::new();
//! let group = registry.create_group("he", "/").unwrap();
//!
//! let template = Template::parse("{Subject} likes {object}self.").unwrap();
//! assert_eq!(template.render(&group).unwrap(), "He likes himself.");
//!
//! // A registry renders with its fallback pronoun.
//! assert_eq!(render_str("{SUBJECT} did it {rfx}", &registry).unwrap(), "THEY did it themself");
//! ```
//!
//! ## Sources
//!
//! Anything implementing [`PronounSource`] can be rendered against:
//! - [`Registry`](layered_pronouns::Registry) - the fallback record
//! - [`PronounGroup`](layered_pronouns::PronounGroup) - one selected member
//! - [`PronounRecord`](layered_pronouns::PronounRecord) - itself

mod errors;
mod renderer;
mod source;
mod template;

pub use errors::{TemplateError, TemplateResult};
pub use renderer::{apply_case, render_str, TemplateRenderer};
pub use source::PronounSource;
pub use template::{CaseHint, Placeholder, Segment, Template};
