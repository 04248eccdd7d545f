//! Error types for template parsing and rendering.

use layered_pronouns::PronounError;
use thiserror::Error;

/// Errors that can occur while building or rendering a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Malformed template text.
    #[error("template parse error at byte {position}: {message}")]
    Parse { position: usize, message: String },

    /// Literal segments and placeholders do not interleave.
    #[error("{literals} literal segments cannot surround {placeholders} placeholders")]
    Shape { literals: usize, placeholders: usize },

    /// A placeholder without a name.
    #[error("empty placeholder name")]
    EmptyPlaceholder,

    /// Pronoun selection or placeholder identification failed.
    #[error(transparent)]
    Pronoun(#[from] PronounError),
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
