//! Error types for pronoun resolution and selection.

use std::fmt;

use thiserror::Error;

use crate::PronounForm;

/// What an out-of-range index was addressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexTarget {
    /// One form of a record, named by the record's identity.
    Form { form: PronounForm, identity: String },
    /// The members of a group.
    Member { members: usize },
}

impl fmt::Display for IndexTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Form { form, identity } => write!(f, "{} pronoun for \"{}\"", form, identity),
            Self::Member { members } => write!(f, "member in a group of {}", members),
        }
    }
}

/// Errors that can occur while resolving or selecting pronouns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PronounError {
    /// An explicit index did not address an entry of a form or a group member.
    #[error("no {target} at index {index}")]
    IndexOutOfRange { index: usize, target: IndexTarget },

    /// The string is neither a registered identity nor a known surface form.
    #[error("pronoun not found: \"{0}\"")]
    PronounNotFound(String),

    /// Selection was attempted on a group without members.
    #[error("pronoun group is empty")]
    EmptyGroup,

    /// A group member given as a string could not be resolved.
    #[error("could not resolve group member \"{0}\"")]
    UnresolvedPronoun(String),

    /// The operation would break a registry or record invariant.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Configuration text could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PronounError {
    pub(crate) fn form_index(index: usize, form: PronounForm, identity: &str) -> Self {
        Self::IndexOutOfRange {
            index,
            target: IndexTarget::Form {
                form,
                identity: identity.to_string(),
            },
        }
    }

    pub(crate) fn member_index(index: usize, members: usize) -> Self {
        Self::IndexOutOfRange {
            index,
            target: IndexTarget::Member { members },
        }
    }
}

/// Result type for pronoun operations.
pub type PronounResult<T> = Result<T, PronounError>;
