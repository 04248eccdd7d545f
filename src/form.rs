//! The five grammatical forms a pronoun record carries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PronounError;

/// One of the five grammatical forms of an English personal pronoun.
///
/// The declaration order is also the search order used by deep resolution
/// and [`Registry::identify`](crate::Registry::identify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PronounForm {
    /// he, she, they
    Subject,
    /// him, her, them
    Object,
    /// his, hers, theirs
    Possessive,
    /// his, her, their
    PossessiveAdjective,
    /// himself, herself, themself
    Reflexive,
}

impl PronounForm {
    /// All forms in search order.
    pub const ALL: [PronounForm; 5] = [
        PronounForm::Subject,
        PronounForm::Object,
        PronounForm::Possessive,
        PronounForm::PossessiveAdjective,
        PronounForm::Reflexive,
    ];

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Object => "object",
            Self::Possessive => "possessive",
            Self::PossessiveAdjective => "possessive_adjective",
            Self::Reflexive => "reflexive",
        }
    }

    /// Parse a form name, ignoring case, `_`, `-` and spaces.
    ///
    /// Accepts the long names (`subject`, `possessiveAdjective`,
    /// `possessive_pronoun`, ...) and the short aliases `sbj`, `obj`,
    /// `psPrn`, `psAdj` and `rfx`.
    pub fn from_name(name: &str) -> Option<Self> {
        let folded: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match folded.as_str() {
            "subject" | "sbj" | "subj" => Some(Self::Subject),
            "object" | "obj" => Some(Self::Object),
            "possessive" | "possessivepronoun" | "psprn" => Some(Self::Possessive),
            "possessiveadjective" | "psadj" => Some(Self::PossessiveAdjective),
            "reflexive" | "rfx" => Some(Self::Reflexive),
            _ => None,
        }
    }
}

impl fmt::Display for PronounForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PronounForm {
    type Err = PronounError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PronounError::PronounNotFound(s.to_string()))
    }
}
