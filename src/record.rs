//! Pronoun records: the five grammatical forms of one pronoun identity.
//!
//! ```text
//! subject      he
//! object       him
//! possessive   his
//! poss. adj.   his
//! reflexive    himself
//! ```
//!
//! Every form holds an ordered, non-empty list of surface strings. Entry 0 is
//! the primary form: the subject's primary form is the record's identity in a
//! [`Registry`](crate::Registry), and any form's primary form is what quiet
//! failure falls back to.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::selector::{select_position, Position};
use crate::{PronounError, PronounForm, PronounResult, Selection};

/// Either a single surface string or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Flatten into a list.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for OneOrMany {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for OneOrMany {
    fn from(values: &[&str]) -> Self {
        Self::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Input for building a [`PronounRecord`]; each form is one string or a list.
///
/// Deserializes from tables such as:
///
/// ```toml
/// subject = "ze"
/// object = ["zir", "hir"]
/// possessive = "zirs"
/// possessive_adjective = "zir"
/// reflexive = "zirself"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordForms {
    pub subject: OneOrMany,
    pub object: OneOrMany,
    #[serde(alias = "possessive_pronoun", alias = "possessivePronoun")]
    pub possessive: OneOrMany,
    #[serde(alias = "possessiveAdjective")]
    pub possessive_adjective: OneOrMany,
    pub reflexive: OneOrMany,
}

impl RecordForms {
    pub fn new(
        subject: impl Into<OneOrMany>,
        object: impl Into<OneOrMany>,
        possessive: impl Into<OneOrMany>,
        possessive_adjective: impl Into<OneOrMany>,
        reflexive: impl Into<OneOrMany>,
    ) -> Self {
        Self {
            subject: subject.into(),
            object: object.into(),
            possessive: possessive.into(),
            possessive_adjective: possessive_adjective.into(),
            reflexive: reflexive.into(),
        }
    }
}

/// The five grammatical forms of one pronoun identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordForms")]
pub struct PronounRecord {
    subject: Vec<String>,
    object: Vec<String>,
    possessive: Vec<String>,
    possessive_adjective: Vec<String>,
    reflexive: Vec<String>,
}

impl PronounRecord {
    /// Build a record, rejecting any form without entries.
    pub fn new(forms: RecordForms) -> PronounResult<Self> {
        let record = Self {
            subject: forms.subject.into_vec(),
            object: forms.object.into_vec(),
            possessive: forms.possessive.into_vec(),
            possessive_adjective: forms.possessive_adjective.into_vec(),
            reflexive: forms.reflexive.into_vec(),
        };

        for form in PronounForm::ALL {
            if record.forms(form).is_empty() {
                return Err(PronounError::InvalidOperation(format!(
                    "pronoun record has no {} entries",
                    form
                )));
            }
        }

        Ok(record)
    }

    /// The primary subject form, used as the registry key.
    pub fn identity(&self) -> &str {
        &self.subject[0]
    }

    /// Every entry of a form, in order.
    pub fn forms(&self, form: PronounForm) -> &[String] {
        match form {
            PronounForm::Subject => &self.subject,
            PronounForm::Object => &self.object,
            PronounForm::Possessive => &self.possessive,
            PronounForm::PossessiveAdjective => &self.possessive_adjective,
            PronounForm::Reflexive => &self.reflexive,
        }
    }

    fn forms_mut(&mut self, form: PronounForm) -> &mut Vec<String> {
        match form {
            PronounForm::Subject => &mut self.subject,
            PronounForm::Object => &mut self.object,
            PronounForm::Possessive => &mut self.possessive,
            PronounForm::PossessiveAdjective => &mut self.possessive_adjective,
            PronounForm::Reflexive => &mut self.reflexive,
        }
    }

    /// Entry 0 of a form.
    pub fn primary(&self, form: PronounForm) -> &str {
        &self.forms(form)[0]
    }

    /// Select one entry of `form` using the thread-local random source.
    pub fn form(&self, form: PronounForm, selection: Selection) -> PronounResult<&str> {
        self.form_with(form, selection, &mut rand::thread_rng())
    }

    /// Select one entry of `form`, drawing randomness from `rng`.
    ///
    /// Unset selection flags default to `true`.
    pub fn form_with<R: Rng + ?Sized>(
        &self,
        form: PronounForm,
        selection: Selection,
        rng: &mut R,
    ) -> PronounResult<&str> {
        let entries = self.forms(form);
        match select_position(entries.len(), &selection, rng) {
            Position::Found(position) => Ok(&entries[position]),
            Position::OutOfRange(index) => {
                Err(PronounError::form_index(index, form, self.identity()))
            }
        }
    }

    pub fn subject(&self, selection: Selection) -> PronounResult<&str> {
        self.form(PronounForm::Subject, selection)
    }

    pub fn object(&self, selection: Selection) -> PronounResult<&str> {
        self.form(PronounForm::Object, selection)
    }

    pub fn possessive(&self, selection: Selection) -> PronounResult<&str> {
        self.form(PronounForm::Possessive, selection)
    }

    pub fn possessive_adjective(&self, selection: Selection) -> PronounResult<&str> {
        self.form(PronounForm::PossessiveAdjective, selection)
    }

    pub fn reflexive(&self, selection: Selection) -> PronounResult<&str> {
        self.form(PronounForm::Reflexive, selection)
    }

    /// Whether any form contains `surface` exactly.
    pub fn contains(&self, surface: &str) -> bool {
        self.form_of(surface).is_some()
    }

    /// The first form (in [`PronounForm::ALL`] order) containing `surface`.
    pub fn form_of(&self, surface: &str) -> Option<PronounForm> {
        PronounForm::ALL
            .iter()
            .copied()
            .find(|form| self.forms(*form).iter().any(|entry| entry == surface))
    }

    /// Append entries to a form. Entries already present are skipped.
    pub fn extend(&mut self, form: PronounForm, values: impl Into<OneOrMany>) {
        let entries = self.forms_mut(form);
        for value in values.into().into_vec() {
            if !entries.contains(&value) {
                entries.push(value);
            }
        }
    }

    /// Remove entries from a form.
    ///
    /// Fails without modifying the record if the form would be left empty.
    pub fn remove(&mut self, form: PronounForm, values: impl Into<OneOrMany>) -> PronounResult<()> {
        let values = values.into().into_vec();
        let remaining: Vec<String> = self
            .forms(form)
            .iter()
            .filter(|entry| !values.contains(entry))
            .cloned()
            .collect();

        if remaining.is_empty() {
            return Err(PronounError::InvalidOperation(format!(
                "removing {:?} would leave \"{}\" without {} entries",
                values,
                self.identity(),
                form
            )));
        }

        *self.forms_mut(form) = remaining;
        Ok(())
    }
}

impl TryFrom<RecordForms> for PronounRecord {
    type Error = PronounError;

    fn try_from(forms: RecordForms) -> Result<Self, Self::Error> {
        Self::new(forms)
    }
}

impl From<PronounRecord> for RecordForms {
    fn from(record: PronounRecord) -> Self {
        Self {
            subject: OneOrMany::Many(record.subject),
            object: OneOrMany::Many(record.object),
            possessive: OneOrMany::Many(record.possessive),
            possessive_adjective: OneOrMany::Many(record.possessive_adjective),
            reflexive: OneOrMany::Many(record.reflexive),
        }
    }
}
