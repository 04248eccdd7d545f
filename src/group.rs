//! Pronoun groups: the pronouns one person uses, e.g. "he/they".
//!
//! A group holds records resolved through a [`Registry`] and keeps a handle
//! to that registry for later resolution, fallback and randomness. The
//! registry stays editable while groups exist; records a group already holds
//! are unaffected by later edits or removals. Membership is
//! deduplicated by identity and kept in insertion order, which is the order
//! explicit indices address.

use std::sync::Arc;

use crate::selector::{select_position, Position};
use crate::{PronounError, PronounForm, PronounRecord, PronounResult, Registry, Selection};

/// A group member before resolution: a string to resolve or a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Identity(String),
    Record(Arc<PronounRecord>),
}

impl From<&str> for Member {
    fn from(identity: &str) -> Self {
        Self::Identity(identity.to_string())
    }
}

impl From<String> for Member {
    fn from(identity: String) -> Self {
        Self::Identity(identity)
    }
}

impl From<&String> for Member {
    fn from(identity: &String) -> Self {
        Self::Identity(identity.clone())
    }
}

impl From<PronounRecord> for Member {
    fn from(record: PronounRecord) -> Self {
        Self::Record(Arc::new(record))
    }
}

impl From<Arc<PronounRecord>> for Member {
    fn from(record: Arc<PronounRecord>) -> Self {
        Self::Record(record)
    }
}

impl From<&Arc<PronounRecord>> for Member {
    fn from(record: &Arc<PronounRecord>) -> Self {
        Self::Record(Arc::clone(record))
    }
}

/// A set of pronoun records to draw forms from.
#[derive(Debug, Clone)]
pub struct PronounGroup {
    registry: Registry,
    members: Vec<Arc<PronounRecord>>,
}

impl PronounGroup {
    /// Resolve `members` through `registry`.
    ///
    /// Strings that do not resolve fail with
    /// [`PronounError::PronounNotFound`] unless the registry fails quietly.
    /// With no members the group holds the registry's fallback.
    pub fn new<I>(registry: &Registry, members: I) -> PronounResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Member>,
    {
        let mut group = Self {
            registry: registry.clone(),
            members: Vec::new(),
        };

        for member in members {
            let record = match member.into() {
                Member::Identity(identity) => registry.resolve(&identity)?,
                Member::Record(record) => record,
            };
            group.insert(record);
        }

        if group.members.is_empty() {
            group.insert(registry.fallback()?);
        }

        Ok(group)
    }

    /// A group holding only the registry's fallback.
    pub fn fallback(registry: &Registry) -> PronounResult<Self> {
        Self::new(registry, std::iter::empty::<Member>())
    }

    /// The registry this group resolves against.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn members(&self) -> &[Arc<PronounRecord>] {
        &self.members
    }

    /// Member identities in insertion order.
    pub fn identities(&self) -> Vec<&str> {
        self.members.iter().map(|r| r.identity()).collect()
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.members.iter().any(|r| r.identity() == identity)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn insert(&mut self, record: Arc<PronounRecord>) {
        if !self.contains(record.identity()) {
            self.members.push(record);
        }
    }

    fn resolve_member(&self, member: Member) -> PronounResult<Arc<PronounRecord>> {
        match member {
            Member::Record(record) => Ok(record),
            Member::Identity(identity) => match self.registry.resolve(&identity) {
                Ok(record) => Ok(record),
                Err(PronounError::PronounNotFound(_)) => {
                    Err(PronounError::UnresolvedPronoun(identity))
                }
                Err(err) => Err(err),
            },
        }
    }

    fn resolve_members<I>(&self, members: I) -> PronounResult<Vec<Arc<PronounRecord>>>
    where
        I: IntoIterator,
        I::Item: Into<Member>,
    {
        members
            .into_iter()
            .map(|member| self.resolve_member(member.into()))
            .collect()
    }

    /// Add one member.
    pub fn add(&mut self, member: impl Into<Member>) -> PronounResult<()> {
        self.add_all(std::iter::once(member))
    }

    /// Add several members. Nothing is added if any of them fails to resolve.
    pub fn add_all<I>(&mut self, members: I) -> PronounResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Member>,
    {
        for record in self.resolve_members(members)? {
            self.insert(record);
        }
        Ok(())
    }

    /// Remove one member.
    pub fn remove(&mut self, member: impl Into<Member>) -> PronounResult<()> {
        self.remove_all(std::iter::once(member))
    }

    /// Remove several members. Nothing is removed if any of them fails to
    /// resolve. Removing a record that is not a member is a no-op.
    pub fn remove_all<I>(&mut self, members: I) -> PronounResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Member>,
    {
        let removed = self.resolve_members(members)?;
        self.members
            .retain(|member| !removed.iter().any(|r| r.identity() == member.identity()));
        Ok(())
    }

    /// Choose one member.
    ///
    /// Unset selection flags take the registry configuration. An empty group
    /// yields the registry fallback when failing quietly.
    pub fn select(&self, selection: Selection) -> PronounResult<Arc<PronounRecord>> {
        let config = self.registry.config();
        let selection = selection.or_defaults(config.use_random, config.fail_quietly);

        if self.members.is_empty() {
            if selection.fail_quietly_or(true) {
                tracing::debug!("selecting from an empty pronoun group, using fallback");
                return self.registry.fallback();
            }
            return Err(PronounError::EmptyGroup);
        }

        let len = self.members.len();
        match self.registry.with_rng_mut(|rng| select_position(len, &selection, rng)) {
            Position::Found(position) => Ok(Arc::clone(&self.members[position])),
            Position::OutOfRange(index) => Err(PronounError::member_index(index, len)),
        }
    }

    /// Choose a member, then one entry of its `form`, with the same
    /// selection parameters for both draws.
    pub fn form(&self, form: PronounForm, selection: Selection) -> PronounResult<String> {
        let config = self.registry.config();
        let selection = selection.or_defaults(config.use_random, config.fail_quietly);
        let record = self.select(selection)?;
        self.registry
            .with_rng_mut(|rng| record.form_with(form, selection, rng).map(str::to_string))
    }

    pub fn subject(&self, selection: Selection) -> PronounResult<String> {
        self.form(PronounForm::Subject, selection)
    }

    pub fn object(&self, selection: Selection) -> PronounResult<String> {
        self.form(PronounForm::Object, selection)
    }

    pub fn possessive(&self, selection: Selection) -> PronounResult<String> {
        self.form(PronounForm::Possessive, selection)
    }

    pub fn possessive_adjective(&self, selection: Selection) -> PronounResult<String> {
        self.form(PronounForm::PossessiveAdjective, selection)
    }

    pub fn reflexive(&self, selection: Selection) -> PronounResult<String> {
        self.form(PronounForm::Reflexive, selection)
    }
}
