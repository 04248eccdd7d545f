//! The pronoun registry: identity lookup, deep search and fallback.
//!
//! A [`Registry`] maps identities (primary subject forms such as `"he"`) to
//! shared [`PronounRecord`]s and decides what happens when a string does not
//! match any identity:
//!
//! 1. exact identity match,
//! 2. deep search through every form of every record (when enabled),
//! 3. the fallback identity (when failing quietly),
//! 4. [`PronounError::PronounNotFound`].
//!
//! Records are searched in registration order, forms in [`PronounForm::ALL`]
//! order and entries in list order; the first match wins.
//!
//! A `Registry` value is a handle: cloning it shares the same table, which is
//! how [`PronounGroup`]s keep resolving against a registry that is still
//! being edited. [`Registry::new`] always builds an independent table.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Deserialize;

use crate::defaults::default_records;
use crate::{
    Member, OneOrMany, PronounError, PronounForm, PronounGroup, PronounRecord, PronounResult,
    RecordForms, RegistryConfig,
};

/// Default delimiter for [`Registry::create_group`].
pub const DEFAULT_DELIMITER: &str = "/";

/// A mutable table of pronoun records with a resolution policy.
///
/// ```
/// use layered_pronouns::{RecordForms, Registry, Selection};
///
/// let mut registry = Registry::new();
/// let mut group = registry.create_group("he/they", "/").unwrap();
/// assert_eq!(group.identities(), ["he", "they"]);
///
/// // Groups resolve later additions through the same table.
/// registry
///     .new_record(RecordForms::new("ze", "zir", "zirs", "zir", "zirself"), true)
///     .unwrap();
/// group.add("ze").unwrap();
/// assert_eq!(group.identities(), ["he", "they", "ze"]);
///
/// let he = registry.resolve("he").unwrap();
/// assert_eq!(he.object(Selection::new()).unwrap(), "him");
/// ```
#[derive(Clone)]
pub struct Registry {
    shared: Rc<Shared>,
}

struct Shared {
    table: RefCell<Table>,
    rng: RefCell<Box<dyn RngCore>>,
}

struct Table {
    records: IndexMap<String, Arc<PronounRecord>>,
    config: RegistryConfig,
}

impl Table {
    fn new(config: RegistryConfig) -> Self {
        let records = default_records(config.extended_defaults)
            .into_iter()
            .map(|record| (record.identity().to_string(), Arc::new(record)))
            .collect();
        Self { records, config }
    }

    fn fallback(&self) -> PronounResult<Arc<PronounRecord>> {
        self.records
            .get(&self.config.fallback)
            .cloned()
            .ok_or_else(|| PronounError::PronounNotFound(self.config.fallback.clone()))
    }

    fn insert(&mut self, record: Arc<PronounRecord>) -> Option<Arc<PronounRecord>> {
        let identity = record.identity().to_string();
        tracing::debug!("registering pronoun '{}'", identity);
        self.records.insert(identity, record)
    }

    fn search(&self, surface: &str) -> Option<(&Arc<PronounRecord>, PronounForm)> {
        self.records
            .values()
            .find_map(|record| record.form_of(surface).map(|form| (record, form)))
    }
}

/// TOML layout accepted by [`Registry::from_toml_str`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RegistryManifest {
    config: RegistryConfig,
    pronouns: Vec<PronounRecord>,
}

impl Registry {
    /// Registry with the default configuration and the "he", "she" and
    /// "they" records.
    pub fn new() -> Self {
        Self::from_table(Table::new(RegistryConfig::default()))
    }

    /// Registry with a custom configuration.
    ///
    /// Fails if the configured fallback is not one of the built-in records;
    /// register custom records and call [`Registry::set_fallback`] instead.
    pub fn with_config(config: RegistryConfig) -> PronounResult<Self> {
        let table = Table::new(config);
        table.fallback()?;
        Ok(Self::from_table(table))
    }

    /// Load configuration and extra records from TOML.
    ///
    /// ```toml
    /// [config]
    /// fallback = "ze"
    ///
    /// [[pronouns]]
    /// subject = "ze"
    /// object = ["zir", "hir"]
    /// possessive = "zirs"
    /// possessive_adjective = "zir"
    /// reflexive = "zirself"
    /// ```
    ///
    /// Records are registered before the fallback is checked, so the
    /// fallback may name one of them.
    pub fn from_toml_str(content: &str) -> PronounResult<Self> {
        let manifest: RegistryManifest =
            toml::from_str(content).map_err(|e| PronounError::Config(e.to_string()))?;

        let mut table = Table::new(manifest.config);
        for record in manifest.pronouns {
            table.insert(Arc::new(record));
        }
        table.fallback()?;
        Ok(Self::from_table(table))
    }

    fn from_table(table: Table) -> Self {
        Self {
            shared: Rc::new(Shared {
                table: RefCell::new(table),
                rng: RefCell::new(Box::new(StdRng::from_entropy())),
            }),
        }
    }

    /// Replace the random source, e.g. with a seeded generator.
    ///
    /// Every handle to this registry draws from the new source.
    pub fn with_rng(self, rng: impl RngCore + 'static) -> Self {
        *self.shared.rng.borrow_mut() = Box::new(rng);
        self
    }

    fn table(&self) -> Ref<'_, Table> {
        self.shared.table.borrow()
    }

    /// Whether two handles share one table.
    pub fn same_registry(&self, other: &Registry) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }

    /// A copy of the current configuration.
    pub fn config(&self) -> RegistryConfig {
        self.table().config.clone()
    }

    /// Run `f` with the registry's random source.
    ///
    /// Only crate-internal selection code runs here; the table is not
    /// borrowed meanwhile.
    pub(crate) fn with_rng_mut<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        let mut rng = self.shared.rng.borrow_mut();
        f(&mut **rng)
    }

    /// The record designated as fallback.
    pub fn fallback(&self) -> PronounResult<Arc<PronounRecord>> {
        self.table().fallback()
    }

    /// Designate a registered identity as the fallback.
    pub fn set_fallback(&mut self, identity: &str) -> PronounResult<()> {
        let mut table = self.shared.table.borrow_mut();
        if !table.records.contains_key(identity) {
            return Err(PronounError::PronounNotFound(identity.to_string()));
        }
        tracing::debug!("pronoun fallback changed from '{}' to '{}'", table.config.fallback, identity);
        table.config.fallback = identity.to_string();
        Ok(())
    }

    /// Resolve using the configured deep-search policy.
    pub fn resolve(&self, identifier: &str) -> PronounResult<Arc<PronounRecord>> {
        self.resolve_with(identifier, None)
    }

    /// Resolve, optionally overriding the deep-search policy for this call.
    pub fn resolve_with(
        &self,
        identifier: &str,
        deep_search: Option<bool>,
    ) -> PronounResult<Arc<PronounRecord>> {
        let table = self.table();
        if let Some(record) = table.records.get(identifier) {
            return Ok(Arc::clone(record));
        }

        if deep_search.unwrap_or(table.config.deep_search) {
            if let Some((record, form)) = table.search(identifier) {
                tracing::trace!("deep search matched '{}' as {} of '{}'", identifier, form, record.identity());
                return Ok(Arc::clone(record));
            }
        }

        if table.config.fail_quietly {
            tracing::debug!("pronoun '{}' not found, using fallback '{}'", identifier, table.config.fallback);
            return table.fallback();
        }

        Err(PronounError::PronounNotFound(identifier.to_string()))
    }

    /// Identity-only lookup. Never searches forms and never falls back.
    pub fn resolve_strict(&self, identity: &str) -> Option<Arc<PronounRecord>> {
        self.table().records.get(identity).cloned()
    }

    /// Which form category contains `surface`, searching every record.
    pub fn identify(&self, surface: &str) -> PronounResult<PronounForm> {
        self.table()
            .search(surface)
            .map(|(_, form)| form)
            .ok_or_else(|| PronounError::PronounNotFound(surface.to_string()))
    }

    /// Build a record and, when `auto_register` is set, add it.
    pub fn new_record(
        &mut self,
        forms: RecordForms,
        auto_register: bool,
    ) -> PronounResult<Arc<PronounRecord>> {
        let record = Arc::new(PronounRecord::new(forms)?);
        if auto_register {
            self.add(Arc::clone(&record));
        }
        Ok(record)
    }

    /// Insert a record under its identity, returning the record it replaced.
    ///
    /// A replaced identity keeps its original search position.
    pub fn add(&mut self, record: impl Into<Arc<PronounRecord>>) -> Option<Arc<PronounRecord>> {
        self.shared.table.borrow_mut().insert(record.into())
    }

    /// Remove the record registered under `identity`.
    ///
    /// The fallback record cannot be removed; reassign the fallback first.
    /// Groups holding the record keep it.
    pub fn remove(&mut self, identity: &str) -> PronounResult<Arc<PronounRecord>> {
        let mut table = self.shared.table.borrow_mut();
        if identity == table.config.fallback {
            return Err(PronounError::InvalidOperation(format!(
                "cannot remove \"{}\" while it is the fallback pronoun",
                identity
            )));
        }

        let removed = table
            .records
            .shift_remove(identity)
            .ok_or_else(|| PronounError::PronounNotFound(identity.to_string()))?;
        tracing::debug!("removed pronoun '{}'", identity);
        Ok(removed)
    }

    /// Remove the entry keyed by `record`'s identity.
    pub fn remove_record(&mut self, record: &PronounRecord) -> PronounResult<Arc<PronounRecord>> {
        self.remove(record.identity())
    }

    /// Append entries to one form of a registered record.
    ///
    /// Groups that already hold the record keep their previous copy.
    pub fn extend_record(
        &mut self,
        identity: &str,
        form: PronounForm,
        values: impl Into<OneOrMany>,
    ) -> PronounResult<()> {
        let mut table = self.shared.table.borrow_mut();
        let record = table
            .records
            .get_mut(identity)
            .ok_or_else(|| PronounError::PronounNotFound(identity.to_string()))?;
        Arc::make_mut(record).extend(form, values);
        Ok(())
    }

    /// Remove entries from one form of a registered record.
    ///
    /// Removing the primary subject re-keys the record under its new
    /// identity (and moves the fallback along with it). Fails without
    /// changes if a form would become empty or the new identity is taken.
    pub fn remove_from_record(
        &mut self,
        identity: &str,
        form: PronounForm,
        values: impl Into<OneOrMany>,
    ) -> PronounResult<()> {
        let mut table = self.shared.table.borrow_mut();
        let position = table
            .records
            .get_index_of(identity)
            .ok_or_else(|| PronounError::PronounNotFound(identity.to_string()))?;

        let mut updated = PronounRecord::clone(&table.records[position]);
        updated.remove(form, values)?;

        let new_identity = updated.identity().to_string();
        if new_identity == identity {
            table.records[position] = Arc::new(updated);
            return Ok(());
        }

        if table.records.contains_key(&new_identity) {
            return Err(PronounError::InvalidOperation(format!(
                "cannot re-key \"{}\" as \"{}\": identity already registered",
                identity, new_identity
            )));
        }

        tracing::debug!("pronoun '{}' re-keyed as '{}'", identity, new_identity);
        table.records.shift_remove_index(position);
        table
            .records
            .shift_insert(position, new_identity.clone(), Arc::new(updated));
        if table.config.fallback == identity {
            table.config.fallback = new_identity;
        }
        Ok(())
    }

    /// Split `text` on `delimiter` and resolve each part into a group.
    ///
    /// Parts are trimmed; empty parts are skipped.
    pub fn create_group(&self, text: &str, delimiter: &str) -> PronounResult<PronounGroup> {
        let parts = text
            .split(delimiter)
            .map(str::trim)
            .filter(|part| !part.is_empty());
        PronounGroup::new(self, parts)
    }

    /// Resolve each member into a group.
    pub fn create_group_from<I>(&self, members: I) -> PronounResult<PronounGroup>
    where
        I: IntoIterator,
        I::Item: Into<Member>,
    {
        PronounGroup::new(self, members)
    }

    /// Whether `identity` is registered.
    pub fn contains(&self, identity: &str) -> bool {
        self.table().records.contains_key(identity)
    }

    /// Registered records in search order.
    pub fn records(&self) -> Vec<Arc<PronounRecord>> {
        self.table().records.values().cloned().collect()
    }

    /// Registered identities in search order.
    pub fn identities(&self) -> Vec<String> {
        self.table().records.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.table().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table().records.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table();
        f.debug_struct("Registry")
            .field("identities", &table.records.keys().collect::<Vec<_>>())
            .field("config", &table.config)
            .finish_non_exhaustive()
    }
}
