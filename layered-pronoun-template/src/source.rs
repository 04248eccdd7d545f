//! Where a render gets its pronoun from.

use std::sync::Arc;

use layered_pronouns::{
    PronounError, PronounForm, PronounGroup, PronounRecord, PronounResult, Registry, Selection,
};

/// Something a template can draw one pronoun record from.
pub trait PronounSource {
    /// Choose the record used for a whole render.
    fn pick(&self) -> PronounResult<Arc<PronounRecord>>;

    /// Map a surface pronoun to its grammatical form.
    fn identify(&self, surface: &str) -> PronounResult<PronounForm>;
}

/// Renders with the registry's fallback pronoun.
///
/// A registry is not a person's set of pronouns, so there is nothing to
/// choose between: `pick` always returns the current fallback record and
/// the `use_random` setting is ignored. Repeated renders of a template are
/// identical until the fallback changes. Render through a [`PronounGroup`]
/// to draw members at random.
impl PronounSource for Registry {
    fn pick(&self) -> PronounResult<Arc<PronounRecord>> {
        self.fallback()
    }

    fn identify(&self, surface: &str) -> PronounResult<PronounForm> {
        Registry::identify(self, surface)
    }
}

/// Renders with one member chosen under the registry's selection policy.
impl PronounSource for PronounGroup {
    fn pick(&self) -> PronounResult<Arc<PronounRecord>> {
        self.select(Selection::new())
    }

    fn identify(&self, surface: &str) -> PronounResult<PronounForm> {
        self.registry().identify(surface)
    }
}

impl PronounSource for Arc<PronounRecord> {
    fn pick(&self) -> PronounResult<Arc<PronounRecord>> {
        Ok(Arc::clone(self))
    }

    fn identify(&self, surface: &str) -> PronounResult<PronounForm> {
        self.form_of(surface)
            .ok_or_else(|| PronounError::PronounNotFound(surface.to_string()))
    }
}

impl PronounSource for PronounRecord {
    fn pick(&self) -> PronounResult<Arc<PronounRecord>> {
        Ok(Arc::new(self.clone()))
    }

    fn identify(&self, surface: &str) -> PronounResult<PronounForm> {
        self.form_of(surface)
            .ok_or_else(|| PronounError::PronounNotFound(surface.to_string()))
    }
}
