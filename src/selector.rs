//! Selection parameters and the positional selection algorithm shared by
//! record form accessors and group member selection.

use rand::Rng;

/// Parameters for drawing one entry out of an ordered sequence.
///
/// Unset flags take the default of whoever performs the selection: `true`
/// for record accessors, the registry configuration for groups.
///
/// ```
/// use layered_pronouns::Selection;
///
/// let sel = Selection::at(2).quiet(false);
/// assert_eq!(sel.index, Some(2));
/// assert_eq!(sel.fail_quietly, Some(false));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Explicit position. `None` means "no explicit index".
    pub index: Option<usize>,
    /// Draw uniformly at random when no index is given.
    pub use_random: Option<bool>,
    /// Return the primary entry instead of failing on a bad index.
    pub fail_quietly: Option<bool>,
}

impl Selection {
    /// Selection with every parameter left to the caller's defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an explicit position.
    pub fn at(index: usize) -> Self {
        Self {
            index: Some(index),
            ..Self::default()
        }
    }

    /// Deterministic selection of the primary (first) entry.
    pub fn primary() -> Self {
        Self {
            index: None,
            use_random: Some(false),
            fail_quietly: Some(true),
        }
    }

    /// Set the random flag.
    pub fn random(mut self, use_random: bool) -> Self {
        self.use_random = Some(use_random);
        self
    }

    /// Set the quiet-failure flag.
    pub fn quiet(mut self, fail_quietly: bool) -> Self {
        self.fail_quietly = Some(fail_quietly);
        self
    }

    /// Fill unset flags from the given defaults.
    pub fn or_defaults(self, use_random: bool, fail_quietly: bool) -> Self {
        Self {
            index: self.index,
            use_random: Some(self.use_random.unwrap_or(use_random)),
            fail_quietly: Some(self.fail_quietly.unwrap_or(fail_quietly)),
        }
    }

    pub(crate) fn use_random_or(&self, default: bool) -> bool {
        self.use_random.unwrap_or(default)
    }

    pub(crate) fn fail_quietly_or(&self, default: bool) -> bool {
        self.fail_quietly.unwrap_or(default)
    }
}

/// Outcome of [`select_position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The chosen position.
    Found(usize),
    /// The explicit index was out of bounds and quiet failure was off.
    OutOfRange(usize),
}

/// Choose a position in a non-empty sequence of `len` entries.
///
/// Precedence:
/// 1. a single entry is always chosen,
/// 2. no index and random: uniform draw from `rng`,
/// 3. no index and not random: position 0,
/// 4. index in bounds: that index,
/// 5. index out of bounds and quiet: position 0,
/// 6. otherwise [`Position::OutOfRange`].
///
/// Unset flags in `selection` default to `true`.
pub fn select_position<R: Rng + ?Sized>(len: usize, selection: &Selection, rng: &mut R) -> Position {
    debug_assert!(len > 0, "select_position on an empty sequence");

    if len == 1 {
        return Position::Found(0);
    }

    match selection.index {
        None if selection.use_random_or(true) => Position::Found(rng.gen_range(0..len)),
        None => Position::Found(0),
        Some(index) if index < len => Position::Found(index),
        Some(_) if selection.fail_quietly_or(true) => Position::Found(0),
        Some(index) => Position::OutOfRange(index),
    }
}
