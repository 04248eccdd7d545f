//! Registry configuration.

use serde::{Deserialize, Serialize};

use crate::{PronounError, PronounResult};

/// Identity used when resolution fails quietly.
pub const DEFAULT_FALLBACK: &str = "they";

/// Resolution and selection policy for a [`Registry`](crate::Registry).
///
/// Can be loaded from TOML; missing keys take their defaults:
///
/// ```
/// use layered_pronouns::RegistryConfig;
///
/// let config = RegistryConfig::from_toml_str("deep_search = true").unwrap();
/// assert!(config.deep_search);
/// assert!(config.fail_quietly);
/// assert_eq!(config.fallback, "they");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Substitute the fallback identity instead of returning errors.
    pub fail_quietly: bool,
    /// Search every form of every record when an identity is not registered.
    pub deep_search: bool,
    /// Draw randomly when no explicit index is given.
    pub use_random: bool,
    /// Identity returned by quiet failures. Must be registered.
    pub fallback: String,
    /// Also register "it", "you", "I" and "we".
    pub extended_defaults: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            fail_quietly: true,
            deep_search: false,
            use_random: true,
            fallback: DEFAULT_FALLBACK.to_string(),
            extended_defaults: false,
        }
    }
}

impl RegistryConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> PronounResult<Self> {
        toml::from_str(content).map_err(|e| PronounError::Config(e.to_string()))
    }

    pub fn with_fail_quietly(mut self, fail_quietly: bool) -> Self {
        self.fail_quietly = fail_quietly;
        self
    }

    pub fn with_deep_search(mut self, deep_search: bool) -> Self {
        self.deep_search = deep_search;
        self
    }

    pub fn with_use_random(mut self, use_random: bool) -> Self {
        self.use_random = use_random;
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn with_extended_defaults(mut self, extended_defaults: bool) -> Self {
        self.extended_defaults = extended_defaults;
        self
    }
}
