//! Engine configuration.
//!
//! [`Config`] is what [`Rendezvous::new`](crate::Rendezvous::new) consumes.
//! [`PlacementConfig`] is its serializable counterpart, meant to be embedded
//! as a `[placement]` section in an application's TOML config.

use std::fmt;
use std::sync::Arc;

use rendez_hash::{Hasher64, HasherKind};
use serde::{Deserialize, Serialize};

use crate::error::PlacementError;

/// Runtime configuration for a [`Rendezvous`](crate::Rendezvous).
#[derive(Clone, Default)]
pub struct Config {
    /// Hash provider used for scoring. `None` selects xxh3.
    pub hasher: Option<Arc<dyn Hasher64>>,
}

impl Config {
    /// Use a custom hash provider.
    pub fn with_hasher(hasher: impl Hasher64 + 'static) -> Self {
        Self {
            hasher: Some(Arc::new(hasher)),
        }
    }

    /// Resolve the provider, falling back to the default.
    pub(crate) fn resolve_hasher(&self) -> Arc<dyn Hasher64> {
        self.hasher
            .clone()
            .unwrap_or_else(|| HasherKind::default().build())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("hasher", &self.hasher.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// `[placement]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Built-in hash provider: `"xxh3"` (default), `"blake3"` or `"fnv1"`.
    pub hasher: HasherKind,
}

impl PlacementConfig {
    /// Parse a placement section from TOML text.
    pub fn from_toml(s: &str) -> Result<Self, PlacementError> {
        Ok(toml::from_str(s)?)
    }
}

impl From<&PlacementConfig> for Config {
    fn from(section: &PlacementConfig) -> Self {
        Self {
            hasher: Some(section.hasher.build()),
        }
    }
}
