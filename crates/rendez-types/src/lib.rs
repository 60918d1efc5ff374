//! Shared member types for Rendez.
//!
//! This crate defines what the placement engine selects between:
//! the [`WeightedMember`] trait implemented by anything that can own keys,
//! and [`Node`], a plain named-and-weighted member for callers that do not
//! bring their own type.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Member trait
// ---------------------------------------------------------------------------

/// An entity eligible to be selected for a key.
///
/// The name must be unique within a registry and stable for the lifetime of
/// the member: it is hashed together with every key, so renaming a member
/// remaps all of its keys. The weight biases selection probability and is
/// expected to be finite and strictly positive.
pub trait WeightedMember: Send + Sync {
    /// Unique, stable member name.
    fn name(&self) -> &str;

    /// Relative capacity of this member.
    fn weight(&self) -> f64;
}

impl<T: WeightedMember + ?Sized> WeightedMember for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

impl<T: WeightedMember + ?Sized> WeightedMember for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A named member with an explicit weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique member name (e.g. `"node1.cache"`).
    pub name: String,
    /// Relative capacity. Defaults to 1.0 when omitted in config.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl Node {
    /// Create a node with the given name and weight.
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    /// Create a node with weight 1.0.
    pub fn unit(name: impl Into<String>) -> Self {
        Self::new(name, default_weight())
    }
}

impl WeightedMember for Node {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(w={})", self.name, self.weight)
    }
}
