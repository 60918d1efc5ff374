//! Weighted rendezvous hashing for deterministic member selection.
//!
//! This crate implements highest-random-weight (HRW) placement: every member
//! is scored against a key with `weight / -ln(u)`, where `u` is a uniform
//! draw derived from `hash(member_name ++ key)`, and the highest scores win.
//!
//! - [`Rendezvous::locate_key`] — the single owner of a key.
//! - [`Rendezvous::closest_n`] — the `n` best owners, via linear-time selection.
//! - [`Rendezvous::diff`] — which keys move when the member set changes.
//!
//! Any process holding the same members and hash provider computes the
//! same placement. Each member wins keys in proportion to its weight.

mod config;
mod error;
mod rendezvous;
mod score;
mod select;

pub use config::{Config, PlacementConfig};
pub use error::PlacementError;
pub use rendezvous::{Migration, Rendezvous};
pub use score::score;

pub use rendez_hash::{Blake3Hasher, Fnv1Hasher, Hasher64, HasherKind, Xxh3Hasher};
pub use rendez_types::{Node, WeightedMember};
