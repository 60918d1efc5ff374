//! Hash providers and uniform conversion for rendezvous scoring.
//!
//! This crate provides:
//! - [`Hasher64`] — the single-method hash provider capability.
//! - [`Xxh3Hasher`] (default), [`Blake3Hasher`], [`Fnv1Hasher`] — built-in providers.
//! - [`HasherKind`] — names the built-ins so configuration can pick one.
//! - [`unit_float`] — maps a hash value into the open interval (0, 1).

mod convert;
mod hasher;

pub use convert::unit_float;
pub use hasher::{Blake3Hasher, Fnv1Hasher, Hasher64, HasherKind, Xxh3Hasher};
