//! Pluggable 64-bit hash providers.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Maps an arbitrary byte sequence to a `u64`.
///
/// Implementations must be pure: identical input yields identical output
/// across calls, threads and processes. Every participant that has to agree
/// on placement must use the same provider.
pub trait Hasher64: Send + Sync {
    /// Hash `data` to a 64-bit value.
    fn sum64(&self, data: &[u8]) -> u64;
}

impl<F> Hasher64 for F
where
    F: Fn(&[u8]) -> u64 + Send + Sync,
{
    fn sum64(&self, data: &[u8]) -> u64 {
        self(data)
    }
}

/// xxh3-64 with seed 0. The default provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct Xxh3Hasher;

impl Hasher64 for Xxh3Hasher {
    fn sum64(&self, data: &[u8]) -> u64 {
        xxhash_rust::xxh3::xxh3_64(data)
    }
}

/// BLAKE3, truncated to its first 8 bytes read little-endian.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl Hasher64 for Blake3Hasher {
    fn sum64(&self, data: &[u8]) -> u64 {
        let hash = blake3::hash(data);
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }
}

/// FNV-1 (multiply, then xor) 64-bit.
///
/// Slow and weakly mixing compared to xxh3, but trivially reproducible in
/// any language, which makes it the usual choice when peers written
/// elsewhere must compute identical scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv1Hasher;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

impl Hasher64 for Fnv1Hasher {
    fn sum64(&self, data: &[u8]) -> u64 {
        data.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
            hash.wrapping_mul(FNV_PRIME) ^ u64::from(byte)
        })
    }
}

/// Built-in providers that can be selected by name from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HasherKind {
    /// [`Xxh3Hasher`].
    #[default]
    Xxh3,
    /// [`Blake3Hasher`].
    Blake3,
    /// [`Fnv1Hasher`].
    Fnv1,
}

impl HasherKind {
    /// Instantiate the provider this kind names.
    pub fn build(self) -> Arc<dyn Hasher64> {
        match self {
            HasherKind::Xxh3 => Arc::new(Xxh3Hasher),
            HasherKind::Blake3 => Arc::new(Blake3Hasher),
            HasherKind::Fnv1 => Arc::new(Fnv1Hasher),
        }
    }
}

impl fmt::Display for HasherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HasherKind::Xxh3 => "xxh3",
            HasherKind::Blake3 => "blake3",
            HasherKind::Fnv1 => "fnv1",
        };
        f.write_str(name)
    }
}
