//! Shared test harness for Rendez integration tests.
//!
//! Provides member-set builders, seeded key generators and an ownership
//! tally so the integration suites can compare placements across engines.

use std::collections::HashMap;
use std::sync::Once;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rendez_placement::{Config, Hasher64, Node, Rendezvous};

static TRACING: Once = Once::new();

/// Install a test-writer tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; only warnings by default.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// `n` members named `node{i}` with the same weight.
pub fn uniform_nodes(n: usize, weight: f64) -> Vec<Node> {
    (0..n).map(|i| Node::new(format!("node{i}"), weight)).collect()
}

/// Members from `(name, weight)` pairs.
pub fn weighted_nodes(spec: &[(&str, f64)]) -> Vec<Node> {
    spec.iter().map(|&(name, w)| Node::new(name, w)).collect()
}

/// Build an engine over `members` with the given hash provider.
pub fn engine_with(members: Vec<Node>, hasher: impl Hasher64 + 'static) -> Rendezvous<Node> {
    init_tracing();
    Rendezvous::new(members, Config::with_hasher(hasher)).expect("valid members")
}

/// Build an engine over `members` with the default hash provider.
pub fn engine(members: Vec<Node>) -> Rendezvous<Node> {
    init_tracing();
    Rendezvous::with_members(members).expect("valid members")
}

/// `count` random 16-byte keys from a seeded generator.
pub fn random_keys(count: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut key = vec![0u8; 16];
            rng.fill(&mut key[..]);
            key
        })
        .collect()
}

/// Owner of every key under `engine`, by member name.
pub fn owners(engine: &Rendezvous<Node>, keys: &[Vec<u8>]) -> Vec<String> {
    keys.iter()
        .map(|k| engine.locate_key(k).expect("non-empty registry").name)
        .collect()
}

/// How many of `keys` each member owns.
pub fn tally(engine: &Rendezvous<Node>, keys: &[Vec<u8>]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for name in owners(engine, keys) {
        *counts.entry(name).or_insert(0) += 1;
    }
    counts
}
