//! Integration test: key distribution.
//!
//! Over many random keys, each member's share of `locate_key` wins should
//! track its share of the total weight.

use std::collections::HashMap;

use rendez_integration_tests::{
    engine, engine_with, random_keys, tally, uniform_nodes, weighted_nodes,
};
use rendez_placement::{Blake3Hasher, Node, Xxh3Hasher};

const SAMPLES: usize = 100_000;

/// Assert every member's share is within `tolerance` of `weight / total`.
fn assert_proportional(members: &[Node], counts: &HashMap<String, usize>, tolerance: f64) {
    let total_weight: f64 = members.iter().map(|m| m.weight).sum();
    let total: usize = counts.values().sum();
    assert_eq!(total, SAMPLES);

    for m in members {
        let got = counts.get(&m.name).copied().unwrap_or(0) as f64 / total as f64;
        let want = m.weight / total_weight;
        assert!(
            (got - want).abs() <= tolerance,
            "{} owns {got:.4} of keys, expected {want:.4} (counts {counts:?})",
            m.name
        );
    }
}

#[test]
fn test_weighted_shares_xxh3() {
    let members = weighted_nodes(&[("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0)]);
    let r = engine_with(members.clone(), Xxh3Hasher);
    let counts = tally(&r, &random_keys(SAMPLES, 1));
    assert_proportional(&members, &counts, 0.01);
}

#[test]
fn test_weighted_shares_blake3() {
    let members = weighted_nodes(&[("small", 0.5), ("medium", 1.5), ("large", 6.0)]);
    let r = engine_with(members.clone(), Blake3Hasher);
    let counts = tally(&r, &random_keys(SAMPLES, 2));
    assert_proportional(&members, &counts, 0.01);
}

#[test]
fn test_uniform_weights_balanced() {
    let members = uniform_nodes(10, 1.0);
    let r = engine(members.clone());
    let counts = tally(&r, &random_keys(SAMPLES, 3));
    assert_eq!(counts.len(), 10, "every member should own some keys");
    assert_proportional(&members, &counts, 0.01);
}

#[test]
fn test_weight_scale_invariant() {
    // Multiplying every weight by a constant must not change any owner.
    let small = engine(weighted_nodes(&[("a", 1.0), ("b", 2.0), ("c", 5.0)]));
    let large = engine(weighted_nodes(&[("a", 100.0), ("b", 200.0), ("c", 500.0)]));

    for key in random_keys(2_000, 4) {
        assert_eq!(
            small.locate_key(&key).unwrap().name,
            large.locate_key(&key).unwrap().name
        );
    }
}

#[test]
fn test_heavier_member_never_loses_keys() {
    // Raising one member's weight can only win it more keys.
    let keys = random_keys(5_000, 5);
    let before = engine(weighted_nodes(&[("a", 1.0), ("b", 1.0), ("c", 1.0)]));
    let after = engine(weighted_nodes(&[("a", 3.0), ("b", 1.0), ("c", 1.0)]));

    for key in &keys {
        if before.locate_key(key).unwrap().name == "a" {
            assert_eq!(after.locate_key(key).unwrap().name, "a");
        }
    }
}
