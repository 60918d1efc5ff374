//! Weighted HRW score.

use rendez_hash::{Hasher64, unit_float};
use rendez_types::WeightedMember;

/// Score `member` for `key`: `weight / -ln(unit_float(hash(name ++ key)))`.
///
/// `-ln` of a uniform (0, 1) draw is exponentially distributed, so taking the
/// argmax of `weight / -ln(u)` over members selects each member with
/// probability `weight / total_weight`.
pub fn score<M: WeightedMember + ?Sized>(hasher: &dyn Hasher64, member: &M, key: &[u8]) -> f64 {
    weighted_score(hasher, member.name(), member.weight(), key)
}

pub(crate) fn weighted_score(hasher: &dyn Hasher64, name: &str, weight: f64, key: &[u8]) -> f64 {
    let mut input = Vec::with_capacity(name.len() + key.len());
    input.extend_from_slice(name.as_bytes());
    input.extend_from_slice(key);
    let draw = unit_float(hasher.sum64(&input));
    weight * (1.0 / -draw.ln())
}
