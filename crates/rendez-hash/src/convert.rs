//! Hash-to-float conversion.

/// Mask keeping the low 53 bits (the `f64` mantissa width).
const MANTISSA_MASK: u64 = (1 << 53) - 1;

/// 2^53 as an `f64`.
const MANTISSA_SCALE: f64 = (1u64 << 53) as f64;

/// Map a hash value to a float uniformly distributed in the open interval (0, 1).
///
/// The low 53 bits are kept and divided by 2^53; bits above the mantissa
/// width are discarded rather than rounded. A masked value of zero is
/// clamped to one so the result is never exactly 0 and `ln` stays finite.
pub fn unit_float(value: u64) -> f64 {
    let masked = (value & MANTISSA_MASK).max(1);
    masked as f64 / MANTISSA_SCALE
}
