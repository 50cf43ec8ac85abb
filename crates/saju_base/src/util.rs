//! Shared cyclic arithmetic.

/// Non-negative remainder of `n` modulo `modulus`.
pub fn wrap(n: i64, modulus: u8) -> u8 {
    n.rem_euclid(modulus as i64) as u8
}

/// Normalize to a sexagenary index in [0, 60).
pub fn cycle_60(n: i64) -> u8 {
    wrap(n, 60)
}
