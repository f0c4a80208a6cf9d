// src/float.rs
use crate::xoroshiro::{self, GeneratorState};

/// 2^-53: one unit in the last place of a double in [0.5, 1).
const INV_2_53: f64 = 1.0 / ((1u64 << 53) as f64);

/// Map a raw 64-bit draw to [0, 1) using its top 53 bits. Exact; never returns 1.0.
#[inline]
pub fn unit_f64(x: u64) -> f64 {
    ((x >> 11) as f64) * INV_2_53
}

/// Draw once and convert to [0, 1).
#[inline]
pub fn next_f64(state: &mut GeneratorState) -> f64 {
    unit_f64(xoroshiro::next(state))
}
