// src/xoroshiro.rs
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::seed::SeedingMode;

/// Jump polynomial for the (55, 14, 36) parameters; one jump = 2^64 draws.
const JUMP: [u64; 2] = [0xBEAC_0467_EBA5_FACB, 0xD86B_048B_86AA_9922];

/// xoroshiro128+ state. `Default` is the all-zero unseeded state, which yields 0 forever.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratorState {
    pub s0: u64,
    pub s1: u64,
}

/// 64-bit circular left rotation. `k` is taken mod 64; `k == 0` returns `x`.
#[inline]
pub fn rotate_left(x: u64, k: u32) -> u64 {
    let k = k & 63;
    if k == 0 {
        return x;
    }
    (x << k) | (x >> (64 - k))
}

/// One xoroshiro128+ step: returns `s0 + s1` and moves `state` to its successor.
#[inline]
pub fn next(state: &mut GeneratorState) -> u64 {
    let s0 = state.s0;
    let mut s1 = state.s1;
    let result = s0.wrapping_add(s1);

    s1 ^= s0;
    state.s0 = rotate_left(s0, 55) ^ s1 ^ (s1 << 14);
    state.s1 = rotate_left(s1, 36);

    result
}

impl GeneratorState {
    /// Unseeded (all-zero) state.
    pub const fn new() -> Self {
        Self { s0: 0, s1: 0 }
    }

    pub const fn from_words(s0: u64, s1: u64) -> Self {
        Self { s0, s1 }
    }

    pub fn seeded(seed: u64) -> Self {
        let mut st = Self::new();
        st.reseed(seed);
        st
    }

    pub fn seeded_with(seed: u64, mode: SeedingMode) -> Self {
        let mut st = Self::new();
        st.reseed_with(seed, mode);
        st
    }

    pub fn words(&self) -> (u64, u64) {
        (self.s0, self.s1)
    }

    /// True for the degenerate fixed point of the recurrence.
    pub fn is_zero(&self) -> bool {
        self.s0 == 0 && self.s1 == 0
    }

    /// Overwrite both lanes from the literal expansion (`s0 == s1`).
    pub fn reseed(&mut self, seed: u64) {
        self.reseed_with(seed, SeedingMode::Literal);
    }

    /// Overwrite both lanes from the decorrelated expansion.
    pub fn reseed_decorrelated(&mut self, seed: u64) {
        self.reseed_with(seed, SeedingMode::Decorrelated);
    }

    pub fn reseed_with(&mut self, seed: u64, mode: SeedingMode) {
        let (s0, s1) = mode.expand(seed);
        self.s0 = s0;
        self.s1 = s1;
        debug!(seed, ?mode, "reseeded generator state");
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        next(self)
    }

    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        crate::float::next_f64(self)
    }

    /// Advance by 2^64 draws. Calling it k times on copies of one state gives
    /// non-overlapping subsequences for parallel use.
    pub fn jump(&mut self) {
        let mut s0 = 0u64;
        let mut s1 = 0u64;
        for &word in JUMP.iter() {
            for b in 0..64 {
                if word & (1u64 << b) != 0 {
                    s0 ^= self.s0;
                    s1 ^= self.s1;
                }
                next(self);
            }
        }
        self.s0 = s0;
        self.s1 = s1;
        trace!(s0, s1, "jumped 2^64 draws");
    }
}

impl From<(u64, u64)> for GeneratorState {
    fn from((s0, s1): (u64, u64)) -> Self {
        Self { s0, s1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    const GOLDEN_SEEDS: [u64; 4] = [0, 1, 42, u64::MAX];

    // first five draws after the literal (s0 == s1) expansion
    const GOLDEN_LITERAL: [[u64; 5]; 4] = [
        [
            0xC441_5072_F63B_9B5E,
            0xD7F1_1054_1CBD_8EE6,
            0xAC68_DE60_D41B_5562,
            0x9D76_22F1_BC59_EA2A,
            0x524F_B113_5DC9_EC1D,
        ],
        [
            0x2214_5BD9_1204_B982,
            0x60C8_8516_F644_812E,
            0x3B05_6FAB_69FC_74DD,
            0x75DD_E50D_5F27_6A45,
            0x4127_51FF_8037_11F1,
        ],
        [
            0x7BAE_644C_5FD6_DD2A,
            0x4ADE_EB99_1317_F5B7,
            0x5D1D_1B9D_D0E2_77DE,
            0x8C70_B43C_88A5_33DB,
            0xBD80_846B_B2CD_F21B,
        ],
        [
            0xC9B2_E2EE_36CA_5840,
            0x1072_6CB8_BB8D_B296,
            0x792F_A4CE_929C_BFDA,
            0x5120_576D_7E5C_A606,
            0x116D_2D90_3410_0C5B,
        ],
    ];

    // same seeds with the counter threaded between lanes; these differ from the
    // literal vectors because s1 != s0
    const GOLDEN_DECORRELATED: [[u64; 5]; 4] = [
        [
            0x5099_46A4_1CD7_33A3,
            0x0088_5667_B193_4BFA,
            0x1061_F9AD_258F_D5D5,
            0x3F8B_E448_97A4_317C,
            0x60DA_683B_EA50_E6AB,
        ],
        [
            0x4FF5_BB8D_EE91_4928,
            0xF005_68DB_34FB_B666,
            0x0E9F_D07A_18CA_873A,
            0x67F9_681F_7817_44DE,
            0x0BDB_D4A1_A166_A8E8,
        ],
        [
            0xE6C7_1559_E252_5F98,
            0xC47D_5759_3D0C_FB7A,
            0x39DE_9318_2B82_8CF8,
            0x7F62_98C8_E549_2240,
            0xAEC6_2D30_C41C_78D5,
        ],
        [
            0xCE79_69DE_F75B_AEE9,
            0xC8AB_C41D_650C_ED8B,
            0x541F_6981_167C_1121,
            0xCC01_42FD_C5E9_9AA3,
            0xB30B_525B_83FC_E7D5,
        ],
    ];

    fn first5(mut st: GeneratorState) -> [u64; 5] {
        let mut out = [0u64; 5];
        for x in out.iter_mut() {
            *x = st.next_u64();
        }
        out
    }

    #[test]
    fn golden_vectors_literal() {
        for (seed, want) in GOLDEN_SEEDS.iter().zip(GOLDEN_LITERAL.iter()) {
            assert_eq!(&first5(GeneratorState::seeded(*seed)), want, "literal seed {seed:#x}");
        }
    }

    #[test]
    fn golden_vectors_decorrelated() {
        for (seed, want) in GOLDEN_SEEDS.iter().zip(GOLDEN_DECORRELATED.iter()) {
            let st = GeneratorState::seeded_with(*seed, SeedingMode::Decorrelated);
            assert_eq!(&first5(st), want, "decorrelated seed {seed:#x}");
        }
    }

    #[test]
    fn modes_diverge_from_first_draw() {
        for seed in GOLDEN_SEEDS {
            let a = first5(GeneratorState::seeded(seed));
            let b = first5(GeneratorState::seeded_with(seed, SeedingMode::Decorrelated));
            assert_ne!(a[0], b[0], "seed {seed:#x}");
        }
    }

    #[test]
    fn literal_state_has_equal_lanes() {
        let st = GeneratorState::seeded(42);
        assert_eq!(st.words(), (0xBDD7_3226_2FEB_6E95, 0xBDD7_3226_2FEB_6E95));
        // with s0 == s1 the first draw is simply 2 * s0
        assert_eq!(first5(st)[0], st.s0.wrapping_mul(2));
    }

    #[test]
    fn determinism_across_instances() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..64 {
            let seed: u64 = rng.gen();
            let mut a = GeneratorState::seeded(seed);
            let mut b = GeneratorState::seeded(seed);
            for _ in 0..256 {
                assert_eq!(a.next_u64(), b.next_u64());
            }
        }
    }

    #[test]
    fn unseeded_state_is_fixed_point() {
        let mut st = GeneratorState::new();
        assert!(st.is_zero());
        for _ in 0..16 {
            assert_eq!(st.next_u64(), 0);
        }
        assert!(st.is_zero());
        st.jump();
        assert!(st.is_zero());
    }

    #[test]
    fn no_early_state_repeat() {
        for mode in [SeedingMode::Literal, SeedingMode::Decorrelated] {
            let mut st = GeneratorState::seeded_with(42, mode);
            let mut seen = HashSet::with_capacity(10_001);
            seen.insert(st);
            for i in 0..10_000 {
                st.next_u64();
                assert!(seen.insert(st), "{mode:?}: state repeated after {} draws", i + 1);
            }
        }
    }

    #[test]
    fn reseed_overwrites() {
        let mut st = GeneratorState::new();
        st.reseed(1);
        for _ in 0..10 {
            st.next_u64();
        }
        st.reseed(2);
        assert_eq!(st, GeneratorState::seeded(2));

        st.reseed_decorrelated(3);
        st.reseed(2);
        assert_eq!(st, GeneratorState::seeded(2));
    }

    #[test]
    fn rotate_left_known_values() {
        assert_eq!(rotate_left(0x8000_0000_0000_0000, 1), 0x1);
        assert_eq!(rotate_left(0x1, 63), 0x8000_0000_0000_0000);
        assert_eq!(rotate_left(0xDEAD_BEEF, 0), 0xDEAD_BEEF);
        assert_eq!(rotate_left(0xDEAD_BEEF, 64), 0xDEAD_BEEF);
        assert_eq!(rotate_left(0x0123_4567_89AB_CDEF, 32), 0x89AB_CDEF_0123_4567);
    }

    #[test]
    fn rotate_left_inverse() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let x: u64 = rng.gen();
            for k in [1u32, 32, 55, 36, 63] {
                assert_eq!(rotate_left(rotate_left(x, k), 64 - k), x, "x={x:#x} k={k}");
                assert_eq!(rotate_left(x, k), x.rotate_left(k));
            }
        }
    }

    #[test]
    fn jump_matches_pinned_state() {
        let mut st = GeneratorState::seeded(42);
        st.jump();
        assert_eq!(st.words(), (0x045A_2C27_0718_BC3B, 0x05B3_939A_23E5_33B4));
    }

    #[test]
    fn jumped_streams_do_not_overlap_early() {
        let base = GeneratorState::seeded(7);
        let mut jumped = base;
        jumped.jump();
        let mut a = base;
        let head: HashSet<u64> = (0..4096).map(|_| a.next_u64()).collect();
        let mut b = jumped;
        let hits = (0..4096).filter(|_| head.contains(&b.next_u64())).count();
        assert_eq!(hits, 0);
    }
}
