// src/seed.rs
// splitmix64 seed expansion. One u64 seed -> two state words for xoroshiro128+.

use serde::{Deserialize, Serialize};

/// Golden-ratio increment of the splitmix64 counter.
pub const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// One splitmix64 step: returns `(z, x')` where `x' = x + GAMMA` and `z` is the mixed output.
#[inline]
pub fn mix(x: u64) -> (u64, u64) {
    let next = x.wrapping_add(GOLDEN_GAMMA);
    let mut z = next;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    (z ^ (z >> 31), next)
}

/// The one seed whose `mix` output is 0 (`seed + GAMMA == 0`).
pub const ZERO_MIX_SEED: u64 = GOLDEN_GAMMA.wrapping_neg();

/// Literal expansion: both lanes come from `mix(seed)` on the *same* input, so `s0 == s1`.
///
/// This keeps output compatibility with the generator's historical streams. The two
/// lanes are identical, which is weaker than standard two-stream splitmix64 seeding;
/// use [`expand_decorrelated`] when stream compatibility does not matter.
///
/// `mix` is a bijection that sends [`ZERO_MIX_SEED`] to 0, which would give the
/// all-zero fixed point. That single seed falls back to the decorrelated expansion.
#[inline]
pub fn expand(seed: u64) -> (u64, u64) {
    let (s0, _) = mix(seed);
    let (s1, _) = mix(seed);
    if s0 == 0 && s1 == 0 {
        return expand_decorrelated(seed);
    }
    (s0, s1)
}

/// Standard splitmix64 seeding: the counter advances between the two lanes.
#[inline]
pub fn expand_decorrelated(seed: u64) -> (u64, u64) {
    let mut sm = SplitMix64::new(seed);
    let s0 = sm.next_u64();
    (s0, sm.next_u64())
}

/// Which seed expansion a generator uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedingMode {
    /// `s0 == s1`, bit-compatible with the historical stream.
    #[default]
    Literal,
    /// Counter threaded between lanes (standard splitmix64).
    Decorrelated,
}

impl SeedingMode {
    pub fn expand(self, seed: u64) -> (u64, u64) {
        match self {
            SeedingMode::Literal => expand(seed),
            SeedingMode::Decorrelated => expand_decorrelated(seed),
        }
    }
}

/// Per-worker seed from a root seed and a worker index. Adjacent indices land far apart.
#[inline]
pub fn derive_worker_seed(root: u64, index: u64) -> u64 {
    mix(root ^ mix(index).0).0
}

/// SplitMix64 stream (the threaded-counter form of [`mix`]).
#[derive(Clone, Copy, Debug)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let (z, next) = mix(self.state);
        self.state = next;
        z
    }

    /// Next value in [0, 1), 53 bits of precision.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        crate::float::unit_f64(self.next_u64())
    }

    /// Bounded integer in `0..end`; `end == 0` yields 0 without consuming a draw.
    #[inline]
    pub fn gen_range(&mut self, end: usize) -> usize {
        if end == 0 {
            return 0;
        }
        (self.next_u64() % (end as u64)) as usize
    }
}
