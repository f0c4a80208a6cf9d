// src/rng_core.rs
// Lets GeneratorState plug into the rand ecosystem (Rng::gen, gen_range, shuffles...).

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::xoroshiro::{self, GeneratorState};

impl RngCore for GeneratorState {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // high half: the low bits of a '+' generator are the weakest
        (xoroshiro::next(self) >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        xoroshiro::next(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for GeneratorState {
    type Seed = [u8; 16];

    /// Raw state words, little-endian. An all-zero seed is replaced by the
    /// literal expansion of 0 so no seeding path reaches the zero state.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&seed[..8]);
        hi.copy_from_slice(&seed[8..]);
        let st = GeneratorState::from_words(u64::from_le_bytes(lo), u64::from_le_bytes(hi));
        if st.is_zero() {
            GeneratorState::seeded(0)
        } else {
            st
        }
    }

    fn seed_from_u64(state: u64) -> Self {
        GeneratorState::seeded(state)
    }
}
