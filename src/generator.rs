// src/generator.rs
// Host-facing handle: create / reseed / draw_u64 / draw_f64 over one owned state.

use tracing::warn;

use crate::error::{Result, RngError};
use crate::float;
use crate::seed::SeedingMode;
use crate::xoroshiro::{self, GeneratorState};

/// One exclusively owned generator plus the bookkeeping a host binding wants:
/// whether it has been seeded, with what, and how many draws have been taken.
///
/// Not synchronized. Give each thread its own `Generator` (see [`crate::par`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator {
    pub(crate) state: GeneratorState,
    pub(crate) mode: SeedingMode,
    pub(crate) seed: Option<u64>,
    pub(crate) draws: u64,
}

impl Default for Generator {
    fn default() -> Self {
        Self::create()
    }
}

impl Generator {
    /// Unseeded generator in the all-zero state, literal seeding mode.
    pub fn create() -> Self {
        Self::with_mode(SeedingMode::Literal)
    }

    pub fn with_mode(mode: SeedingMode) -> Self {
        Self { state: GeneratorState::new(), mode, seed: None, draws: 0 }
    }

    pub fn seeded(seed: u64, mode: SeedingMode) -> Self {
        let mut g = Self::with_mode(mode);
        g.reseed(seed);
        g
    }

    /// Overwrite the state from `seed` using this generator's mode. Resets the draw count.
    pub fn reseed(&mut self, seed: u64) {
        self.state.reseed_with(seed, self.mode);
        self.seed = Some(seed);
        self.draws = 0;
    }

    /// Switch seeding mode and reseed in one step.
    pub fn reseed_with(&mut self, seed: u64, mode: SeedingMode) {
        self.mode = mode;
        self.reseed(seed);
    }

    /// Raw 64-bit draw. An unseeded generator returns 0.
    pub fn draw_u64(&mut self) -> u64 {
        self.draws = self.draws.wrapping_add(1);
        xoroshiro::next(&mut self.state)
    }

    /// Draw in [0, 1). An unseeded generator returns 0.0.
    pub fn draw_f64(&mut self) -> f64 {
        self.draws = self.draws.wrapping_add(1);
        float::next_f64(&mut self.state)
    }

    /// Like [`draw_u64`](Self::draw_u64) but refuses to draw before the first reseed.
    pub fn try_draw_u64(&mut self) -> Result<u64> {
        self.ensure_seeded()?;
        Ok(self.draw_u64())
    }

    pub fn try_draw_f64(&mut self) -> Result<f64> {
        self.ensure_seeded()?;
        Ok(self.draw_f64())
    }

    fn ensure_seeded(&self) -> Result<()> {
        if self.seed.is_none() {
            warn!("refused draw from unseeded generator");
            return Err(RngError::Unseeded);
        }
        Ok(())
    }

    pub fn is_seeded(&self) -> bool {
        self.seed.is_some()
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn mode(&self) -> SeedingMode {
        self.mode
    }
    pub fn draws(&self) -> u64 {
        self.draws
    }
    pub fn state(&self) -> &GeneratorState {
        &self.state
    }

    /// Mutable access for callers that want to drive the state with `rand` APIs directly.
    /// Draws taken this way are not counted.
    pub fn state_mut(&mut self) -> &mut GeneratorState {
        &mut self.state
    }

    pub fn take_u64(&mut self, n: usize) -> Vec<u64> {
        (0..n).map(|_| self.draw_u64()).collect()
    }

    pub fn take_f64(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.draw_f64()).collect()
    }
}
