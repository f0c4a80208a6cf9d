//! xoroshiro_seeded: deterministic xoroshiro128+ with splitmix64 seed expansion.
//!
//! Not cryptographically secure: the whole future stream follows from 128 bits of state.
//!
//! Modules:
//! - `seed`: splitmix64 `mix`, literal (`s0 == s1`) and decorrelated expansion, worker seeds.
//! - `xoroshiro`: `GeneratorState`, the rotate/xor/shift step, `jump`.
//! - `float`: 53-bit conversion of a draw to [0, 1).
//! - `rng_core`: `rand_core::RngCore` / `SeedableRng` for `GeneratorState`.
//! - `generator`: host handle with create / reseed / draw_u64 / draw_f64 and a seeded flag.
//! - `snapshot`: JSON save/resume of a `Generator`.
//! - `par`: per-worker streams and an order-preserving parallel map.
//! - `config`: `DrawConfig` for the CLI tools.
//! - `error`: `RngError` for the adapter layer.

pub mod seed;
pub mod xoroshiro;
pub mod float;
pub mod rng_core;
pub mod error;
pub mod generator;
pub mod snapshot;
pub mod par;
pub mod config;

pub use seed::{expand, expand_decorrelated, mix, derive_worker_seed, SeedingMode, SplitMix64};
pub use xoroshiro::{next, rotate_left, GeneratorState};
pub use float::{next_f64, unit_f64};
pub use generator::Generator;
pub use snapshot::Snapshot;
pub use config::{DrawConfig, OutputFormat};
pub use error::{Result, RngError};
