// src/par.rs
// Independent per-worker streams. Each GeneratorState is owned by exactly one thread.

use std::panic;
use std::thread;

use crate::seed::{derive_worker_seed, SeedingMode};
use crate::xoroshiro::GeneratorState;

/// One seeded state per worker, each from `derive_worker_seed(root, i)`.
pub fn worker_states(root: u64, workers: usize, mode: SeedingMode) -> Vec<GeneratorState> {
    (0..workers as u64)
        .map(|i| GeneratorState::seeded_with(derive_worker_seed(root, i), mode))
        .collect()
}

/// Run `draw(worker_index, state)` for every worker. Workers are split into contiguous
/// chunks, one scoped thread per chunk; results come back in worker order, so the
/// output does not depend on `threads`.
pub fn map_worker_states<T, F>(mut states: Vec<GeneratorState>, threads: usize, draw: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize, &mut GeneratorState) -> T + Sync,
{
    let n = states.len();
    if n == 0 {
        return Vec::new();
    }
    if threads <= 1 {
        return states
            .iter_mut()
            .enumerate()
            .map(|(i, st)| draw(i, st))
            .collect();
    }

    let chunk = (n + threads - 1) / threads;
    let draw = &draw;
    thread::scope(|scope| {
        let handles: Vec<_> = states
            .chunks_mut(chunk)
            .enumerate()
            .map(|(c, part)| {
                scope.spawn(move || {
                    part.iter_mut()
                        .enumerate()
                        .map(|(j, st)| draw(c * chunk + j, st))
                        .collect::<Vec<T>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect()
    })
}

/// `per_worker` raw draws from each worker stream.
pub fn parallel_draws(
    root: u64,
    workers: usize,
    per_worker: usize,
    threads: usize,
    mode: SeedingMode,
) -> Vec<Vec<u64>> {
    map_worker_states(worker_states(root, workers, mode), threads, |_, st| {
        (0..per_worker).map(|_| st.next_u64()).collect()
    })
}

/// Same as [`parallel_draws`] for floats in [0, 1).
pub fn parallel_draws_f64(
    root: u64,
    workers: usize,
    per_worker: usize,
    threads: usize,
    mode: SeedingMode,
) -> Vec<Vec<f64>> {
    map_worker_states(worker_states(root, workers, mode), threads, |_, st| {
        (0..per_worker).map(|_| st.next_f64()).collect()
    })
}
