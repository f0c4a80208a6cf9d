use std::io;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use xoroshiro_seeded::config::parse_seed_list;
use xoroshiro_seeded::{GeneratorState, SeedingMode};

/// Regenerate the pinned first-N vectors for both seeding modes.
#[derive(Parser, Debug)]
#[command(name = "xoro-golden", about = "Emit golden xoroshiro128+ vectors as JSON")]
struct Args {
    /// Comma-separated, decimal or 0x hex.
    #[arg(long, default_value = "0,1,42,18446744073709551615")]
    seeds: String,
    #[arg(long, default_value_t = 5)]
    n: usize,
}

#[derive(Serialize)]
struct Vector {
    seed: u64,
    mode: SeedingMode,
    s0: String,
    s1: String,
    outputs: Vec<String>,
}

fn hex(x: u64) -> String {
    format!("0x{:016X}", x)
}

fn run(args: Args) -> xoroshiro_seeded::Result<String> {
    let seeds = parse_seed_list(&args.seeds)?;
    let mut vectors = Vec::new();
    for mode in [SeedingMode::Literal, SeedingMode::Decorrelated] {
        for &seed in &seeds {
            let mut st = GeneratorState::seeded_with(seed, mode);
            let (s0, s1) = st.words();
            let outputs = (0..args.n).map(|_| hex(st.next_u64())).collect();
            vectors.push(Vector {
                seed,
                mode,
                s0: hex(s0),
                s1: hex(s1),
                outputs,
            });
        }
    }
    Ok(serde_json::to_string_pretty(&vectors)?)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("xoro-golden: {e}");
            std::process::exit(1);
        }
    }
}
