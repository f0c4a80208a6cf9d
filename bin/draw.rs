use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use xoroshiro_seeded::config::{DrawOverrides, SnapshotFlags};
use xoroshiro_seeded::par::parallel_draws;
use xoroshiro_seeded::{DrawConfig, Generator, OutputFormat, SeedingMode};

#[derive(Clone, Copy, ValueEnum, Debug)]
enum ModeArg {
    Literal,
    Decorrelated,
}

impl From<ModeArg> for SeedingMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Literal => SeedingMode::Literal,
            ModeArg::Decorrelated => SeedingMode::Decorrelated,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, Debug)]
enum FormatArg {
    U64,
    Hex,
    F64,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::U64 => OutputFormat::U64,
            FormatArg::Hex => OutputFormat::Hex,
            FormatArg::F64 => OutputFormat::F64,
        }
    }
}

/// Flags override values from `--config`.
#[derive(Parser, Debug)]
#[command(name = "xoro-draw", about = "Print deterministic xoroshiro128+ draws for a seed")]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    count: Option<usize>,
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    // per-worker streams (root seed = --seed)
    #[arg(long)]
    workers: Option<usize>,
    #[arg(long)]
    threads: Option<usize>,

    // snapshots; single stream only
    #[arg(long)]
    resume: Option<PathBuf>,
    #[arg(long)]
    save: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> DrawOverrides {
        DrawOverrides {
            seed: self.seed,
            count: self.count,
            mode: self.mode.map(Into::into),
            format: self.format.map(Into::into),
            workers: self.workers,
            threads: self.threads,
        }
    }

    fn snapshot_flags(&self) -> SnapshotFlags {
        SnapshotFlags {
            resume: self.resume.is_some(),
            save: self.save.is_some(),
        }
    }
}

fn run(args: Args) -> xoroshiro_seeded::Result<()> {
    let file = match &args.config {
        Some(p) => DrawConfig::load(p)?,
        None => DrawConfig::default(),
    };
    let cfg = file.with_overrides(&args.overrides(), args.snapshot_flags())?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cfg.workers > 1 {
        info!(
            root = cfg.seed,
            workers = cfg.workers,
            threads = cfg.threads,
            "drawing per-worker streams"
        );
        let rows = parallel_draws(cfg.seed, cfg.workers, cfg.count, cfg.threads, cfg.mode);
        for (w, row) in rows.iter().enumerate() {
            write!(out, "{}", w)?;
            for &x in row {
                write!(out, "\t{}", cfg.format.render(x))?;
            }
            writeln!(out)?;
        }
        out.flush()?;
        return Ok(());
    }

    let mut g = match &args.resume {
        Some(p) => Generator::load(p)?,
        None => Generator::seeded(cfg.seed, cfg.mode),
    };
    info!(
        seed = ?g.seed(),
        mode = ?g.mode(),
        skipped = g.draws(),
        count = cfg.count,
        "drawing"
    );
    for _ in 0..cfg.count {
        writeln!(out, "{}", cfg.format.render(g.draw_u64()))?;
    }
    out.flush()?;

    if let Some(p) = &args.save {
        g.save(p)?;
        eprintln!("saved {}", p.display());
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("xoro-draw: {e}");
        std::process::exit(1);
    }
}
