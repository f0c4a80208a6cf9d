// src/config.rs
use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RngError};
use crate::seed::SeedingMode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    U64,
    #[default]
    Hex,
    F64,
}

impl OutputFormat {
    pub fn render(self, x: u64) -> String {
        match self {
            OutputFormat::U64 => x.to_string(),
            OutputFormat::Hex => format!("0x{:016X}", x),
            OutputFormat::F64 => format!("{}", crate::float::unit_f64(x)),
        }
    }
}

/// Draw job settings. Every field has a default so partial JSON files work.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    pub seed: u64,
    pub count: usize,
    pub mode: SeedingMode,
    pub format: OutputFormat,
    pub workers: usize,
    pub threads: usize,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            count: 5,
            mode: SeedingMode::Literal,
            format: OutputFormat::Hex,
            workers: 1,
            threads: 1,
        }
    }
}

/// Values passed explicitly on the command line. `None` keeps the file or default value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawOverrides {
    pub seed: Option<u64>,
    pub count: Option<usize>,
    pub mode: Option<SeedingMode>,
    pub format: Option<OutputFormat>,
    pub workers: Option<usize>,
    pub threads: Option<usize>,
}

/// Snapshot options that constrain the other settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SnapshotFlags {
    pub resume: bool,
    pub save: bool,
}

impl DrawConfig {
    /// Parse only; call [`with_overrides`](Self::with_overrides) or
    /// [`validate`](Self::validate) before use.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Apply explicit flags over file values, then validate the merged result once.
    ///
    /// A resumed stream carries its own seed and mode, so `--seed`/`--mode` are rejected
    /// alongside `--resume`. Snapshots cover a single stream, so `--save`/`--resume`
    /// need `workers == 1`.
    pub fn with_overrides(mut self, o: &DrawOverrides, snap: SnapshotFlags) -> Result<Self> {
        if snap.resume && (o.seed.is_some() || o.mode.is_some()) {
            return Err(RngError::Config("--seed/--mode conflict with --resume".into()));
        }
        if let Some(s) = o.seed {
            self.seed = s;
        }
        if let Some(c) = o.count {
            self.count = c;
        }
        if let Some(m) = o.mode {
            self.mode = m;
        }
        if let Some(f) = o.format {
            self.format = f;
        }
        if let Some(w) = o.workers {
            self.workers = w;
        }
        if let Some(t) = o.threads {
            self.threads = t;
        }
        if (snap.resume || snap.save) && self.workers > 1 {
            return Err(RngError::Config("--save/--resume require workers == 1".into()));
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(RngError::Config("count must be > 0".into()));
        }
        if self.workers == 0 {
            return Err(RngError::Config("workers must be > 0".into()));
        }
        if self.threads == 0 {
            return Err(RngError::Config("threads must be > 0".into()));
        }
        Ok(())
    }
}

/// Comma-separated seeds, decimal or `0x` hex. Any bad token is an error.
pub fn parse_seed_list(s: &str) -> Result<Vec<u64>> {
    let mut seeds = Vec::new();
    for tok in s.split(',').map(str::trim) {
        let parsed = match tok.strip_prefix("0x").or_else(|| tok.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
            None => tok.parse::<u64>(),
        };
        match parsed {
            Ok(v) => seeds.push(v),
            Err(e) => return Err(RngError::Config(format!("invalid seed {tok:?}: {e}"))),
        }
    }
    Ok(seeds)
}
