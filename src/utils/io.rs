use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::multiset::Multiset;

#[derive(Parser, Debug)]
#[command(about = "Estimate the odds of drawing a target mix of balls from a hat")]
pub struct Args {
    /// Contents of the hat as label=count pairs, e.g. "black=6,red=4,green=3"
    #[arg(long)]
    pub hat: Multiset,

    /// Minimum counts a draw must contain, e.g. "red=2,green=1"
    #[arg(short, long)]
    pub expect: Multiset,

    /// Number of balls drawn per trial
    #[arg(short, long)]
    pub draws: usize,

    /// Number of trials per run
    #[arg(short, long, default_value_t = 2_000)]
    pub trials: usize,

    /// Number of runs to perform with equal parameters
    #[arg(short, long, default_value_t = 1)]
    pub runs: u32,

    /// Seed for the first run; run i uses seed + i. Random when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of worker threads per run
    #[arg(short, long, default_value_t = 1)]
    pub workers: usize,

    /// Directory to write per-trial parquet files into. Optional; the
    /// experiment itself never writes to disk
    #[arg(short, long)]
    pub metrics: Option<PathBuf>,
}

/// Path of the trial metrics file for `run` inside `dir`, creating `dir`
/// if needed.
pub fn metrics_path(dir: &Path, run: u32) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    Ok(dir.join(format!("trials_{:03}.parquet", run)))
}
