//! chase_batch: many headless grid-chase runs in parallel.
//!
//! ```text
//! cargo run --release -p chase --bin chase_batch -- [RUNS] [CONFIG]
//! ```
//!
//! `RUNS` defaults to 100, `CONFIG` to `conf/conf.yaml`.  Prints the win
//! counts and writes one row per completed run to
//! `output/chase_batch/runs.csv`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use gc_core::GameConfig;
use gc_output::{write_batch, CsvWriter};
use gc_sim::run_batch;

const DEFAULT_RUNS:   usize = 100;
const DEFAULT_CONFIG: &str  = "conf/conf.yaml";
const OUTPUT_DIR:     &str  = "output/chase_batch";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let mut args = std::env::args().skip(1);
    let runs = match args.next() {
        Some(s) => s.parse::<usize>().with_context(|| format!("invalid run count {s:?}"))?,
        None    => DEFAULT_RUNS,
    };
    let config_path = args.next().map_or_else(|| PathBuf::from(DEFAULT_CONFIG), PathBuf::from);

    let config = GameConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let t0 = Instant::now();
    let report = run_batch(&config, runs)?;
    let elapsed = t0.elapsed();

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    write_batch(&mut writer, &report)?;

    println!("=== chase_batch: {runs} runs in {:.2} s ===", elapsed.as_secs_f64());
    for (label, count) in report.counts() {
        println!("  {label:<7} {count}");
    }
    if !report.failures.is_empty() {
        println!("  failed  {}", report.failures.len());
        for f in &report.failures {
            println!("    run {} (seed {}): {}", f.run, f.seed, f.error);
        }
    }
    println!("Results written to {OUTPUT_DIR}/runs.csv");
    Ok(())
}
