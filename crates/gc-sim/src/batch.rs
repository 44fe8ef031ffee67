//! Many independent headless runs on a worker pool.
//!
//! # Seeding
//!
//! One root [`SimRng`] (seeded from `config.seed`, or OS entropy) draws a
//! master seed per run before anything is dispatched.  Each run then builds
//! its own grid clone and agents from that seed, so a batch with a pinned
//! seed is reproducible regardless of worker count or completion order.
//!
//! # Failures
//!
//! A run that errors or panics becomes a [`RunFailure`]; the rest of the
//! batch carries on.

use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use tracing::{info, warn};

use gc_core::rng::entropy_seed;
use gc_core::{GameConfig, SimRng};
use gc_grid::Grid;

use crate::sim::{CHASER, EATER};
use crate::{NoopObserver, Outcome, SimBuilder, SimError, SimResult};

/// Result of one completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunRecord {
    pub run:         usize,
    pub seed:        u64,
    pub outcome:     Outcome,
    /// Decision ticks until the outcome.
    pub decisions:   u64,
    pub goals_eaten: usize,
}

/// A run that produced no outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct RunFailure {
    pub run:   usize,
    pub seed:  u64,
    pub error: String,
}

/// Everything a batch produced, in run order.
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    pub records:  Vec<RunRecord>,
    pub failures: Vec<RunFailure>,
}

impl BatchReport {
    /// Outcome label → occurrence count.  Both labels are always present.
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::from([(EATER, 0), (CHASER, 0)]);
        for r in &self.records {
            *counts.entry(r.outcome.label()).or_default() += 1;
        }
        counts
    }
}

/// Run `runs` independent simulations of `config` in parallel.
///
/// The layout is read once; setup errors (bad config, unreadable layout,
/// pool creation) fail the whole batch before any run starts.
pub fn run_batch(config: &GameConfig, runs: usize) -> SimResult<BatchReport> {
    config.validate()?;
    let mut template = Grid::new(config.height, config.width);
    template.load_layout_file(&config.default_layout)?;
    run_batch_on(config, &template, runs)
}

/// [`run_batch`] on an already-loaded grid; every run gets its own clone.
pub fn run_batch_on(config: &GameConfig, template: &Grid, runs: usize) -> SimResult<BatchReport> {
    config.validate()?;

    let mut root = SimRng::new(config.seed.unwrap_or_else(entropy_seed));
    let seeds: Vec<u64> = (0..runs).map(|i| root.child_seed(i as u64)).collect();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.num_threads.unwrap_or(0))
        .build()
        .map_err(|e| SimError::Config(format!("cannot start worker pool: {e}")))?;

    info!(runs, threads = pool.current_num_threads(), "batch started");

    let results: Vec<Result<RunRecord, RunFailure>> = pool.install(|| {
        seeds
            .par_iter()
            .enumerate()
            .map(|(run, &seed)| run_one(config, template, run, seed))
            .collect()
    });

    let mut report = BatchReport::default();
    for r in results {
        match r {
            Ok(record)   => report.records.push(record),
            Err(failure) => report.failures.push(failure),
        }
    }

    info!(
        counts = ?report.counts(),
        failures = report.failures.len(),
        "batch finished"
    );
    Ok(report)
}

fn run_one(config: &GameConfig, template: &Grid, run: usize, seed: u64) -> Result<RunRecord, RunFailure> {
    isolated(run, seed, || {
        let mut sim = SimBuilder::new(config).grid(template.clone()).seed(seed).build()?;
        let outcome = sim.run(&mut NoopObserver)?;
        Ok(RunRecord {
            run,
            seed,
            outcome,
            decisions:   sim.tick.0,
            goals_eaten: sim.goals_eaten,
        })
    })
}

/// Run one instance, turning an error or a panic into a [`RunFailure`].
pub(crate) fn isolated<F>(run: usize, seed: u64, attempt: F) -> Result<RunRecord, RunFailure>
where
    F: FnOnce() -> SimResult<RunRecord>,
{
    let error = match panic::catch_unwind(AssertUnwindSafe(attempt)) {
        Ok(Ok(record)) => return Ok(record),
        Ok(Err(e))     => e,
        Err(payload)   => SimError::InstancePanicked(panic_message(&*payload)),
    };
    warn!(run, seed, error = %error, "batch run failed");
    Err(RunFailure { run, seed, error: error.to_string() })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
