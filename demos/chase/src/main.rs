//! chase: one paced grid-chase run drawn in the terminal.
//!
//! ```text
//! cargo run -p chase -- [CONFIG] [--headless]
//! ```
//!
//! `CONFIG` defaults to `conf/conf.yaml`.  The board is redrawn after every
//! decision tick; `--headless` skips drawing and pacing.  A per-decision
//! trace is written to `output/chase/decisions.csv`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gc_agent::ChaserMode;
use gc_core::{Coord, GameConfig, Tick};
use gc_grid::GraphSnapshot;
use gc_output::{CsvWriter, OutputWriter, SimOutputObserver};
use gc_sim::{Outcome, SimBuilder, SimObserver, SimView};

const DEFAULT_CONFIG: &str = "conf/conf.yaml";
const OUTPUT_DIR:     &str = "output/chase";

// ── Terminal board ────────────────────────────────────────────────────────────

/// Wraps the CSV observer and draws the board after each decision.
struct BoardObserver<W: OutputWriter> {
    inner:  SimOutputObserver<W>,
    draw:   bool,
    frames: u64,
}

impl<W: OutputWriter> BoardObserver<W> {
    fn render(view: &SimView<'_>, snapshot: &GraphSnapshot) -> String {
        let grid = view.grid;
        let mut out = String::with_capacity((grid.width() + 1) * grid.height());
        for row in 0..grid.height() as i32 {
            for col in 0..grid.width() as i32 {
                let c = Coord::new(row, col);
                out.push(symbol(view, snapshot, c));
            }
            out.push('\n');
        }
        out
    }
}

/// Agents over goals over danger shading over the bare tile.
fn symbol(view: &SimView<'_>, snapshot: &GraphSnapshot, c: Coord) -> char {
    if let Some(ch) = view.roster.chasers.iter().find(|ch| ch.position == c) {
        return match ch.mode() {
            ChaserMode::Wander => 'w',
            ChaserMode::Pursue => 'P',
        };
    }
    if view.roster.eater.position == c {
        return 'E';
    }
    let Some(tile) = view.grid.tile(c) else { return ' ' };
    if !tile.walkable {
        return '#';
    }
    if tile.has_goal {
        return '.';
    }
    if snapshot.danger(c) > 0.0 { '~' } else { ' ' }
}

impl<W: OutputWriter> SimObserver for BoardObserver<W> {
    fn on_decision(&mut self, view: &SimView<'_>, snapshot: &GraphSnapshot) {
        self.inner.on_decision(view, snapshot);
        if self.draw {
            // Clear screen, cursor home.
            print!("\x1b[2J\x1b[H");
            print!("{}", Self::render(view, snapshot));
            println!("tick {}  goals eaten {}", view.tick.0, view.goals_eaten);
            for s in view.roster.statuses() {
                println!("  {:<6} {:<7} {}", s.name, s.label, s.position);
            }
        }
    }

    fn on_frame(&mut self, _view: &SimView<'_>) -> bool {
        self.frames += 1;
        true
    }

    fn on_sim_end(&mut self, final_tick: Tick, outcome: Outcome) {
        self.inner.on_sim_end(final_tick, outcome);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let mut config_path = PathBuf::from(DEFAULT_CONFIG);
    let mut headless = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--headless" => headless = true,
            other        => config_path = PathBuf::from(other),
        }
    }

    // 1. Config and simulation.
    let config = GameConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let mut sim = SimBuilder::new(&config).build()?;
    info!(
        seed = sim.seed,
        chasers = sim.roster.chasers.len(),
        goals = sim.grid.goal_count(),
        "starting run"
    );

    // 2. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = BoardObserver { inner: SimOutputObserver::new(writer), draw: !headless, frames: 0 };

    // 3. Run.
    let t0 = Instant::now();
    let outcome = if headless {
        Some(sim.run(&mut obs)?)
    } else {
        sim.run_paced(&mut obs)?
    };
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!();
    match outcome {
        Some(o) => println!("Winner: {o}"),
        None    => println!("Stopped before an outcome"),
    }
    println!(
        "{} decisions, {} goals eaten, {} frames in {:.2} s",
        sim.tick.0,
        sim.goals_eaten,
        obs.frames,
        elapsed.as_secs_f64()
    );
    println!("Trace written to {OUTPUT_DIR}/decisions.csv");
    Ok(())
}
