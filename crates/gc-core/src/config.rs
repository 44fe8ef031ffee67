//! Game configuration loaded from YAML.
//!
//! The key names follow the `conf/conf.yaml` file shipped with the repo
//! (`amount_of_seekers`, `max_threat_level`, …).  Keys this crate does not
//! model, such as render colours, are ignored.
//!
//! ```yaml
//! height: 20
//! width: 20
//! tile_size: 32
//! amount_of_seekers: 2
//! max_threat_level: 10
//! decay_rate: 2
//! default_layout: layouts/default.txt
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{CoreError, CoreResult};

fn default_tile_size() -> u32 { 32 }
fn default_danger_penalty() -> f64 { 10_000.0 }
fn default_max_decision_ticks() -> u64 { 100_000 }
fn default_move_delay_ms() -> u64 { 200 }
fn default_frame_rate_hz() -> u32 { 60 }
fn default_min_state_ticks() -> u32 { 20 }
fn default_max_state_ticks() -> u32 { 70 }

/// Top-level configuration, consumed read-only by every other crate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameConfig {
    /// Grid height in tiles.
    pub height: usize,

    /// Grid width in tiles.
    pub width: usize,

    /// Pixel size of one tile.  Only renderers use it.
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,

    /// Number of pursuers.
    #[serde(rename = "amount_of_seekers")]
    pub chaser_count: usize,

    /// Danger at a pursuer's own tile.
    #[serde(rename = "max_threat_level")]
    pub max_danger: f32,

    /// Danger lost per hop away from a pursuer.
    pub decay_rate: f32,

    /// Layout file.  Relative paths are resolved against the directory of
    /// the config file by [`GameConfig::load`].
    pub default_layout: PathBuf,

    /// Cost added per unit of danger when the goal-seeker plans.
    #[serde(default = "default_danger_penalty")]
    pub danger_penalty: f64,

    #[serde(default)]
    pub chaser: ChaserConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    /// Master seed.  `None` draws one from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Upper bound on decision ticks per run.  A run that hits it fails
    /// instead of looping forever on a map where nobody can win.
    #[serde(default = "default_max_decision_ticks")]
    pub max_decision_ticks: u64,

    /// Batch worker count.  `None` uses all logical cores.
    #[serde(default)]
    pub num_threads: Option<usize>,
}

/// Pursuer state-machine timing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChaserConfig {
    /// Shortest stay in one state, in ticks (inclusive).
    #[serde(default = "default_min_state_ticks")]
    pub min_state_ticks: u32,

    /// Longest stay in one state, in ticks (inclusive).
    #[serde(default = "default_max_state_ticks")]
    pub max_state_ticks: u32,
}

impl Default for ChaserConfig {
    fn default() -> Self {
        Self {
            min_state_ticks: default_min_state_ticks(),
            max_state_ticks: default_max_state_ticks(),
        }
    }
}

/// Paced-loop timing.  Ignored by headless and batch runs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_move_delay_ms")]
    pub move_delay_ms: u64,

    #[serde(default = "default_frame_rate_hz")]
    pub frame_rate_hz: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            move_delay_ms: default_move_delay_ms(),
            frame_rate_hz: default_frame_rate_hz(),
        }
    }
}

impl GameConfig {
    /// Read, parse and validate a YAML config file.
    ///
    /// A relative `default_layout` is rewritten to be relative to the config
    /// file's directory so the result can be used from any working directory.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&text)?;
        if config.default_layout.is_relative() {
            if let Some(dir) = path.parent() {
                config.default_layout = dir.join(&config.default_layout);
            }
        }
        debug!(path = %path.display(), layout = %config.default_layout.display(), "config loaded");
        Ok(config)
    }

    /// Parse and validate YAML text.
    pub fn from_yaml_str(text: &str) -> CoreResult<Self> {
        let config: GameConfig = serde_yml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no simulation can run with.
    ///
    /// Non-positive danger parameters are accepted: they describe a valid,
    /// dangerless field.
    pub fn validate(&self) -> CoreResult<()> {
        if self.height == 0 || self.width == 0 {
            return Err(CoreError::Config(format!(
                "grid must be at least 1x1, got {}x{}",
                self.height, self.width
            )));
        }
        if !self.max_danger.is_finite() || !self.decay_rate.is_finite() {
            return Err(CoreError::Config(
                "max_threat_level and decay_rate must be finite".into(),
            ));
        }
        if !self.danger_penalty.is_finite() || self.danger_penalty < 0.0 {
            return Err(CoreError::Config(format!(
                "danger_penalty must be a non-negative number, got {}",
                self.danger_penalty
            )));
        }
        let min_state_ticks = self.chaser.min_state_ticks;
        let max_state_ticks = self.chaser.max_state_ticks;
        if min_state_ticks == 0 || min_state_ticks > max_state_ticks {
            return Err(CoreError::Config(format!(
                "chaser state ticks must satisfy 1 <= min <= max, got {min_state_ticks}..={max_state_ticks}"
            )));
        }
        if self.timing.frame_rate_hz == 0 {
            return Err(CoreError::Config("timing.frame_rate_hz must be positive".into()));
        }
        if self.max_decision_ticks == 0 {
            return Err(CoreError::Config("max_decision_ticks must be positive".into()));
        }
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be positive when set".into()));
        }
        Ok(())
    }
}
