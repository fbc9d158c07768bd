//! Configuration types for Voxel Life runs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Seed;
use crate::compute::{GridError, MAX_CELLS, checked_cell_count};

/// Default grid width used by the reference scene.
pub const DEFAULT_WIDTH: usize = 14;
/// Default grid height used by the reference scene.
pub const DEFAULT_HEIGHT: usize = 10;
/// Default number of recorded generations.
pub const DEFAULT_GENERATIONS: usize = 20;
/// Largest accepted generation count.
pub const MAX_GENERATIONS: usize = 1 << 16;

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_height() -> usize {
    DEFAULT_HEIGHT
}

fn default_generations() -> usize {
    DEFAULT_GENERATIONS
}

/// Top-level run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Grid width in cells (the `x` axis of emitted points).
    #[serde(default = "default_width")]
    pub width: usize,
    /// Grid height in cells (the `z` axis of emitted points).
    #[serde(default = "default_height")]
    pub height: usize,
    /// Number of generations to record (the `y` axis of emitted points).
    #[serde(default = "default_generations")]
    pub generations: usize,
    /// Initial grid state.
    #[serde(default)]
    pub seed: Seed,
    /// When each generation is sampled relative to its transition.
    #[serde(default)]
    pub record: RecordTiming,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            generations: DEFAULT_GENERATIONS,
            seed: Seed::default(),
            record: RecordTiming::default(),
        }
    }
}

/// Point at which live cells are sampled during a simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordTiming {
    /// Sample after the next state is computed but before it is committed.
    ///
    /// Generation `k` of the output holds the state that step `k` replaces,
    /// so the seed appears at `y = 0` and the last computed state is never
    /// emitted.
    #[default]
    BeforeCommit,
    /// Sample after the transition is committed.
    ///
    /// Generation `k` of the output holds the state produced by step `k`.
    AfterCommit,
}

impl RunConfig {
    /// Total cell count (width * height), or None if the grid is empty or too large.
    #[inline]
    pub fn grid_size(&self) -> Option<usize> {
        checked_cell_count(self.width, self.height)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size().is_none() {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.generations > MAX_GENERATIONS {
            return Err(ConfigError::TooManyGenerations {
                generations: self.generations,
            });
        }
        self.seed.validate(self.width, self.height)?;
        Ok(())
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "Grid dimensions must be non-zero and hold at most {} cells (got {width}x{height})",
        MAX_CELLS
    )]
    InvalidDimensions { width: usize, height: usize },
    #[error("Generation count {generations} exceeds the limit of {}", MAX_GENERATIONS)]
    TooManyGenerations { generations: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
