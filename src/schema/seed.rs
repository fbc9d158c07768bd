//! Seed types for initializing Voxel Life grids.

use serde::{Deserialize, Serialize};

use crate::compute::GridError;

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

/// Predefined patterns for initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Each cell live with probability 0.4, corners forced alive.
    Random {
        /// RNG seed (None = seed from entropy).
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Only the four corner cells alive.
    CornersOnly,
    /// Explicit live cells; every other cell starts dead.
    Custom {
        /// List of (i, j) coordinates.
        alive: Vec<(usize, usize)>,
    },
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::Random { seed: None }
    }
}

impl Seed {
    /// Seed with only the four corners alive.
    pub fn corners_only() -> Self {
        Self {
            pattern: Pattern::CornersOnly,
        }
    }

    /// Random seed driven by a fixed RNG seed.
    pub fn random(seed: u64) -> Self {
        Self {
            pattern: Pattern::Random { seed: Some(seed) },
        }
    }

    /// Explicit set of live cells.
    pub fn custom(alive: Vec<(usize, usize)>) -> Self {
        Self {
            pattern: Pattern::Custom { alive },
        }
    }

    /// Check the pattern fits a `width x height` grid.
    pub fn validate(&self, width: usize, height: usize) -> Result<(), GridError> {
        if let Pattern::Custom { alive } = &self.pattern
            && let Some(&(i, j)) = alive.iter().find(|&&(i, j)| i >= width || j >= height)
        {
            return Err(GridError::OutOfBounds {
                i,
                j,
                width,
                height,
            });
        }
        Ok(())
    }
}
