//! Compute module - Grid stepping and point collection for Voxel Life.

mod grid;
mod points;
mod rule;
mod simulator;

pub use grid::*;
pub use points::*;
pub use rule::*;
pub use simulator::*;
