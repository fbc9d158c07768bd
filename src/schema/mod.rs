//! Schema module - Configuration and seeding types for Voxel Life runs.

mod config;
mod seed;

pub use config::*;
pub use seed::*;
