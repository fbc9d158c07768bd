//! Voxel Life - Stacked cellular automaton generations as 3D points.
//!
//! A rectangular grid of cells is stepped with an orthogonal-neighbour rule:
//! a cell is alive in the next generation unless exactly 0 or exactly 2 of
//! its four in-bounds neighbours are alive. Each recorded generation is
//! flattened into integer points `(i, generation, j)`, one per live cell,
//! ready to be drawn as unit cubes.
//!
//! # Architecture
//!
//! - `schema`: Run configuration and seeding
//! - `compute`: Grid, transition rule, simulator and point output
//!
//! # Example
//!
//! ```rust
//! use voxel_life::{
//!     compute::{Grid, Simulator},
//!     schema::Seed,
//! };
//!
//! let mut grid = Grid::from_seed(&Seed::random(7), 14, 10).unwrap();
//! let points = Simulator::new().run(&mut grid, 20);
//!
//! assert_eq!(points.generations(), 20);
//! println!("{} cubes to draw", points.len());
//! ```

pub mod compute;
pub mod schema;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use compute::{Grid, Point, PointCloud, RunOutput, RunStats, Simulator, simulate};
pub use schema::{Pattern, RecordTiming, RunConfig, Seed};
