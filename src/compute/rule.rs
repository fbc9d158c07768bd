//! Transition rule for Voxel Life.
//!
//! A cell's next state depends only on how many of its four orthogonal
//! neighbours are alive; its own current state is ignored.

/// Probability that a non-corner cell starts alive under a random seed.
pub const LIVE_PROBABILITY: f64 = 0.4;

/// Next liveness for a cell with `live_neighbours` live orthogonal neighbours.
///
/// Dead on exactly 0 or exactly 2, alive on 1, 3 or 4.
#[inline]
pub fn next_alive(live_neighbours: u8) -> bool {
    !matches!(live_neighbours, 0 | 2)
}
