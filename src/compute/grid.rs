//! Grid state and generation stepping.
//!
//! Cells are stored in a flat array indexed `i * height + j`, so a linear
//! scan visits cells in ascending `i` then ascending `j`, the order in which
//! live coordinates are reported.

use rand::prelude::*;

use super::rule::{LIVE_PROBABILITY, next_alive};
use crate::schema::{Pattern, Seed};

/// Liveness of one grid position plus per-step scratch values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Liveness in the current generation.
    pub alive_now: bool,
    /// Liveness staged for the following generation.
    pub alive_next: bool,
    /// Live orthogonal neighbours, recomputed every step.
    pub live_neighbours: u8,
}

impl Cell {
    fn alive() -> Self {
        Self {
            alive_now: true,
            ..Self::default()
        }
    }
}

/// Largest supported grid, in cells.
pub const MAX_CELLS: usize = 1 << 24;

/// Cell count of a `width x height` grid, or None if it is empty or larger
/// than [`MAX_CELLS`].
pub fn checked_cell_count(width: usize, height: usize) -> Option<usize> {
    width
        .checked_mul(height)
        .filter(|&count| count > 0 && count <= MAX_CELLS)
}

/// Grid construction and access errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error(
        "Grid dimensions must be non-zero and hold at most {} cells (got {width}x{height})",
        MAX_CELLS
    )]
    InvalidDimensions { width: usize, height: usize },
    #[error("Cell ({i}, {j}) is outside the {width}x{height} grid")]
    OutOfBounds {
        i: usize,
        j: usize,
        width: usize,
        height: usize,
    },
}

/// Fixed-size rectangular grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let count = checked_cell_count(width, height)
            .ok_or(GridError::InvalidDimensions { width, height })?;
        Ok(Self {
            cells: vec![Cell::default(); count],
            width,
            height,
        })
    }

    /// Create a randomly seeded grid using an entropy-seeded RNG.
    ///
    /// Each cell is alive with probability 0.4; the four corners are always alive.
    pub fn initialize(width: usize, height: usize) -> Result<Self, GridError> {
        Self::initialize_with_rng(width, height, &mut StdRng::from_entropy())
    }

    /// Create a randomly seeded grid drawing from `rng`.
    pub fn initialize_with_rng<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        for cell in grid.cells.iter_mut() {
            cell.alive_now = rng.gen_bool(LIVE_PROBABILITY);
        }
        grid.force_corners();
        Ok(grid)
    }

    /// Create a grid with only the four corners alive.
    pub fn corners_only(width: usize, height: usize) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        grid.force_corners();
        Ok(grid)
    }

    /// Create a grid from a seed specification.
    pub fn from_seed(seed: &Seed, width: usize, height: usize) -> Result<Self, GridError> {
        match &seed.pattern {
            Pattern::Random { seed: Some(s) } => {
                Self::initialize_with_rng(width, height, &mut StdRng::seed_from_u64(*s))
            }
            Pattern::Random { seed: None } => Self::initialize(width, height),
            Pattern::CornersOnly => Self::corners_only(width, height),
            Pattern::Custom { alive } => {
                let mut grid = Self::new(width, height)?;
                for &(i, j) in alive {
                    grid.set_alive(i, j, true)?;
                }
                Ok(grid)
            }
        }
    }

    fn force_corners(&mut self) {
        let (w, h) = (self.width - 1, self.height - 1);
        for (i, j) in [(0, 0), (w, 0), (0, h), (w, h)] {
            let idx = self.idx(i, j);
            self.cells[idx] = Cell::alive();
        }
    }

    /// Grid width (range of `i`).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height (range of `j`).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Convert (i, j) coordinates to flat index.
    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        i * self.height + j
    }

    fn check_bounds(&self, i: usize, j: usize) -> Result<usize, GridError> {
        if i < self.width && j < self.height {
            Ok(self.idx(i, j))
        } else {
            Err(GridError::OutOfBounds {
                i,
                j,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Cell at (i, j).
    pub fn cell(&self, i: usize, j: usize) -> Result<&Cell, GridError> {
        let idx = self.check_bounds(i, j)?;
        Ok(&self.cells[idx])
    }

    /// Current liveness of (i, j).
    pub fn is_alive(&self, i: usize, j: usize) -> Result<bool, GridError> {
        self.cell(i, j).map(|c| c.alive_now)
    }

    /// Set the current liveness of (i, j).
    pub fn set_alive(&mut self, i: usize, j: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.check_bounds(i, j)?;
        self.cells[idx].alive_now = alive;
        Ok(())
    }

    /// Number of cells currently alive.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.alive_now).count()
    }

    /// Count live orthogonal neighbours of (i, j).
    ///
    /// Neighbours outside the grid are skipped.
    pub fn count_live_neighbours(&self, i: usize, j: usize) -> Result<u8, GridError> {
        self.check_bounds(i, j)?;
        Ok(self.neighbours_at(i, j))
    }

    fn neighbours_at(&self, i: usize, j: usize) -> u8 {
        let mut count = 0;
        if i > 0 && self.cells[self.idx(i - 1, j)].alive_now {
            count += 1;
        }
        if i + 1 < self.width && self.cells[self.idx(i + 1, j)].alive_now {
            count += 1;
        }
        if j > 0 && self.cells[self.idx(i, j - 1)].alive_now {
            count += 1;
        }
        if j + 1 < self.height && self.cells[self.idx(i, j + 1)].alive_now {
            count += 1;
        }
        count
    }

    /// Stage the next generation in every cell's `alive_next`.
    ///
    /// Overwrites `live_neighbours` and `alive_next`; `alive_now` is left
    /// untouched until [`Grid::commit_generation`].
    pub fn compute_next_generation(&mut self) {
        for i in 0..self.width {
            for j in 0..self.height {
                let live_neighbours = self.neighbours_at(i, j);
                let idx = self.idx(i, j);
                let cell = &mut self.cells[idx];
                cell.live_neighbours = live_neighbours;
                cell.alive_next = next_alive(live_neighbours);
            }
        }
    }

    /// Promote every cell's staged state to its current state.
    pub fn commit_generation(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.alive_now = cell.alive_next;
        }
    }

    /// Coordinates of live cells, ascending `i` then ascending `j`.
    pub fn live_cell_coordinates(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let height = self.height;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.alive_now)
            .map(move |(idx, _)| (idx / height, idx % height))
    }
}
