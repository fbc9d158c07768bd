//! Point output of a simulation run.

use serde::{Deserialize, Serialize, Serializer};

/// One live cell at one generation.
///
/// `x` is the grid column `i`, `y` the generation index and `z` the grid row `j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

/// Ordered points of a run, grouped into one batch per generation.
///
/// Points are ordered by generation, then `x`, then `z`. Serializes as the
/// flat point list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointCloud {
    points: Vec<Point>,
    /// Start offset of each batch, plus a trailing end offset.
    offsets: Vec<usize>,
}

impl Serialize for PointCloud {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.points.serialize(serializer)
    }
}

impl Default for PointCloud {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl PointCloud {
    /// Batch offsets reserved up front; longer runs grow the vector.
    const MAX_RESERVED_BATCHES: usize = 1024;

    pub(crate) fn with_capacity(generations: usize) -> Self {
        let mut offsets =
            Vec::with_capacity(generations.min(Self::MAX_RESERVED_BATCHES) + 1);
        offsets.push(0);
        Self {
            points: Vec::new(),
            offsets,
        }
    }

    /// Append a batch for the next generation index.
    pub(crate) fn push_batch<I>(&mut self, coords: I)
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let generation = self.generations();
        self.points
            .extend(coords.into_iter().map(|(i, j)| Point {
                x: i,
                y: generation,
                z: j,
            }));
        self.offsets.push(self.points.len());
    }

    /// Total number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of recorded generations (batches), including empty ones.
    pub fn generations(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Points recorded at generation `k`, or None past the last batch.
    pub fn generation(&self, k: usize) -> Option<&[Point]> {
        let start = *self.offsets.get(k)?;
        let end = *self.offsets.get(k + 1)?;
        Some(&self.points[start..end])
    }

    /// Iterate over batches in generation order.
    pub fn batches(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.offsets
            .windows(2)
            .map(move |w| &self.points[w[0]..w[1]])
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Exclusive upper bound of each axis, or None if there are no points.
    pub fn bounds(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let mut max = Point { x: 0, y: 0, z: 0 };
        for p in &self.points {
            max.x = max.x.max(p.x + 1);
            max.y = max.y.max(p.y + 1);
            max.z = max.z.max(p.z + 1);
        }
        Some(max)
    }
}
