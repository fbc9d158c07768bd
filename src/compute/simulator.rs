//! Simulator - Drives a grid through a fixed number of generations.
//!
//! Each step computes the next state, samples live cells into the output
//! and commits the transition. The sampling point is set by [`RecordTiming`].

use serde::Serialize;

use super::{Grid, PointCloud};
use crate::schema::{ConfigError, RecordTiming, RunConfig};

/// Runs a grid for a fixed number of generations and collects live cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    timing: RecordTiming,
}

impl Simulator {
    /// Simulator that samples before committing each transition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulator that samples at the given point of each step.
    pub fn with_timing(timing: RecordTiming) -> Self {
        Self { timing }
    }

    /// Step `grid` `generations` times, recording one batch per step.
    ///
    /// The grid is mutated in place and ends `generations` transitions
    /// past its starting state.
    pub fn run(&self, grid: &mut Grid, generations: usize) -> PointCloud {
        let mut cloud = PointCloud::with_capacity(generations);

        for generation in 0..generations {
            grid.compute_next_generation();
            match self.timing {
                RecordTiming::BeforeCommit => {
                    cloud.push_batch(grid.live_cell_coordinates());
                    grid.commit_generation();
                }
                RecordTiming::AfterCommit => {
                    grid.commit_generation();
                    cloud.push_batch(grid.live_cell_coordinates());
                }
            }
            log::debug!(
                "generation {}: {} live cells recorded",
                generation,
                cloud.generation(generation).map_or(0, <[_]>::len)
            );
        }

        log::info!(
            "recorded {} generations ({:?}) on {}x{} grid: {} points",
            generations,
            self.timing,
            grid.width(),
            grid.height(),
            cloud.len()
        );

        cloud
    }
}

/// Run statistics for monitoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub generations: usize,
    pub total_points: usize,
    /// Live cells recorded at each generation.
    pub live_per_generation: Vec<usize>,
    pub peak_population: usize,
    /// First generation with no live cells, if any.
    pub extinct_at: Option<usize>,
}

impl RunStats {
    /// Compute statistics from a finished run.
    pub fn from_cloud(cloud: &PointCloud) -> Self {
        let live_per_generation: Vec<usize> = cloud.batches().map(<[_]>::len).collect();

        Self {
            generations: cloud.generations(),
            total_points: cloud.len(),
            peak_population: live_per_generation.iter().copied().max().unwrap_or(0),
            extinct_at: live_per_generation.iter().position(|&n| n == 0),
            live_per_generation,
        }
    }
}

/// Result of a configured run, as handed to a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutput {
    pub config: RunConfig,
    pub stats: RunStats,
    pub points: PointCloud,
}

/// Validate `config`, seed a grid and run it.
pub fn simulate(config: &RunConfig) -> Result<RunOutput, ConfigError> {
    config.validate()?;

    let mut grid = Grid::from_seed(&config.seed, config.width, config.height)?;
    log::debug!(
        "seeded {}x{} grid with {} live cells",
        config.width,
        config.height,
        grid.live_count()
    );

    let points = Simulator::with_timing(config.record).run(&mut grid, config.generations);
    let stats = RunStats::from_cloud(&points);

    Ok(RunOutput {
        config: config.clone(),
        stats,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::Point;
    use crate::schema::Seed;
    use proptest::prelude::*;

    fn p(x: usize, y: usize, z: usize) -> Point {
        Point { x, y, z }
    }

    /// 3x1 strip with the left end alive cycles through
    /// {0} -> {1} -> {0, 2} -> {}.
    fn strip() -> Grid {
        Grid::from_seed(&Seed::custom(vec![(0, 0)]), 3, 1).unwrap()
    }

    #[test]
    fn test_zero_generations_is_empty() {
        let mut grid = Grid::corners_only(14, 10).unwrap();
        let before = grid.clone();
        let cloud = Simulator::new().run(&mut grid, 0);

        assert!(cloud.is_empty());
        assert_eq!(cloud.generations(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_records_before_commit() {
        let mut grid = strip();
        let cloud = Simulator::new().run(&mut grid, 4);

        assert_eq!(cloud.generations(), 4);
        assert_eq!(
            cloud.points(),
            &[p(0, 0, 0), p(1, 1, 0), p(0, 2, 0), p(2, 2, 0)]
        );
        assert_eq!(cloud.generation(3), Some(&[][..]));

        // Grid ends four transitions later: {} stays empty
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_records_after_commit() {
        let mut grid = strip();
        let cloud = Simulator::with_timing(RecordTiming::AfterCommit).run(&mut grid, 3);

        assert_eq!(cloud.generations(), 3);
        assert_eq!(cloud.points(), &[p(1, 0, 0), p(0, 1, 0), p(2, 1, 0)]);
        assert_eq!(cloud.generation(2), Some(&[][..]));
    }

    #[test]
    fn test_seed_state_is_generation_zero() {
        let mut grid = Grid::corners_only(3, 3).unwrap();
        let cloud = Simulator::new().run(&mut grid, 3);

        assert_eq!(
            cloud.generation(0).unwrap(),
            &[p(0, 0, 0), p(0, 0, 2), p(2, 0, 0), p(2, 0, 2)]
        );
        // Every cell has 0 or 2 live neighbours, so the grid dies out
        assert_eq!(cloud.generation(1), Some(&[][..]));
        assert_eq!(cloud.generation(2), Some(&[][..]));
    }

    #[test]
    fn test_single_cell_grid() {
        let mut grid = Grid::initialize(1, 1).unwrap();
        let cloud = Simulator::new().run(&mut grid, 20);

        assert_eq!(cloud.points(), &[p(0, 0, 0)]);
        assert_eq!(cloud.generations(), 20);
        assert!(cloud.batches().skip(1).all(|b| b.is_empty()));
    }

    #[test]
    fn test_stats() {
        let mut grid = strip();
        let cloud = Simulator::new().run(&mut grid, 4);
        let stats = RunStats::from_cloud(&cloud);

        assert_eq!(stats.generations, 4);
        assert_eq!(stats.total_points, 4);
        assert_eq!(stats.live_per_generation, vec![1, 1, 2, 0]);
        assert_eq!(stats.peak_population, 2);
        assert_eq!(stats.extinct_at, Some(3));

        let empty = RunStats::from_cloud(&PointCloud::default());
        assert_eq!(empty.peak_population, 0);
        assert_eq!(empty.extinct_at, None);
    }

    #[test]
    fn test_simulate_default_config() {
        let config = RunConfig {
            seed: Seed::random(2024),
            ..Default::default()
        };
        let output = simulate(&config).unwrap();

        assert_eq!(output.stats.generations, 20);
        assert_eq!(output.points.generations(), 20);
        // Corners are alive in the seed batch
        let seed_batch = output.points.generation(0).unwrap();
        for corner in [p(0, 0, 0), p(13, 0, 0), p(0, 0, 9), p(13, 0, 9)] {
            assert!(seed_batch.contains(&corner));
        }
        for point in output.points.points() {
            assert!(point.x < 14 && point.y < 20 && point.z < 10);
        }

        // Same seed, same points
        assert_eq!(simulate(&config).unwrap().points, output.points);
    }

    #[test]
    fn test_simulate_rejects_invalid_config() {
        let config = RunConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            simulate(&config),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_simulate_rejects_unrepresentable_config() {
        let config = RunConfig {
            width: usize::MAX,
            height: 4,
            generations: 1,
            ..Default::default()
        };
        assert!(matches!(
            simulate(&config),
            Err(ConfigError::InvalidDimensions { .. })
        ));

        let config = RunConfig {
            width: 2,
            height: 2,
            generations: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(
            simulate(&config),
            Err(ConfigError::TooManyGenerations { .. })
        ));
    }

    #[test]
    fn test_output_json_shape() {
        let config = RunConfig {
            width: 1,
            height: 1,
            generations: 2,
            seed: Seed::corners_only(),
            ..Default::default()
        };
        let output = simulate(&config).unwrap();
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["points"], serde_json::json!([{ "x": 0, "y": 0, "z": 0 }]));
        assert_eq!(value["stats"]["live_per_generation"], serde_json::json!([1, 0]));
        assert_eq!(value["config"]["record"], "before_commit");
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..7, 1usize..7).prop_flat_map(|(width, height)| {
            proptest::collection::vec((0..width, 0..height), 0..width * height)
                .prop_map(move |alive| Grid::from_seed(&Seed::custom(alive), width, height).unwrap())
        })
    }

    proptest! {
        #[test]
        fn prop_batches_match_pre_commit_state(grid in arb_grid(), generations in 0usize..12) {
            let mut replay = grid.clone();
            let mut run_grid = grid;
            let cloud = Simulator::new().run(&mut run_grid, generations);

            prop_assert_eq!(cloud.generations(), generations);
            for (k, batch) in cloud.batches().enumerate() {
                let expected: Vec<Point> = replay
                    .live_cell_coordinates()
                    .map(|(i, j)| Point { x: i, y: k, z: j })
                    .collect();
                prop_assert_eq!(batch, &expected[..]);
                replay.compute_next_generation();
                replay.commit_generation();
            }
            prop_assert_eq!(run_grid, replay);
        }

        #[test]
        fn prop_run_is_deterministic(grid in arb_grid(), generations in 0usize..12) {
            let mut a = grid.clone();
            let mut b = grid;
            let simulator = Simulator::new();
            prop_assert_eq!(simulator.run(&mut a, generations), simulator.run(&mut b, generations));
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_after_commit_is_shifted_before_commit(grid in arb_grid(), generations in 1usize..12) {
            let before = Simulator::new().run(&mut grid.clone(), generations + 1);
            let after = Simulator::with_timing(RecordTiming::AfterCommit)
                .run(&mut grid.clone(), generations);

            for k in 0..generations {
                let shifted: Vec<Point> = before
                    .generation(k + 1)
                    .unwrap()
                    .iter()
                    .map(|pt| Point { y: k, ..*pt })
                    .collect();
                prop_assert_eq!(after.generation(k).unwrap(), &shifted[..]);
            }
        }
    }
}
