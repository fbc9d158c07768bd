//! Voxel Life CLI - Generate point clouds from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::PathBuf;
use std::time::Instant;

use voxel_life::{
    compute::simulate,
    schema::{RunConfig, Seed},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 || args.get(1).is_some_and(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: {} [config.json | --example]", args[0]);
        eprintln!();
        eprintln!("Run Voxel Life and print the point cloud as JSON on stdout.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to run configuration (default: 14x10 grid, 20 generations)");
        eprintln!("  --example    Print an example configuration");
        std::process::exit(1);
    }

    if args.get(1).is_some_and(|a| a == "--example") {
        print_example_config();
        return;
    }

    let config = match args.get(1) {
        Some(path) => {
            let config_path = PathBuf::from(path);
            RunConfig::from_json_file(&config_path).unwrap_or_else(|e| {
                eprintln!("Error loading config {}: {}", config_path.display(), e);
                std::process::exit(1);
            })
        }
        None => RunConfig::default(),
    };

    eprintln!("Voxel Life");
    eprintln!("==========");
    eprintln!("Grid: {}x{}", config.width, config.height);
    eprintln!("Generations: {}", config.generations);
    eprintln!("Recording: {:?}", config.record);
    eprintln!();

    let start = Instant::now();
    let output = simulate(&config).unwrap_or_else(|e| {
        eprintln!("Error running simulation: {}", e);
        std::process::exit(1);
    });
    let elapsed = start.elapsed();

    eprintln!("Points: {}", output.stats.total_points);
    eprintln!("Peak population: {}", output.stats.peak_population);
    match output.stats.extinct_at {
        Some(generation) => eprintln!("Extinct at generation {}", generation),
        None => eprintln!("Population survived all generations"),
    }
    eprintln!("Time: {:.3}ms", elapsed.as_secs_f64() * 1000.0);

    match serde_json::to_string(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_example_config() {
    let config = RunConfig {
        seed: Seed::random(42),
        ..Default::default()
    };

    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing example config: {}", e);
            std::process::exit(1);
        }
    }
}
