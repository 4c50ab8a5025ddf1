//! CLI for maze generation

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use maze_carver::{maze_generator::MazeGenerator, Maze};

/// Generate a perfect maze, optionally save and solve it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cells along x
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Number of cells along y
    #[arg(long, default_value_t = 10)]
    height: usize,

    /// Column of the cell where carving starts
    #[arg(long, default_value_t = 0)]
    start_x: usize,

    /// Row of the cell where carving starts
    #[arg(long, default_value_t = 0)]
    start_y: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// File, where to save the generated maze
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Mark the path from start to goal before printing
    #[arg(short, long)]
    solve: bool,
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut maze = Maze::new(args.width, args.height)?;
    let mut gen = MazeGenerator::new(args.seed);
    gen.carve(&mut maze, args.start_x, args.start_y);

    if let Some(output) = &args.output {
        maze.save_to_file(output)
            .with_context(|| format!("Could not save maze to {}", output.display()))?;
        info!("Saved maze to {}", output.display());
    }

    if args.solve {
        let found = maze.solve().context("Could not solve maze")?;
        info!("Path found: {found}");
    }

    println!("{maze}");
    Ok(())
}
