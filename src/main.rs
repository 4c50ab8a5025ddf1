//! CLI for maze solving

use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use log::info;
use maze_carver::Maze;

/// Find a way through a maze stored as text
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Only print the loaded maze, do not solve it
    #[arg(long)]
    no_solve: bool,

    /// File, where to read the maze. Use `-` for stdin.
    file: PathBuf,
}

/// Read maze from file, print output
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut maze = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        Maze::parse(&buf).context("Could not parse maze from stdin")?
    } else {
        Maze::load_from_file(&args.file)
            .with_context(|| format!("Could not load maze from {}", args.file.display()))?
    };
    info!("Loaded {}x{} maze", maze.grid_height(), maze.grid_width());

    if args.no_solve {
        println!("{maze}");
        return Ok(());
    }

    let found = maze.solve().context("Could not solve maze")?;
    println!("{maze}");
    if found {
        println!(
            "Path found, {} squares between start and goal.",
            maze.path_len()
        );
    } else {
        println!("No path from start to goal.");
    }
    Ok(())
}
