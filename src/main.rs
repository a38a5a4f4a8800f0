//! CLI for maze generation

use std::path::PathBuf;

use clap::Parser;
use log::info;
use perfect_maze::Maze;

/// Generate a perfect maze and save it as an SVG image
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width, in cells
    #[arg(long, default_value_t = 30)]
    width: usize,

    /// Maze height, in cells
    #[arg(long, default_value_t = 20)]
    height: usize,

    /// Column of the cell where construction starts
    #[arg(long, default_value_t = 0)]
    start_x: usize,

    /// Row of the cell where construction starts
    #[arg(long, default_value_t = 0)]
    start_y: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// File, where to write the SVG image
    #[arg(short, long, default_value = "maze.svg")]
    output: PathBuf,

    /// Print the maze on the terminal
    #[arg(short, long)]
    print: bool,
}

/// Generate maze, write image, optionally print it
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut maze = Maze::new(args.width, args.height, args.start_x, args.start_y)?;
    maze.generate(args.seed)?;
    maze.write_svg(&args.output)?;
    info!(
        "Wrote {}x{} maze to {}",
        args.width,
        args.height,
        args.output.display()
    );

    if args.print {
        println!("{}", maze);
    }
    Ok(())
}
