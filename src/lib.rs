//! Perfect mazes by randomized depth-first backtracking
//!
//! A perfect maze has exactly one path between any two of its cells: the
//! open walls form a spanning tree over the grid.
//!
//! # Examples
//! ```
//! use perfect_maze::Maze;
//!
//! let mut maze = Maze::new(30, 20, 0, 0).unwrap();
//! maze.generate(Some(7)).unwrap();
//! assert_eq!(maze.grid().passages().len(), 30 * 20 - 1);
//! println!("{}", maze);
//! ```

use std::fmt;
use std::path::Path;

use anyhow::Context;

pub mod cell;
pub mod error;
pub mod grid;
pub mod maze_generator;
pub mod render;

pub use cell::{Cell, Direction, Point};
pub use error::MazeError;
pub use grid::Grid;
pub use maze_generator::MazeGenerator;

/// Grid of cells, to be carved starting from a fixed entry cell
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    /// Cell where maze construction starts
    start: Point,
}

impl Maze {
    /// Maze of `nx` x `ny` cells, constructed starting from `(ix, iy)`
    ///
    /// Returns error, if the grid would be empty or the start lies outside it.
    pub fn new(nx: usize, ny: usize, ix: usize, iy: usize) -> Result<Self, MazeError> {
        let grid = Grid::new(nx, ny)?;
        grid.cell_at(ix, iy)?;
        Ok(Self {
            grid,
            start: Point { x: ix, y: iy },
        })
    }

    /// Knock down walls until every cell is reachable
    ///
    /// - `seed`: Random seed. Without one, the maze is different every time.
    pub fn generate(&mut self, seed: Option<u64>) -> Result<(), MazeError> {
        MazeGenerator::new(seed).generate(&mut self.grid, self.start)?;
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn to_text(&self) -> String {
        render::text(&self.grid)
    }

    pub fn to_svg(&self) -> svg::Document {
        render::svg(&self.grid)
    }

    /// Write an SVG image of the maze to `path`
    pub fn write_svg<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        svg::save(path, &self.to_svg())
            .with_context(|| format!("Could not write maze image to {}", path.display()))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
