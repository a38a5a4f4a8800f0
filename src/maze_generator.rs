//! Maze generation

use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::cell::{Direction, Point};
use crate::error::MazeError;
use crate::grid::Grid;

/// Perfect maze generator, randomized depth-first backtracking
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Create generator; the same seed always carves the same maze
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Carve a perfect maze into `grid`, starting from `start`
    ///
    /// Walk from cell to cell, each time knocking down the wall towards a
    /// randomly chosen unvisited neighbour. At a dead end, back up along the
    /// path until a cell with unvisited neighbours turns up. The walk ends
    /// when every cell has been visited.
    ///
    /// Cells that already had a wall knocked down count as visited, so on a
    /// fully carved grid this does nothing.
    ///
    /// Returns the number of walls knocked down.
    pub fn generate(&mut self, grid: &mut Grid, start: Point) -> Result<usize, MazeError> {
        let start_idx = grid.index_of(start.x, start.y)?;
        let (nx, ny) = (grid.width(), grid.height());
        let total = grid.len();

        let mut visited: Vec<bool> = grid.cells().map(|c| !grid.is_unvisited(c)).collect();
        visited[start_idx] = true;
        let mut n_visited = visited.iter().filter(|&&v| v).count();

        let mut stack: Vec<Point> = Vec::with_capacity(total);
        let mut current = start;
        let mut knocked = 0;

        while n_visited < total {
            let candidates: Vec<(Direction, Point)> = grid
                .neighbours(grid.cell_at(current.x, current.y)?)
                .into_iter()
                .map(|(d, cell)| (d, cell.position()))
                .filter(|(_, p)| !visited[p.y * nx + p.x])
                .collect();

            let Some(&(direction, next)) = candidates.choose(&mut self.random) else {
                // Dead end: backtrack
                current = stack.pop().ok_or(MazeError::GenerationStuck {
                    visited: n_visited,
                    total,
                })?;
                trace!("Backtrack to {:?}", current);
                continue;
            };

            grid.knock_down_wall(current, next, direction);
            stack.push(current);
            visited[next.y * nx + next.x] = true;
            current = next;
            n_visited += 1;
            knocked += 1;
        }

        debug!(
            "Generated {}x{} maze from {:?}, {} walls knocked down",
            nx, ny, start, knocked
        );
        Ok(knocked)
    }
}
