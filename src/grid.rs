//! Rectangular grid of cells and its wall state

use itertools::iproduct;

use crate::cell::{Cell, Direction, Point};
use crate::error::MazeError;

/// Fixed-size `nx` x `ny` collection of cells
///
/// Cells are stored row by row; the grid exclusively owns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    nx: usize,
    ny: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate `nx` x `ny` cells, all walls up
    ///
    /// Returns [MazeError::InvalidDimension], if either dimension is zero or
    /// the cells would not fit in memory.
    pub fn new(nx: usize, ny: usize) -> Result<Self, MazeError> {
        let max_cells = isize::MAX as usize / std::mem::size_of::<Cell>();
        match nx.checked_mul(ny) {
            Some(n) if n > 0 && n <= max_cells => (),
            _ => return Err(MazeError::InvalidDimension { nx, ny }),
        }
        let cells = iproduct!(0..ny, 0..nx)
            .map(|(y, x)| Cell::new(x, y))
            .collect();
        Ok(Self { nx, ny, cells })
    }

    pub fn width(&self) -> usize {
        self.nx
    }

    pub fn height(&self) -> usize {
        self.ny
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, grids have at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `(x, y)`
    pub fn cell_at(&self, x: usize, y: usize) -> Result<&Cell, MazeError> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + Clone {
        self.cells.iter()
    }

    /// Cells row by row, north to south
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.nx)
    }

    /// Has no wall of this cell been knocked down yet?
    pub fn is_unvisited(&self, cell: &Cell) -> bool {
        cell.has_all_walls()
    }

    /// In-bounds neighbours of `cell`, whether visited or not
    pub fn neighbours(&self, cell: &Cell) -> Vec<(Direction, &Cell)> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| {
                let p = cell.position().step(d, self.nx, self.ny)?;
                Some((d, &self.cells[p.y * self.nx + p.x]))
            })
            .collect()
    }

    /// Knock down the wall between `a` and its neighbour `b` in `direction`
    ///
    /// `b` must be the cell next to `a` in `direction`. Only debug builds
    /// check this.
    pub fn knock_down_wall(&mut self, a: Point, b: Point, direction: Direction) {
        debug_assert_eq!(a.step(direction, self.nx, self.ny), Some(b));
        let ia = a.y * self.nx + a.x;
        let ib = b.y * self.nx + b.x;
        self.cells[ia].remove_wall(direction);
        self.cells[ib].remove_wall(direction.opposite());
    }

    /// Every open wall, listed once as `(cell, cell to the south or east)`
    pub fn passages(&self) -> Vec<(Point, Point)> {
        self.cells
            .iter()
            .flat_map(|cell| {
                [Direction::South, Direction::East]
                    .into_iter()
                    .filter(|&d| !cell.has_wall(d))
                    .filter_map(|d| {
                        let from = cell.position();
                        from.step(d, self.nx, self.ny).map(|to| (from, to))
                    })
            })
            .collect()
    }

    pub(crate) fn index_of(&self, x: usize, y: usize) -> Result<usize, MazeError> {
        if x < self.nx && y < self.ny {
            Ok(y * self.nx + x)
        } else {
            Err(MazeError::OutOfBounds {
                x,
                y,
                nx: self.nx,
                ny: self.ny,
            })
        }
    }
}
