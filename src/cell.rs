//! Cells of the maze grid and the compass directions between them

use std::fmt;

/// Compass direction from a cell towards one of its four neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in the order used for neighbour queries
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::South,
        Direction::North,
    ];

    /// Direction of the same wall, seen from the other side
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Coordinate change `(dx, dy)` of one step. `y` grows southwards.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

/// Location in the maze
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbouring point in `direction`, if it lies within a `nx` x `ny` grid
    pub fn step(self, direction: Direction, nx: usize, ny: usize) -> Option<Point> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < nx && y < ny).then_some(Point { x, y })
    }
}

/// A point in the grid, possibly surrounded by walls on each side
///
/// Cells start out with all four walls up. Walls only ever come down, during
/// maze generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Point,
    /// Wall present flags, indexed by [Direction::index]
    walls: [bool; 4],
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            position: Point { x, y },
            walls: [true; 4],
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    /// Does this cell still have all its walls?
    pub fn has_all_walls(&self) -> bool {
        self.walls.iter().all(|&w| w)
    }

    /// Clear the wall flag on one side. Clearing an open side does nothing.
    pub(crate) fn remove_wall(&mut self, direction: Direction) {
        self.walls[direction.index()] = false;
    }
}

/// Single-cell box drawing, three lines high
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |d: Direction, c: char| if self.has_wall(d) { c } else { ' ' };
        writeln!(f, "+{}+", side(Direction::North, '-'))?;
        writeln!(
            f,
            "{} {}",
            side(Direction::West, '|'),
            side(Direction::East, '|')
        )?;
        write!(f, "+{}+", side(Direction::South, '-'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_has_all_walls() {
        let cell = Cell::new(3, 4);
        assert_eq!(cell.position(), Point { x: 3, y: 4 });
        assert!(cell.has_all_walls());
        for d in Direction::ALL {
            assert!(cell.has_wall(d));
        }
    }

    #[test]
    fn opposite_directions_pair_up() {
        for d in Direction::ALL {
            assert_ne!(d, d.opposite());
            assert_eq!(d, d.opposite().opposite());
            let (dx, dy) = d.delta();
            let (ox, oy) = d.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn step_stays_within_bounds() {
        let corner = Point::new(0, 0);
        assert_eq!(corner.step(Direction::North, 3, 2), None);
        assert_eq!(corner.step(Direction::West, 3, 2), None);
        assert_eq!(corner.step(Direction::East, 3, 2), Some(Point::new(1, 0)));
        assert_eq!(corner.step(Direction::South, 3, 2), Some(Point::new(0, 1)));

        let far = Point::new(2, 1);
        assert_eq!(far.step(Direction::East, 3, 2), None);
        assert_eq!(far.step(Direction::South, 3, 2), None);
    }

    #[test]
    fn remove_wall_is_idempotent() {
        let mut cell = Cell::new(0, 0);
        cell.remove_wall(Direction::East);
        let once = cell.clone();
        cell.remove_wall(Direction::East);
        assert_eq!(cell, once);
        assert!(!cell.has_wall(Direction::East));
        assert!(!cell.has_all_walls());
    }

    #[test]
    fn display_draws_missing_walls_as_gaps() {
        let mut cell = Cell::new(0, 0);
        assert_eq!(cell.to_string(), "+-+\n| |\n+-+");

        cell.remove_wall(Direction::West);
        cell.remove_wall(Direction::South);
        assert_eq!(cell.to_string(), "+-+\n  |\n+ +");
    }
}
