//! Text and SVG renderings of a carved grid

use itertools::Itertools;
use svg::node::element::{Line, Style};
use svg::Document;

use crate::cell::Direction;
use crate::grid::Grid;

/// Pad the maze all around by this amount, pixels
const PADDING: f64 = 10.0;
/// Height of the maze image excluding padding, pixels
const HEIGHT: f64 = 500.0;

const STYLE: &str = "
line {
    stroke: #000000;
    stroke-linecap: square;
    stroke-width: 5;
}
";

/// Crude `+`, `-`, `|` drawing of the maze
///
/// # Examples
/// ```
/// use perfect_maze::{render, Grid};
///
/// let grid = Grid::new(2, 1).unwrap();
/// assert_eq!(render::text(&grid), "+-+-+\n| | |\n+-+-+");
/// ```
pub fn text(grid: &Grid) -> String {
    let top = format!("+{}", "-+".repeat(grid.width()));
    let rows = grid.rows().flat_map(|cells| {
        let east = cells
            .iter()
            .map(|c| if c.has_wall(Direction::East) { " |" } else { "  " })
            .join("");
        let south = cells
            .iter()
            .map(|c| if c.has_wall(Direction::South) { "-+" } else { " +" })
            .join("");
        [format!("|{}", east), format!("+{}", south)]
    });
    std::iter::once(top).chain(rows).join("\n")
}

/// SVG image of the maze
///
/// Draws the South and East wall of each cell, if present, and the North
/// and West border of the whole maze.
pub fn svg(grid: &Grid) -> Document {
    let (nx, ny) = (grid.width() as f64, grid.height() as f64);
    let width = HEIGHT * nx / ny;
    // Scaling factors from maze coordinates to image coordinates
    let (scx, scy) = (width / nx, HEIGHT / ny);

    let line = |x1: f64, y1: f64, x2: f64, y2: f64| {
        Line::new()
            .set("x1", x1)
            .set("y1", y1)
            .set("x2", x2)
            .set("y2", y2)
    };

    let mut document = Document::new()
        .set("width", width + 2.0 * PADDING)
        .set("height", HEIGHT + 2.0 * PADDING)
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                -PADDING,
                -PADDING,
                width + 2.0 * PADDING,
                HEIGHT + 2.0 * PADDING
            ),
        )
        .add(Style::new(STYLE).set("type", "text/css"));

    for cell in grid.cells() {
        let (x, y) = (cell.position().x as f64, cell.position().y as f64);
        if cell.has_wall(Direction::South) {
            document = document.add(line(
                x * scx,
                (y + 1.0) * scy,
                (x + 1.0) * scx,
                (y + 1.0) * scy,
            ));
        }
        if cell.has_wall(Direction::East) {
            document = document.add(line(
                (x + 1.0) * scx,
                y * scy,
                (x + 1.0) * scx,
                (y + 1.0) * scy,
            ));
        }
    }

    document
        .add(line(0.0, 0.0, width, 0.0))
        .add(line(0.0, 0.0, 0.0, HEIGHT))
}
