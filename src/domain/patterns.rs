use super::{Cell, Grid};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>,  // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().map_or(0, |r| r + 1);
        let cols = cells.iter().map(|(_, c)| *c).max().map_or(0, |c| c + 1);
        Self { name, rows, cols, cells }
    }

    /// Place pattern with its top-left corner at (row, col).
    /// Cells that fall outside the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        for &(dr, dc) in &self.cells {
            grid.set(row + dr, col + dc, Cell::Alive);
        }
    }

    /// True when the whole pattern fits with its corner at (row, col)
    pub fn fits(&self, grid: &Grid, row: usize, col: usize) -> bool {
        let (rows, cols) = grid.dimensions();
        row + self.rows <= rows && col + self.cols <= cols
    }
}

/// Glider - simplest spaceship, moves one cell down-right every 4 generations
pub fn glider() -> Pattern {
    Pattern::new(
        "Glider",
        vec![
            (0, 1),
            (1, 2),
            (2, 0), (2, 1), (2, 2),
        ],
    )
}
