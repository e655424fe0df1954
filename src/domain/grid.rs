use rand::Rng;

use super::{Cell, LifeError};

/// Grid manages the 2D cellular automaton grid.
/// Cells are stored row-major; dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn create(rows: usize, cols: usize) -> Result<Self, LifeError> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Create a grid where each cell is independently alive with
    /// probability `density`.
    pub fn random<R: Rng>(
        rows: usize,
        cols: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, LifeError> {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let mut grid = Self::create(rows, cols)?;
        grid.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(density) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
        Ok(grid)
    }

    /// Same dimensions, every cell dead
    pub(crate) fn empty_like(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: vec![Cell::Dead; self.cells.len()],
        }
    }

    /// Build from an already computed row-major cell buffer
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col)
            .then(|| self.cells[self.index(row, col)])
    }

    /// Set cell at position. Out-of-bounds positions are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.contains(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Flip the cell at position, returning its new value.
    /// Out-of-bounds positions are ignored and yield `None`.
    pub fn toggle(&mut self, row: usize, col: usize) -> Option<Cell> {
        if !self.contains(row, col) {
            return None;
        }
        let idx = self.index(row, col);
        let flipped = self.cells[idx].toggle();
        self.cells[idx] = flipped;
        Some(flipped)
    }

    /// Count total alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their (row, col) positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / cols, idx % cols, cell))
    }
}
