//! Generation stepping for Conway's Game of Life (B3/S23).
//!
//! Edges are bounded: positions outside the grid count as dead, there is no
//! wraparound.

use super::{Cell, Grid};

/// Relative offsets of the Moore neighborhood
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Count live cells in the Moore neighborhood of (row, col).
/// Neighbors off the edge of the grid are treated as dead.
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            grid.get(r, c)
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}

/// Pure functional evolution - returns the successor grid.
///
/// Every neighbor count is taken from `grid` as given; the result is written
/// into a fresh buffer so no cell sees a partially updated generation.
pub fn next(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let cells = grid
        .iter_cells()
        .map(|(row, col, current)| current.evolve(count_neighbors(grid, row, col)))
        .collect();

    Grid::from_cells(rows, cols, cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::create(rows, cols).unwrap();
        for &(r, c) in alive {
            grid.set(r, c, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_empty_grid_has_no_neighbors() {
        let grid = Grid::create(6, 9).unwrap();
        for (row, col, _) in grid.iter_cells() {
            assert_eq!(count_neighbors(&grid, row, col), 0);
        }
    }

    #[test]
    fn test_corner_neighbors_bounded() {
        let grid = grid_with(5, 5, &[(0, 1), (1, 0)]);
        assert_eq!(count_neighbors(&grid, 0, 0), 2);
    }

    #[test]
    fn test_no_wraparound() {
        // Opposite corners would be neighbors on a torus
        let grid = grid_with(4, 4, &[(3, 3), (0, 3), (3, 0)]);
        assert_eq!(count_neighbors(&grid, 0, 0), 0);
    }

    #[test]
    fn test_full_neighborhood() {
        let all: Vec<_> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let grid = grid_with(3, 3, &all);
        assert_eq!(count_neighbors(&grid, 1, 1), 8);
        assert_eq!(count_neighbors(&grid, 0, 0), 3);
        assert_eq!(count_neighbors(&grid, 0, 1), 5);
    }

    #[test]
    fn test_block_still_life() {
        let grid = grid_with(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);

        let once = next(&grid);
        assert_eq!(once, grid);
        assert_eq!(next(&once), grid);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);

        assert_eq!(next(&horizontal), vertical);
        assert_eq!(next(&vertical), horizontal);
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        let at = |dr: usize, dc: usize| -> Vec<(usize, usize)> {
            glider.iter().map(|&(r, c)| (r + dr, c + dc)).collect()
        };

        let start = grid_with(20, 20, &at(5, 5));
        let mut grid = start.clone();
        for _ in 0..4 {
            grid = next(&grid);
        }

        assert_eq!(grid, grid_with(20, 20, &at(6, 6)));
        assert_eq!(grid.count_alive(), 5);
    }

    #[test]
    fn test_next_does_not_mutate_input() {
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let snapshot = grid.clone();
        let _ = next(&grid);
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_edge_cells_die_without_support() {
        // An L-tromino in the corner becomes a block, bounded by the edge
        let grid = grid_with(4, 4, &[(0, 0), (0, 1), (1, 0)]);
        let next_gen = next(&grid);
        assert_eq!(next_gen, grid_with(4, 4, &[(0, 0), (0, 1), (1, 0), (1, 1)]));
    }
}
