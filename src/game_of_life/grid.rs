//! Square toroidal grid for Life-like automata

use crate::error::{LifeError, LifeResult};
use serde::Serialize;

/// Neighbor offsets of the Moore neighborhood, row-major, center excluded
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Largest side length accepted from a `.live` file
pub const MAX_GRID_SIZE: usize = 10_000;

/// Represents an N x N grid whose edges wrap around to the opposite edge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell dead.
    ///
    /// Callers taking a side length from user input check it against
    /// [`MAX_GRID_SIZE`] first.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`.
    pub fn new(size: usize) -> Self {
        let len = size
            .checked_mul(size)
            .unwrap_or_else(|| panic!("grid side {} overflows the cell count", size));
        Self {
            size,
            cells: vec![false; len],
        }
    }

    /// Create a grid from a square 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> LifeResult<Self> {
        let size = cells.len();

        for (i, row) in cells.iter().enumerate() {
            if row.len() != size {
                return Err(LifeError::InvalidGrid(format!(
                    "row {} has length {}, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
        }

        Ok(Self {
            size,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    pub(crate) fn from_flat(size: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell value at coordinates
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.size && col < self.size {
            self.cells[self.index(row, col)]
        } else {
            false
        }
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> LifeResult<()> {
        if row >= self.size || col >= self.size {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Count living neighbors of a cell, wrapping each coordinate modulo the side length.
    ///
    /// On a 1x1 grid all eight offsets land on the cell itself, so the count is 0 or 8.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        if self.size == 0 {
            return 0;
        }

        let n = self.size as isize;
        let mut count = 0;

        for (dr, dc) in NEIGHBOR_OFFSETS {
            let r = ((row as isize + dr + n) % n) as usize;
            let c = ((col as isize + dc + n) % n) as usize;
            if self.cells[self.index(r, c)] {
                count += 1;
            }
        }

        count
    }

    /// Get all living cell coordinates in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Fraction of living cells, 0.0 for a zero-sized grid
    pub fn density(&self) -> f64 {
        if self.cells.is_empty() {
            0.0
        } else {
            self.living_count() as f64 / self.cells.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3);
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.living_count(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.living_count(), 5);
        assert_eq!(grid.living_cells()[0], (0, 0));
        assert_eq!(grid.living_cells()[4], (2, 2));
    }

    #[test]
    fn test_non_square_rejected() {
        let cells = vec![vec![true, false, true], vec![false, true, false]];
        assert!(matches!(Grid::from_cells(cells), Err(LifeError::InvalidGrid(_))));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::new(2);
        assert!(grid.set(1, 1, true).is_ok());
        assert!(matches!(
            grid.set(2, 0, true),
            Err(LifeError::OutOfBounds { row: 2, col: 0, size: 2 })
        ));
        assert!(!grid.get(5, 5));
    }

    #[test]
    fn test_neighbor_counting() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        assert_eq!(grid.count_neighbors(1, 1), 8);
        // Corner sees the whole ring through the wrapped edges, minus the dead center
        assert_eq!(grid.count_neighbors(0, 0), 7);
    }

    #[test]
    fn test_wrap_around() {
        let cells = vec![vec![true, false], vec![false, true]];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.count_neighbors(0, 0), 4);
    }

    #[test]
    fn test_single_cell_counts_itself() {
        let mut grid = Grid::new(1);
        assert_eq!(grid.count_neighbors(0, 0), 0);
        grid.set(0, 0, true).unwrap();
        assert_eq!(grid.count_neighbors(0, 0), 8);
    }

    proptest! {
        #[test]
        fn neighbor_count_is_bounded(
            size in 1usize..8,
            alive in proptest::collection::vec(any::<bool>(), 64),
        ) {
            let mut grid = Grid::new(size);
            for row in 0..size {
                for col in 0..size {
                    grid.set(row, col, alive[row * size + col]).unwrap();
                }
            }
            for row in 0..size {
                for col in 0..size {
                    let count = grid.count_neighbors(row, col);
                    prop_assert!(count <= 8);
                    if size == 1 {
                        prop_assert_eq!(count, if grid.get(0, 0) { 8 } else { 0 });
                    }
                }
            }
        }
    }
}
