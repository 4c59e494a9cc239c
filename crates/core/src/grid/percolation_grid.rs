//! Square cell-state grid for percolation
//!
//! Stores one `CellState` per cell in a flat row-major buffer. The grid has no
//! behaviour of its own beyond addressing; spreading rules live in the engine.

use super::cell::{CellState, Coord};
use rayon::prelude::*;

/// Default grid edge length in cells
pub const DEFAULT_GRID_SIZE: usize = 100;

/// Orthogonal neighbour offsets as `(d_row, d_col)`: right, left, down, up.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Fixed-size N×N grid of cell states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-`Empty` grid with `size` cells per edge.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero; a grid must have a centre cell to seed.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be at least 1");
        Grid {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    /// Edge length in cells
    pub fn size(&self) -> usize {
        self.size
    }

    /// Seed cell location, `(size / 2, size / 2)`
    pub fn center(&self) -> Coord {
        Coord::new(self.size / 2, self.size / 2)
    }

    /// Whether `at` addresses a cell of this grid
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.size && at.col < self.size
    }

    /// Clear every cell to `Empty` and mark the centre cell `Active`.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Empty);
        let center = self.center();
        self.set(center, CellState::Active);
    }

    /// State of the cell at `at`.
    ///
    /// Out-of-range coordinates are a caller bug and panic.
    #[inline]
    pub fn get(&self, at: Coord) -> CellState {
        self.cells[self.index(at)]
    }

    /// Overwrite the cell at `at`. Same bounds contract as [`Grid::get`].
    #[inline]
    pub fn set(&mut self, at: Coord, state: CellState) {
        let idx = self.index(at);
        self.cells[idx] = state;
    }

    /// In-bounds orthogonal neighbours of `at`, in the order right, left,
    /// down, up.
    pub fn neighbors(&self, at: Coord) -> Neighbors {
        Neighbors {
            origin: at,
            size: self.size,
            next: 0,
        }
    }

    /// Row slices, top to bottom, for renderers
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Coordinates of every cell in `state`, row-major
    pub fn cells_in(&self, state: CellState) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == state)
            .map(|(idx, _)| Coord::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Count cells per state
    pub fn census(&self) -> Census {
        self.cells
            .par_iter()
            .fold(Census::default, |mut census, state| {
                census.record(*state);
                census
            })
            .reduce(Census::default, Census::merge)
    }

    fn index(&self, at: Coord) -> usize {
        assert!(
            self.contains(at),
            "cell {} is outside the {n}x{n} grid",
            at,
            n = self.size
        );
        at.row * self.size + at.col
    }
}

/// Iterator over the in-bounds orthogonal neighbours of a cell.
///
/// Holds no borrow of the grid so the caller may mutate cells while
/// iterating.
#[derive(Debug, Clone)]
pub struct Neighbors {
    origin: Coord,
    size: usize,
    next: usize,
}

impl Iterator for Neighbors {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while let Some(&(d_row, d_col)) = DIRECTIONS.get(self.next) {
            self.next += 1;
            let row = self.origin.row.checked_add_signed(d_row);
            let col = self.origin.col.checked_add_signed(d_col);
            if let (Some(row), Some(col)) = (row, col) {
                if row < self.size && col < self.size {
                    return Some(Coord::new(row, col));
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(DIRECTIONS.len() - self.next))
    }
}

/// Number of cells in each state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    pub empty: usize,
    pub filled: usize,
    pub active: usize,
}

impl Census {
    fn record(&mut self, state: CellState) {
        match state {
            CellState::Empty => self.empty += 1,
            CellState::Filled => self.filled += 1,
            CellState::Active => self.active += 1,
        }
    }

    fn merge(self, other: Census) -> Census {
        Census {
            empty: self.empty + other.empty,
            filled: self.filled + other.filled,
            active: self.active + other.active,
        }
    }

    /// Total number of cells counted
    pub fn total(&self) -> usize {
        self.empty + self.filled + self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(7);
        assert_eq!(grid.size(), 7);
        assert_eq!(grid.census(), Census { empty: 49, filled: 0, active: 0 });
    }

    #[test]
    #[should_panic(expected = "grid size must be at least 1")]
    fn test_zero_size_rejected() {
        let _ = Grid::new(0);
    }

    #[test]
    fn test_reset_seeds_center() {
        let mut grid = Grid::new(100);
        grid.set(Coord::new(3, 4), CellState::Filled);
        grid.reset();

        assert_eq!(grid.center(), Coord::new(50, 50));
        assert_eq!(grid.get(Coord::new(50, 50)), CellState::Active);
        assert_eq!(grid.get(Coord::new(3, 4)), CellState::Empty);
        assert_eq!(grid.cells_in(CellState::Active), vec![Coord::new(50, 50)]);
        assert_eq!(grid.census(), Census { empty: 9999, filled: 0, active: 1 });
    }

    #[test]
    fn test_center_uses_integer_division() {
        assert_eq!(Grid::new(5).center(), Coord::new(2, 2));
        assert_eq!(Grid::new(4).center(), Coord::new(2, 2));
        assert_eq!(Grid::new(1).center(), Coord::new(0, 0));
    }

    #[test]
    fn test_cell_access() {
        let mut grid = Grid::new(10);
        grid.set(Coord::new(9, 0), CellState::Filled);
        assert_eq!(grid.get(Coord::new(9, 0)), CellState::Filled);
        assert_eq!(grid.get(Coord::new(0, 9)), CellState::Empty);
    }

    #[test]
    #[should_panic(expected = "outside the 10x10 grid")]
    fn test_get_out_of_bounds_panics() {
        let grid = Grid::new(10);
        let _ = grid.get(Coord::new(10, 0));
    }

    #[test]
    #[should_panic(expected = "outside the 10x10 grid")]
    fn test_set_out_of_bounds_column_panics() {
        // (0, 10) would alias (1, 0) in the flat buffer without the check
        let mut grid = Grid::new(10);
        grid.set(Coord::new(0, 10), CellState::Active);
    }

    #[test]
    fn test_neighbor_counts() {
        let grid = Grid::new(5);

        for (row, col) in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            let corner = Coord::new(row, col);
            assert_eq!(grid.neighbors(corner).count(), 2, "corner {corner}");
        }
        for (row, col) in [(0, 2), (2, 0), (4, 2), (2, 4)] {
            let edge = Coord::new(row, col);
            assert_eq!(grid.neighbors(edge).count(), 3, "edge {edge}");
        }
        for (row, col) in [(1, 1), (2, 2), (3, 3)] {
            let interior = Coord::new(row, col);
            assert_eq!(grid.neighbors(interior).count(), 4, "interior {interior}");
        }
    }

    #[test]
    fn test_neighbor_order() {
        let grid = Grid::new(5);
        let neighbors: Vec<Coord> = grid.neighbors(Coord::new(2, 2)).collect();
        assert_eq!(
            neighbors,
            vec![
                Coord::new(2, 3), // right
                Coord::new(2, 1), // left
                Coord::new(3, 2), // down
                Coord::new(1, 2), // up
            ]
        );

        // Filtering keeps the relative order of the survivors
        let corner: Vec<Coord> = grid.neighbors(Coord::new(0, 0)).collect();
        assert_eq!(corner, vec![Coord::new(0, 1), Coord::new(1, 0)]);
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        let grid = Grid::new(1);
        assert_eq!(grid.neighbors(Coord::new(0, 0)).count(), 0);
    }

    #[test]
    fn test_rows() {
        let mut grid = Grid::new(3);
        grid.reset();
        let rows: Vec<&[CellState]> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[1],
            &[CellState::Empty, CellState::Active, CellState::Empty]
        );
    }

    #[test]
    fn test_census_totals() {
        let mut grid = Grid::new(64);
        grid.reset();
        for col in 0..64 {
            grid.set(Coord::new(0, col), CellState::Filled);
        }
        let census = grid.census();
        assert_eq!(census.filled, 64);
        assert_eq!(census.active, 1);
        assert_eq!(census.total(), 64 * 64);
    }
}
