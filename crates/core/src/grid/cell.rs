//! Per-cell percolation state and grid addressing

use std::fmt;

/// State of a single grid cell.
///
/// A cell moves `Empty` → `Active` → `Filled` and never backwards until the
/// grid is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellState {
    /// Not yet reached by the spread
    #[default]
    Empty = 0,
    /// Previously active; its spreading opportunity has been consumed
    Filled = 1,
    /// Spreading during the current tick
    Active = 2,
}

impl CellState {
    /// Display colour for this state.
    ///
    /// Empty cells are white, filled cells blue and active cells red.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        match self {
            CellState::Empty => Rgb::WHITE,
            CellState::Filled => Rgb::BLUE,
            CellState::Active => Rgb::RED,
        }
    }

    /// Single-character glyph used by text renderers.
    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Filled => '#',
            CellState::Active => '*',
        }
    }
}

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Grid coordinate, 0-based.
///
/// Ordering is row-major: `row` compares first, then `col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another coordinate
    #[must_use]
    pub const fn manhattan(&self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
