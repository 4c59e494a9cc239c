//! Grid model: cell states, coordinates and the N×N state array

pub mod cell;
pub mod percolation_grid;

// Re-export main types
pub use cell::*;
pub use percolation_grid::*;
