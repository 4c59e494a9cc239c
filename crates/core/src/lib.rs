//! Percolation Simulation Core Library
//!
//! Probabilistic percolation on a square grid: a seed cell at the centre
//! spreads to its orthogonal neighbours with a fixed probability per tick.
//!
//! - `grid` holds the N×N cell-state array and neighbour addressing
//! - `simulation` holds `PercolationEngine`, the state machine that advances
//!   the spread one generation at a time, plus its parameters and a pacing
//!   helper for real-time drivers
//! - `options` holds the command-line value parsers shared by the drivers
//!
//! Rendering and input are left to the caller, which reads cell states back
//! after each step.
//!
//! ```
//! use percolation_core::{CellState, PercolationConfig, PercolationEngine};
//!
//! let config = PercolationConfig { grid_size: 5, spread_probability: 1.0, ..Default::default() };
//! let mut engine = PercolationEngine::seeded(config, 42);
//! engine.reset();
//! while engine.is_active() {
//!     engine.step();
//! }
//! assert_eq!(engine.grid().census().filled, 25);
//! assert_eq!(engine.grid().get(engine.grid().center()), CellState::Filled);
//! ```

pub mod grid;
pub mod options;
pub mod simulation;

// Re-export main types
pub use grid::{CellState, Census, Coord, Grid, Neighbors, Rgb, DEFAULT_GRID_SIZE};
pub use simulation::{
    EngineState, PercolationConfig, PercolationEngine, SimulationParams, TickPacer,
    DEFAULT_SPREAD_PROBABILITY, DEFAULT_TICK_INTERVAL, MAX_TICK_INTERVAL, MIN_TICK_INTERVAL,
};
