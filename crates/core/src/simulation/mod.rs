//! Percolation engine
//!
//! `PercolationEngine` owns the grid and the simulation parameters and
//! advances the spread one generation per `step()`:
//! - the frontier (every `Active` cell) is snapshotted at the start of a tick
//! - each frontier cell tries every `Empty` neighbour with one Bernoulli trial
//! - the snapshot is demoted to `Filled`
//! - a tick with no activations leaves the engine `Dormant`
//!
//! The engine never reads a clock. Drivers decide when to call `step()`,
//! typically with a [`TickPacer`].

mod pacing;
mod params;

pub use pacing::TickPacer;
pub use params::{
    PercolationConfig, SimulationParams, DEFAULT_SPREAD_PROBABILITY, DEFAULT_TICK_INTERVAL,
    MAX_TICK_INTERVAL, MIN_TICK_INTERVAL,
};

use crate::grid::{CellState, Coord, Grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info};

/// Engine lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineState {
    /// No active cells; `step()` does nothing until the next reset
    Dormant,
    /// At least one cell is active and will spread on the next step
    Spreading,
}

/// Probabilistic percolation on a square grid.
///
/// Generic over the random source so tests can inject a seeded generator.
#[derive(Debug, Clone)]
pub struct PercolationEngine<R = StdRng> {
    grid: Grid,
    params: SimulationParams,
    /// Every `Active` cell, kept in row-major order
    frontier: Vec<Coord>,
    /// Reused buffer for the next frontier
    next_frontier: Vec<Coord>,
    state: EngineState,
    generation: u64,
    rng: R,
}

impl PercolationEngine<StdRng> {
    /// Create an engine seeded from the operating system's entropy source.
    ///
    /// The grid starts all-`Empty` and the engine `Dormant`; call
    /// [`PercolationEngine::reset`] to place the seed cell.
    pub fn new(config: PercolationConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an engine with a reproducible random sequence
    pub fn seeded(config: PercolationConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PercolationEngine<R> {
    /// Create an engine drawing from `rng`
    pub fn with_rng(config: PercolationConfig, rng: R) -> Self {
        let params = config.params();
        debug!(
            "Creating percolation engine: {}x{} grid, p={:.2}, tick={:?}",
            config.grid_size,
            config.grid_size,
            params.spread_probability(),
            params.tick_interval()
        );

        PercolationEngine {
            grid: Grid::new(config.grid_size),
            params,
            frontier: Vec::new(),
            next_frontier: Vec::new(),
            state: EngineState::Dormant,
            generation: 0,
            rng,
        }
    }

    /// Clear the grid, activate the centre cell and start spreading.
    ///
    /// Callable in any state.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.frontier.clear();
        self.frontier.push(self.grid.center());
        self.state = EngineState::Spreading;
        self.generation = 0;

        info!(
            "Percolation reset: seed at {} on {}x{} grid",
            self.grid.center(),
            self.grid.size(),
            self.grid.size()
        );
    }

    /// Advance one generation and return how many cells were activated.
    ///
    /// Cells activated during this call never spread until the next call.
    /// An `Empty` cell shared by two frontier cells is activated at most
    /// once: the first frontier cell (row-major) to succeed claims it.
    /// Returns 0 and changes nothing while `Dormant`.
    pub fn step(&mut self) -> usize {
        if self.state == EngineState::Dormant {
            return 0;
        }

        let probability = self.params.spread_probability();
        let mut activated = std::mem::take(&mut self.next_frontier);
        activated.clear();

        for &cell in &self.frontier {
            for neighbor in self.grid.neighbors(cell) {
                if self.grid.get(neighbor) == CellState::Empty && self.rng.random_bool(probability)
                {
                    self.grid.set(neighbor, CellState::Active);
                    activated.push(neighbor);
                }
            }
        }

        for &cell in &self.frontier {
            self.grid.set(cell, CellState::Filled);
        }

        activated.sort_unstable();
        self.generation += 1;
        let count = activated.len();

        debug!(
            "Generation {}: frontier {} -> {} (p={:.2})",
            self.generation,
            self.frontier.len(),
            count,
            probability
        );

        self.next_frontier = std::mem::replace(&mut self.frontier, activated);

        if count == 0 {
            self.state = EngineState::Dormant;
            info!(
                "Percolation dormant after {} generation(s)",
                self.generation
            );
        }

        count
    }

    /// True while at least one cell is `Active`
    pub fn is_active(&self) -> bool {
        self.state == EngineState::Spreading
    }

    /// Current lifecycle state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Steps taken since the last reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the grid for rendering
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// State of one cell. Out-of-range coordinates panic.
    pub fn cell_state(&self, at: Coord) -> CellState {
        self.grid.get(at)
    }

    /// Cells that will spread on the next step, row-major
    pub fn frontier(&self) -> &[Coord] {
        &self.frontier
    }

    /// Current parameters
    pub fn params(&self) -> SimulationParams {
        self.params
    }

    pub fn spread_probability(&self) -> f64 {
        self.params.spread_probability()
    }

    /// Set the spread probability, clamped into `[0, 1]`.
    /// Applies from the next `step()`.
    pub fn set_spread_probability(&mut self, probability: f64) {
        self.params.set_spread_probability(probability);
        debug!(
            "Spread probability set to {:.3}",
            self.params.spread_probability()
        );
    }

    pub fn tick_interval(&self) -> Duration {
        self.params.tick_interval()
    }

    /// Set the tick interval, clamped into the allowed bounds
    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.params.set_tick_interval(interval);
        debug!("Tick interval set to {:?}", self.params.tick_interval());
    }

    /// Set the tick interval from a proportional slider position in `[0, 1]`
    pub fn set_tick_fraction(&mut self, fraction: f64) {
        self.params.set_tick_fraction(fraction);
        debug!("Tick interval set to {:?}", self.params.tick_interval());
    }
}
