//! Simulation parameters and construction-time configuration
//!
//! Both parameters are clamped on every write so that the engine never sees
//! an out-of-range value, whatever the driver passes in.

use crate::grid::DEFAULT_GRID_SIZE;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Spread probability used when none is configured
pub const DEFAULT_SPREAD_PROBABILITY: f64 = 0.5;

/// Tick interval used when none is configured
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Shortest allowed tick interval (fastest simulation)
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Longest allowed tick interval (slowest simulation)
pub const MAX_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Runtime-adjustable percolation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    spread_probability: f64,
    tick_interval: Duration,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            spread_probability: DEFAULT_SPREAD_PROBABILITY,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl SimulationParams {
    /// Build parameters, clamping both values into their allowed ranges
    pub fn new(spread_probability: f64, tick_interval: Duration) -> Self {
        let mut params = Self::default();
        params.set_spread_probability(spread_probability);
        params.set_tick_interval(tick_interval);
        params
    }

    /// Probability that an active cell activates one empty neighbour per tick
    pub fn spread_probability(&self) -> f64 {
        self.spread_probability
    }

    /// Set the spread probability, clamped into `[0, 1]`. NaN becomes 0.
    pub fn set_spread_probability(&mut self, probability: f64) {
        self.spread_probability = clamp_unit(probability);
    }

    /// Time the driver should wait between steps
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Set the tick interval, clamped between `MIN_TICK_INTERVAL` and
    /// `MAX_TICK_INTERVAL`.
    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.tick_interval = interval.clamp(MIN_TICK_INTERVAL, MAX_TICK_INTERVAL);
    }

    /// Position of the tick interval within its bounds, in `[0, 1]`.
    ///
    /// Used to place a proportional slider handle.
    pub fn tick_fraction(&self) -> f64 {
        let span = (MAX_TICK_INTERVAL - MIN_TICK_INTERVAL).as_secs_f64();
        (self.tick_interval - MIN_TICK_INTERVAL).as_secs_f64() / span
    }

    /// Set the tick interval from a slider position in `[0, 1]`:
    /// `min + fraction * (max - min)`.
    pub fn set_tick_fraction(&mut self, fraction: f64) {
        let span_nanos = (MAX_TICK_INTERVAL - MIN_TICK_INTERVAL).as_nanos() as f64;
        let offset = Duration::from_nanos((span_nanos * clamp_unit(fraction)).round() as u64);
        self.set_tick_interval(MIN_TICK_INTERVAL + offset);
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Everything needed to build a `PercolationEngine`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PercolationConfig {
    /// Cells per grid edge
    pub grid_size: usize,
    /// Initial spread probability (clamped on use)
    pub spread_probability: f64,
    /// Initial tick interval (clamped on use)
    pub tick_interval: Duration,
}

impl Default for PercolationConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            spread_probability: DEFAULT_SPREAD_PROBABILITY,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl PercolationConfig {
    /// Clamped runtime parameters for this configuration
    pub fn params(&self) -> SimulationParams {
        SimulationParams::new(self.spread_probability, self.tick_interval)
    }
}
