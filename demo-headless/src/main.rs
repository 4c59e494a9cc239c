//! Headless percolation demo
//!
//! Runs a single simulation from reset until it goes dormant, printing one
//! line per step and the final grid as text.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-headless -- --size 40 --probability 0.55 --seed 7
//! RUST_LOG=debug cargo run --package demo-headless -- --realtime --tick 0.1
//! ```

use clap::Parser;
use percolation_core::options::{parse_grid_size, parse_probability, parse_seconds};
use percolation_core::{
    Grid, PercolationConfig, PercolationEngine, TickPacer, DEFAULT_GRID_SIZE,
    DEFAULT_SPREAD_PROBABILITY,
};
use rand::Rng;
use std::io::{self, BufWriter, Write};
use std::thread;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Percolation simulation demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "percolation-demo")]
#[command(about = "Probabilistic percolation on a square grid", long_about = None)]
struct Args {
    /// Cells per grid edge
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE, value_parser = parse_grid_size)]
    size: usize,

    /// Spread probability (0-1)
    #[arg(short, long, default_value_t = DEFAULT_SPREAD_PROBABILITY, value_parser = parse_probability)]
    probability: f64,

    /// Tick interval in seconds (clamped to 0.01-1.0), used with --realtime
    #[arg(short, long, default_value = "0.01", value_parser = parse_seconds)]
    tick: Duration,

    /// Wait one tick interval between steps
    #[arg(short, long)]
    realtime: bool,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many steps even if still spreading (0 = no limit)
    #[arg(short, long, default_value_t = 0)]
    max_steps: u64,

    /// Do not print the final grid
    #[arg(long)]
    no_grid: bool,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = PercolationConfig {
        grid_size: args.size,
        spread_probability: args.probability,
        tick_interval: args.tick,
    };
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut engine = PercolationEngine::seeded(config, seed);

    println!("=== Percolation Simulation Demo ===\n");
    println!(
        "Grid: {}x{}, p = {:.2}, tick = {:.2}s, seed = {}",
        args.size,
        args.size,
        engine.spread_probability(),
        engine.tick_interval().as_secs_f64(),
        seed
    );

    engine.reset();
    run(&mut engine, &args);

    let census = engine.grid().census();
    println!(
        "\n{} after {} step(s): Filled: {}, Active: {}, Empty: {}",
        if engine.is_active() {
            "Stopped"
        } else {
            "Dormant"
        },
        engine.generation(),
        census.filled,
        census.active,
        census.empty
    );

    if !args.no_grid {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        writeln!(out)?;
        print_grid(&mut out, engine.grid())?;
        out.flush()?;
    }

    Ok(())
}

fn run(engine: &mut PercolationEngine, args: &Args) {
    let mut pacer = TickPacer::new(Instant::now());

    while engine.is_active() && (args.max_steps == 0 || engine.generation() < args.max_steps) {
        if args.realtime {
            thread::sleep(pacer.remaining(Instant::now(), engine.tick_interval()));
            if !pacer.poll(Instant::now(), engine.tick_interval()) {
                continue;
            }
        }

        let frontier = engine.frontier().len();
        let start = Instant::now();
        let activated = engine.step();

        println!(
            "  Step {}: Active: {} → {}, Time: {}µs",
            engine.generation(),
            frontier,
            activated,
            start.elapsed().as_micros()
        );
    }
}

fn print_grid(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    for row in grid.rows() {
        let line: String = row.iter().map(percolation_core::CellState::glyph).collect();
        writeln!(out, "{line}")?;
    }
    Ok(())
}
