//! Interactive Percolation Demo
//!
//! A terminal viewer for the percolation simulation. The grid spreads in real
//! time from its centre; two sliders control the spread probability and the
//! tick interval.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-interactive -- --size 60
//! RUST_LOG=debug cargo run --package demo-interactive -- --log-file percolation.log
//! ```
//!
//! # Controls
//!
//! - `Space` - Reset the grid to a single active seed
//! - Drag the `p` slider - Change the spread probability (0-1)
//! - Drag the tick slider - Change the tick interval (0.01-1.0s)
//! - `←`/`→` - Nudge the spread probability by 0.01
//! - `↓`/`↑` - Nudge the tick interval by 10ms
//! - `q` / `Esc` - Quit

mod app;
mod slider;
mod view;

use app::App;
use clap::Parser;
use percolation_core::options::{parse_grid_size, parse_probability, parse_seconds};
use percolation_core::{
    PercolationConfig, PercolationEngine, DEFAULT_GRID_SIZE, DEFAULT_SPREAD_PROBABILITY,
};
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Interactive percolation viewer
#[derive(Parser, Debug)]
#[command(name = "percolation-interactive")]
#[command(about = "Watch probabilistic percolation spread in the terminal", long_about = None)]
struct Args {
    /// Cells per grid edge (the grid takes size columns and size/2 rows)
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE, value_parser = parse_grid_size)]
    size: usize,

    /// Initial spread probability (0-1)
    #[arg(short, long, default_value_t = DEFAULT_SPREAD_PROBABILITY, value_parser = parse_probability)]
    probability: f64,

    /// Initial tick interval in seconds (clamped to 0.01-1.0)
    #[arg(short, long, default_value = "0.01", value_parser = parse_seconds)]
    tick: Duration,

    /// Random seed for a reproducible first run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<std::path::PathBuf>,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = PercolationConfig {
        grid_size: args.size,
        spread_probability: args.probability,
        tick_interval: args.tick,
    };
    let mut engine = match args.seed {
        Some(seed) => PercolationEngine::seeded(config, seed),
        None => PercolationEngine::new(config),
    };
    engine.reset();

    let mut terminal = ratatui::init();
    let result = execute!(io::stdout(), EnableMouseCapture)
        .and_then(|()| App::new(engine).run(&mut terminal));

    let restored = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result.and(restored)
}
