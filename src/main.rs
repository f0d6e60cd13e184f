//! Data Plotter - Synthetic Data Generator & Interactive Scatter Plot Viewer
//!
//! Generates 100 samples over (0, 100), prints the first rows and opens
//! the scatter plot window.

use anyhow::{Context, Result};
use data_plotter::data::preview;
use data_plotter::{run, Range};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn setup_logging() -> Result<()> {
    // stdout is reserved for the table preview
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}

fn main() -> Result<()> {
    setup_logging()?;

    let range = Range::try_from((0.0, 100.0))?;
    let data = run(range).context("Failed to generate and plot data")?;

    println!("{}", preview(&data));
    Ok(())
}
