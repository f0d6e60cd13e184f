//! Data Plotter - Synthetic Data Generator & Interactive Scatter Plot Viewer
//!
//! Draws noisy samples of `y = x^1.5` into a Polars table and shows them
//! as a scatter plot.

pub mod app;
pub mod charts;
pub mod data;
pub mod error;

pub use app::{run, run_with};
pub use charts::{Displayable, PlotRenderer, ScatterStyle, ScatterWindow, SnapshotDisplay};
pub use data::{generate_data, DataGenerator, GeneratorConfig, Range};
pub use error::{PlotterError, Result};
