//! Data Plotter Orchestration
//! Generates one sample table, shows it, and hands it back.

use crate::charts::{Displayable, PlotRenderer, ScatterWindow};
use crate::data::{DataGenerator, Range};
use crate::error::Result;
use polars::prelude::DataFrame;
use rand::Rng;
use tracing::info;

/// Generate with `generator`, render on `display`, return the table.
///
/// Errors from either stage propagate unchanged; nothing is shown if
/// generation fails.
pub fn run_with<R, D>(
    range: Range,
    generator: &DataGenerator,
    rng: &mut R,
    display: &mut D,
) -> Result<DataFrame>
where
    R: Rng + ?Sized,
    D: Displayable + ?Sized,
{
    let df = generator.generate(range, rng)?;
    PlotRenderer::default().render(&df, display)?;
    info!(rows = df.height(), "run complete");
    Ok(df)
}

/// Default pipeline: 100 samples from the thread RNG, shown in a window.
pub fn run(range: Range) -> Result<DataFrame> {
    run_with(
        range,
        &DataGenerator::default(),
        &mut rand::thread_rng(),
        &mut ScatterWindow::new(),
    )
}
