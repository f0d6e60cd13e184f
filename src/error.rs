//! Error types shared by the generator, the renderer and the entry point.

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotterError {
    /// Caller supplied a range, config or table that violates a precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    /// The display surface could not be opened or drawn.
    #[error("Display error: {0}")]
    Display(String),
}

impl PlotterError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        PlotterError::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PlotterError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, PlotterError>;
