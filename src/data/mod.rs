//! Data module - synthetic sample generation and table validation

mod generator;
mod table;

pub use generator::{
    generate_data, DataGenerator, GeneratorConfig, Range, DEFAULT_EXPONENT,
    DEFAULT_NOISE_STD_DEV, DEFAULT_SAMPLES,
};
pub use table::{extract_points, preview, PREVIEW_ROWS, X_COL, Y_COL};
