//! Sample Table Module
//! Column names and shape validation for `x`/`y` tables.

use crate::error::{PlotterError, Result};
use polars::prelude::*;

pub const X_COL: &str = "x";
pub const Y_COL: &str = "y";

/// Rows shown by the entry point's preview
pub const PREVIEW_ROWS: usize = 5;

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// Read one required column as `f64`, rejecting missing columns,
/// non-numeric dtypes and null cells.
fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df.column(name).map_err(|_| {
        PlotterError::invalid(format!("table is missing required column '{name}'"))
    })?;

    if !is_numeric(column.dtype()) {
        return Err(PlotterError::invalid(format!(
            "column '{name}' must be numeric, found {}",
            column.dtype()
        )));
    }

    let values = column.cast(&DataType::Float64)?;
    let ca = values.f64()?;

    ca.into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.ok_or_else(|| {
                PlotterError::invalid(format!("row {row} has no value for column '{name}'"))
            })
        })
        .collect()
}

/// Extract `[x, y]` points from a Sample Table, in row order.
pub fn extract_points(df: &DataFrame) -> Result<Vec<[f64; 2]>> {
    let xs = numeric_column(df, X_COL)?;
    let ys = numeric_column(df, Y_COL)?;

    Ok(xs.into_iter().zip(ys).map(|(x, y)| [x, y]).collect())
}

/// First few rows, for printing.
pub fn preview(df: &DataFrame) -> DataFrame {
    df.head(Some(PREVIEW_ROWS))
}
