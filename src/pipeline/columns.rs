//! Typed column extraction helpers
//!
//! The imputation and finalization stages work on plain vectors pulled out
//! of the DataFrame, one `Option` per row, so missing values stay explicit.

use anyhow::Result;
use polars::prelude::*;

/// Extract a column as `Vec<Option<f64>>`, casting if necessary.
pub fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.iter().collect())
}

/// Extract a column as `Vec<Option<i64>>`, casting if necessary.
pub fn int_values(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Int64)?;
    Ok(series.i64()?.iter().collect())
}

/// Extract a column as `Vec<Option<String>>`.
pub fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    Ok(series
        .str()?
        .iter()
        .map(|v| v.map(str::to_string))
        .collect())
}
