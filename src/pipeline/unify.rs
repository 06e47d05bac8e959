//! Record unification - one raw table in, one gold-schema table out
//!
//! Every source table, whatever its headers, is reshaped to exactly the
//! ten gold columns. Fields the source does not carry become full-null
//! columns; fields it does carry are coerced and validated per the rules
//! in [`FieldKind`](crate::pipeline::schema::FieldKind). No row-level
//! problem is fatal - bad values degrade to null individually.

use anyhow::{Context, Result};
use polars::prelude::*;

use super::schema::{resolve_alias, FieldKind, GoldField, BUILT_RANGE};

/// Reshape one raw table to the gold schema.
pub fn unify_columns(df: &DataFrame) -> Result<DataFrame> {
    let height = df.height();
    let raw_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut columns: Vec<Column> = Vec::with_capacity(GoldField::ALL.len());
    for field in GoldField::ALL {
        let source = resolve_alias(&raw_names, field.aliases())
            .map(|idx| df.get_columns()[idx].as_materialized_series());
        columns.push(build_field(field, source, height)?.into());
    }

    Ok(DataFrame::new(columns)?)
}

/// Build one gold column from its resolved source, or a full-null column
/// when no source header matched.
fn build_field(field: GoldField, source: Option<&Series>, height: usize) -> Result<Series> {
    let name: PlSmallStr = field.name().into();

    let Some(series) = source else {
        let dtype = match field.kind() {
            FieldKind::Text => DataType::String,
            FieldKind::PositiveTonnage => DataType::Float64,
            FieldKind::BuildYear | FieldKind::CalendarYear => DataType::Int64,
        };
        return Ok(Series::full_null(name, height, &dtype));
    };

    // Sources are normally read as all-String, but tests may hand in typed
    // frames. Coercion always starts from the textual value.
    let series = if series.dtype() == &DataType::String {
        series.clone()
    } else {
        series.cast(&DataType::String)?
    };
    let ca = series
        .str()
        .with_context(|| format!("Expected string data for column '{}'", field.name()))?;

    let out = match field.kind() {
        FieldKind::Text => {
            let values: Vec<Option<String>> = ca.iter().map(|v| v.and_then(clean_text)).collect();
            Series::new(name, values)
        }
        FieldKind::PositiveTonnage => {
            let values: Vec<Option<f64>> = ca
                .iter()
                .map(|v| v.and_then(parse_number).filter(|n| *n > 0.0))
                .collect();
            Series::new(name, values)
        }
        FieldKind::BuildYear => {
            let values: Vec<Option<i64>> = ca
                .iter()
                .map(|v| {
                    v.and_then(parse_number)
                        .map(|n| n.round() as i64)
                        .filter(|y| (BUILT_RANGE.0..=BUILT_RANGE.1).contains(y))
                })
                .collect();
            Series::new(name, values)
        }
        FieldKind::CalendarYear => {
            let values: Vec<Option<i64>> = ca
                .iter()
                .map(|v| v.and_then(parse_number).map(|n| n.round() as i64))
                .collect();
            Series::new(name, values)
        }
    };

    Ok(out)
}

/// Parse a raw numeric cell. Thousands separators are stripped before
/// parsing; anything that still fails to parse becomes null.
fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Trim a raw text cell; whitespace-only cells become null.
fn clean_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
