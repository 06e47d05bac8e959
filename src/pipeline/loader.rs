//! Source CSV reading and unified dataset writing

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Load one source CSV.
///
/// Schema inference is disabled so every column arrives as String. The
/// source years disagree about number formatting ("24,500", "1985.0"), so
/// coercion is applied uniformly by the unifier, never by the reader.
pub fn load_source(path: &Path) -> Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(0))
        .finish()
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?
        .collect()
        .with_context(|| format!("Failed to parse CSV file: {}", path.display()))?;
    Ok(df)
}

/// Write the finalized dataset as CSV.
///
/// Nulls serialize as empty fields, numeric columns as plain numbers.
pub fn write_unified(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(df)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    Ok(())
}
