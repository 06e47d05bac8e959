//! Finalization - IMO validity filter, dedup, deterministic sort

use anyhow::Result;
use polars::prelude::*;
use std::collections::HashSet;

use super::columns::{int_values, string_values};

/// Sort keys for the finalized dataset, ascending, nulls last.
pub const SORT_KEYS: [&str; 5] = ["YEAR", "COUNTRY", "PLACE", "TYPE", "NAME"];

/// Row counts from the finalization pass.
#[derive(Debug, Clone, Default)]
pub struct FinalizeOutcome {
    pub dropped_missing_imo: usize,
    pub dropped_duplicates: usize,
    pub final_rows: usize,
}

/// Finalize the imputed dataset:
///
/// 1. drop rows with a missing IMO (an IMO is mandatory for retention);
/// 2. deduplicate on (IMO, NAME, YEAR), keeping the first occurrence in
///    the current row order;
/// 3. stable ascending sort by (YEAR, COUNTRY, PLACE, TYPE, NAME), with
///    nulls sorting last on every key.
///
/// Idempotent: running it again on its own output yields an identical
/// frame with zero drop counts.
pub fn finalize(df: &DataFrame) -> Result<(DataFrame, FinalizeOutcome)> {
    let imo_present = df.column("IMO")?.as_materialized_series().is_not_null();
    let with_imo = df.filter(&imo_present)?;
    let dropped_missing_imo = df.height() - with_imo.height();

    let imo = string_values(&with_imo, "IMO")?;
    let name = string_values(&with_imo, "NAME")?;
    let year = int_values(&with_imo, "YEAR")?;

    let mut seen = HashSet::new();
    let keep: Vec<bool> = (0..with_imo.height())
        .map(|i| seen.insert((imo[i].clone(), name[i].clone(), year[i])))
        .collect();
    let keep_mask = BooleanChunked::from_slice("keep".into(), &keep);
    let deduped = with_imo.filter(&keep_mask)?;
    let dropped_duplicates = with_imo.height() - deduped.height();

    let sorted = deduped.sort(
        SORT_KEYS,
        SortMultipleOptions::default()
            .with_maintain_order(true)
            .with_nulls_last(true),
    )?;

    let outcome = FinalizeOutcome {
        dropped_missing_imo,
        dropped_duplicates,
        final_rows: sorted.height(),
    };
    Ok((sorted, outcome))
}
