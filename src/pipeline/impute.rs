//! Missing-LDT imputation
//!
//! Fills missing light displacement tonnage with a three-tier cascade,
//! each tier only touching rows still missing after the previous one:
//!
//! 1. regression prediction from GT, if a model could be trained;
//! 2. median LDT of the record's TYPE group;
//! 3. global median LDT.
//!
//! The group and global medians are computed from the then-current LDT
//! column, so tier-1 fills contribute to the medians used by tiers 2 and
//! 3. If no LDT value exists anywhere, the remaining rows stay null and
//! the run continues - exhaustion is reported, never fatal.

use anyhow::Result;
use polars::prelude::*;
use std::collections::HashMap;

use super::columns::{float_values, string_values};

/// Default minimum number of valid (GT, LDT) pairs required to fit the
/// regression model.
pub const DEFAULT_MIN_TRAINING_ROWS: usize = 30;

/// Fitted single-predictor linear estimator: LDT ≈ slope·GT + intercept.
///
/// Created once per run from the combined pre-imputation dataset and
/// dropped after the imputation pass. R² is diagnostic only - it never
/// gates whether the model is used.
#[derive(Debug, Clone)]
pub struct LdtModel {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub training_rows: usize,
}

impl LdtModel {
    /// Predict LDT from GT. Negative predictions clamp to zero.
    pub fn predict(&self, gt: f64) -> f64 {
        (self.slope * gt + self.intercept).max(0.0)
    }
}

/// Per-tier fill counts from one imputation pass.
#[derive(Debug, Clone, Default)]
pub struct ImputationOutcome {
    pub regression_filled: usize,
    pub group_filled: usize,
    pub global_filled: usize,
    /// Rows still missing LDT after all tiers (only non-zero when no LDT
    /// value exists anywhere in the dataset).
    pub still_missing: usize,
    /// The global median applied in tier 3, when one was computed.
    pub global_median: Option<f64>,
}

/// Fit the LDT ~ GT model by ordinary least squares.
///
/// Training rows are those with GT and LDT both present and strictly
/// positive. Returns `None` when fewer than `min_training_rows` such rows
/// exist, or when GT is constant across them (undefined slope) - both are
/// degraded-capability paths, not errors.
pub fn train_ldt_model(df: &DataFrame, min_training_rows: usize) -> Result<Option<LdtModel>> {
    let gt = float_values(df, "GT")?;
    let ldt = float_values(df, "LDT")?;

    let pairs: Vec<(f64, f64)> = gt
        .iter()
        .zip(ldt.iter())
        .filter_map(|(g, l)| match (g, l) {
            (Some(g), Some(l)) if *g > 0.0 && *l > 0.0 => Some((*g, *l)),
            _ => None,
        })
        .collect();

    if pairs.len() < min_training_rows {
        return Ok(None);
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in &pairs {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }
    if sxx == 0.0 {
        return Ok(None);
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (x, y) in &pairs {
        let predicted = slope * x + intercept;
        ss_res += (y - predicted) * (y - predicted);
        ss_tot += (y - mean_y) * (y - mean_y);
    }
    let r_squared = if ss_tot == 0.0 {
        1.0
    } else {
        1.0 - ss_res / ss_tot
    };

    Ok(Some(LdtModel {
        slope,
        intercept,
        r_squared,
        training_rows: pairs.len(),
    }))
}

/// Fill missing LDT values in place, applying the tiers in strict order.
pub fn impute_missing_ldt(
    df: &mut DataFrame,
    model: Option<&LdtModel>,
) -> Result<ImputationOutcome> {
    let gt = float_values(df, "GT")?;
    let types = string_values(df, "TYPE")?;
    let mut ldt = float_values(df, "LDT")?;

    let mut outcome = ImputationOutcome::default();

    // Tier 1: regression prediction where GT is present.
    if let Some(model) = model {
        for (slot, gt_value) in ldt.iter_mut().zip(gt.iter()) {
            if slot.is_none() {
                if let Some(g) = gt_value {
                    *slot = Some(model.predict(*g));
                    outcome.regression_filled += 1;
                }
            }
        }
    }

    // Tier 2: per-TYPE median of the then-current LDT values.
    let mut groups: HashMap<&str, Vec<f64>> = HashMap::new();
    for (ty, value) in types.iter().zip(ldt.iter()) {
        if let (Some(ty), Some(v)) = (ty, value) {
            groups.entry(ty.as_str()).or_default().push(*v);
        }
    }
    let group_medians: HashMap<&str, f64> = groups
        .into_iter()
        .filter_map(|(ty, values)| median(values).map(|m| (ty, m)))
        .collect();

    for (slot, ty) in ldt.iter_mut().zip(types.iter()) {
        if slot.is_none() {
            if let Some(ty) = ty {
                if let Some(m) = group_medians.get(ty.as_str()) {
                    *slot = Some(*m);
                    outcome.group_filled += 1;
                }
            }
        }
    }

    // Tier 3: global median for whatever is left.
    if ldt.iter().any(Option::is_none) {
        let present: Vec<f64> = ldt.iter().flatten().copied().collect();
        outcome.global_median = median(present);
        if let Some(m) = outcome.global_median {
            for slot in ldt.iter_mut() {
                if slot.is_none() {
                    *slot = Some(m);
                    outcome.global_filled += 1;
                }
            }
        }
    }

    outcome.still_missing = ldt.iter().filter(|v| v.is_none()).count();
    df.replace("LDT", Series::new("LDT".into(), ldt))?;

    Ok(outcome)
}

/// Median with midpoint interpolation for even-length input.
fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}
