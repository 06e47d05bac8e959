//! Run summary - diagnostic counts accumulated across pipeline stages
//!
//! All run state that stages report (source row counts, model fit, fill
//! counts, drop counts) is carried explicitly in this struct rather than
//! in ambient state, displayed as a styled table at the end of the run,
//! and optionally exported as JSON.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use serde::Serialize;

use crate::pipeline::{FinalizeOutcome, ImputationOutcome, LdtModel};

/// One successfully loaded source.
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub year: i32,
    pub file: String,
    pub rows: usize,
}

/// Fitted model coefficients, for diagnostics only.
#[derive(Debug, Clone, Serialize)]
pub struct ModelReport {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub training_rows: usize,
}

/// Summary of one unification run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub sources_loaded: Vec<SourceReport>,
    pub sources_skipped: Vec<String>,
    pub combined_rows: usize,
    pub model: Option<ModelReport>,
    pub regression_filled: usize,
    pub group_filled: usize,
    pub global_filled: usize,
    pub ldt_still_missing: usize,
    pub dropped_missing_imo: usize,
    pub dropped_duplicates: usize,
    pub final_rows: usize,
    pub elapsed_seconds: f64,
}

impl RunSummary {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            sources_loaded: Vec::new(),
            sources_skipped: Vec::new(),
            combined_rows: 0,
            model: None,
            regression_filled: 0,
            group_filled: 0,
            global_filled: 0,
            ldt_still_missing: 0,
            dropped_missing_imo: 0,
            dropped_duplicates: 0,
            final_rows: 0,
            elapsed_seconds: 0.0,
        }
    }

    pub fn add_source(&mut self, year: i32, file: &Path, rows: usize) {
        self.sources_loaded.push(SourceReport {
            year,
            file: file.display().to_string(),
            rows,
        });
    }

    pub fn add_skipped(&mut self, year: i32, file: &Path) {
        self.sources_skipped
            .push(format!("{} ({})", file.display(), year));
    }

    pub fn set_combined_rows(&mut self, rows: usize) {
        self.combined_rows = rows;
    }

    pub fn set_model(&mut self, model: Option<&LdtModel>) {
        self.model = model.map(|m| ModelReport {
            slope: m.slope,
            intercept: m.intercept,
            r_squared: m.r_squared,
            training_rows: m.training_rows,
        });
    }

    pub fn record_imputation(&mut self, outcome: &ImputationOutcome) {
        self.regression_filled = outcome.regression_filled;
        self.group_filled = outcome.group_filled;
        self.global_filled = outcome.global_filled;
        self.ldt_still_missing = outcome.still_missing;
    }

    pub fn record_finalize(&mut self, outcome: &FinalizeOutcome) {
        self.dropped_missing_imo = outcome.dropped_missing_imo;
        self.dropped_duplicates = outcome.dropped_duplicates;
        self.final_rows = outcome.final_rows;
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed_seconds = elapsed.as_secs_f64();
    }

    /// Write the summary as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write summary JSON: {}", path.display()))?;
        Ok(())
    }

    /// Print the styled summary table.
    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("UNIFICATION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Sources loaded"),
            Cell::new(self.sources_loaded.len()),
        ]);
        table.add_row(vec![
            Cell::new("⏭️  Sources skipped"),
            Cell::new(self.sources_skipped.len()).fg(if self.sources_skipped.is_empty() {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);
        table.add_row(vec![
            Cell::new("📊 Combined rows"),
            Cell::new(self.combined_rows),
        ]);

        let model_text = match &self.model {
            Some(m) => format!(
                "LDT = {:.3}·GT + {:.2}  (R² {:.3}, n = {})",
                m.slope, m.intercept, m.r_squared, m.training_rows
            ),
            None => "not trained (not enough data)".to_string(),
        };
        table.add_row(vec![
            Cell::new("📈 Regression model"),
            Cell::new(model_text).fg(if self.model.is_some() {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("🔮 LDT filled (regression)"),
            Cell::new(self.regression_filled),
        ]);
        table.add_row(vec![
            Cell::new("🔮 LDT filled (type median)"),
            Cell::new(self.group_filled),
        ]);
        table.add_row(vec![
            Cell::new("🔮 LDT filled (global median)"),
            Cell::new(self.global_filled),
        ]);
        if self.ldt_still_missing > 0 {
            table.add_row(vec![
                Cell::new("⚠️  LDT still missing"),
                Cell::new(self.ldt_still_missing).fg(Color::Red),
            ]);
        }

        table.add_row(vec![
            Cell::new("🗑️  Dropped (missing IMO)"),
            Cell::new(self.dropped_missing_imo).fg(if self.dropped_missing_imo == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);
        table.add_row(vec![
            Cell::new("🗑️  Dropped (duplicates)"),
            Cell::new(self.dropped_duplicates).fg(if self.dropped_duplicates == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);
        table.add_row(vec![
            Cell::new("✅ Final rows"),
            Cell::new(self.final_rows)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("⏱️  Elapsed"),
            Cell::new(format!("{:.2}s", self.elapsed_seconds)),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.sources_skipped.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Skipped sources").yellow(),
                style(format!("({})", self.sources_skipped.len())).dim()
            );
            for source in &self.sources_skipped {
                println!("        {} {}", style("•").dim(), source);
            }
        }
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}
