//! Shipunify: Shipbreaking Record Unification CLI
//!
//! Ingests multiple years of shipbreaking record CSV files with
//! inconsistent column naming and produces a single unified, cleaned,
//! deduplicated dataset.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use pipeline::{
    combine_sources, finalize, impute_missing_ldt, load_source, train_ldt_model, unify_columns,
    write_unified,
};
use report::RunSummary;
use utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_completion,
    print_config, print_count, print_info, print_step_header, print_step_time, print_success,
    print_warning,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(cli.inputs.len(), &cli.output, cli.min_training_rows);

    let run_start = Instant::now();
    let mut summary = RunSummary::new();

    // Step 1: Load and unify each source against the gold schema
    print_step_header(1, "Load & Unify Sources");

    let step_start = Instant::now();
    let mut frames = Vec::new();
    for source in &cli.inputs {
        if !source.path.exists() {
            print_warning(&format!(
                "File not found: {} (year {})",
                source.path.display(),
                source.year
            ));
            summary.add_skipped(source.year, &source.path);
            continue;
        }

        let raw = match load_source(&source.path) {
            Ok(df) => df,
            Err(err) => {
                print_warning(&format!(
                    "Skipping {} (year {}): {:#}",
                    source.path.display(),
                    source.year,
                    err
                ));
                summary.add_skipped(source.year, &source.path);
                continue;
            }
        };

        let unified = unify_columns(&raw)?;
        print_success(&format!(
            "Loaded {} ({} rows)",
            source.path.display(),
            unified.height()
        ));
        summary.add_source(source.year, &source.path, unified.height());
        frames.push(unified);
    }
    print_step_time(step_start.elapsed());

    // Step 2: Combine all years into one working set.
    // Zero loaded sources is the one fatal condition of the run.
    print_step_header(2, "Combine Years");

    let step_start = Instant::now();
    let mut combined = combine_sources(frames)?;
    summary.set_combined_rows(combined.height());
    print_count("rows combined across all sources", combined.height());
    print_step_time(step_start.elapsed());

    // Step 3: Train the LDT ~ GT model and fill missing LDT values
    print_step_header(3, "Impute Missing LDT");

    let step_start = Instant::now();
    let spinner = create_spinner("Fitting LDT ~ GT regression...");
    let model = train_ldt_model(&combined, cli.min_training_rows)?;
    match &model {
        Some(m) => finish_with_success(
            &spinner,
            &format!(
                "Model: LDT = {:.3}·GT + {:.2} | R² = {:.3} (n = {})",
                m.slope, m.intercept, m.r_squared, m.training_rows
            ),
        ),
        None => finish_with_warning(
            &spinner,
            "Not enough valid data to train regression model - falling back to medians",
        ),
    }
    summary.set_model(model.as_ref());

    let outcome = impute_missing_ldt(&mut combined, model.as_ref())?;
    print_count("LDT values filled by regression", outcome.regression_filled);
    print_count("LDT values filled by type median", outcome.group_filled);
    if let Some(median) = outcome.global_median {
        print_info(&format!(
            "Global median ({:.0}) applied to {} remaining row(s)",
            median, outcome.global_filled
        ));
    }
    if outcome.still_missing > 0 {
        print_warning(&format!(
            "{} row(s) still missing LDT - no LDT values exist to compute a median",
            outcome.still_missing
        ));
    }
    summary.record_imputation(&outcome);
    print_step_time(step_start.elapsed());

    // Step 4: Drop invalid rows, deduplicate, sort
    print_step_header(4, "Finalize");

    let step_start = Instant::now();
    let (mut final_df, fin) = finalize(&combined)?;
    print_count("row(s) dropped with missing IMO", fin.dropped_missing_imo);
    print_count(
        "duplicate row(s) dropped on (IMO, NAME, YEAR)",
        fin.dropped_duplicates,
    );
    summary.record_finalize(&fin);
    print_step_time(step_start.elapsed());

    // Step 5: Save the unified dataset
    print_step_header(5, "Save Unified Dataset");

    let step_start = Instant::now();
    write_unified(&mut final_df, &cli.output)?;
    print_success(&format!(
        "Saved to {} ({} rows)",
        cli.output.display(),
        final_df.height()
    ));
    print_step_time(step_start.elapsed());

    summary.set_elapsed(run_start.elapsed());
    summary.display();

    if let Some(path) = &cli.summary_json {
        summary.write_json(path)?;
        print_success(&format!("Summary JSON written to {}", path.display()));
    }

    print_completion();

    Ok(())
}
