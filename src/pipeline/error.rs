//! Error types for the unification pipeline.
//!
//! Row and field level problems are never errors here - they degrade to
//! nulls inside the unifier. This enum covers the conditions that can
//! actually stop a stage.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can abort a pipeline stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Zero sources produced a unified table.
    ///
    /// Missing or unreadable files are skipped individually, but if every
    /// configured source was skipped there is nothing to unify and the
    /// whole run must abort rather than write an empty dataset.
    #[error("no input sources could be loaded - check paths and filenames")]
    NoSourcesLoaded,

    /// Stacking unified tables failed.
    ///
    /// All unified tables share the gold schema, so this only occurs if a
    /// caller hands the aggregator frames that bypassed unification.
    #[error("failed to stack unified tables: {0}")]
    Stack(#[from] PolarsError),
}
