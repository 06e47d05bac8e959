//! Shipunify: Shipbreaking Record Unification Library
//!
//! A library for consolidating multi-year shipbreaking demolition records
//! with inconsistent column naming into one cleaned, deduplicated dataset.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
