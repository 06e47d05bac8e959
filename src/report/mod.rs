//! Report module - run diagnostics and summary output

pub mod summary;

pub use summary::*;
