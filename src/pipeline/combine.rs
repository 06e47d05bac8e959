//! Aggregation of unified tables into one working set

use polars::prelude::*;

use super::error::PipelineError;

/// Stack the unified tables into a single DataFrame, preserving table
/// order and row order within each table. No deduplication or validation
/// happens here - pure structural concatenation.
///
/// An empty input means zero sources survived loading, which is the one
/// fatal condition of the whole pipeline.
pub fn combine_sources(frames: Vec<DataFrame>) -> Result<DataFrame, PipelineError> {
    let mut iter = frames.into_iter();
    let Some(mut combined) = iter.next() else {
        return Err(PipelineError::NoSourcesLoaded);
    };
    for frame in iter {
        combined.vstack_mut(&frame)?;
    }
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_fatal() {
        let result = combine_sources(Vec::new());
        assert!(matches!(result, Err(PipelineError::NoSourcesLoaded)));
    }

    #[test]
    fn test_preserves_order() {
        let a = df! { "IMO" => ["1", "2"] }.unwrap();
        let b = df! { "IMO" => ["3"] }.unwrap();
        let combined = combine_sources(vec![a, b]).unwrap();
        assert_eq!(combined.height(), 3);
        let imo: Vec<Option<&str>> = combined
            .column("IMO")
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .iter()
            .collect();
        assert_eq!(imo, vec![Some("1"), Some("2"), Some("3")]);
    }

    #[test]
    fn test_single_frame_passthrough() {
        let a = df! { "IMO" => ["1"] }.unwrap();
        let combined = combine_sources(vec![a.clone()]).unwrap();
        assert_eq!(combined.height(), a.height());
    }
}
