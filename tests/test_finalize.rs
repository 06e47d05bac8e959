//! Integration tests for finalization: IMO filter, dedup, sort

use polars::prelude::*;
use shipunify::pipeline::{finalize, int_values, string_values};

/// Minimal frame carrying the columns finalization touches.
fn frame(
    imo: Vec<Option<&str>>,
    name: Vec<Option<&str>>,
    year: Vec<Option<i64>>,
    country: Vec<Option<&str>>,
    place: Vec<Option<&str>>,
    ty: Vec<Option<&str>>,
) -> DataFrame {
    df! {
        "YEAR" => year,
        "IMO" => imo,
        "NAME" => name,
        "TYPE" => ty,
        "PLACE" => place,
        "COUNTRY" => country,
    }
    .unwrap()
}

#[test]
fn test_scenario_d_missing_imo_rows_are_dropped_and_counted() {
    let df = frame(
        vec![Some("9000001"), None, Some("9000002")],
        vec![Some("A"), Some("B"), Some("C")],
        vec![Some(2014), Some(2014), Some(2014)],
        vec![Some("INDIA"); 3],
        vec![Some("ALANG"); 3],
        vec![Some("TANKER"); 3],
    );

    let (out, outcome) = finalize(&df).unwrap();
    assert_eq!(outcome.dropped_missing_imo, 1);
    assert_eq!(out.height(), 2);
    assert!(string_values(&out, "IMO")
        .unwrap()
        .iter()
        .all(Option::is_some));
}

#[test]
fn test_dedup_keeps_first_occurrence() {
    // Same (IMO, NAME, YEAR) twice; the rows differ in PLACE so the
    // survivor is identifiable.
    let df = df! {
        "YEAR" => [Some(2014i64), Some(2014)],
        "IMO" => ["9000001", "9000001"],
        "NAME" => ["ATLANTIC", "ATLANTIC"],
        "TYPE" => ["TANKER", "TANKER"],
        "PLACE" => ["ALANG", "GADANI"],
        "COUNTRY" => ["INDIA", "PAKISTAN"],
    }
    .unwrap();

    let (out, outcome) = finalize(&df).unwrap();
    assert_eq!(outcome.dropped_duplicates, 1);
    assert_eq!(out.height(), 1);
    assert_eq!(
        string_values(&out, "PLACE").unwrap(),
        vec![Some("ALANG".to_string())]
    );
}

#[test]
fn test_same_imo_different_year_both_survive() {
    let df = frame(
        vec![Some("9000001"), Some("9000001")],
        vec![Some("ATLANTIC"), Some("ATLANTIC")],
        vec![Some(2014), Some(2016)],
        vec![Some("INDIA"); 2],
        vec![Some("ALANG"); 2],
        vec![Some("TANKER"); 2],
    );

    let (out, outcome) = finalize(&df).unwrap();
    assert_eq!(outcome.dropped_duplicates, 0);
    assert_eq!(out.height(), 2);
}

#[test]
fn test_sort_order_and_nulls_last() {
    let df = frame(
        vec![Some("3"), Some("1"), Some("2"), Some("4")],
        vec![Some("C"), Some("A"), Some("B"), Some("D")],
        vec![Some(2016), Some(2014), Some(2014), None],
        vec![Some("INDIA"), Some("BANGLADESH"), Some("INDIA"), Some("INDIA")],
        vec![Some("ALANG"); 4],
        vec![Some("TANKER"); 4],
    );

    let (out, _) = finalize(&df).unwrap();
    // 2014/BANGLADESH, 2014/INDIA, 2016/INDIA, then the null YEAR last.
    assert_eq!(
        string_values(&out, "IMO").unwrap(),
        vec![
            Some("1".to_string()),
            Some("2".to_string()),
            Some("3".to_string()),
            Some("4".to_string())
        ]
    );
    let years = int_values(&out, "YEAR").unwrap();
    assert_eq!(years.last().unwrap(), &None, "null YEAR must sort last");
}

#[test]
fn test_secondary_keys_break_ties() {
    let df = frame(
        vec![Some("2"), Some("1")],
        vec![Some("ZULU"), Some("ALPHA")],
        vec![Some(2014), Some(2014)],
        vec![Some("INDIA"), Some("INDIA")],
        vec![Some("ALANG"), Some("ALANG")],
        vec![Some("TANKER"), Some("TANKER")],
    );

    let (out, _) = finalize(&df).unwrap();
    assert_eq!(
        string_values(&out, "NAME").unwrap(),
        vec![Some("ALPHA".to_string()), Some("ZULU".to_string())]
    );
}

#[test]
fn test_finalize_is_idempotent() {
    let df = frame(
        vec![Some("9000002"), Some("9000001"), Some("9000001"), None],
        vec![Some("B"), Some("A"), Some("A"), Some("X")],
        vec![Some(2016), Some(2014), Some(2014), Some(2014)],
        vec![Some("INDIA"), Some("TURKEY"), Some("TURKEY"), Some("INDIA")],
        vec![Some("ALANG"), Some("ALIAGA"), Some("ALIAGA"), Some("ALANG")],
        vec![Some("TANKER"), Some("CARGO"), Some("CARGO"), Some("TUG")],
    );

    let (once, first) = finalize(&df).unwrap();
    assert_eq!(first.dropped_missing_imo, 1);
    assert_eq!(first.dropped_duplicates, 1);

    let (twice, second) = finalize(&once).unwrap();
    assert_eq!(second.dropped_missing_imo, 0);
    assert_eq!(second.dropped_duplicates, 0);
    assert!(
        once.equals_missing(&twice),
        "finalizing an already finalized frame must be a no-op"
    );
}

#[test]
fn test_empty_frame_finalizes_cleanly() {
    let df = frame(vec![], vec![], vec![], vec![], vec![], vec![]);
    let (out, outcome) = finalize(&df).unwrap();
    assert_eq!(out.height(), 0);
    assert_eq!(outcome.final_rows, 0);
}
