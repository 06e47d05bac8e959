//! Shared test utilities and fixture generators

// Not every test binary uses every fixture helper.
#![allow(dead_code)]

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write raw CSV text into a temp directory and return its path.
///
/// Tests control the header row verbatim, so alias resolution and header
/// normalization can be exercised exactly as the files appear on disk.
pub fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Assert that a DataFrame contains exactly the given columns, in order.
pub fn assert_columns_exact(df: &DataFrame, expected: &[&str]) {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(names, expected, "column set or order mismatch");
}

/// The ten gold columns in output order.
pub const GOLD_COLUMNS: [&str; 10] = [
    "YEAR", "IMO", "NAME", "TYPE", "GT", "LDT", "BUILT", "LAST FLAG", "PLACE", "COUNTRY",
];

/// Generate source CSV text with `rows` complete records following
/// LDT ≈ 0.3·GT + 10 with small jitter - enough valid (GT, LDT) pairs to
/// train the regression model.
pub fn training_csv(rows: usize) -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let mut out =
        String::from("IMO,NAME,TYPE,GT,LDT,BUILT,YEAR,LAST FLAG,PLACE,COUNTRY\n");
    for i in 0..rows {
        let gt: f64 = rng.gen_range(5_000.0..80_000.0);
        let ldt = 0.3 * gt + 10.0 + rng.gen_range(-50.0..50.0);
        out.push_str(&format!(
            "9{:06},VESSEL {},BULKER,{:.0},{:.0},1995,2014,PANAMA,ALANG,INDIA\n",
            i, i, gt, ldt
        ));
    }
    out
}
