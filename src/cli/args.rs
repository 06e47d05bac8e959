//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Shipunify - consolidate multi-year shipbreaking records into one clean dataset
#[derive(Parser, Debug)]
#[command(name = "shipunify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input source as YEAR=PATH, repeatable.
    /// The year labels the source in diagnostics; the YEAR column itself
    /// comes from the data. Example: -i 2014=Year2014.csv -i 2016=Year2016.csv
    #[arg(short, long = "input", value_parser = parse_source, required = true)]
    pub inputs: Vec<SourceSpec>,

    /// Output CSV path for the unified dataset
    #[arg(short, long, default_value = "shipbreaking_unified.csv")]
    pub output: PathBuf,

    /// Minimum number of valid (GT, LDT) pairs required to fit the
    /// regression model. Below this, imputation falls back to medians only.
    #[arg(long, default_value = "30")]
    pub min_training_rows: usize,

    /// Optional path for a machine-readable JSON run summary
    #[arg(long)]
    pub summary_json: Option<PathBuf>,
}

/// One configured input source: a year label and the file it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub year: i32,
    pub path: PathBuf,
}

/// Parser for YEAR=PATH source arguments.
fn parse_source(s: &str) -> Result<SourceSpec, String> {
    let (year, path) = s
        .split_once('=')
        .ok_or_else(|| format!("'{}' is not in YEAR=PATH form (e.g. 2014=Year2014.csv)", s))?;
    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid year", year.trim()))?;
    let path = path.trim();
    if path.is_empty() {
        return Err(format!("missing file path after '{}='", year));
    }
    Ok(SourceSpec {
        year,
        path: PathBuf::from(path),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_valid() {
        let spec = parse_source("2014=Year2014.csv").unwrap();
        assert_eq!(spec.year, 2014);
        assert_eq!(spec.path, PathBuf::from("Year2014.csv"));
    }

    #[test]
    fn test_parse_source_trims_year() {
        let spec = parse_source(" 2020 =data/Year2020.csv").unwrap();
        assert_eq!(spec.year, 2020);
    }

    #[test]
    fn test_parse_source_missing_equals() {
        assert!(parse_source("Year2014.csv").is_err());
    }

    #[test]
    fn test_parse_source_bad_year() {
        assert!(parse_source("twenty=Year.csv").is_err());
    }

    #[test]
    fn test_parse_source_empty_path() {
        assert!(parse_source("2014=").is_err());
        assert!(parse_source("2014=   ").is_err());
    }
}
