//! Gold schema definition and alias resolution
//!
//! The ten-column gold schema every unified table conforms to, plus the
//! fixed alias table that maps each gold field to the column headers it
//! has appeared under across source years. The alias lists are ordered:
//! earlier entries take priority over later synonyms.

/// One field of the gold schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoldField {
    Year,
    Imo,
    Name,
    Type,
    Gt,
    Ldt,
    Built,
    LastFlag,
    Place,
    Country,
}

/// How a gold field's raw values are coerced during unification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Trimmed text; empty after trimming becomes null.
    Text,
    /// Strictly positive float; zero, negative, or unparseable becomes null.
    PositiveTonnage,
    /// Integer year constrained to [1900, 2035]; out of range becomes null.
    BuildYear,
    /// Integer year with no range constraint.
    CalendarYear,
}

impl GoldField {
    /// All gold fields in output column order.
    pub const ALL: [GoldField; 10] = [
        GoldField::Year,
        GoldField::Imo,
        GoldField::Name,
        GoldField::Type,
        GoldField::Gt,
        GoldField::Ldt,
        GoldField::Built,
        GoldField::LastFlag,
        GoldField::Place,
        GoldField::Country,
    ];

    /// Column name in the unified output.
    pub fn name(self) -> &'static str {
        match self {
            GoldField::Year => "YEAR",
            GoldField::Imo => "IMO",
            GoldField::Name => "NAME",
            GoldField::Type => "TYPE",
            GoldField::Gt => "GT",
            GoldField::Ldt => "LDT",
            GoldField::Built => "BUILT",
            GoldField::LastFlag => "LAST FLAG",
            GoldField::Place => "PLACE",
            GoldField::Country => "COUNTRY",
        }
    }

    /// Source header candidates for this field, in priority order.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            GoldField::Year => &["YEAR"],
            GoldField::Imo => &["IMO", "IMO NUMBER", "IMO#", "IMO NO", "IMO NO."],
            GoldField::Name => &["NAME", "NAME OF SHIP", "VESSEL", "VESSEL NAME"],
            GoldField::Type => &["TYPE", "TYPE OF SHIP", "SHIP TYPE", "TYPE OF VESSEL"],
            GoldField::Gt => &[
                "GT",
                "GROSS TONNAGE",
                "GROSS TONNAGE (GT)",
                "GROSS TONNAGE, GT",
            ],
            GoldField::Ldt => &[
                "LDT",
                "LIGHT DISPLACEMENT TONNAGE",
                "LIGHTWEIGHT",
                "LIGHT WEIGHT",
            ],
            GoldField::Built => &["BUILT", "BUILT IN (Y)", "YEAR BUILT", "BUILD YEAR"],
            GoldField::LastFlag => &[
                "LAST FLAG",
                "FLAG",
                "CHANGE OF FLAG FOR BREAKING",
                "FLAG CHANGED FOR BREAKING",
            ],
            GoldField::Place => &[
                "PLACE",
                "DESTINATION CITY",
                "PLACE OF DEMOLITION",
                "LOCATION",
            ],
            GoldField::Country => &["COUNTRY", "DESTINATION COUNTRY", "COUNTRY OF DEMOLITION"],
        }
    }

    /// Coercion rule applied to this field's raw values.
    pub fn kind(self) -> FieldKind {
        match self {
            GoldField::Gt | GoldField::Ldt => FieldKind::PositiveTonnage,
            GoldField::Built => FieldKind::BuildYear,
            GoldField::Year => FieldKind::CalendarYear,
            _ => FieldKind::Text,
        }
    }
}

/// Valid range for the BUILT field, inclusive.
pub const BUILT_RANGE: (i64, i64) = (1900, 2035);

/// Resolve a gold field to a source column.
///
/// Returns the index of the first raw column matching any candidate,
/// trying candidates in priority order. Both sides are trimmed and
/// uppercased before comparison, so the match is case-insensitive and
/// tolerant of surrounding whitespace. Exact match only - no fuzzy or
/// partial matching.
pub fn resolve_alias(columns: &[String], candidates: &[&str]) -> Option<usize> {
    for candidate in candidates {
        let wanted = candidate.trim().to_uppercase();
        if let Some(idx) = columns
            .iter()
            .position(|col| col.trim().to_uppercase() == wanted)
        {
            return Some(idx);
        }
    }
    None
}
