//! # Material Records
//!
//! The [`MaterialRecord`] is the engine's view of one spreadsheet row:
//! a material name plus six optional numeric properties. Any property
//! may be absent or non-numeric in the source data; absence must never
//! crash the pipeline, so every numeric field is an `Option<f64>`.
//!
//! The surrounding application (table view, filters, row editor) hands
//! rows over as a `HashMap<String, serde_json::Value>`, raw cells that
//! may be numbers, strings, or missing. [`MaterialRecord::from_row`]
//! turns such a mapping into a typed record plus the list of
//! [`Reason`]s for any cell that was present but not parseable.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use serde_json::json;
//! use mat_core::record::MaterialRecord;
//!
//! let mut row = HashMap::new();
//! row.insert("Material".to_string(), json!("Steel-A"));
//! row.insert("Youngs modulus".to_string(), json!(200000.0));
//! row.insert("Yield strength".to_string(), json!("250"));
//!
//! let (record, reasons) = MaterialRecord::from_row(&row).unwrap();
//! assert_eq!(record.name, "Steel-A");
//! assert_eq!(record.yield_strength, Some(250.0));
//! assert!(reasons.is_empty());
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{CardError, CardResult, Reason};

/// The named fields a record can carry, used for header resolution
/// and for consistent field naming in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Material name (display/export identity)
    Name,
    /// Young's modulus E
    YoungsModulus,
    /// Poisson's ratio ν
    PoissonsRatio,
    /// Density ρ
    Density,
    /// Percent elongation at fracture
    PercentElongation,
    /// Yield strength σy
    YieldStrength,
    /// Ultimate tensile strength σu
    UltimateStrength,
}

impl Field {
    /// The numeric fields, in record order
    pub const NUMERIC: [Field; 6] = [
        Field::YoungsModulus,
        Field::PoissonsRatio,
        Field::Density,
        Field::PercentElongation,
        Field::YieldStrength,
        Field::UltimateStrength,
    ];

    /// Display name used in diagnostics and warnings blocks
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::Name => "Material",
            Field::YoungsModulus => "Young's modulus",
            Field::PoissonsRatio => "Poisson's ratio",
            Field::Density => "Density",
            Field::PercentElongation => "%EL",
            Field::YieldStrength => "Yield strength",
            Field::UltimateStrength => "UTS",
        }
    }

    /// Accepted header spellings for this field (case-insensitive)
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Field::Name => &["material", "name", "material name"],
            Field::YoungsModulus => &["youngs modulus", "young's modulus", "youngs_modulus", "e"],
            Field::PoissonsRatio => &["poissons ratio", "poisson's ratio", "poissons_ratio", "nu"],
            Field::Density => &["density", "rho"],
            Field::PercentElongation => &["%el", "%elongation", "percent elongation", "percent_elongation"],
            Field::YieldStrength => &["yield strength", "yield_strength", "yield stress"],
            Field::UltimateStrength => &["uts", "ultimate tensile strength", "ultimate_strength", "ultimate stress"],
        }
    }

    /// Resolve a column header to a field.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace,
    /// so `"Youngs modulus"`, `" YOUNGS MODULUS "` and `"E"` all map to
    /// [`Field::YoungsModulus`].
    pub fn from_header(header: &str) -> Option<Field> {
        HEADER_ALIASES.get(header.trim().to_lowercase().as_str()).copied()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Lowercased alias → field lookup, built once
static HEADER_ALIASES: Lazy<HashMap<&'static str, Field>> = Lazy::new(|| {
    let mut map = HashMap::new();
    let all = [
        Field::Name,
        Field::YoungsModulus,
        Field::PoissonsRatio,
        Field::Density,
        Field::PercentElongation,
        Field::YieldStrength,
        Field::UltimateStrength,
    ];
    for field in all {
        for alias in field.aliases() {
            map.insert(*alias, field);
        }
    }
    map
});

/// One material row: a name plus optional engineering properties.
///
/// Units are whatever the source table uses (typically MPa for the
/// stress fields and modulus); the engine is unit-agnostic and only
/// requires that the fields be mutually consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Name of the material (export identity, must be non-empty)
    pub name: String,
    /// Young's modulus E
    pub youngs_modulus: Option<f64>,
    /// Poisson's ratio ν
    pub poissons_ratio: Option<f64>,
    /// Density ρ
    pub density: Option<f64>,
    /// Percent elongation at fracture (%EL)
    pub percent_elongation: Option<f64>,
    /// Yield strength σy
    pub yield_strength: Option<f64>,
    /// Ultimate tensile strength σu
    pub ultimate_strength: Option<f64>,
}

impl MaterialRecord {
    /// Create a record with a name and no properties.
    pub fn new(name: impl Into<String>) -> Self {
        MaterialRecord {
            name: name.into(),
            youngs_modulus: None,
            poissons_ratio: None,
            density: None,
            percent_elongation: None,
            yield_strength: None,
            ultimate_strength: None,
        }
    }

    /// Build a record from a raw field mapping as supplied by the
    /// table shell (spreadsheet cells: number, string, or absent).
    ///
    /// Returns the typed record plus one [`Reason`] per cell that was
    /// present but not parseable as a number. Only a missing, empty,
    /// or non-text name aborts; the name is the export identity and
    /// a hard precondition.
    pub fn from_row(row: &HashMap<String, Value>) -> CardResult<(Self, Vec<Reason>)> {
        // Resolve headers once; later duplicates of the same field win,
        // matching how a spreadsheet would surface a repeated column.
        let mut by_field: HashMap<Field, &Value> = HashMap::new();
        for (header, value) in row {
            if let Some(field) = Field::from_header(header) {
                by_field.insert(field, value);
            }
        }

        let name = match by_field.get(&Field::Name) {
            None => return Err(CardError::missing_field(Field::Name.display_name())),
            Some(Value::String(s)) if s.trim().is_empty() => {
                return Err(CardError::missing_field(Field::Name.display_name()));
            }
            Some(Value::String(s)) => s.trim().to_string(),
            Some(other) => {
                return Err(CardError::invalid_input(
                    Field::Name.display_name(),
                    other.to_string(),
                    "Material name must be text",
                ));
            }
        };

        let mut record = MaterialRecord::new(name);
        let mut reasons = Vec::new();

        for field in Field::NUMERIC {
            let (value, reason) = match by_field.get(&field) {
                None => (None, None),
                Some(cell) => parse_numeric_cell(field, cell),
            };
            record.set(field, value);
            if let Some(reason) = reason {
                reasons.push(reason);
            }
        }

        Ok((record, reasons))
    }

    /// Validate the hard export precondition: a usable name.
    pub fn validate(&self) -> CardResult<()> {
        if self.name.trim().is_empty() {
            return Err(CardError::missing_field(Field::Name.display_name()));
        }
        Ok(())
    }

    fn set(&mut self, field: Field, value: Option<f64>) {
        match field {
            Field::Name => {}
            Field::YoungsModulus => self.youngs_modulus = value,
            Field::PoissonsRatio => self.poissons_ratio = value,
            Field::Density => self.density = value,
            Field::PercentElongation => self.percent_elongation = value,
            Field::YieldStrength => self.yield_strength = value,
            Field::UltimateStrength => self.ultimate_strength = value,
        }
    }
}

/// Parse one raw cell into an optional number.
///
/// Empty strings, placeholder dashes, and JSON null count as absent
/// (no diagnostic); anything else that fails to parse yields a
/// `NonNumericInput` reason and an absent value.
fn parse_numeric_cell(field: Field, cell: &Value) -> (Option<f64>, Option<Reason>) {
    match cell {
        Value::Null => (None, None),
        Value::Number(n) => match n.as_f64() {
            Some(v) => (Some(v), None),
            None => (None, Some(Reason::non_numeric(field.display_name(), n.to_string()))),
        },
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed == "-" || trimmed == "—" {
                return (None, None);
            }
            match trimmed.parse::<f64>() {
                Ok(v) => (Some(v), None),
                Err(_) => (None, Some(Reason::non_numeric(field.display_name(), trimmed))),
            }
        }
        other => (None, Some(Reason::non_numeric(field.display_name(), other.to_string()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn steel_row() -> HashMap<String, Value> {
        let mut row = HashMap::new();
        row.insert("Material".to_string(), json!("Steel-A"));
        row.insert("Youngs modulus".to_string(), json!(200000.0));
        row.insert("Yield strength".to_string(), json!(250.0));
        row.insert("UTS".to_string(), json!("400"));
        row.insert("%EL".to_string(), json!(20.0));
        row.insert("Density".to_string(), json!(7850.0));
        row.insert("Poissons ratio".to_string(), json!(0.3));
        row
    }

    #[test]
    fn test_from_row_full() {
        let (record, reasons) = MaterialRecord::from_row(&steel_row()).unwrap();
        assert_eq!(record.name, "Steel-A");
        assert_eq!(record.youngs_modulus, Some(200000.0));
        assert_eq!(record.ultimate_strength, Some(400.0)); // numeric string
        assert_eq!(record.poissons_ratio, Some(0.3));
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_from_row_absent_and_placeholder_cells() {
        let mut row = steel_row();
        row.remove("UTS");
        row.insert("%EL".to_string(), json!(""));
        row.insert("Density".to_string(), json!("-"));

        let (record, reasons) = MaterialRecord::from_row(&row).unwrap();
        assert_eq!(record.ultimate_strength, None);
        assert_eq!(record.percent_elongation, None);
        assert_eq!(record.density, None);
        // Absence is not an input error; derive() reports it per-quantity.
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_from_row_non_numeric_cell() {
        let mut row = steel_row();
        row.insert("Density".to_string(), json!("heavy"));

        let (record, reasons) = MaterialRecord::from_row(&row).unwrap();
        assert_eq!(record.density, None);
        assert_eq!(reasons.len(), 1);
        assert_eq!(reasons[0].code(), "NON_NUMERIC_INPUT");
        assert!(reasons[0].cites("Density"));
    }

    #[test]
    fn test_from_row_missing_name_is_hard_error() {
        let mut row = steel_row();
        row.remove("Material");
        let err = MaterialRecord::from_row(&row).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");

        let mut row = steel_row();
        row.insert("Material".to_string(), json!("   "));
        let err = MaterialRecord::from_row(&row).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_from_row_numeric_name_is_hard_error() {
        let mut row = steel_row();
        row.insert("Material".to_string(), json!(42));
        let err = MaterialRecord::from_row(&row).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_header_aliases() {
        assert_eq!(Field::from_header("Youngs modulus"), Some(Field::YoungsModulus));
        assert_eq!(Field::from_header(" young's modulus "), Some(Field::YoungsModulus));
        assert_eq!(Field::from_header("%EL"), Some(Field::PercentElongation));
        assert_eq!(Field::from_header("uts"), Some(Field::UltimateStrength));
        assert_eq!(Field::from_header("Hardness"), None);
    }

    #[test]
    fn test_record_serialization_roundtrip() {
        let (record, _) = MaterialRecord::from_row(&steel_row()).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let roundtrip: MaterialRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, roundtrip);
    }

    #[test]
    fn test_validate_empty_name() {
        let record = MaterialRecord::new("");
        assert!(record.validate().is_err());
        let record = MaterialRecord::new("Steel-A");
        assert!(record.validate().is_ok());
    }
}
