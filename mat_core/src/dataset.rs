//! # Material Table
//!
//! In-memory table of material records, indexed by name for fast
//! lookup. The table is an owned value handed to whoever needs it;
//! there is no process-global state.
//!
//! Each entry keeps the typed [`MaterialRecord`] together with the
//! input diagnostics collected while parsing it, so an export hours
//! after the load can still print why a cell was unusable.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mat_core::dataset::MaterialTable;
//!
//! let table = MaterialTable::from_csv_path("materials.csv")?;
//! let entry = table.lookup("Steel-A")?;
//! println!("E = {:?}", entry.record.youngs_modulus);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{CardError, CardResult, Reason};
use crate::record::MaterialRecord;

/// One table row: the typed record plus the diagnostics produced
/// while parsing its raw cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    /// The typed material record
    pub record: MaterialRecord,
    /// Non-numeric-cell diagnostics from parsing, in field order
    pub input_reasons: Vec<Reason>,
}

impl TableEntry {
    /// Wrap a record that needs no input diagnostics.
    pub fn clean(record: MaterialRecord) -> Self {
        TableEntry {
            record,
            input_reasons: Vec::new(),
        }
    }
}

/// Material records indexed by name
///
/// Iteration order is insertion order; lookup is case-insensitive.
/// Inserting a record whose name matches an existing entry (ignoring
/// case) replaces that entry in place.
#[derive(Debug, Clone, Default)]
pub struct MaterialTable {
    /// Entries in insertion order
    entries: Vec<TableEntry>,

    /// Lowercased name → position in `entries`
    index: HashMap<String, usize>,
}

impl MaterialTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a CSV file.
    ///
    /// The first line is a header; columns are matched to record
    /// fields by the spellings in [`crate::record::Field::aliases`]
    /// (case-insensitive). Unrecognized columns are ignored. A `name`
    /// column must exist. Rows with an empty name cell are skipped;
    /// rows with unparseable numeric cells load with those cells
    /// absent and the diagnostics kept on the entry.
    pub fn from_csv_path(path: &str) -> CardResult<Self> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        let file = File::open(path).map_err(|e| {
            CardError::file_error("open", path, format!("Failed to open CSV: {}", e))
        })?;

        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let header_line = lines
            .next()
            .ok_or_else(|| CardError::file_error("read", path, "CSV file is empty"))?
            .map_err(|e| {
                CardError::file_error("read", path, format!("Failed to read header: {}", e))
            })?;

        let headers: Vec<String> = header_line.split(',').map(|h| h.trim().to_string()).collect();
        if !headers
            .iter()
            .any(|h| crate::record::Field::from_header(h) == Some(crate::record::Field::Name))
        {
            return Err(CardError::file_error("parse", path, "Missing material name column"));
        }

        let mut table = MaterialTable::new();
        let mut line_num = 1;

        for line_result in lines {
            line_num += 1;
            let line = line_result.map_err(|e| {
                CardError::file_error("read", path, format!("Failed to read line {}: {}", line_num, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let mut row: HashMap<String, Value> = HashMap::new();
            for (header, cell) in headers.iter().zip(line.split(',')) {
                row.insert(header.clone(), Value::String(cell.trim().to_string()));
            }

            // A row without a usable name has no export identity.
            let (record, input_reasons) = match MaterialRecord::from_row(&row) {
                Ok(parsed) => parsed,
                Err(_) => continue,
            };

            table.insert(TableEntry { record, input_reasons });
        }

        Ok(table)
    }

    /// Insert an entry, replacing any existing entry with the same
    /// name (ignoring case).
    pub fn insert(&mut self, entry: TableEntry) {
        let key = entry.record.name.to_lowercase();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Look up an entry by material name.
    ///
    /// Name matching is case-insensitive.
    pub fn lookup(&self, name: &str) -> CardResult<&TableEntry> {
        let key = name.to_lowercase();
        self.index
            .get(&key)
            .map(|&pos| &self.entries[pos])
            .ok_or_else(|| CardError::material_not_found(name))
    }

    /// Search for entries whose name starts with a pattern
    /// (case-insensitive).
    pub fn search(&self, pattern: &str) -> Vec<&TableEntry> {
        let pattern_lower = pattern.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.record.name.to_lowercase().starts_with(&pattern_lower))
            .collect()
    }

    /// All material names, in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.record.name.as_str()).collect()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TableEntry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Small built-in table for demos and tests, no CSV file required.
pub fn builtin_samples() -> MaterialTable {
    let mut table = MaterialTable::new();

    let samples = [
        ("Steel-A", 200000.0, 0.3, 7850.0, 20.0, 250.0, 400.0),
        ("Alu-6061", 68900.0, 0.33, 2700.0, 12.0, 276.0, 310.0),
        ("Ti-6Al-4V", 113800.0, 0.34, 4430.0, 14.0, 880.0, 950.0),
    ];

    for (name, e, nu, rho, el, sy, su) in samples {
        let mut record = MaterialRecord::new(name);
        record.youngs_modulus = Some(e);
        record.poissons_ratio = Some(nu);
        record.density = Some(rho);
        record.percent_elongation = Some(el);
        record.yield_strength = Some(sy);
        record.ultimate_strength = Some(su);
        table.insert(TableEntry::clean(record));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_temp_csv(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_builtin_samples() {
        let table = builtin_samples();
        assert_eq!(table.len(), 3);

        let steel = table.lookup("Steel-A").unwrap();
        assert_eq!(steel.record.youngs_modulus, Some(200000.0));
        assert!(steel.input_reasons.is_empty());

        // Case-insensitive lookup
        let steel_lower = table.lookup("steel-a").unwrap();
        assert_eq!(steel.record.name, steel_lower.record.name);
    }

    #[test]
    fn test_lookup_not_found() {
        let table = builtin_samples();
        let err = table.lookup("Unobtainium").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut table = builtin_samples();
        let mut record = MaterialRecord::new("steel-a");
        record.yield_strength = Some(355.0);
        table.insert(TableEntry::clean(record));

        assert_eq!(table.len(), 3);
        let entry = table.lookup("Steel-A").unwrap();
        assert_eq!(entry.record.yield_strength, Some(355.0));
    }

    #[test]
    fn test_search_prefix() {
        let table = builtin_samples();
        let hits = table.search("steel");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.name, "Steel-A");
        assert!(table.search("W14").is_empty());
    }

    #[test]
    fn test_from_csv_path() {
        let path = write_temp_csv(
            "mat_core_test_table.csv",
            "Material,Youngs modulus,Poissons ratio,Density,%EL,Yield strength,UTS\n\
             Steel-A,200000,0.3,7850,20,250,400\n\
             \n\
             Alu-6061,68900,0.33,2700,12,276,310\n",
        );

        let table = MaterialTable::from_csv_path(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.names(), vec!["Steel-A", "Alu-6061"]);

        let steel = table.lookup("Steel-A").unwrap();
        assert_eq!(steel.record.ultimate_strength, Some(400.0));
        assert!(steel.input_reasons.is_empty());
    }

    #[test]
    fn test_from_csv_keeps_non_numeric_diagnostics() {
        let path = write_temp_csv(
            "mat_core_test_bad_cells.csv",
            "Material,Youngs modulus,Density\n\
             Mystery,soft,-\n",
        );

        let table = MaterialTable::from_csv_path(&path).unwrap();
        let entry = table.lookup("Mystery").unwrap();

        // "soft" is a diagnostic; "-" is a plain placeholder.
        assert_eq!(entry.record.youngs_modulus, None);
        assert_eq!(entry.record.density, None);
        assert_eq!(entry.input_reasons.len(), 1);
        assert!(entry.input_reasons[0].cites("Young's modulus"));
    }

    #[test]
    fn test_from_csv_skips_nameless_rows() {
        let path = write_temp_csv(
            "mat_core_test_nameless.csv",
            "Material,Yield strength\n\
             ,250\n\
             Steel-A,250\n",
        );

        let table = MaterialTable::from_csv_path(&path).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_from_csv_requires_name_column() {
        let path = write_temp_csv(
            "mat_core_test_no_name_col.csv",
            "Yield strength,UTS\n250,400\n",
        );

        let err = MaterialTable::from_csv_path(&path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_from_csv_missing_file() {
        let err = MaterialTable::from_csv_path("/nonexistent/materials.csv").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
