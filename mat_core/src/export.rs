//! # Card Export
//!
//! Writes rendered cards to disk with safety features:
//! - **Atomic writes**: write to .tmp, sync, rename to prevent partial files
//! - **Batch reports**: per-record outcomes, one failure never aborts the rest
//!
//! Every export derives from a fresh snapshot of the record at call
//! time; nothing derived is cached between exports.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use mat_core::dataset::builtin_samples;
//! use mat_core::export::{export_batch, CardFormat};
//!
//! let table = builtin_samples();
//! let entries: Vec<_> = table.iter().cloned().collect();
//! let report = export_batch(&entries, CardFormat::Plastic, Path::new("out"));
//! println!("{} exported, {} failed", report.succeeded(), report.failed());
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::{mat1_card, plastic_card};
use crate::dataset::TableEntry;
use crate::errors::{CardError, CardResult};

/// The two card formats the engine can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFormat {
    /// Implicit-analysis plasticity card (`.inp`)
    Plastic,
    /// Finite-element MAT1 card (`.bdf`)
    Mat1,
}

impl CardFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            CardFormat::Plastic => "inp",
            CardFormat::Mat1 => "bdf",
        }
    }

    /// Output file name for a material.
    ///
    /// Spaces in the material name become underscores; the plasticity
    /// card additionally carries the `NL_` prefix marking it as the
    /// nonlinear variant.
    pub fn file_name(&self, material: &str) -> String {
        let safe = material.trim().replace(' ', "_");
        match self {
            CardFormat::Plastic => format!("NL_{}.{}", safe, self.extension()),
            CardFormat::Mat1 => format!("{}.{}", safe, self.extension()),
        }
    }

    /// Human-readable format label for logs and reports
    pub fn display_name(&self) -> &'static str {
        match self {
            CardFormat::Plastic => "plasticity card (.inp)",
            CardFormat::Mat1 => "MAT1 card (.bdf)",
        }
    }
}

impl std::fmt::Display for CardFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Write card text to a file with atomic write semantics.
///
/// The write process:
/// 1. Write to a temporary file (.tmp)
/// 2. Sync to disk (fsync)
/// 3. Rename .tmp to the final name (atomic on most filesystems)
///
/// This prevents a half-written card if the process is interrupted.
pub fn write_card(text: &str, path: &Path) -> CardResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CardError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(text.as_bytes()).map_err(|e| {
        CardError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CardError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CardError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Temp file path alongside the final one
fn tmp_path_for(path: &Path) -> PathBuf {
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    path.with_extension(extension)
}

/// Render and write one card.
///
/// Returns the path of the written file. Rendering derives fresh from
/// the entry's record; the entry's stored input diagnostics flow into
/// the plasticity card's warnings block.
pub fn export_entry(entry: &TableEntry, format: CardFormat, dir: &Path) -> CardResult<PathBuf> {
    let text = match format {
        CardFormat::Plastic => plastic_card(&entry.record, &entry.input_reasons)?,
        CardFormat::Mat1 => mat1_card(&entry.record)?,
    };

    let path = dir.join(format.file_name(&entry.record.name));
    write_card(&text, &path)?;
    Ok(path)
}

/// Outcome of one record in a batch export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOutcome {
    /// Material name as it appears in the table
    pub material: String,
    /// Written file, present on success
    pub path: Option<PathBuf>,
    /// Failure, present on error
    pub error: Option<CardError>,
}

impl ExportOutcome {
    /// Whether this record exported successfully
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Report for one batch export run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportReport {
    /// When the batch ran
    pub exported_at: DateTime<Utc>,
    /// Format the batch emitted
    pub format: CardFormat,
    /// Per-record outcomes, in table order
    pub outcomes: Vec<ExportOutcome>,
}

impl ExportReport {
    /// Pretty-printed JSON rendering of the report, for logs and
    /// machine consumption.
    pub fn to_json(&self) -> CardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CardError::SerializationError {
            reason: e.to_string(),
        })
    }

    /// Number of records exported successfully
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    /// Number of records that failed
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Export every entry to `dir` in one format.
///
/// Strictly sequential, in table order. A failing record is recorded
/// in the report and the batch moves on; the report never short
/// circuits.
pub fn export_batch(entries: &[TableEntry], format: CardFormat, dir: &Path) -> ExportReport {
    let mut outcomes = Vec::with_capacity(entries.len());

    for entry in entries {
        let outcome = match export_entry(entry, format, dir) {
            Ok(path) => ExportOutcome {
                material: entry.record.name.clone(),
                path: Some(path),
                error: None,
            },
            Err(error) => ExportOutcome {
                material: entry.record.name.clone(),
                path: None,
                error: Some(error),
            },
        };
        outcomes.push(outcome);
    }

    ExportReport {
        exported_at: Utc::now(),
        format,
        outcomes,
    }
}
