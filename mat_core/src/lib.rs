//! # mat_core - Stress-Strain Derivation & Export Engine
//!
//! `mat_core` turns raw material-property rows (Young's modulus, yield
//! strength, UTS, percent elongation, ...) into the derived true
//! stress-strain quantities a solver needs, and writes them out as
//! fixed-format simulation input cards.
//!
//! ## Design Philosophy
//!
//! - **Absent, not zero**: every raw input is an `Option<f64>`; a
//!   missing value propagates as absence, never as a fabricated 0.0
//! - **Best effort**: derivation computes everything it can and records
//!   a [`errors::Reason`] for everything it cannot; it never aborts
//! - **JSON-First**: records, reasons, and reports all implement
//!   Serialize/Deserialize
//! - **Snapshot semantics**: every export derives fresh from the record
//!   at call time; nothing derived is cached
//!
//! ## Quick Start
//!
//! ```rust
//! use mat_core::record::MaterialRecord;
//! use mat_core::derive::derive;
//!
//! let mut record = MaterialRecord::new("Steel-A");
//! record.youngs_modulus = Some(200000.0);
//! record.yield_strength = Some(250.0);
//!
//! let derivation = derive(&record);
//! assert_eq!(derivation.properties.nominal_strain_yield, Some(0.00125));
//! ```
//!
//! ## Modules
//!
//! - [`record`] - Material records and raw-cell parsing
//! - [`derive`] - The stress-strain derivation pipeline
//! - [`cards`] - The plasticity (`.inp`) and MAT1 (`.bdf`) serializers
//! - [`dataset`] - In-memory material table with CSV loading
//! - [`export`] - Atomic file emission and batch reports
//! - [`errors`] - Structured errors and non-fatal reasons

pub mod cards;
pub mod dataset;
pub mod derive;
pub mod errors;
pub mod export;
pub mod record;

// Re-export commonly used types at crate root for convenience
pub use dataset::{MaterialTable, TableEntry};
pub use derive::{derive, Derivation, DerivedProperties};
pub use errors::{CardError, CardResult, Reason};
pub use export::{export_batch, export_entry, CardFormat, ExportReport};
pub use record::MaterialRecord;
