//! # Simulation Input Cards
//!
//! Serializers for the two fixed-format simulation input files the
//! engine exports. Each serializer follows the pattern:
//!
//! - takes one [`crate::record::MaterialRecord`] snapshot
//! - derives the stress-strain quantities fresh (never cached)
//! - returns the complete card text, newline-terminated
//!
//! ## Available Cards
//!
//! - [`plastic`] - implicit-analysis plasticity card (`.inp`)
//! - [`mat1`] - finite-element material-property card (`.bdf`)
//!
//! Both formats are byte-exact contracts with downstream solvers; the
//! layouts here (column widths, separators, literal zero fields) must
//! not be reflowed.

pub mod mat1;
pub mod plastic;

pub use mat1::{density_exp, mat1_card};
pub use plastic::plastic_card;

/// Marker rendered in place of a value whose derivation failed.
///
/// The plasticity card keeps its full line structure even for a
/// partial derivation; a reader sees this marker plus the matching
/// entry in the trailing warnings block.
pub const NOT_CALCULABLE: &str = "N/A";

/// Header line introducing the warnings block on the plasticity card.
pub const WARNINGS_HEADER: &str = "--- Calculation Warnings/Errors ---";
