//! # Plasticity Card (Format A, `.inp`)
//!
//! Fixed-layout implicit-analysis material card: header naming the
//! material, a density section, an isotropic elasticity section, and
//! a `*PLASTIC` table of three (stress, plastic-strain) point pairs:
//!
//! 1. (σy, 0), yield onset with zero plastic strain by definition
//! 2. (true stress at yield, true strain at yield)
//! 3. (true stress at UTS, plastic strain at UTS)
//!
//! Stress fields print to 2 decimals, strain fields to 5. Raw header
//! values (density, E, %EL/100) print as the shortest float repr with
//! a decimal point kept (7850 renders as `7850.0`). A value
//! whose derivation failed renders as the [`NOT_CALCULABLE`] marker so
//! the card structure survives partial input; the accumulated
//! [`Reason`]s are appended verbatim under a warnings header.
//!
//! ## Example
//!
//! ```rust
//! use mat_core::record::MaterialRecord;
//! use mat_core::cards::plastic_card;
//!
//! let mut record = MaterialRecord::new("Steel-A");
//! record.youngs_modulus = Some(200000.0);
//! record.yield_strength = Some(250.0);
//! record.ultimate_strength = Some(400.0);
//! record.percent_elongation = Some(20.0);
//! record.density = Some(7850.0);
//!
//! let card = plastic_card(&record, &[]).unwrap();
//! assert!(card.contains("*MATERIAL, NAME=Steel-A"));
//! assert!(card.contains("250.31"));
//! ```

use crate::cards::{NOT_CALCULABLE, WARNINGS_HEADER};
use crate::derive::derive;
use crate::errors::{CardResult, Reason};
use crate::record::MaterialRecord;

/// Render the plasticity card for one record.
///
/// Derives the stress-strain quantities fresh from the record
/// snapshot. `input_reasons` are diagnostics the caller accumulated
/// while assembling the record (non-numeric spreadsheet cells); they
/// are printed ahead of the derivation's own reasons in the warnings
/// block.
///
/// Hard-fails only on the empty-name precondition; every other
/// deficiency degrades to markers plus warnings.
pub fn plastic_card(record: &MaterialRecord, input_reasons: &[Reason]) -> CardResult<String> {
    record.validate()?;

    let derivation = derive(record);
    let p = derivation.properties;

    let mut out = String::new();
    out.push_str("**\n");
    out.push_str(&format!("**HMNAME MATS          1 {}     3\n", record.name));
    out.push_str(&format!("*MATERIAL, NAME={}\n", record.name));
    out.push_str("DENSITY\n");
    out.push_str(&format!("{},0.0\n", plain(record.density)));
    out.push_str("*ELASTIC, TYPE = ISOTROPIC\n");
    out.push_str(&format!(
        "{}  ,{}      ,0.0\n",
        plain(record.youngs_modulus),
        plain(p.nominal_strain_uts)
    ));
    out.push_str("*PLASTIC\n");
    out.push_str(&format!("{}\t  ,0.00000   ,0.0\n", stress(record.yield_strength)));
    out.push_str(&format!(
        "{}\t  ,{}   ,0.0\n",
        stress(p.true_stress_yield),
        strain(p.true_strain_yield)
    ));
    out.push_str(&format!(
        "{}\t  ,{}   ,0.0\n",
        stress(p.true_stress_uts),
        strain(p.plastic_strain_uts)
    ));
    out.push_str("*****\n");

    if !input_reasons.is_empty() || !derivation.reasons.is_empty() {
        out.push('\n');
        out.push_str(WARNINGS_HEADER);
        out.push('\n');
        for reason in input_reasons.iter().chain(derivation.reasons.iter()) {
            out.push_str(&reason.to_string());
            out.push('\n');
        }
    }

    Ok(out)
}

/// Float-repr field (density, E, %EL/100); keeps the trailing `.0`
/// on whole numbers
fn plain(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:?}", v),
        None => NOT_CALCULABLE.to_string(),
    }
}

/// Stress field, 2 decimals
fn stress(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => NOT_CALCULABLE.to_string(),
    }
}

/// Strain field, 5 decimals
fn strain(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.5}", v),
        None => NOT_CALCULABLE.to_string(),
    }
}
