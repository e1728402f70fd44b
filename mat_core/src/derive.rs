//! # Stress-Strain Derivation
//!
//! Converts raw tabulated engineering properties (Young's modulus,
//! yield strength, ultimate tensile strength, percent elongation) into
//! the true-stress/true-strain quantities needed for a plasticity
//! curve definition.
//!
//! ## Formulas (in dependency order)
//!
//! 1. nominal strain at yield = σy / E
//! 2. nominal strain at UTS = %EL / 100
//! 3. true strain at yield = ln(1 + nominal strain at yield)
//! 4. true stress at yield = σy × (1 + nominal strain at yield)
//! 5. true strain at UTS = ln(1 + nominal strain at UTS)
//! 6. true stress at UTS = σu × (1 + nominal strain at UTS)
//! 7. plastic strain at yield = true strain at yield − true stress at yield / E
//! 8. plastic strain at UTS = true strain at UTS − true stress at UTS / E
//!
//! Each step consumes only raw inputs and prior results. A step whose
//! prerequisite is missing, or whose math leaves its domain (log of a
//! non-positive argument, division by zero), produces an absent value
//! plus a [`Reason`], never a panic and never an early return. Steps
//! that do not depend on the failed one still compute, so the caller
//! always gets the best-effort partial result.
//!
//! Values are kept at full f64 precision here; rounding is the card
//! serializers' concern.
//!
//! ## Example
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
//! // %EL absent, so the UTS-side quantities carry reasons instead.
//! assert!(!derivation.reasons.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::Reason;
use crate::record::{Field, MaterialRecord};

/// Quantity names used in diagnostics. The warnings block on the
/// plasticity card prints these verbatim, so they match the wording
/// engineers see in the legacy tooling.
pub const NOMINAL_STRAIN_YIELD: &str = "Nominal strain at yield";
pub const NOMINAL_STRAIN_UTS: &str = "Nominal strain at UTS";
pub const TRUE_STRAIN_YIELD: &str = "At yield true strain";
pub const TRUE_STRESS_YIELD: &str = "At yield true stress";
pub const TRUE_STRAIN_UTS: &str = "At UTS true strain";
pub const TRUE_STRESS_UTS: &str = "At UTS true stress";
pub const PLASTIC_STRAIN_YIELD: &str = "Plastic strain at yield";
pub const PLASTIC_STRAIN_UTS: &str = "Plastic strain at UTS";

const DIV_BY_ZERO_E: &str = "division by zero (Young's modulus is zero)";

/// The derived stress-strain quantities.
///
/// Every field is present only if its prerequisite inputs were present
/// and the computation was mathematically valid; the matching
/// [`Reason`] in the owning [`Derivation`] explains each absence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedProperties {
    /// σy / E
    pub nominal_strain_yield: Option<f64>,
    /// %EL / 100
    pub nominal_strain_uts: Option<f64>,
    /// ln(1 + nominal strain at yield)
    pub true_strain_yield: Option<f64>,
    /// σy × (1 + nominal strain at yield)
    pub true_stress_yield: Option<f64>,
    /// ln(1 + nominal strain at UTS)
    pub true_strain_uts: Option<f64>,
    /// σu × (1 + nominal strain at UTS)
    pub true_stress_uts: Option<f64>,
    /// true strain at yield − true stress at yield / E
    pub plastic_strain_yield: Option<f64>,
    /// true strain at UTS − true stress at UTS / E
    pub plastic_strain_uts: Option<f64>,
}

impl DerivedProperties {
    /// True when every quantity computed.
    pub fn is_complete(&self) -> bool {
        self.nominal_strain_yield.is_some()
            && self.nominal_strain_uts.is_some()
            && self.true_strain_yield.is_some()
            && self.true_stress_yield.is_some()
            && self.true_strain_uts.is_some()
            && self.true_stress_uts.is_some()
            && self.plastic_strain_yield.is_some()
            && self.plastic_strain_uts.is_some()
    }
}

/// Result of one derivation pass: the partial properties plus the
/// accumulated reasons for whatever is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Derivation {
    pub properties: DerivedProperties,
    pub reasons: Vec<Reason>,
}

/// Derive the stress-strain quantities for one record.
///
/// Pure and total: the same record always yields the same result, and
/// no input combination aborts. Computed fresh per call; results are
/// never cached across records or export requests.
pub fn derive(record: &MaterialRecord) -> Derivation {
    let mut p = DerivedProperties::default();
    let mut reasons = Vec::new();
    let e = record.youngs_modulus;

    // 1. Nominal strain at yield = σy / E
    match (record.yield_strength, e) {
        (Some(sy), Some(e)) if e != 0.0 => p.nominal_strain_yield = Some(sy / e),
        (_, Some(e)) if e == 0.0 => {
            reasons.push(Reason::domain(NOMINAL_STRAIN_YIELD, DIV_BY_ZERO_E));
        }
        (sy, e) => {
            if sy.is_none() {
                reasons.push(Reason::missing_input(
                    NOMINAL_STRAIN_YIELD,
                    Field::YieldStrength.display_name(),
                ));
            }
            if e.is_none() {
                reasons.push(Reason::missing_input(
                    NOMINAL_STRAIN_YIELD,
                    Field::YoungsModulus.display_name(),
                ));
            }
        }
    }

    // 2. Nominal strain at UTS = %EL / 100
    match record.percent_elongation {
        Some(el) => p.nominal_strain_uts = Some(el / 100.0),
        None => reasons.push(Reason::missing_input(
            NOMINAL_STRAIN_UTS,
            Field::PercentElongation.display_name(),
        )),
    }

    // 3. True strain at yield = ln(1 + nominal strain at yield)
    match p.nominal_strain_yield {
        Some(nsy) if 1.0 + nsy > 0.0 => p.true_strain_yield = Some((1.0 + nsy).ln()),
        Some(_) => reasons.push(Reason::domain(
            TRUE_STRAIN_YIELD,
            "cannot take log of non-positive argument (1 + nominal strain at yield <= 0)",
        )),
        None => reasons.push(Reason::missing_input(TRUE_STRAIN_YIELD, NOMINAL_STRAIN_YIELD)),
    }

    // 4. True stress at yield = σy × (1 + nominal strain at yield)
    match (record.yield_strength, p.nominal_strain_yield) {
        (Some(sy), Some(nsy)) => p.true_stress_yield = Some(sy * (1.0 + nsy)),
        (sy, nsy) => {
            if sy.is_none() {
                reasons.push(Reason::missing_input(
                    TRUE_STRESS_YIELD,
                    Field::YieldStrength.display_name(),
                ));
            }
            if nsy.is_none() {
                reasons.push(Reason::missing_input(TRUE_STRESS_YIELD, NOMINAL_STRAIN_YIELD));
            }
        }
    }

    // 5. True strain at UTS = ln(1 + nominal strain at UTS)
    match p.nominal_strain_uts {
        Some(nsu) if 1.0 + nsu > 0.0 => p.true_strain_uts = Some((1.0 + nsu).ln()),
        Some(_) => reasons.push(Reason::domain(
            TRUE_STRAIN_UTS,
            "cannot take log of non-positive argument (1 + nominal strain at UTS <= 0)",
        )),
        None => reasons.push(Reason::missing_input(TRUE_STRAIN_UTS, NOMINAL_STRAIN_UTS)),
    }

    // 6. True stress at UTS = σu × (1 + nominal strain at UTS)
    match (record.ultimate_strength, p.nominal_strain_uts) {
        (Some(su), Some(nsu)) => p.true_stress_uts = Some(su * (1.0 + nsu)),
        (su, nsu) => {
            if su.is_none() {
                reasons.push(Reason::missing_input(
                    TRUE_STRESS_UTS,
                    Field::UltimateStrength.display_name(),
                ));
            }
            if nsu.is_none() {
                reasons.push(Reason::missing_input(TRUE_STRESS_UTS, NOMINAL_STRAIN_UTS));
            }
        }
    }

    // 7. Plastic strain at yield = true strain at yield − true stress at yield / E
    match (p.true_strain_yield, p.true_stress_yield, e) {
        (Some(ts), Some(tss), Some(e)) if e != 0.0 => {
            p.plastic_strain_yield = Some(ts - tss / e);
        }
        (_, _, Some(e)) if e == 0.0 => {
            reasons.push(Reason::domain(PLASTIC_STRAIN_YIELD, DIV_BY_ZERO_E));
        }
        (ts, tss, e) => {
            if ts.is_none() {
                reasons.push(Reason::missing_input(PLASTIC_STRAIN_YIELD, TRUE_STRAIN_YIELD));
            }
            if tss.is_none() {
                reasons.push(Reason::missing_input(PLASTIC_STRAIN_YIELD, TRUE_STRESS_YIELD));
            }
            if e.is_none() {
                reasons.push(Reason::missing_input(
                    PLASTIC_STRAIN_YIELD,
                    Field::YoungsModulus.display_name(),
                ));
            }
        }
    }

    // 8. Plastic strain at UTS = true strain at UTS − true stress at UTS / E
    match (p.true_strain_uts, p.true_stress_uts, e) {
        (Some(ts), Some(tss), Some(e)) if e != 0.0 => {
            p.plastic_strain_uts = Some(ts - tss / e);
        }
        (_, _, Some(e)) if e == 0.0 => {
            reasons.push(Reason::domain(PLASTIC_STRAIN_UTS, DIV_BY_ZERO_E));
        }
        (ts, tss, e) => {
            if ts.is_none() {
                reasons.push(Reason::missing_input(PLASTIC_STRAIN_UTS, TRUE_STRAIN_UTS));
            }
            if tss.is_none() {
                reasons.push(Reason::missing_input(PLASTIC_STRAIN_UTS, TRUE_STRESS_UTS));
            }
            if e.is_none() {
                reasons.push(Reason::missing_input(
                    PLASTIC_STRAIN_UTS,
                    Field::YoungsModulus.display_name(),
                ));
            }
        }
    }

    Derivation {
        properties: p,
        reasons,
    }
}
