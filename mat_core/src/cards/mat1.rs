//! # MAT1 Card (Format B, `.bdf`)
//!
//! Fixed-width finite-element material-property card: two comment
//! lines naming the material, then one `MAT1` line encoding the
//! identifier, Young's modulus, Poisson's ratio, and density.
//!
//! Density uses the field format's compact scientific notation: a
//! two-decimal mantissa followed by an explicit sign and a two-digit
//! exponent, with no `e` marker: `1.12e9` renders as `1.12+09` and
//! `1.12e-3` as `1.12-03`. See [`density_exp`].
//!
//! Absent E, ν, or ρ render as `0.0`; the card line is fixed-width
//! and downstream readers expect a number in every field.

use crate::errors::CardResult;
use crate::record::MaterialRecord;

/// Render the MAT1 card for one record.
///
/// Hard-fails only on the empty-name precondition.
pub fn mat1_card(record: &MaterialRecord) -> CardResult<String> {
    record.validate()?;

    let e = record.youngs_modulus.unwrap_or(0.0);
    let nu = record.poissons_ratio.unwrap_or(0.0);
    let rho = record.density.unwrap_or(0.0);

    let mut out = String::new();
    out.push_str(&format!(
        "$HMNAME MAT                    1\"{}\" \"MAT1\"\n",
        record.name
    ));
    out.push_str("$HWCOLOR MAT                   1       3\n");
    out.push_str(&format!(
        "MAT1    1       {:<10.1}      {:<6.2}  {}\n",
        e,
        nu,
        density_exp(rho)
    ));

    Ok(out)
}

/// Render a value in sign-and-two-digit-exponent scientific form.
///
/// Formats to a two-decimal mantissa, then replaces the exponent
/// marker with an explicit `+`/`-` and pads the exponent magnitude to
/// two digits:
///
/// ```rust
/// use mat_core::cards::density_exp;
///
/// assert_eq!(density_exp(1.12e9), "1.12+09");
/// assert_eq!(density_exp(1.12e-3), "1.12-03");
/// assert_eq!(density_exp(0.0), "0.00+00");
/// ```
pub fn density_exp(value: f64) -> String {
    let sci = format!("{:.2e}", value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exp: i32 = exponent.parse().unwrap_or(0);
    let sign = if exp >= 0 { '+' } else { '-' };
    format!("{}{}{:02}", mantissa, sign, exp.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steel_a() -> MaterialRecord {
        MaterialRecord {
            name: "Steel-A".to_string(),
            youngs_modulus: Some(200000.0),
            poissons_ratio: Some(0.3),
            density: Some(7850.0),
            percent_elongation: Some(20.0),
            yield_strength: Some(250.0),
            ultimate_strength: Some(400.0),
        }
    }

    #[test]
    fn test_mat1_card_exact_layout() {
        let card = mat1_card(&steel_a()).unwrap();

        // Fixed-width MAT1 line, piece by piece: 16-char label/id
        // prefix, 10-char E field, 6 spaces, 6-char ν field, 2 spaces,
        // then density.
        let mat1_line = String::new()
            + "MAT1    1       "
            + "200000.0  "
            + "      "
            + "0.30  "
            + "  "
            + "7.85+03";

        let expected = format!(
            "$HMNAME MAT                    1\"Steel-A\" \"MAT1\"\n\
             $HWCOLOR MAT                   1       3\n\
             {}\n",
            mat1_line
        );
        assert_eq!(card, expected);
    }

    #[test]
    fn test_mat1_defaults_absent_fields_to_zero() {
        let record = MaterialRecord::new("Mystery");
        let card = mat1_card(&record).unwrap();
        assert!(card.contains("0.0       "));
        assert!(card.contains("0.00+00"));
    }

    #[test]
    fn test_mat1_empty_name_is_hard_error() {
        let record = MaterialRecord::new("  ");
        assert!(mat1_card(&record).is_err());
    }

    #[test]
    fn test_density_exp_powers_of_ten() {
        assert_eq!(density_exp(1.0e9), "1.00+09");
        assert_eq!(density_exp(1.0e-3), "1.00-03");
        assert_eq!(density_exp(0.0), "0.00+00");
    }

    #[test]
    fn test_density_exp_typical_values() {
        assert_eq!(density_exp(1.12e9), "1.12+09");
        assert_eq!(density_exp(7850.0), "7.85+03");
        assert_eq!(density_exp(1.12e-3), "1.12-03");
    }

    #[test]
    fn test_density_exp_rounds_mantissa() {
        assert_eq!(density_exp(9.999e5), "1.00+06");
        assert_eq!(density_exp(2.718e-7), "2.72-07");
    }
}
