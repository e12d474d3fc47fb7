//! # Power Values
//!
//! EIRP limits as written in permission lines: either a bare/`dBm` literal
//! (`20`, `20 dBm`) or a milliwatt literal (`100 mW`). Values are always
//! stored in dBm; milliwatts are converted with `dBm = 10·log10(mW)`.
//! Any other unit suffix is dropped and the number is read as dBm.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TokenError;
use crate::parser::{parse_number, NumberPolicy};

/// Unit used when rendering or coercing a [`PowerValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUnit {
    /// Decibel-milliwatts.
    #[default]
    Dbm,
    /// Milliwatts.
    Milliwatt,
}

impl PowerUnit {
    /// Suffix used in the database text and in rendered output.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Dbm => "dBm",
            Self::Milliwatt => "mW",
        }
    }
}

/// A power restriction.
///
/// The database format carries only EIRP, so `antenna_gain_dbm` is always
/// zero for parsed values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerValue {
    /// Maximum EIRP in dBm.
    pub eirp_dbm: f64,
    /// Maximum antenna gain in dBm.
    pub antenna_gain_dbm: f64,
}

impl PowerValue {
    /// Build a value from an EIRP given in dBm.
    pub fn from_dbm(eirp_dbm: f64) -> Self {
        Self {
            eirp_dbm,
            antenna_gain_dbm: 0.0,
        }
    }

    /// Build a value from an EIRP given in milliwatts.
    pub fn from_milliwatts(mw: f64) -> Self {
        Self::from_dbm(10.0 * mw.log10())
    }

    /// Parse a power token such as `20`, `23 dBm` or `100 mW`.
    ///
    /// Surrounding whitespace is ignored, as is whitespace between the
    /// number and the unit.
    pub fn parse(token: &str, policy: NumberPolicy) -> Result<Self, TokenError> {
        let token = token.trim();
        let literal = token.trim_end_matches(|c: char| c.is_ascii_alphabetic());
        let unit = &token[literal.len()..];
        let value = parse_number("power", literal.trim(), policy)?;
        match unit {
            "mW" => Ok(Self::from_milliwatts(value)),
            "" | "dBm" => Ok(Self::from_dbm(value)),
            other => {
                tracing::warn!(token, unit = other, "unrecognized power unit, reading as dBm");
                Ok(Self::from_dbm(value))
            }
        }
    }

    /// The EIRP in `unit`, unrounded.
    pub fn exact_in(&self, unit: PowerUnit) -> f64 {
        match unit {
            PowerUnit::Dbm => self.eirp_dbm,
            PowerUnit::Milliwatt => 10f64.powf(self.eirp_dbm / 10.0),
        }
    }

    /// The EIRP in `unit`, rounded to an integer.
    ///
    /// This is the coercion used for display-level comparisons; compare
    /// `eirp_dbm` directly when exact equality matters.
    pub fn value_in(&self, unit: PowerUnit) -> f64 {
        // `+ 0.0` folds a rounded negative zero into zero
        self.exact_in(unit).round() + 0.0
    }

    /// Render as `"<n> dBm"` or `"<n> mW"` with `n` rounded to an integer.
    pub fn format(&self, unit: PowerUnit) -> String {
        format!("{} {}", self.value_in(unit), unit.suffix())
    }
}

impl FromStr for PowerValue {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, NumberPolicy::Strict)
    }
}

impl std::fmt::Display for PowerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(PowerUnit::Dbm))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Formatting in dBm then reparsing stays within rounding tolerance.
        #[test]
        fn dbm_format_roundtrip(dbm in -30.0f64..60.0) {
            let original = PowerValue::from_dbm(dbm);
            let reparsed: PowerValue = original.format(PowerUnit::Dbm).parse().unwrap();
            prop_assert!((reparsed.eirp_dbm - original.eirp_dbm).abs() <= 1.0);
        }

        /// Integer milliwatt literals convert to their decibel value.
        #[test]
        fn milliwatt_parse_matches_log(mw in 1u32..100_000) {
            let p: PowerValue = format!("{mw} mW").parse().unwrap();
            prop_assert!((p.eirp_dbm - 10.0 * (mw as f64).log10()).abs() < 1e-9);
        }
    }
}
