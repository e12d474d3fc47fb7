//! # DFS Regions
//!
//! The radar-avoidance regime a country header declares after its colon
//! (`country US: DFS-FCC`). The set is closed: an unrecognized tag is a
//! fatal parse error for the whole database.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TokenError;

/// Dynamic Frequency Selection regime.
///
/// The explicit discriminants give the numeric region codes used by the
/// kernel's regulatory interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum DfsRegion {
    /// No DFS region declared.
    #[default]
    None = 0,
    /// United States (FCC).
    Fcc = 1,
    /// Europe (ETSI).
    Etsi = 2,
    /// Japan.
    Jp = 3,
}

/// Canonical header tokens, one per region.
const TOKENS: [(&str, DfsRegion); 4] = [
    ("", DfsRegion::None),
    ("DFS-FCC", DfsRegion::Fcc),
    ("DFS-ETSI", DfsRegion::Etsi),
    ("DFS-JP", DfsRegion::Jp),
];

impl DfsRegion {
    /// All regions in code order.
    pub fn all() -> &'static [DfsRegion] {
        &[Self::None, Self::Fcc, Self::Etsi, Self::Jp]
    }

    /// The header token for this region (empty for [`DfsRegion::None`]).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Fcc => "DFS-FCC",
            Self::Etsi => "DFS-ETSI",
            Self::Jp => "DFS-JP",
        }
    }

    /// Numeric region code.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl FromStr for DfsRegion {
    type Err = TokenError;

    /// Exact, case-sensitive match against the canonical tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TOKENS
            .iter()
            .find(|(token, _)| *token == s)
            .map(|(_, region)| *region)
            .ok_or_else(|| TokenError::UnknownDfsRegion(s.to_string()))
    }
}

impl std::fmt::Display for DfsRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
