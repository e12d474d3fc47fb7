//! # Permission Flag Table
//!
//! Bit assignments for the textual flags that may follow a permission's
//! power field. Permissions store flags as sorted strings and the query
//! engine compares strings only; this table exists for consumers that need
//! the packed representation.
//!
//! Bits 8 and 9 are unassigned.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A known permission flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Flag {
    /// OFDM modulation is not allowed.
    NoOfdm = 1 << 0,
    /// CCK modulation is not allowed.
    NoCck = 1 << 1,
    /// Outdoor use only.
    NoIndoor = 1 << 2,
    /// Indoor use only.
    NoOutdoor = 1 << 3,
    /// Radar detection is required.
    Dfs = 1 << 4,
    /// Point-to-point links only.
    PtpOnly = 1 << 5,
    /// Point-to-multipoint links only.
    PtmpOnly = 1 << 6,
    /// No initiating radiation: the channel may only be used passively.
    NoIr = 1 << 7,
    /// 40 MHz channels are not allowed.
    NoHt40 = 1 << 10,
    /// Adjacent ranges may be merged for wider channels.
    AutoBw = 1 << 11,
}

impl Flag {
    /// All known flags in bit order.
    pub fn all() -> &'static [Flag] {
        &[
            Self::NoOfdm,
            Self::NoCck,
            Self::NoIndoor,
            Self::NoOutdoor,
            Self::Dfs,
            Self::PtpOnly,
            Self::PtmpOnly,
            Self::NoIr,
            Self::NoHt40,
            Self::AutoBw,
        ]
    }

    /// The flag as it appears in the database text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoOfdm => "NO-OFDM",
            Self::NoCck => "NO-CCK",
            Self::NoIndoor => "NO-INDOOR",
            Self::NoOutdoor => "NO-OUTDOOR",
            Self::Dfs => "DFS",
            Self::PtpOnly => "PTP-ONLY",
            Self::PtmpOnly => "PTMP-ONLY",
            Self::NoIr => "NO-IR",
            Self::NoHt40 => "NO-HT40",
            Self::AutoBw => "AUTO-BW",
        }
    }

    /// The flag's bit.
    pub fn bit(&self) -> u32 {
        *self as u32
    }

    /// Look up a flag by its database token.
    pub fn from_token(token: &str) -> Option<Flag> {
        Self::all().iter().copied().find(|f| f.as_str() == token)
    }
}

impl FromStr for Flag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| format!("unknown flag: {s:?}"))
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pack flag tokens into a bitmask. Unknown tokens contribute nothing.
pub fn bitmask<'a>(tokens: impl IntoIterator<Item = &'a str>) -> u32 {
    tokens
        .into_iter()
        .filter_map(Flag::from_token)
        .fold(0, |mask, flag| mask | flag.bit())
}
