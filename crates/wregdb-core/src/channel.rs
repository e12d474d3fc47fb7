//! # Channels and Bands
//!
//! The query engine evaluates permissions against caller-supplied
//! channels. A channel is a numbered frequency span tagged with the band it
//! belongs to. Channel numbers repeat across bands (channel 1 exists at
//! 2.4 GHz, 6 GHz and 60 GHz), so a channel is identified by its band and
//! number together.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TokenError;
use crate::interval::Interval;

/// A named slice of spectrum. Purely descriptive: bands select channels,
/// they never constrain permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    Band2g4,
    Band2g4Jp,
    Band5g0,
    Band5g2,
    Band5g5,
    Band5g7,
    Band5g8,
    Band5g9,
    Band6gLower,
    Band6gUpper,
    Band60gWellKnown,
    Band60gOther,
}

impl Band {
    /// All bands in frequency order.
    pub fn all() -> &'static [Band] {
        &[
            Self::Band2g4,
            Self::Band2g4Jp,
            Self::Band5g0,
            Self::Band5g2,
            Self::Band5g5,
            Self::Band5g7,
            Self::Band5g8,
            Self::Band5g9,
            Self::Band6gLower,
            Self::Band6gUpper,
            Self::Band60gWellKnown,
            Self::Band60gOther,
        ]
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Band2g4 => "2.4G",
            Self::Band2g4Jp => "2.4G JP",
            Self::Band5g0 => "5.0G",
            Self::Band5g2 => "5.2G",
            Self::Band5g5 => "5.5G",
            Self::Band5g7 => "5.7G",
            Self::Band5g8 => "5.8G",
            Self::Band5g9 => "5.9G",
            Self::Band6gLower => "6G lower",
            Self::Band6gUpper => "6G upper",
            Self::Band60gWellKnown => "60G well-known",
            Self::Band60gOther => "60G other",
        }
    }

    /// Short selection token, as used on the command line and in config.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Band2g4 => "24w",
            Self::Band2g4Jp => "24jp",
            Self::Band5g0 => "50",
            Self::Band5g2 => "52",
            Self::Band5g5 => "55",
            Self::Band5g7 => "57",
            Self::Band5g8 => "58",
            Self::Band5g9 => "59",
            Self::Band6gLower => "6l",
            Self::Band6gUpper => "6u",
            Self::Band60gWellKnown => "60w",
            Self::Band60gOther => "60o",
        }
    }
}

impl FromStr for Band {
    type Err = TokenError;

    /// Accepts either the short token (`52`) or the display name (`5.2G`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|b| b.token() == s || b.name() == s)
            .ok_or_else(|| TokenError::UnknownBand(s.to_string()))
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A radio channel to be tested against a country's permissions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel number. Not unique across bands.
    pub id: u32,
    /// Occupied frequency span in MHz.
    pub interval: Interval,
    /// Occupied bandwidth in MHz. Never exceeds the interval's length.
    pub bandwidth: f64,
    /// Band the channel belongs to.
    pub band: Band,
}

impl Channel {
    /// A channel occupying `[start, end]`; its bandwidth is the span width.
    pub fn new(id: u32, start: f64, end: f64, band: Band) -> Self {
        let interval = Interval::new(start, end);
        Self {
            id,
            interval,
            bandwidth: interval.length(),
            band,
        }
    }

    /// Centre frequency in MHz.
    pub fn center(&self) -> f64 {
        (self.interval.start + self.interval.end) / 2.0
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ch{}: {} ({})",
            self.band,
            self.id,
            self.center(),
            self.interval
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_parses_token_and_name() {
        assert_eq!("52".parse::<Band>().unwrap(), Band::Band5g2);
        assert_eq!("5.2G".parse::<Band>().unwrap(), Band::Band5g2);
        assert_eq!("6l".parse::<Band>().unwrap(), Band::Band6gLower);
        assert_eq!(
            "7g".parse::<Band>(),
            Err(TokenError::UnknownBand("7g".into()))
        );
    }

    #[test]
    fn band_tokens_unique() {
        let mut seen = std::collections::HashSet::new();
        for band in Band::all() {
            assert!(seen.insert(band.token()), "duplicate token {}", band.token());
        }
    }

    #[test]
    fn channel_bandwidth_is_span() {
        let ch = Channel::new(36, 5170.0, 5190.0, Band::Band5g2);
        assert_eq!(ch.bandwidth, 20.0);
        assert_eq!(ch.center(), 5180.0);
    }

    #[test]
    fn channel_display() {
        let ch = Channel::new(1, 2402.0, 2422.0, Band::Band2g4);
        assert_eq!(ch.to_string(), "2.4G ch1: 2412 (2402 - 2422)");
    }
}
