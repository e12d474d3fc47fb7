//! # Frequency Band Permissions
//!
//! The first field of a permission line: `<start> - <end> @ <bandwidth>`,
//! all in MHz. A band admits a channel when the channel's whole span lies
//! inside the band and the channel is no wider than the band's maximum
//! bandwidth.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::channel::Channel;
use crate::error::TokenError;
use crate::interval::Interval;
use crate::parser::{parse_number, NumberPolicy};

/// A permitted frequency range with a bandwidth cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBand {
    /// Permitted range in MHz.
    pub interval: Interval,
    /// Widest channel allowed in the range, in MHz.
    pub max_bandwidth: f64,
    /// Comment lines that preceded the permission in the source, verbatim.
    pub comments: Option<String>,
}

impl FrequencyBand {
    /// A band over `[start, end]` MHz capped at `max_bandwidth` MHz, with no
    /// comments.
    pub fn new(start: f64, end: f64, max_bandwidth: f64) -> Self {
        Self {
            interval: Interval::new(start, end),
            max_bandwidth,
            comments: None,
        }
    }

    /// Attach provenance comments.
    pub fn with_comments(mut self, comments: Option<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Parse a `<start>-<end>@<bandwidth>` token.
    ///
    /// The token is split on the first `-` and then on the first `@` after
    /// it; whitespace around each field is ignored. Under
    /// [`NumberPolicy::Strict`] an inverted range or a non-positive
    /// bandwidth is rejected.
    pub fn parse(
        token: &str,
        comments: Option<String>,
        policy: NumberPolicy,
    ) -> Result<Self, TokenError> {
        let malformed = || TokenError::MalformedFrequencyBand(token.to_string());
        let (start, rest) = token.split_once('-').ok_or_else(malformed)?;
        let (end, bandwidth) = rest.split_once('@').ok_or_else(malformed)?;

        let start_mhz = parse_number("start", start.trim(), policy)?;
        let end_mhz = parse_number("end", end.trim(), policy)?;
        let bandwidth_mhz = parse_number("bandwidth", bandwidth.trim(), policy)?;

        if policy == NumberPolicy::Strict {
            if start_mhz > end_mhz {
                return Err(TokenError::InvertedRange {
                    start: start.trim().to_string(),
                    end: end.trim().to_string(),
                });
            }
            if bandwidth_mhz <= 0.0 {
                return Err(malformed());
            }
        }

        Ok(Self {
            interval: Interval {
                start: start_mhz,
                end: end_mhz,
            },
            max_bandwidth: bandwidth_mhz,
            comments,
        })
    }

    /// Whether `channel` fits in this band.
    pub fn admits(&self, channel: &Channel) -> bool {
        self.interval.contains(channel.interval.start)
            && self.interval.contains(channel.interval.end)
            && channel.bandwidth <= self.max_bandwidth
    }
}

impl FromStr for FrequencyBand {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, None, NumberPolicy::Strict)
    }
}

impl std::fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.interval, self.max_bandwidth)
    }
}
