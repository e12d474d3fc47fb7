//! # Permissions
//!
//! One allowed configuration inside a country block:
//!
//! ```text
//! \t(5170 - 5250 @ 80), (23), NO-OUTDOOR, AUTO-BW, wmmrule=ETSI
//!   └── band ────────┘  └pow┘ └── flags ─────────┘  └ wmm rule ┘
//! ```
//!
//! Flags are kept as a sorted set of strings so that permissions compare
//! and display independently of the order the flags were written in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::channel::Channel;
use crate::error::TokenError;
use crate::flags;
use crate::freqband::FrequencyBand;
use crate::parser::NumberPolicy;
use crate::power::PowerValue;

/// Field prefix naming the WMM ruleset.
const WMM_RULE_PREFIX: &str = "wmmrule=";

/// A single permitted band/power/flags configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    /// Frequency range and bandwidth cap.
    pub band: FrequencyBand,
    /// EIRP limit.
    pub power: PowerValue,
    /// Restriction flags, sorted and de-duplicated.
    pub flags: BTreeSet<String>,
    /// Named Wi-Fi multimedia (QoS) ruleset, if any.
    pub wmm_rule: Option<String>,
}

impl Permission {
    /// Assemble a permission from already-parsed parts. Flags are sorted and
    /// de-duplicated.
    pub fn new(
        band: FrequencyBand,
        power: PowerValue,
        flags: impl IntoIterator<Item = String>,
        wmm_rule: Option<String>,
    ) -> Self {
        Self {
            band,
            power,
            flags: flags.into_iter().collect(),
            wmm_rule,
        }
    }

    /// Parse a permission line (leading indentation already removed or not).
    ///
    /// `comments` are the comment lines that preceded this line; they are
    /// attached to the frequency band as provenance.
    pub fn parse(
        line: &str,
        comments: Option<String>,
        policy: NumberPolicy,
    ) -> Result<Self, TokenError> {
        let mut fields = line.trim().split(',').map(str::trim);

        let band_token = fields
            .next()
            .and_then(unparenthesize)
            .ok_or_else(|| TokenError::MalformedPermission(format!(
                "frequency band must be parenthesized: {line:?}"
            )))?;
        let power_token = fields
            .next()
            .and_then(unparenthesize)
            .ok_or_else(|| TokenError::MalformedPermission(format!(
                "missing parenthesized power field: {line:?}"
            )))?;

        let mut flags = Vec::new();
        let mut wmm_rule = None;
        for field in fields.filter(|f| !f.is_empty()) {
            match field.strip_prefix(WMM_RULE_PREFIX) {
                Some(rule) if wmm_rule.is_none() => wmm_rule = Some(rule.to_string()),
                _ => flags.push(field.to_string()),
            }
        }

        Ok(Self::new(
            FrequencyBand::parse(band_token, comments, policy)?,
            PowerValue::parse(power_token, policy)?,
            flags,
            wmm_rule,
        ))
    }

    /// Whether `channel` fits this permission's frequency band.
    pub fn admits(&self, channel: &Channel) -> bool {
        self.band.admits(channel)
    }

    /// Whether the permission carries `flag`.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    /// Provenance comments recorded for this permission.
    pub fn comments(&self) -> Option<&str> {
        self.band.comments.as_deref()
    }

    /// Known flags packed into their bitmask; unknown flags are ignored.
    pub fn flag_bits(&self) -> u32 {
        flags::bitmask(self.flags.iter().map(String::as_str))
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}), ({})", self.band, self.power)?;
        for flag in &self.flags {
            write!(f, ", {flag}")?;
        }
        if let Some(rule) = &self.wmm_rule {
            write!(f, ", {WMM_RULE_PREFIX}{rule}")?;
        }
        Ok(())
    }
}

fn unparenthesize(field: &str) -> Option<&str> {
    field.strip_prefix('(')?.strip_suffix(')')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Band;
    use crate::flags::Flag;
    use crate::interval::Interval;

    fn parse(line: &str) -> Permission {
        Permission::parse(line, None, NumberPolicy::Strict).unwrap()
    }

    fn flag_list(p: &Permission) -> Vec<&str> {
        p.flags.iter().map(String::as_str).collect()
    }

    #[test]
    fn parse_minimal() {
        let p = parse("(2412-2472@20), (30)");
        assert_eq!(p.band.interval, Interval::new(2412.0, 2472.0));
        assert_eq!(p.band.max_bandwidth, 20.0);
        assert_eq!(p.power.eirp_dbm, 30.0);
        assert!(p.flags.is_empty());
        assert_eq!(p.wmm_rule, None);
    }

    #[test]
    fn parse_with_flags_and_wmm_rule() {
        let p = parse("\t(5170 - 5250 @ 80), (23), NO-OUTDOOR, AUTO-BW, wmmrule=ETSI");
        assert_eq!(flag_list(&p), vec!["AUTO-BW", "NO-OUTDOOR"]);
        assert_eq!(p.wmm_rule.as_deref(), Some("ETSI"));
    }

    #[test]
    fn flags_sorted_and_deduplicated() {
        let p = parse("(5250 - 5330 @ 80), (20), NO-OUTDOOR, DFS, AUTO-BW, DFS");
        assert_eq!(flag_list(&p), vec!["AUTO-BW", "DFS", "NO-OUTDOOR"]);
    }

    #[test]
    fn first_wmm_rule_wins() {
        let p = parse("(5170 - 5250 @ 80), (23), wmmrule=ETSI, wmmrule=FCC");
        assert_eq!(p.wmm_rule.as_deref(), Some("ETSI"));
        assert_eq!(flag_list(&p), vec!["wmmrule=FCC"]);
    }

    #[test]
    fn wmm_rule_before_flags() {
        let p = parse("(5490 - 5710 @ 160), (27), wmmrule=ETSI, DFS");
        assert_eq!(p.wmm_rule.as_deref(), Some("ETSI"));
        assert_eq!(flag_list(&p), vec!["DFS"]);
    }

    #[test]
    fn empty_fields_dropped() {
        let p = parse("(2402 - 2482 @ 40), (20),");
        assert!(p.flags.is_empty());
    }

    #[test]
    fn milliwatt_power() {
        let p = parse("(5725 - 5875 @ 80), (200 mW)");
        assert!((p.power.eirp_dbm - 23.0103).abs() < 1e-3);
    }

    #[test]
    fn comments_attach_to_band() {
        let p = Permission::parse(
            "(57000 - 66000 @ 2160), (40)",
            Some("60 GHz band\nper decision 2013/752/EU".into()),
            NumberPolicy::Strict,
        )
        .unwrap();
        assert_eq!(p.comments(), Some("60 GHz band\nper decision 2013/752/EU"));
    }

    #[test]
    fn missing_parentheses_rejected() {
        assert!(matches!(
            Permission::parse("2402 - 2482 @ 40, (20)", None, NumberPolicy::Strict),
            Err(TokenError::MalformedPermission(_))
        ));
        assert!(matches!(
            Permission::parse("(2402 - 2482 @ 40), 20", None, NumberPolicy::Strict),
            Err(TokenError::MalformedPermission(_))
        ));
        assert!(matches!(
            Permission::parse("(2402 - 2482 @ 40)", None, NumberPolicy::Strict),
            Err(TokenError::MalformedPermission(_))
        ));
    }

    #[test]
    fn bad_power_propagates() {
        assert!(matches!(
            Permission::parse("(2402 - 2482 @ 40), (loud)", None, NumberPolicy::Strict),
            Err(TokenError::InvalidNumber { field: "power", .. })
        ));
    }

    #[test]
    fn admits_delegates_to_band() {
        let p = parse("(2402 - 2482 @ 20), (20)");
        assert!(p.admits(&Channel::new(1, 2402.0, 2422.0, Band::Band2g4)));
        assert!(!p.admits(&Channel::new(3, 2402.0, 2442.0, Band::Band2g4)));
    }

    #[test]
    fn flag_bits() {
        let p = parse("(5250 - 5330 @ 80), (20), DFS, NO-IR, VENDOR-X");
        assert_eq!(p.flag_bits(), Flag::Dfs.bit() | Flag::NoIr.bit());
        assert!(p.has_flag("NO-IR"));
        assert!(!p.has_flag("NO-OUTDOOR"));
    }

    #[test]
    fn display_normalizes() {
        let p = parse("(5170-5250@80), (23), NO-OUTDOOR, AUTO-BW, wmmrule=ETSI");
        assert_eq!(
            p.to_string(),
            "(5170 - 5250 @ 80), (23 dBm), AUTO-BW, NO-OUTDOOR, wmmrule=ETSI"
        );
    }
}
