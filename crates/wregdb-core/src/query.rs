//! # Query Engine
//!
//! Pure functions over a parsed [`RegDb`] and a caller-supplied, ordered
//! list of channels.
//!
//! - [`permission_for`]: first permission (in source order) admitting a
//!   channel.
//! - [`is_channel_usable`]: a channel is usable when some permission
//!   admits it and that permission does not carry `NO-IR`.
//! - [`channel_vector`]: usability of every channel, positionally aligned
//!   with the input list.
//! - [`compare`]: element-wise `same` / `superset` / `subset` test over
//!   two channel vectors.
//! - [`filter_countries`]: every database entry whose vector relates to a
//!   reference country's vector.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::channel::Channel;
use crate::country::{Country, RegDb};
use crate::error::{QueryError, TokenError};
use crate::flags::Flag;
use crate::permission::Permission;

/// Relation tested by [`compare`], reading as "A is `relation` of B".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Every position is equal.
    Same,
    /// Wherever B is usable, A is usable too.
    Superset,
    /// Wherever A is usable, B is usable too.
    Subset,
}

impl Relation {
    /// Every relation, in declaration order.
    pub fn all() -> &'static [Relation] {
        &[Self::Same, Self::Superset, Self::Subset]
    }

    /// Lowercase name used on the command line and in config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::Superset => "superset",
            Self::Subset => "subset",
        }
    }

    fn holds(&self, a: bool, b: bool) -> bool {
        match self {
            Self::Same => a == b,
            Self::Superset => a >= b,
            Self::Subset => a <= b,
        }
    }
}

impl FromStr for Relation {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| TokenError::UnknownRelation(s.to_string()))
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first permission of `country` that admits `channel`.
pub fn permission_for<'a>(country: &'a Country, channel: &Channel) -> Option<&'a Permission> {
    country.permissions.iter().find(|p| p.admits(channel))
}

/// Whether `channel` may be used to initiate transmissions in `country`.
pub fn is_channel_usable(country: &Country, channel: &Channel) -> bool {
    permission_for(country, channel).is_some_and(|p| !p.has_flag(Flag::NoIr.as_str()))
}

/// Usability of each channel, index-aligned with `channels`.
pub fn channel_vector(country: &Country, channels: &[Channel]) -> Vec<bool> {
    channels
        .iter()
        .map(|channel| is_channel_usable(country, channel))
        .collect()
}

/// Test whether vector `a` stands in `relation` to vector `b`.
///
/// Empty vectors satisfy every relation.
pub fn compare(a: &[bool], b: &[bool], relation: Relation) -> Result<bool, QueryError> {
    if a.len() != b.len() {
        return Err(QueryError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).all(|(&x, &y)| relation.holds(x, y)))
}

/// Permissions of `country` that admit at least one of `channels`, in
/// source order.
pub fn applicable_permissions<'a>(country: &'a Country, channels: &[Channel]) -> Vec<&'a Permission> {
    country
        .permissions
        .iter()
        .filter(|p| channels.iter().any(|ch| p.admits(ch)))
        .collect()
}

/// Database entries, in file order, whose channel vector stands in
/// `relation` to the vector of `reference_code`.
///
/// The reference country itself is included when it satisfies the
/// relation, which it always does.
pub fn filter_countries<'a>(
    db: &'a RegDb,
    channels: &[Channel],
    reference_code: &str,
    relation: Relation,
) -> Result<Vec<(&'a str, &'a Country)>, QueryError> {
    let reference = db
        .get(reference_code)
        .ok_or_else(|| QueryError::UnknownCountry(reference_code.to_string()))?;
    let reference_vector = channel_vector(reference, channels);

    let mut matches = Vec::new();
    for (code, country) in db.iter() {
        if compare(&channel_vector(country, channels), &reference_vector, relation)? {
            matches.push((code, country));
        }
    }
    tracing::debug!(
        reference = reference_code,
        %relation,
        channels = channels.len(),
        matches = matches.len(),
        "filtered countries"
    );
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Band;
    use crate::parser::parse_regdb;

    const DB: &str = "\
country AA: DFS-ETSI
\t(2402 - 2482 @ 40), (20)
\t(5170 - 5250 @ 80), (23), NO-OUTDOOR

country BB: DFS-FCC
\t(2402 - 2472 @ 40), (30)
\t(5170 - 5250 @ 160), (23)
\t(5250 - 5330 @ 80), (23), DFS

country CC:
\t(2402 - 2482 @ 20), (20), NO-IR
\t(2402 - 2482 @ 40), (20)
";

    fn ch(id: u32, start: f64, end: f64) -> Channel {
        let band = if start < 3000.0 { Band::Band2g4 } else { Band::Band5g2 };
        Channel::new(id, start, end, band)
    }

    fn channels() -> Vec<Channel> {
        vec![
            ch(1, 2402.0, 2422.0),
            ch(13, 2462.0, 2482.0),
            ch(36, 5170.0, 5190.0),
            ch(52, 5250.0, 5270.0),
        ]
    }

    #[test]
    fn permission_for_first_match() {
        let db = parse_regdb(DB).unwrap();
        let cc = db.get("CC").unwrap();
        let p = permission_for(cc, &ch(1, 2402.0, 2422.0)).unwrap();
        assert!(p.has_flag("NO-IR"));
        // 40 MHz only fits the second entry
        let p = permission_for(cc, &ch(3, 2402.0, 2442.0)).unwrap();
        assert!(p.flags.is_empty());
    }

    #[test]
    fn permission_for_none_when_too_wide() {
        let db = parse_regdb("country XX:\n\t(5170 - 5330 @ 80), (23)\n").unwrap();
        let xx = db.get("XX").unwrap();
        assert!(permission_for(xx, &ch(50, 5170.0, 5330.0)).is_none());
        assert!(permission_for(xx, &ch(42, 5170.0, 5250.0)).is_some());
    }

    #[test]
    fn permission_for_none_outside_bands() {
        let db = parse_regdb(DB).unwrap();
        assert!(permission_for(db.get("AA").unwrap(), &ch(100, 5490.0, 5510.0)).is_none());
    }

    #[test]
    fn no_ir_first_match_is_unusable() {
        let db = parse_regdb(DB).unwrap();
        let cc = db.get("CC").unwrap();
        assert!(!is_channel_usable(cc, &ch(1, 2402.0, 2422.0)));
        assert!(is_channel_usable(cc, &ch(3, 2402.0, 2442.0)));
    }

    #[test]
    fn other_flags_do_not_block_usage() {
        let db = parse_regdb(DB).unwrap();
        assert!(is_channel_usable(db.get("AA").unwrap(), &ch(36, 5170.0, 5190.0)));
        assert!(is_channel_usable(db.get("BB").unwrap(), &ch(52, 5250.0, 5270.0)));
    }

    #[test]
    fn vectors_align_with_channels() {
        let db = parse_regdb(DB).unwrap();
        let chans = channels();
        assert_eq!(
            channel_vector(db.get("AA").unwrap(), &chans),
            vec![true, true, true, false]
        );
        assert_eq!(
            channel_vector(db.get("BB").unwrap(), &chans),
            vec![true, false, true, true]
        );
        assert_eq!(
            channel_vector(db.get("CC").unwrap(), &chans),
            vec![false, false, false, false]
        );
        assert!(channel_vector(db.get("AA").unwrap(), &[]).is_empty());
    }

    #[test]
    fn compare_relations() {
        let a = [true, true, false];
        let b = [true, false, false];
        assert_eq!(compare(&a, &b, Relation::Same), Ok(false));
        assert_eq!(compare(&a, &b, Relation::Superset), Ok(true));
        assert_eq!(compare(&a, &b, Relation::Subset), Ok(false));
        assert_eq!(compare(&b, &a, Relation::Subset), Ok(true));
        assert_eq!(compare(&a, &a, Relation::Same), Ok(true));
    }

    #[test]
    fn compare_empty_is_vacuous() {
        for relation in Relation::all() {
            assert_eq!(compare(&[], &[], *relation), Ok(true));
        }
    }

    #[test]
    fn compare_length_mismatch() {
        assert_eq!(
            compare(&[true], &[true, false], Relation::Same),
            Err(QueryError::LengthMismatch { left: 1, right: 2 })
        );
    }

    #[test]
    fn relation_parse() {
        assert_eq!("same".parse::<Relation>().unwrap(), Relation::Same);
        assert_eq!("superset".parse::<Relation>().unwrap(), Relation::Superset);
        assert_eq!("subset".parse::<Relation>().unwrap(), Relation::Subset);
        assert_eq!(
            "all".parse::<Relation>(),
            Err(TokenError::UnknownRelation("all".into()))
        );
    }

    #[test]
    fn applicable_permissions_skip_unused() {
        let db = parse_regdb(DB).unwrap();
        let bb = db.get("BB").unwrap();
        let only_24 = vec![ch(1, 2402.0, 2422.0)];
        let applicable = applicable_permissions(bb, &only_24);
        assert_eq!(applicable.len(), 1);
        assert_eq!(applicable[0].power.eirp_dbm, 30.0);
        assert_eq!(applicable_permissions(bb, &channels()).len(), 3);
    }

    #[test]
    fn filter_countries_by_relation() {
        fn codes<'a>(db: &'a RegDb, channels: &[Channel], relation: Relation) -> Vec<&'a str> {
            filter_countries(db, channels, "AA", relation)
                .unwrap()
                .into_iter()
                .map(|(code, _)| code)
                .collect()
        }

        let db = parse_regdb(DB).unwrap();
        let chans = channels();
        assert_eq!(codes(&db, &chans, Relation::Same), vec!["AA"]);
        assert_eq!(codes(&db, &chans, Relation::Superset), vec!["AA"]);
        assert_eq!(codes(&db, &chans, Relation::Subset), vec!["AA", "CC"]);
    }

    #[test]
    fn filter_countries_unknown_reference() {
        let db = parse_regdb(DB).unwrap();
        assert_eq!(
            filter_countries(&db, &channels(), "ZZ", Relation::Same).unwrap_err(),
            QueryError::UnknownCountry("ZZ".into())
        );
    }
}
