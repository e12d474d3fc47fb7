//! # Countries and the Regulatory Database
//!
//! A [`Country`] is the parsed form of one `country XX:` block. The
//! [`RegDb`] is the ordered sequence of `(code, Country)` pairs in file
//! order.
//!
//! ## Ordering
//!
//! Both levels are ordered lists, not maps:
//!
//! - A country's permissions keep source order because lookups are
//!   first-match. Narrower sub-bands listed after a broader default do not
//!   shadow it.
//! - Country codes are not required to be unique. [`RegDb::get`] returns
//!   the first entry with a given code.

use serde::{Deserialize, Serialize};

use crate::dfs::DfsRegion;
use crate::permission::Permission;

/// The rules of one country.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Country {
    /// DFS regime declared in the header.
    pub dfs_region: DfsRegion,
    /// Permissions in source order. May be empty.
    pub permissions: Vec<Permission>,
    /// Comment lines that preceded the header, joined with newlines.
    pub comments: Option<String>,
}

impl Country {
    /// Build a country from its header fields and permissions.
    pub fn new(
        dfs_region: DfsRegion,
        permissions: Vec<Permission>,
        comments: Option<String>,
    ) -> Self {
        Self {
            dfs_region,
            permissions,
            comments,
        }
    }
}

/// The parsed regulatory database.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegDb {
    entries: Vec<(String, Country)>,
}

impl RegDb {
    /// Wrap `(code, country)` pairs, keeping their order.
    pub fn new(entries: Vec<(String, Country)>) -> Self {
        Self { entries }
    }

    /// Number of entries, counting duplicate codes separately.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the database has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Country)> {
        self.entries.iter().map(|(code, country)| (code.as_str(), country))
    }

    /// Country codes in file order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    /// The first country with `code`, in file order.
    pub fn get(&self, code: &str) -> Option<&Country> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, country)| country)
    }

    /// Whether any entry has `code`.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }
}

impl<'a> IntoIterator for &'a RegDb {
    type Item = &'a (String, Country);
    type IntoIter = std::slice::Iter<'a, (String, Country)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> RegDb {
        RegDb::new(vec![
            ("00".into(), Country::default()),
            ("US".into(), Country::new(DfsRegion::Fcc, vec![], None)),
            ("DE".into(), Country::new(DfsRegion::Etsi, vec![], Some("first".into()))),
            ("DE".into(), Country::new(DfsRegion::Etsi, vec![], Some("second".into()))),
        ])
    }

    #[test]
    fn preserves_order() {
        let db = db();
        let codes: Vec<&str> = db.codes().collect();
        assert_eq!(codes, vec!["00", "US", "DE", "DE"]);
    }

    #[test]
    fn get_returns_first_duplicate() {
        let db = db();
        assert_eq!(db.len(), 4);
        assert_eq!(db.get("DE").and_then(|c| c.comments.as_deref()), Some("first"));
    }

    #[test]
    fn get_missing_is_none() {
        let db = db();
        assert!(db.get("XX").is_none());
        assert!(!db.contains("XX"));
        assert!(db.contains("US"));
    }

    #[test]
    fn empty_db() {
        let db = RegDb::default();
        assert!(db.is_empty());
        assert_eq!(db.iter().count(), 0);
    }

    #[test]
    fn serializes_as_pairs() {
        let db = RegDb::new(vec![("US".into(), Country::new(DfsRegion::Fcc, vec![], None))]);
        let json = serde_json::to_value(&db).unwrap();
        assert_eq!(json[0][0], "US");
        assert_eq!(json[0][1]["dfs_region"], "Fcc");
        assert!(json[0][1]["permissions"].as_array().unwrap().is_empty());
    }
}
