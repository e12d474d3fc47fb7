//! # `wregdb countries`
//!
//! Lists every database entry in file order.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use wregdb_core::RegDb;

use crate::config::{OutputFormat, Settings};
use crate::{dfs_label, load_regdb, to_json};

/// Arguments for `wregdb countries`.
#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// Path to the regulatory database text file.
    pub db: PathBuf,
}

#[derive(Serialize)]
struct CountryRow<'a> {
    code: &'a str,
    dfs_region: &'static str,
    permissions: usize,
    comments: Option<&'a str>,
}

/// Execute `wregdb countries`.
pub fn run_countries(args: &CountriesArgs, settings: &Settings) -> Result<u8> {
    let db = load_regdb(&args.db, settings.numbers)?;
    print!("{}", render_countries(&db, settings.format)?);
    Ok(0)
}

/// Render the country list.
pub fn render_countries(db: &RegDb, format: OutputFormat) -> Result<String> {
    let rows: Vec<CountryRow<'_>> = db
        .iter()
        .map(|(code, country)| CountryRow {
            code,
            dfs_region: dfs_label(country.dfs_region),
            permissions: country.permissions.len(),
            comments: country.comments.as_deref(),
        })
        .collect();

    match format {
        OutputFormat::Json => to_json(&rows),
        OutputFormat::Text => {
            let mut out = String::new();
            for row in &rows {
                writeln!(
                    out,
                    "{:<4} {:<9} {} permission{}",
                    row.code,
                    row.dfs_region,
                    row.permissions,
                    if row.permissions == 1 { "" } else { "s" }
                )?;
            }
            writeln!(out, "Total: {} entries", rows.len())?;
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::SAMPLE_DB;
    use wregdb_core::parse_regdb;

    #[test]
    fn text_listing() {
        let db = parse_regdb(SAMPLE_DB).unwrap();
        let out = render_countries(&db, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "00   -         2 permissions");
        assert_eq!(lines[1], "DE   DFS-ETSI  3 permissions");
        assert_eq!(lines[2], "US   DFS-FCC   3 permissions");
        assert_eq!(lines[3], "Total: 3 entries");
    }

    #[test]
    fn json_listing() {
        let db = parse_regdb(SAMPLE_DB).unwrap();
        let out = render_countries(&db, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["code"], "00");
        assert_eq!(value[0]["comments"], "World regulatory domain");
        assert_eq!(value[1]["dfs_region"], "DFS-ETSI");
        assert_eq!(value[2]["permissions"], 3);
    }

    #[test]
    fn single_permission_is_singular() {
        let db = parse_regdb("country XX:\n\t(2402 - 2482 @ 40), (20)\n").unwrap();
        let out = render_countries(&db, OutputFormat::Text).unwrap();
        assert!(out.starts_with("XX   -         1 permission\n"));
    }
}
