//! # `wregdb compare`
//!
//! Lists the countries whose channel vector over the selected bands is the
//! same as, a superset of, or a subset of a reference country's.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use wregdb_core::query::filter_countries;
use wregdb_core::{Channel, RegDb, Relation};

use crate::config::{OutputFormat, Settings};
use crate::{dfs_label, load_regdb, selected_channels, to_json};

/// Arguments for `wregdb compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Path to the regulatory database text file.
    pub db: PathBuf,

    /// Reference country code. Defaults to `country` from the config file.
    pub country: Option<String>,

    /// `same`, `superset` or `subset`, read as "listed country is
    /// <relation> of the reference".
    #[arg(long, default_value = "same")]
    pub relation: Relation,
}

#[derive(Serialize)]
struct ComparisonReport<'a> {
    reference: &'a str,
    relation: Relation,
    channels: usize,
    matches: Vec<MatchRow<'a>>,
}

#[derive(Serialize)]
struct MatchRow<'a> {
    code: &'a str,
    dfs_region: &'static str,
}

/// Execute `wregdb compare`.
pub fn run_compare(args: &CompareArgs, settings: &Settings) -> Result<u8> {
    let code = settings.country_or(args.country.as_deref())?;
    let db = load_regdb(&args.db, settings.numbers)?;
    let channels = selected_channels(settings);
    print!(
        "{}",
        render_comparison(&db, &channels, &code, args.relation, settings.format)?
    );
    Ok(0)
}

/// Render the countries standing in `relation` to `reference`.
pub fn render_comparison(
    db: &RegDb,
    channels: &[Channel],
    reference: &str,
    relation: Relation,
    format: OutputFormat,
) -> Result<String> {
    let matches = filter_countries(db, channels, reference, relation)?;
    let report = ComparisonReport {
        reference,
        relation,
        channels: channels.len(),
        matches: matches
            .iter()
            .map(|&(code, country)| MatchRow {
                code,
                dfs_region: dfs_label(country.dfs_region),
            })
            .collect(),
    };

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(
                out,
                "Countries {relation} of {reference} over {} channels:",
                report.channels
            )?;
            for row in &report.matches {
                writeln!(out, "  {:<4} {}", row.code, row.dfs_region)?;
            }
            writeln!(out, "Total: {} matches", report.matches.len())?;
            Ok(out)
        }
    }
}
