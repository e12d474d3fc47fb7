//! # wregdb-cli — Regulatory Database Command-Line Interface
//!
//! ## Subcommands
//!
//! - `countries`: list database entries with DFS region and permission count
//! - `show`: print a country's permissions
//! - `check`: look up one channel number against a country
//! - `vector`: usability of every selected channel for a country
//! - `compare`: countries whose channel set is the same as, a superset of,
//!   or a subset of a reference country's
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in the handler modules; domain logic lives in
//!   `wregdb-core`.
//! - Handlers render into a `String` so output can be tested without
//!   capturing stdout.
//! - Diagnostics go to stderr through `tracing`; stdout carries results only.

pub mod check;
pub mod compare;
pub mod config;
pub mod countries;
pub mod show;
pub mod vector;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use wregdb_core::catalog;
use wregdb_core::{parse_regdb_with, Channel, Country, NumberPolicy, ParseOptions, QueryError, RegDb};

use crate::config::Settings;

/// Read and parse a database file.
pub fn load_regdb(path: &Path, numbers: NumberPolicy) -> Result<RegDb> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read database {}", path.display()))?;
    let db = parse_regdb_with(&text, &ParseOptions { numbers })
        .with_context(|| format!("failed to parse database {}", path.display()))?;
    tracing::info!(path = %path.display(), countries = db.len(), "loaded regulatory database");
    Ok(db)
}

/// Catalog channels in the configured bands.
pub fn selected_channels(settings: &Settings) -> Vec<Channel> {
    catalog::channels_in_bands(&settings.bands)
}

/// Look up `code`, failing with a user-facing error if it is absent.
pub fn find_country<'a>(db: &'a RegDb, code: &str) -> Result<&'a Country> {
    db.get(code)
        .ok_or_else(|| QueryError::UnknownCountry(code.to_string()).into())
}

/// Render a serializable value as pretty JSON with a trailing newline.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

/// Text label for a DFS region; `-` when none is declared.
pub(crate) fn dfs_label(region: wregdb_core::DfsRegion) -> &'static str {
    match region.as_str() {
        "" => "-",
        s => s,
    }
}
