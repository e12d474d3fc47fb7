//! # `wregdb show`
//!
//! Prints one country's permissions in source order: frequency range,
//! bandwidth cap, EIRP in dBm and mW, flags, WMM rule and provenance
//! comments.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use wregdb_core::query::applicable_permissions;
use wregdb_core::{Channel, Country, Permission, PowerUnit};

use crate::config::{OutputFormat, Settings};
use crate::{dfs_label, find_country, load_regdb, selected_channels, to_json};

/// Arguments for `wregdb show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path to the regulatory database text file.
    pub db: PathBuf,

    /// Country code. Defaults to `country` from the config file.
    pub country: Option<String>,

    /// Only list permissions that admit at least one selected channel.
    #[arg(long)]
    pub applicable: bool,
}

#[derive(Serialize)]
struct PermissionRow<'a> {
    start_mhz: f64,
    end_mhz: f64,
    max_bandwidth_mhz: f64,
    eirp_dbm: f64,
    eirp_mw: f64,
    flags: Vec<&'a str>,
    wmm_rule: Option<&'a str>,
    comments: Option<&'a str>,
}

#[derive(Serialize)]
struct CountryView<'a> {
    code: &'a str,
    dfs_region: &'static str,
    comments: Option<&'a str>,
    permissions: Vec<PermissionRow<'a>>,
}

impl<'a> From<&'a Permission> for PermissionRow<'a> {
    fn from(p: &'a Permission) -> Self {
        Self {
            start_mhz: p.band.interval.start,
            end_mhz: p.band.interval.end,
            max_bandwidth_mhz: p.band.max_bandwidth,
            eirp_dbm: p.power.eirp_dbm,
            eirp_mw: p.power.value_in(PowerUnit::Milliwatt),
            flags: p.flags.iter().map(String::as_str).collect(),
            wmm_rule: p.wmm_rule.as_deref(),
            comments: p.comments(),
        }
    }
}

/// Execute `wregdb show`.
pub fn run_show(args: &ShowArgs, settings: &Settings) -> Result<u8> {
    let code = settings.country_or(args.country.as_deref())?;
    let db = load_regdb(&args.db, settings.numbers)?;
    let country = find_country(&db, &code)?;
    let channels = args.applicable.then(|| selected_channels(settings));
    print!(
        "{}",
        render_country(&code, country, channels.as_deref(), settings.format)?
    );
    Ok(0)
}

/// Render a country's permissions, optionally restricted to those that
/// admit one of `channels`.
pub fn render_country(
    code: &str,
    country: &Country,
    channels: Option<&[Channel]>,
    format: OutputFormat,
) -> Result<String> {
    let permissions: Vec<&Permission> = match channels {
        Some(channels) => applicable_permissions(country, channels),
        None => country.permissions.iter().collect(),
    };

    match format {
        OutputFormat::Json => to_json(&CountryView {
            code,
            dfs_region: dfs_label(country.dfs_region),
            comments: country.comments.as_deref(),
            permissions: permissions.into_iter().map(PermissionRow::from).collect(),
        }),
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(out, "{code} ({})", dfs_label(country.dfs_region))?;
            if let Some(comments) = &country.comments {
                for line in comments.lines() {
                    writeln!(out, "  # {line}")?;
                }
            }
            for p in permissions {
                write_permission(&mut out, p)?;
            }
            Ok(out)
        }
    }
}

fn write_permission(out: &mut String, p: &Permission) -> std::fmt::Result {
    if let Some(comments) = p.comments() {
        for line in comments.lines() {
            writeln!(out, "    # {line}")?;
        }
    }
    write!(
        out,
        "  {} MHz @ {} MHz  {} ({})",
        p.band.interval,
        p.band.max_bandwidth,
        p.power.format(PowerUnit::Dbm),
        p.power.format(PowerUnit::Milliwatt)
    )?;
    if !p.flags.is_empty() {
        let flags: Vec<&str> = p.flags.iter().map(String::as_str).collect();
        write!(out, "  {}", flags.join(", "))?;
    }
    if let Some(rule) = &p.wmm_rule {
        write!(out, "  wmmrule={rule}")?;
    }
    writeln!(out)
}
