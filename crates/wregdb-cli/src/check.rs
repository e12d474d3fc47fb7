//! # `wregdb check`
//!
//! Looks up a channel number in the catalog and reports, for each matching
//! channel, the permission that governs it in one country.
//!
//! Exit status: `0` when at least one matching channel is usable, `2` when
//! none is.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use wregdb_core::catalog;
use wregdb_core::query::{is_channel_usable, permission_for};
use wregdb_core::{Band, Channel, Country, Flag};

use crate::config::{OutputFormat, Settings};
use crate::{find_country, load_regdb, to_json};

/// Exit status when no matching channel is usable.
pub const EXIT_NOT_USABLE: u8 = 2;

/// Arguments for `wregdb check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the regulatory database text file.
    pub db: PathBuf,

    /// Country code. Defaults to `country` from the config file.
    pub country: Option<String>,

    /// Channel number, e.g. `36`.
    #[arg(long)]
    pub channel: u32,

    /// Restrict the lookup to one band (`24w`, `52`, `6l`, ...). Without it
    /// every configured band is searched.
    #[arg(long)]
    pub band: Option<Band>,
}

/// Verdict for one catalog channel.
#[derive(Debug, Serialize)]
pub struct ChannelVerdict {
    pub band: &'static str,
    pub channel: u32,
    pub start_mhz: f64,
    pub end_mhz: f64,
    pub usable: bool,
    /// Why the channel is not usable.
    pub reason: Option<&'static str>,
    /// Source text of the governing permission.
    pub permission: Option<String>,
}

/// Execute `wregdb check`.
pub fn run_check(args: &CheckArgs, settings: &Settings) -> Result<u8> {
    let code = settings.country_or(args.country.as_deref())?;
    let channels = candidate_channels(args.channel, args.band, &settings.bands);
    if channels.is_empty() {
        bail!("no catalog channel {} in the selected bands", args.channel);
    }

    let db = load_regdb(&args.db, settings.numbers)?;
    let country = find_country(&db, &code)?;
    let verdicts = check_channels(country, &channels);
    print!("{}", render_verdicts(&code, &verdicts, settings.format)?);

    Ok(if verdicts.iter().any(|v| v.usable) {
        0
    } else {
        EXIT_NOT_USABLE
    })
}

/// Catalog channels numbered `id`. An explicit band wins over the
/// configured band set.
pub fn candidate_channels(id: u32, band: Option<Band>, bands: &[Band]) -> Vec<Channel> {
    match band {
        Some(band) => catalog::find_channels(id, Some(band)),
        None => catalog::find_channels(id, None)
            .into_iter()
            .filter(|ch| bands.contains(&ch.band))
            .collect(),
    }
}

/// Evaluate each channel against `country`.
pub fn check_channels(country: &Country, channels: &[Channel]) -> Vec<ChannelVerdict> {
    channels
        .iter()
        .map(|channel| {
            let permission = permission_for(country, channel);
            let usable = is_channel_usable(country, channel);
            let reason = match permission {
                None => Some("no permission admits this channel"),
                Some(_) if !usable => Some(Flag::NoIr.as_str()),
                Some(_) => None,
            };
            ChannelVerdict {
                band: channel.band.name(),
                channel: channel.id,
                start_mhz: channel.interval.start,
                end_mhz: channel.interval.end,
                usable,
                reason,
                permission: permission.map(ToString::to_string),
            }
        })
        .collect()
}

/// Render verdicts as text or JSON.
pub fn render_verdicts(
    code: &str,
    verdicts: &[ChannelVerdict],
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(verdicts);
    }
    let mut out = String::new();
    for v in verdicts {
        write!(
            out,
            "{code} {} ch{} ({} - {}): ",
            v.band, v.channel, v.start_mhz, v.end_mhz
        )?;
        if v.usable {
            write!(out, "usable")?;
        } else {
            write!(out, "not usable")?;
        }
        if let Some(reason) = v.reason {
            write!(out, " ({reason})")?;
        }
        writeln!(out)?;
        if let Some(permission) = &v.permission {
            writeln!(out, "  {permission}")?;
        }
    }
    Ok(out)
}
