//! # `wregdb vector`
//!
//! Usability of every selected catalog channel for one country, in catalog
//! order.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use wregdb_core::query::channel_vector;
use wregdb_core::{Channel, Country};

use crate::config::{OutputFormat, Settings};
use crate::{find_country, load_regdb, selected_channels, to_json};

/// Arguments for `wregdb vector`.
#[derive(Args, Debug)]
pub struct VectorArgs {
    /// Path to the regulatory database text file.
    pub db: PathBuf,

    /// Country code. Defaults to `country` from the config file.
    pub country: Option<String>,

    /// Only print usable channels.
    #[arg(long)]
    pub usable_only: bool,
}

#[derive(Serialize)]
struct VectorEntry {
    band: &'static str,
    channel: u32,
    start_mhz: f64,
    end_mhz: f64,
    usable: bool,
}

/// Execute `wregdb vector`.
pub fn run_vector(args: &VectorArgs, settings: &Settings) -> Result<u8> {
    let code = settings.country_or(args.country.as_deref())?;
    let db = load_regdb(&args.db, settings.numbers)?;
    let country = find_country(&db, &code)?;
    let channels = selected_channels(settings);
    print!(
        "{}",
        render_vector(country, &channels, args.usable_only, settings.format)?
    );
    Ok(0)
}

/// Render the channel vector of `country` over `channels`.
pub fn render_vector(
    country: &Country,
    channels: &[Channel],
    usable_only: bool,
    format: OutputFormat,
) -> Result<String> {
    let entries: Vec<VectorEntry> = channels
        .iter()
        .zip(channel_vector(country, channels))
        .filter(|(_, usable)| *usable || !usable_only)
        .map(|(ch, usable)| VectorEntry {
            band: ch.band.name(),
            channel: ch.id,
            start_mhz: ch.interval.start,
            end_mhz: ch.interval.end,
            usable,
        })
        .collect();

    match format {
        OutputFormat::Json => to_json(&entries),
        OutputFormat::Text => {
            let mut out = String::new();
            for e in &entries {
                writeln!(
                    out,
                    "{} {} ch{} ({} - {})",
                    if e.usable { '+' } else { '-' },
                    e.band,
                    e.channel,
                    e.start_mhz,
                    e.end_mhz
                )?;
            }
            let usable = entries.iter().filter(|e| e.usable).count();
            writeln!(out, "{usable}/{} usable", entries.len())?;
            Ok(out)
        }
    }
}
