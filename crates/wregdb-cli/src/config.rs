//! # CLI Configuration
//!
//! Optional YAML file supplied with `--config`. Every key is optional:
//!
//! ```yaml
//! bands: [24w, "52", "55", 6l]   # catalog bands to evaluate
//! numbers: strict                # or lenient
//! format: text                   # or json
//! country: DE                    # default reference country
//! ```
//!
//! Precedence: command-line flag, then config file, then built-in default.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use wregdb_core::{Band, NumberPolicy};

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable, one record per line.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Contents of the `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Band tokens (`24w`, `52`, ...) or names (`5.2G`).
    pub bands: Option<Vec<String>>,
    pub numbers: Option<NumberPolicy>,
    pub format: Option<OutputFormat>,
    pub country: Option<String>,
}

impl CliConfig {
    /// Read and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse config from YAML text. An empty document yields the defaults.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}

/// Command-line values that override the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bands: Option<Vec<String>>,
    pub lenient: bool,
    pub format: Option<OutputFormat>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bands: Vec<Band>,
    pub numbers: NumberPolicy,
    pub format: OutputFormat,
    pub country: Option<String>,
}

impl Settings {
    /// Merge overrides onto config onto defaults.
    pub fn resolve(config: CliConfig, overrides: Overrides) -> Result<Self> {
        let bands = match overrides.bands.or(config.bands) {
            Some(tokens) => parse_bands(&tokens)?,
            None => Band::all().to_vec(),
        };
        let numbers = if overrides.lenient {
            NumberPolicy::Lenient
        } else {
            config.numbers.unwrap_or_default()
        };
        Ok(Self {
            bands,
            numbers,
            format: overrides.format.or(config.format).unwrap_or_default(),
            country: config.country,
        })
    }

    /// The reference country: the explicit argument, else the configured one.
    pub fn country_or(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.country.clone())
            .context("no country given and no default `country` in config")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bands: Band::all().to_vec(),
            numbers: NumberPolicy::default(),
            format: OutputFormat::default(),
            country: None,
        }
    }
}

fn parse_bands(tokens: &[String]) -> Result<Vec<Band>> {
    tokens
        .iter()
        .map(|t| t.trim().parse::<Band>().map_err(anyhow::Error::from))
        .collect()
}
