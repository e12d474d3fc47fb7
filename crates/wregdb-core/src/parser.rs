//! # Regulatory Database Parser
//!
//! Single linear pass over the `regulatory.db` text. Each line is
//! classified, in priority order, as:
//!
//! 1. blank: ignored, pending comments are kept;
//! 2. comment (`#` after optional indentation): appended to the pending
//!    comment buffer with the leading `# ` or `#` removed;
//! 3. header (no leading tab): closes the open block and opens a new one.
//!    `country XX[: DFS-TAG]` opens a country block; any other header
//!    (e.g. `wmmrule ETSI:`) opens a block that is skipped entirely;
//! 4. tab-indented line starting with `(`: a permission of the open
//!    country block;
//! 5. any other tab-indented line: ignored.
//!
//! Pending comments are consumed by the next header or permission line.
//!
//! ## Failure Model
//!
//! Any error aborts the parse and no partial database is returned. Under
//! [`NumberPolicy::Lenient`], malformed numeric literals are stored as NaN
//! instead of failing; unknown DFS tags and structural errors are fatal
//! under both policies.

use serde::{Deserialize, Serialize};

use crate::country::{Country, RegDb};
use crate::dfs::DfsRegion;
use crate::error::{RegDbError, TokenError};
use crate::permission::Permission;

const COUNTRY_PREFIX: &str = "country";

/// How malformed numeric literals are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberPolicy {
    /// Reject the whole input.
    #[default]
    Strict,
    /// Store NaN and continue. NaN bands admit no channel.
    Lenient,
}

/// Options controlling a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParseOptions {
    pub numbers: NumberPolicy,
}

/// Parse a database with default (strict) options.
pub fn parse_regdb(text: &str) -> Result<RegDb, RegDbError> {
    parse_regdb_with(text, &ParseOptions::default())
}

/// Parse a database.
pub fn parse_regdb_with(text: &str, options: &ParseOptions) -> Result<RegDb, RegDbError> {
    let mut state = ParseState::default();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') {
            let comment = line
                .strip_prefix("# ")
                .or_else(|| line.strip_prefix('#'))
                .unwrap_or(line);
            state.pending_comments.push(comment.to_string());
        } else if !raw.starts_with('\t') {
            state.commit();
            let comments = state.take_comments();
            let block = open_block(line, comments).map_err(|e| RegDbError::at_line(line_no, e))?;
            state.block = Some(block);
        } else if line.starts_with('(') {
            let comments = state.take_comments();
            match &mut state.block {
                Some(Block::Country { country, .. }) => {
                    let permission = Permission::parse(line, comments, options.numbers)
                        .map_err(|e| RegDbError::at_line(line_no, e))?;
                    country.permissions.push(permission);
                }
                Some(Block::Other { header }) => {
                    tracing::trace!(line = line_no, %header, "skipping permission outside country block");
                }
                None => {
                    tracing::trace!(line = line_no, "skipping permission before first header");
                }
            }
        } else {
            tracing::trace!(line = line_no, "skipping indented directive");
        }
    }

    state.commit();
    tracing::debug!(countries = state.entries.len(), "parsed regulatory database");
    Ok(RegDb::new(state.entries))
}

/// Parse a numeric literal according to `policy`.
///
/// Strict parsing also rejects non-finite literals such as `inf` or `NaN`.
pub(crate) fn parse_number(
    field: &'static str,
    literal: &str,
    policy: NumberPolicy,
) -> Result<f64, TokenError> {
    match (literal.parse::<f64>(), policy) {
        (Ok(v), _) if v.is_finite() => Ok(v),
        (_, NumberPolicy::Lenient) => Ok(f64::NAN),
        (_, NumberPolicy::Strict) => Err(TokenError::InvalidNumber {
            field,
            value: literal.to_string(),
        }),
    }
}

/// The block opened by the most recent header line.
enum Block {
    Country { code: String, country: Country },
    Other { header: String },
}

#[derive(Default)]
struct ParseState {
    entries: Vec<(String, Country)>,
    pending_comments: Vec<String>,
    block: Option<Block>,
}

impl ParseState {
    /// Close the open block, appending it to the output if it is a country.
    fn commit(&mut self) {
        match self.block.take() {
            Some(Block::Country { code, country }) => {
                tracing::debug!(
                    %code,
                    permissions = country.permissions.len(),
                    dfs_region = %country.dfs_region,
                    "committed country block"
                );
                self.entries.push((code, country));
            }
            Some(Block::Other { header }) => {
                tracing::trace!(%header, "dropped non-country block");
            }
            None => {}
        }
    }

    /// Drain the pending comments into a single newline-joined string.
    fn take_comments(&mut self) -> Option<String> {
        let joined = self.pending_comments.join("\n");
        self.pending_comments.clear();
        (!joined.is_empty()).then_some(joined)
    }
}

/// Interpret a header line.
fn open_block(header: &str, comments: Option<String>) -> Result<Block, TokenError> {
    let (name, dfs_token) = match header.split_once(':') {
        Some((name, rest)) => (name, rest.split(':').next().unwrap_or("").trim()),
        None => (header, ""),
    };

    let code = name
        .strip_prefix(COUNTRY_PREFIX)
        .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|code| !code.is_empty());

    let Some(code) = code else {
        return Ok(Block::Other {
            header: header.to_string(),
        });
    };

    let dfs_region: DfsRegion = dfs_token.parse()?;
    Ok(Block::Country {
        code: code.to_string(),
        country: Country::new(dfs_region, Vec::new(), comments),
    })
}
