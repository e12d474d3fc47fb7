//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - [`TokenError`] describes a failure inside one field of one line
//!   (a DFS tag, a frequency band, a power literal). It carries no position.
//! - [`RegDbError::Parse`] attaches the 1-based input line number to a
//!   `TokenError`. Any parse error aborts the whole parse; no partial
//!   database is ever returned.
//! - [`QueryError`] covers caller contract violations at query time.

use thiserror::Error;

/// Top-level error type for the regulatory database.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegDbError {
    /// A line of the database text could not be parsed.
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based line number in the input text.
        line: usize,
        /// The field-level failure.
        #[source]
        source: TokenError,
    },

    /// A query was issued with arguments that violate its contract.
    #[error("query error: {0}")]
    Query(#[from] QueryError),
}

impl RegDbError {
    /// Wrap a token error with the line it occurred on.
    pub fn at_line(line: usize, source: TokenError) -> Self {
        Self::Parse { line, source }
    }
}

/// Failure to parse a single token or field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The DFS region tag is not one of the known regions.
    #[error("unknown DFS region: {0:?}")]
    UnknownDfsRegion(String),

    /// A numeric field could not be parsed.
    #[error("invalid number in {field}: {value:?}")]
    InvalidNumber {
        /// Which field held the literal (e.g. `start`, `bandwidth`, `power`).
        field: &'static str,
        /// The offending literal.
        value: String,
    },

    /// A frequency band token did not match `<start>-<end>@<bandwidth>`.
    #[error("malformed frequency band: {0:?}")]
    MalformedFrequencyBand(String),

    /// A frequency band's start lies above its end.
    #[error("inverted frequency range: {start} > {end}")]
    InvertedRange {
        /// Lower bound as written.
        start: String,
        /// Upper bound as written.
        end: String,
    },

    /// A permission line is missing a required field or parentheses.
    #[error("malformed permission: {0}")]
    MalformedPermission(String),

    /// The band token is not in the catalog.
    #[error("unknown band: {0:?}")]
    UnknownBand(String),

    /// The comparison relation is not `same`, `superset` or `subset`.
    #[error("unknown relation: {0:?}")]
    UnknownRelation(String),
}

/// Caller contract violations detected at query time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Two channel vectors of different lengths were compared.
    #[error("channel vectors differ in length: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left-hand vector.
        left: usize,
        /// Length of the right-hand vector.
        right: usize,
    },

    /// No entry with this country code exists in the database.
    #[error("unknown country code: {0:?}")]
    UnknownCountry(String),
}
