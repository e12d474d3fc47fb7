//! # wregdb-core — Wireless Regulatory Database Model
//!
//! Parses the line-oriented `regulatory.db` text format (one block per
//! country, each block listing frequency-band permissions with power limits,
//! flags and an optional DFS region) and answers channel permission queries
//! against the parsed model.
//!
//! ## Data Flow
//!
//! ```text
//! raw text ──► parser::parse_regdb ──► RegDb (immutable) ──► query::*
//! ```
//!
//! The model is built once per parse call and is read-only afterwards.
//! Query functions are pure and take shared references, so a single `RegDb`
//! may be queried from any number of threads without locking.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `wregdb-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Token-level types implement `FromStr`; all public model types derive
//!   `Debug`, `Clone` and `Serialize`.

pub mod catalog;
pub mod channel;
pub mod country;
pub mod dfs;
pub mod error;
pub mod flags;
pub mod freqband;
pub mod interval;
pub mod parser;
pub mod permission;
pub mod power;
pub mod query;

// Re-export primary types for ergonomic imports.
pub use channel::{Band, Channel};
pub use country::{Country, RegDb};
pub use dfs::DfsRegion;
pub use error::{QueryError, RegDbError, TokenError};
pub use flags::Flag;
pub use freqband::FrequencyBand;
pub use interval::{Interval, Overlap};
pub use parser::{parse_regdb, parse_regdb_with, NumberPolicy, ParseOptions};
pub use permission::Permission;
pub use power::{PowerUnit, PowerValue};
pub use query::Relation;
