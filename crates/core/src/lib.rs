//! bindings-core
//!
//! Core library for summarising JNDI bindings exports produced by
//! message-queue administration tooling.
//!
//! This crate defines the data model (definitions and their properties), the
//! line grammar, the fold that groups lines into definitions, and the report
//! rows derived from them.
//!
//! All substantive logic lives here so it is testable and reusable from
//! frontends other than the CLI.

pub mod model;
pub mod parser;
pub mod aggregate;
pub mod source;
pub mod report;

pub use aggregate::{aggregate, parse_lines, Aggregation, SkippedLine};
pub use model::{Definition, Property, Slot, TargetClient};
pub use parser::{parse_line, ParseError, ParsedLine};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
