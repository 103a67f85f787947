//! Line grammar for bindings exports.
//!
//! A data line looks like `jndiname/RefAddr/slot/Attr=value`. The second
//! field is always present in the export but carries nothing we use.

use serde::Serialize;
use thiserror::Error;

/// Number of `/`-separated fields in a data line.
const FIELD_COUNT: usize = 4;

/// Reasons a line is not a property assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseError {
    #[error("line is a comment")]
    CommentLine,

    #[error("expected 4 '/'-separated fields, found {found}")]
    MalformedFieldCount { found: usize },

    #[error("expected a single 'name=value' pair, found {found} '='-separated parts")]
    MalformedAttribute { found: usize },
}

/// One property assignment pulled out of a data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub record_key: &'a str,
    pub slot: &'a str,
    pub attr_name: &'a str,
    pub attr_value: &'a str,
}

/// Parse a single line of a bindings export.
///
/// Field contents are not interpreted: empty keys, slots, names and values
/// are all accepted.
pub fn parse_line(line: &str) -> Result<ParsedLine<'_>, ParseError> {
    if line.starts_with('#') {
        return Err(ParseError::CommentLine);
    }

    let fields: Vec<&str> = line.split('/').collect();
    if fields.len() != FIELD_COUNT {
        return Err(ParseError::MalformedFieldCount { found: fields.len() });
    }

    let pair: Vec<&str> = fields[3].split('=').collect();
    let [attr_name, attr_value] = pair[..] else {
        return Err(ParseError::MalformedAttribute { found: pair.len() });
    };

    Ok(ParsedLine { record_key: fields[0], slot: fields[2], attr_name, attr_value })
}
