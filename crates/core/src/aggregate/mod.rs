//! Folding parsed lines into definitions.
//!
//! Every data line updates one field of one property of one definition, so
//! the last assignment to a given (name, slot, attribute) wins. Lines that do
//! not parse are dropped; the fold keeps a note of them for callers that want
//! to see what was skipped.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::model::{sort_by_name, Definition};
use crate::parser::{parse_line, ParseError};

/// A line the fold ignored, with its 1-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    pub line_number: usize,
    pub reason: ParseError,
    pub raw: String,
}

/// Accumulated state of a fold over bindings lines.
#[derive(Debug, Default)]
pub struct Aggregation {
    definitions: BTreeMap<String, Definition>,
    skipped: Vec<SkippedLine>,
    ignored_attributes: usize,
    lines_seen: usize,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one raw line into the aggregation.
    pub fn push_line(&mut self, line: &str) {
        self.lines_seen += 1;
        let parsed = match parse_line(line) {
            Ok(parsed) => parsed,
            Err(reason) => {
                debug!(line_number = self.lines_seen, %reason, "skipping line");
                self.skipped.push(SkippedLine {
                    line_number: self.lines_seen,
                    reason,
                    raw: line.to_string(),
                });
                return;
            }
        };

        let definition = self
            .definitions
            .entry(parsed.record_key.to_string())
            .or_insert_with(|| Definition::new(parsed.record_key));

        if !definition.update_property(parsed.slot, parsed.attr_name, parsed.attr_value) {
            trace!(
                line_number = self.lines_seen,
                attr = parsed.attr_name,
                "ignoring unknown attribute"
            );
            self.ignored_attributes += 1;
        }
    }

    /// Fold every line of `lines`, in order.
    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref());
        }
    }

    /// Definitions built so far, keyed by name.
    pub fn definitions(&self) -> &BTreeMap<String, Definition> {
        &self.definitions
    }

    /// Lines that failed to parse, in input order.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Count of assignments whose attribute name was not recognised.
    pub fn ignored_attributes(&self) -> usize {
        self.ignored_attributes
    }

    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// Consume the fold and return the definitions sorted by name.
    pub fn into_sorted(self) -> Vec<Definition> {
        debug!(
            definitions = self.definitions.len(),
            skipped = self.skipped.len(),
            "aggregation finished"
        );
        let mut definitions: Vec<Definition> = self.definitions.into_values().collect();
        sort_by_name(&mut definitions);
        definitions
    }
}

/// Fold `lines` into a map from record key to definition, discarding any line
/// that does not parse.
pub fn aggregate<I, S>(lines: I) -> BTreeMap<String, Definition>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregation = Aggregation::new();
    aggregation.extend(lines);
    aggregation.definitions
}

/// Fold `lines` and return the definitions sorted by name.
pub fn parse_lines<I, S>(lines: I) -> Vec<Definition>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregation = Aggregation::new();
    aggregation.extend(lines);
    aggregation.into_sorted()
}
