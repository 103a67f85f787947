//! Tabular summary of definitions.
//!
//! Each definition becomes one row of `name`, `queue`, `target_client` and
//! `ccsid`. The text form joins the fields with a separator (`|` by default),
//! one row per line and no header.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregation;
use crate::model::{Definition, TargetClient};
use crate::source::read_lines;

/// Default field separator for the text report.
pub const DEFAULT_SEPARATOR: &str = "|";

/// Output encoding for a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            other => Err(anyhow!("Invalid format '{}'. Allowed: text, json, yaml", other)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a report should be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Field separator used by the text format.
    pub separator: String,
    pub format: ReportFormat,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { separator: DEFAULT_SEPARATOR.to_string(), format: ReportFormat::Text }
    }
}

impl ReportOptions {
    pub fn new(separator: impl Into<String>, format: ReportFormat) -> Self {
        Self { separator: separator.into(), format }
    }
}

/// One line of the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub name: String,
    pub queue: String,
    pub target_client: TargetClient,
    pub ccsid: String,
}

impl ReportRow {
    /// Join the fields with `separator`, without a trailing newline.
    pub fn to_line(&self, separator: &str) -> String {
        [self.name.as_str(), self.queue.as_str(), self.target_client.as_str(), self.ccsid.as_str()]
            .join(separator)
    }
}

impl From<&Definition> for ReportRow {
    fn from(def: &Definition) -> Self {
        Self {
            name: def.name.clone(),
            queue: def.queue().to_string(),
            target_client: def.target_client(),
            ccsid: def.ccsid().to_string(),
        }
    }
}

/// Build report rows, preserving the order of `definitions`.
pub fn build_rows(definitions: &[Definition]) -> Vec<ReportRow> {
    definitions.iter().map(ReportRow::from).collect()
}

/// Render rows as newline-terminated text lines.
pub fn render_text(rows: &[ReportRow], separator: &str) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&row.to_line(separator));
        out.push('\n');
    }
    out
}

/// Read and fold a bindings file in one step.
///
/// I/O failures are returned; unparseable lines end up in
/// [`Aggregation::skipped`].
pub fn load_bindings(path: impl AsRef<Path>) -> Result<Aggregation> {
    let lines = read_lines(path)?;
    let mut aggregation = Aggregation::new();
    aggregation.extend(&lines);
    Ok(aggregation)
}
