use anyhow::{Context, Result};
use bindings_core::SkippedLine;
use serde::Serialize;

use crate::commands::load_aggregation;

/// Everything the fold dropped or ignored, as emitted by `skipped --json`.
#[derive(Debug, Serialize)]
pub struct SkippedSummary<'a> {
    pub lines_seen: usize,
    pub skipped: &'a [SkippedLine],
    pub ignored_attributes: usize,
}

/// List the lines of `file` that were not property assignments, and why.
pub fn skipped_output(file: &str, json: bool) -> Result<String> {
    let aggregation = load_aggregation(file)?;
    let skipped = aggregation.skipped();

    if json {
        let summary = SkippedSummary {
            lines_seen: aggregation.lines_seen(),
            skipped,
            ignored_attributes: aggregation.ignored_attributes(),
        };
        let serialized = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize skipped lines to JSON")?;
        return Ok(format!("{serialized}\n"));
    }

    let mut out = format!("Skipped lines ({} of {}):\n", skipped.len(), aggregation.lines_seen());
    if skipped.is_empty() {
        out.push_str("  (none)\n");
    } else {
        for line in skipped {
            out.push_str(&format!("  {}: {} [{}]\n", line.line_number, line.reason, line.raw));
        }
    }
    if aggregation.ignored_attributes() > 0 {
        out.push_str(&format!(
            "Ignored assignments with unknown attribute names: {}\n",
            aggregation.ignored_attributes()
        ));
    }
    Ok(out)
}

pub fn skipped_command(file: &str, json: bool) -> Result<()> {
    print!("{}", skipped_output(file, json)?);
    Ok(())
}
