use anyhow::{Context, Result};
use bindings_core::report::{build_rows, render_text, ReportFormat, ReportOptions};

use crate::commands::load_aggregation;

/// Render the sorted summary of `file` according to `options`.
pub fn report_output(file: &str, options: &ReportOptions) -> Result<String> {
    let definitions = load_aggregation(file)?.into_sorted();
    let rows = build_rows(&definitions);

    let output = match options.format {
        ReportFormat::Text => render_text(&rows, &options.separator),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(&rows)
                .context("Failed to serialize report to JSON")?;
            json.push('\n');
            json
        }
        ReportFormat::Yaml => {
            serde_yaml::to_string(&rows).context("Failed to serialize report to YAML")?
        }
    };
    Ok(output)
}

/// Print the summary of `file` to stdout.
pub fn report_command(file: &str, options: &ReportOptions) -> Result<()> {
    let output = report_output(file, options)?;
    print!("{output}");
    Ok(())
}
