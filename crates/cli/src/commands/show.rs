use anyhow::{anyhow, Context, Result};

use crate::commands::load_aggregation;

/// Describe a single definition, with every property it carries.
pub fn show_output(file: &str, name: &str, json: bool) -> Result<String> {
    let aggregation = load_aggregation(file)?;
    let definition = aggregation
        .definitions()
        .get(name)
        .ok_or_else(|| anyhow!("No definition named '{}' in {}", name, file))?;

    if json {
        let serialized = serde_json::to_string_pretty(definition)
            .context("Failed to serialize definition to JSON")?;
        return Ok(format!("{serialized}\n"));
    }

    let mut out = format!("{definition}\n");
    out.push_str(&format!("  Queue: {}\n", definition.queue()));
    out.push_str(&format!("  Target client: {}\n", definition.target_client()));
    out.push_str(&format!("  CCSID: {}\n", definition.ccsid()));
    Ok(out)
}

pub fn show_command(file: &str, name: &str, json: bool) -> Result<()> {
    print!("{}", show_output(file, name, json)?);
    Ok(())
}
