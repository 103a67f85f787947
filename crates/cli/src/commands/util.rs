use anyhow::Result;
use bindings_core::report::load_bindings;
use bindings_core::Aggregation;
use tracing::info;

use crate::resolve_input_path;

/// Resolve `file` and fold it into an aggregation (delegates to core helper).
pub fn load_aggregation(file: &str) -> Result<Aggregation> {
    let path = resolve_input_path(file)?;
    let aggregation = load_bindings(&path)?;
    info!(
        path = %path.display(),
        definitions = aggregation.definitions().len(),
        skipped = aggregation.skipped().len(),
        "loaded bindings"
    );
    Ok(aggregation)
}
