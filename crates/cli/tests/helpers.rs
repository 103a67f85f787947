use std::path::Path;

use bindings_report::{default_log_level, init_logging, resolve_input_path};
use tempfile::tempdir;

#[test]
fn resolve_input_path_keeps_absolute_paths() {
    let tmp = tempdir().expect("tempdir");
    let abs = tmp.path().join("missing.bindings");
    let resolved = resolve_input_path(abs.to_str().unwrap()).expect("resolve");
    assert_eq!(resolved, abs);
}

#[test]
fn resolve_input_path_joins_missing_relative_paths_onto_cwd() {
    let cwd = std::env::current_dir().expect("cwd");
    let resolved = resolve_input_path("definitely/not/here.bindings").expect("resolve");
    assert_eq!(resolved, cwd.join(Path::new("definitely/not/here.bindings")));
}

#[test]
fn verbosity_maps_to_levels() {
    assert_eq!(default_log_level(0), "warn");
    assert_eq!(default_log_level(1), "info");
    assert_eq!(default_log_level(2), "debug");
    assert_eq!(default_log_level(7), "trace");
}

#[test]
fn init_logging_is_idempotent() {
    init_logging(0);
    init_logging(2);
}
