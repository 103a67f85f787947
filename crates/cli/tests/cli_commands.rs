use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

const SAMPLE: &str = "\
# comment
A/_/0/Content=7
A/_/0/Type=QU
A/_/1/Content=0
A/_/1/Type=TC
B/_/0/Content=1208
B/_/0/Type=CCS
";

/// `report` on the sample fixture prints exactly the pipe-delimited summary.
#[test]
fn report_prints_sorted_pipe_rows() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(".bindings");
    fs::write(&path, SAMPLE).unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("bindings-report")
        .arg("report")
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout("A|7|JMS|\nB||MQ|1208\n");
}

/// Relative paths resolve against the working directory.
#[test]
fn report_accepts_relative_path() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join(".bindings"), SAMPLE).unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("bindings-report")
        .current_dir(dir.path())
        .args(["report", "--file", ".bindings", "--separator", ";"])
        .assert()
        .success()
        .stdout("A;7;JMS;\nB;;MQ;1208\n");
}

/// Verbose logging goes to stderr and leaves stdout untouched.
#[test]
fn verbose_logging_does_not_pollute_stdout() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(".bindings");
    fs::write(&path, SAMPLE).unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("bindings-report")
        .env_remove("RUST_LOG")
        .arg("-vv")
        .arg("report")
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout("A|7|JMS|\nB||MQ|1208\n")
        .stderr(predicate::str::contains("skipping line"));
}

/// A missing input file is fatal and produces no report output.
#[test]
fn report_fails_when_file_missing() {
    let dir = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("bindings-report")
        .arg("report")
        .arg("--file")
        .arg(dir.path().join("nope.bindings"))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Failed to open bindings file"));
}

#[test]
fn report_rejects_unknown_format() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(".bindings");
    fs::write(&path, SAMPLE).unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("bindings-report")
        .arg("report")
        .arg("--file")
        .arg(&path)
        .arg("--format")
        .arg("csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn show_fails_for_unknown_binding() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(".bindings");
    fs::write(&path, SAMPLE).unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("bindings-report")
        .arg("show")
        .arg("--file")
        .arg(&path)
        .arg("--name")
        .arg("MISSING")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No definition named 'MISSING'"));
}

#[test]
fn skipped_json_is_valid() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(".bindings");
    fs::write(&path, SAMPLE).unwrap();

    let output = assert_cmd::cargo::cargo_bin_cmd!("bindings-report")
        .arg("skipped")
        .arg("--file")
        .arg(&path)
        .arg("--json")
        .output()
        .expect("run");
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["skipped"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["ignored_attributes"], 0);
}
