//! Tests for error handling, suggestions and exit codes.

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

fn kiln(home: &std::path::Path) -> Command {
    let mut cmd = cargo_bin_cmd!("kiln");
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("KILN_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_framework_is_user_error() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .args(["new", "demo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("framework"));
}

#[test]
fn test_invalid_project_name() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .args(["new", "Bad Name", "-f", "react"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Bad Name"));
}

#[test]
fn test_unknown_template_is_not_found() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .args(["new", "demo", "--template", "cobol-starter"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cobol-starter"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_unknown_framework_value_is_rejected_by_parser() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .args(["new", "demo", "--framework", "angular"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("angular"));
}

#[test]
fn test_preview_show_unknown_path_lists_files() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .args(["preview", "demo", "-f", "node", "--show", "src/nope.ts"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("src/nope.ts"))
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn test_inspect_missing_archive() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .args(["inspect", "absent-scaffold.zip"])
        .assert()
        .code(3);
}

#[test]
fn test_inspect_corrupt_archive() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("junk.zip"), b"definitely not a zip").unwrap();
    kiln(temp.path())
        .args(["inspect", "junk.zip"])
        .assert()
        .code(2);
}

#[test]
fn test_unreadable_manifest_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("kiln.json"), "{ not json").unwrap();
    kiln(temp.path())
        .args(["new", "-m", "kiln.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("kiln.json"));
}

#[test]
fn test_missing_explicit_config_file() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .args(["--config", "nowhere.toml", "templates"])
        .assert()
        .code(4);
}

#[test]
fn test_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .args(["config", "get", "defaults.colour"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("defaults.framework"));
}

#[test]
fn test_verbose_shows_no_hint() {
    let temp = TempDir::new().unwrap();
    kiln(temp.path())
        .args(["-v", "new", "demo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}
