//! CLI-level tests for argument handling and compiler lookup
//!
//! Real compiles need g++ plus the HDF5 serial archives installed, so these
//! tests only exercise the paths that stop before the compiler runs.

use assert_cmd::Command;
use predicates::prelude::*;

fn gcch5() -> Command {
    Command::cargo_bin("gcch5").unwrap()
}

#[test]
fn no_arguments_is_a_usage_error() {
    gcch5()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_positional_arguments() {
    gcch5()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SOURCE"))
        .stdout(predicate::str::contains("OUTPUT"))
        .stdout(predicate::str::contains("SELECTOR"));
}

#[test]
fn version_prints_package_version() {
    gcch5()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_compiler_reports_hint_before_spawning() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("prog.cpp");
    std::fs::write(&source, "int main() { return 0; }\n").unwrap();

    // An empty PATH makes g++ unresolvable regardless of the host setup
    gcch5()
        .arg(&source)
        .env("PATH", dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Missing tool: g++"))
        .stderr(predicate::str::contains("HINT:"));
}

#[test]
fn missing_compiler_error_is_raised_for_any_selector() {
    let dir = tempfile::tempdir().unwrap();

    gcch5()
        .args(["prog.cpp", "prog.bin", "opt"])
        .env("PATH", dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Missing tool: g++"));
}
