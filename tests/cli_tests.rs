//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stylemigrate() -> Command {
    let mut cmd = Command::cargo_bin("stylemigrate").unwrap();
    cmd.env_remove("STYLEMIGRATE_FALLBACK_STYLE").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version_flag() {
    stylemigrate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stylemigrate"));
}

#[test]
fn test_help_flag() {
    stylemigrate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Resolve, validate and migrate clang-format style configurations",
        ));
}

#[test]
fn test_migrate_from_stdin() {
    stylemigrate()
        .args(["migrate", "--from", "16", "--to", "16"])
        .write_stdin("BasedOnStyle: Google\nColumnLimit: 100\n")
        .assert()
        .success()
        .stdout("---\nLanguage: Cpp\nBasedOnStyle: google\nColumnLimit: 100\n...\n");
}

#[test]
fn test_migrate_warnings_go_to_stderr() {
    stylemigrate()
        .args(["migrate", "--from", "16", "--to", "12"])
        .write_stdin("InsertBraces: true\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("InsertBraces").not())
        .stderr(predicate::str::contains("Option InsertBraces was dropped"));
}

#[test]
fn test_migrate_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join(".clang-format");
    let output = temp_dir.path().join("migrated/.clang-format");
    fs::write(&input, "BasedOnStyle: Chromium\nPointerBindsToType: false\n").unwrap();

    stylemigrate()
        .args(["migrate", "--from", "3.4", "--to", "v16.0.6"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("---\nLanguage: Cpp\nBasedOnStyle: chromium\n"));
    assert!(written.contains("PointerAlignment: Right\n"));
}

#[test]
fn test_fallback_style_from_environment() {
    stylemigrate()
        .env("STYLEMIGRATE_FALLBACK_STYLE", "google")
        .args(["migrate", "--from", "12", "--to", "16"])
        .write_stdin("ColumnLimit: 100\n")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("---\nLanguage: Cpp\nBasedOnStyle: google\n")
                .and(predicate::str::contains("ColumnLimit: 100\n")),
        );
}

#[test]
fn test_check_exit_codes() {
    stylemigrate()
        .args(["check", "--version", "16"])
        .write_stdin("Frobnicate: true\n")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown option: 'Frobnicate'"));

    stylemigrate()
        .args(["check", "--version", "16", "--language", "js"])
        .write_stdin("Language: JavaScript\nInsertTrailingCommas: Wrapped\nBinPackArguments: true\n")
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("trailing-comma-bin-packing"));

    stylemigrate()
        .args(["check", "--version", "13"])
        .write_stdin("ColumnLimit: 100\n")
        .assert()
        .failure()
        .code(11);
}

#[test]
fn test_check_prints_minimal_document() {
    stylemigrate()
        .args(["check", "--version", "3.6"])
        .write_stdin("BasedOnStyle: Mozilla\nColumnLimit: 80\nIndentWidth: 3\n")
        .assert()
        .success()
        .stdout("---\nLanguage: Cpp\nBasedOnStyle: mozilla\nIndentWidth: 3\n...\n");
}

#[test]
fn test_resolve_diff() {
    stylemigrate()
        .args(["resolve", "--version", "12", "--style", "google", "--diff-from", "google"])
        .assert()
        .success()
        .stdout("---\nLanguage: Cpp\nBasedOnStyle: google\n...\n");

    stylemigrate()
        .args(["resolve", "--version", "3.6", "--style", "microsoft"])
        .assert()
        .failure()
        .code(8);
}

#[test]
fn test_styles() {
    stylemigrate()
        .args(["styles", "--version", "3.4"])
        .assert()
        .success()
        .stdout("chromium\ngoogle\nllvm\nmozilla\nwebkit\n");

    stylemigrate()
        .args(["styles", "--from", "16", "--to", "3.6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gnu\n").and(predicate::str::contains("microsoft").not()));
}

#[test]
fn test_compatible() {
    stylemigrate()
        .arg("compatible")
        .write_stdin("IndentWidth: 4\n")
        .assert()
        .success()
        .stdout("3.4\n3.6\n12\n16\n");
}

#[test]
fn test_batch_missing_manifest() {
    let temp_dir = TempDir::new().unwrap();
    stylemigrate()
        .current_dir(temp_dir.path())
        .arg("batch")
        .assert()
        .failure()
        .code(12)
        .stderr(predicate::str::contains("Manifest file not found"));
}

#[test]
fn test_batch_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.yaml"), "ColumnLimit: 100\n").unwrap();
    fs::write(
        temp_dir.path().join("stylemigrate.yaml"),
        "from: 12\nto: 16\nfiles:\n  - input: a.yaml\n    output: out/a.yaml\n",
    )
    .unwrap();

    stylemigrate()
        .current_dir(temp_dir.path())
        .args(["batch", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Dry run preview"));
    assert!(!temp_dir.path().join("out").exists());

    stylemigrate()
        .current_dir(temp_dir.path())
        .arg("batch")
        .assert()
        .success();
    assert!(temp_dir.path().join("out/a.yaml").exists());
}
