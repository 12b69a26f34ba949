//! Batch manifest loading and execution tests

use std::fs;
use std::path::Path;
use stylemigrate::config::Manifest;
use stylemigrate::error::StyleError;
use stylemigrate::operations::BatchOperation;
use stylemigrate::system::{MockSystem, RealSystem, System as _};
use tempfile::TempDir;

#[test]
fn test_valid_manifest_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = temp_dir.path().join("stylemigrate.yaml");

    let manifest_content = r#"
from: "3.6"
to: "16"
fallbackStyle: Google
files:
  - input: "core/.clang-format"
    output: "out/core.clang-format"
  - input: "web/.clang-format"
    output: "out/web.clang-format"
    language: JavaScript
    skipSame: false
"#;
    fs::write(&manifest_path, manifest_content).unwrap();

    let system = RealSystem::new();
    let manifest = Manifest::load_from_file(&system, &manifest_path).unwrap();
    assert_eq!(manifest.files.len(), 2);
    assert_eq!(manifest.defaults.fallback_style.as_deref(), Some("Google"));

    let jobs = manifest.jobs(temp_dir.path()).unwrap();
    assert_eq!(jobs[0].options.fallback_style, "Google");
    assert!(jobs[0].options.skip_same);
    assert!(!jobs[1].options.skip_same);
    assert_eq!(jobs[1].output, temp_dir.path().join("out/web.clang-format"));
}

#[test]
fn test_manifest_schema_errors_name_the_path() {
    let system = MockSystem::new()
        .with_file(
            "/repo/stylemigrate.yaml",
            b"from: 12\nto: 16\nfiles:\n  - input: a\n    output: b\n    colour: red\n",
        )
        .unwrap();
    let err = Manifest::load_from_file(&system, Path::new("/repo/stylemigrate.yaml")).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("/files/0"), "{message}");
    assert!(message.contains("colour"), "{message}");
    assert_eq!(err.downcast_ref::<StyleError>().unwrap().exit_code(), 12);
}

#[test]
fn test_manifest_semantic_errors() {
    let cases = [
        ("from: 12\nto: 15\nfiles:\n  - input: a\n    output: b\n", "'15'"),
        ("from: 12\nto: 16\nfiles:\n  - input: ../a\n    output: b\n", "traversal"),
        ("to: 16\nfiles:\n  - input: a\n    output: b\n", "'from'"),
        (
            "from: 12\nto: 16\nlanguage: Klingon\nfiles:\n  - input: a\n    output: b\n",
            "Klingon",
        ),
    ];
    for (content, expected) in cases {
        let system = MockSystem::new()
            .with_file("/repo/stylemigrate.yaml", content.as_bytes())
            .unwrap();
        let err = Manifest::load_from_file(&system, Path::new("/repo/stylemigrate.yaml")).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains(expected), "{expected}: {message}");
    }
}

#[test]
fn test_batch_runs_on_real_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("core")).unwrap();
    fs::write(root.join("core/.clang-format"), "BasedOnStyle: WebKit\nIndentWidth: 8\n").unwrap();
    fs::write(
        root.join("stylemigrate.yaml"),
        "from: 3.6\nto: 16\nfiles:\n  - input: core/.clang-format\n    output: out/.clang-format\n",
    )
    .unwrap();

    let system = RealSystem::new();
    let manifest = root.join("stylemigrate.yaml");
    let outcome = BatchOperation::new(manifest.to_str().unwrap(), false, &system)
        .unwrap()
        .execute()
        .unwrap();
    assert_eq!(outcome.files_written, 1);

    let written = fs::read_to_string(root.join("out/.clang-format")).unwrap();
    assert!(written.starts_with("---\nLanguage: Cpp\nBasedOnStyle: webkit\n"));
    assert!(written.contains("IndentWidth: 8\n"));
    assert!(written.ends_with("...\n"));
}

#[test]
fn test_batch_stops_at_the_first_failure() {
    let manifest = "from: 16\nto: 12\nfiles:\n  - input: good\n    output: out/good\n  - input: bad\n    output: out/bad\n  - input: later\n    output: out/later\n";
    let system = MockSystem::new()
        .with_file("/repo/stylemigrate.yaml", manifest.as_bytes())
        .unwrap()
        .with_file("/repo/good", b"ColumnLimit: 100\n")
        .unwrap()
        .with_file("/repo/bad", b"ColumnLimit: wide\n")
        .unwrap()
        .with_file("/repo/later", b"ColumnLimit: 90\n")
        .unwrap();
    let err = BatchOperation::new("/repo/stylemigrate.yaml", false, &system)
        .unwrap()
        .execute()
        .unwrap_err();

    assert_eq!(err.downcast_ref::<StyleError>().unwrap().exit_code(), 3);
    assert!(system.is_file(Path::new("/repo/out/good")));
    assert!(!system.exists(Path::new("/repo/out/later")));
}
