//! Manifest loading and parsing

use crate::config::Manifest;
use crate::error::StyleError;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Load, parse and validate a manifest file
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, is not valid
/// YAML, fails the JSON Schema or fails semantic validation.
pub fn load_manifest(system: &dyn System, path: &Path) -> Result<Manifest> {
    if !system.is_file(path) {
        return Err(StyleError::configuration(format!(
            "Manifest file not found: {}\n\
            Create a stylemigrate.yaml file or specify a different path with --manifest",
            path.display()
        ))
        .into());
    }

    let content = system
        .read_to_string(path)
        .map_err(|e| StyleError::filesystem(e.to_string()))
        .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;

    parse_manifest(&content)
        .with_context(|| format!("Invalid manifest file: {}", path.display()))
}

/// Parse and validate manifest text
///
/// # Errors
///
/// Returns a `Configuration` error for YAML syntax errors, schema
/// violations and semantic problems.
pub fn parse_manifest(content: &str) -> Result<Manifest, StyleError> {
    let raw: serde_json::Value = serde_yaml::from_str(content)
        .map_err(|e| StyleError::configuration(format!("Failed to parse YAML: {e}")))?;

    crate::config::schema::validate_against_schema(&raw)?;

    let manifest: Manifest = serde_json::from_value(raw)
        .map_err(|e| StyleError::configuration(format!("Failed to read manifest: {e}")))?;

    crate::config::validation::validate_manifest(&manifest)?;

    Ok(manifest)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    const MANIFEST: &str = r#"
from: "3.6"
to: 16
language: Cpp
files:
  - input: core/.clang-format
    output: out/core.clang-format
  - input: java/.clang-format
    output: out/java.clang-format
    language: Java
    skipSame: false
"#;

    #[test]
    fn loads_a_valid_manifest() {
        let system = MockSystem::new()
            .with_file("/repo/stylemigrate.yaml", MANIFEST.as_bytes())
            .unwrap();
        let manifest = load_manifest(&system, Path::new("/repo/stylemigrate.yaml")).unwrap();
        assert_eq!(manifest.files.len(), 2);
        assert_eq!(manifest.defaults.to.as_deref(), Some("16"));
        assert_eq!(manifest.files[1].settings.language.as_deref(), Some("Java"));
        assert_eq!(manifest.files[1].settings.skip_same, Some(false));
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let system = MockSystem::new();
        let err = load_manifest(&system, Path::new("/repo/stylemigrate.yaml")).unwrap_err();
        assert!(err.to_string().contains("Manifest file not found"));
        assert_eq!(err.downcast_ref::<StyleError>().unwrap().exit_code(), 12);
    }

    #[test]
    fn yaml_errors_are_configuration_errors() {
        let err = parse_manifest("files: [").unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML"));
    }

    #[test]
    fn schema_runs_before_semantic_checks() {
        let err = parse_manifest("from: 12\nto: 16\nfiles:\n  - input: a\n").unwrap_err();
        assert!(err.to_string().contains("Manifest validation failed"));
    }
}
