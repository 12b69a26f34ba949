//! JSON Schema validation for batch manifests

use crate::error::StyleError;
use jsonschema::Validator;
use serde_json::Value;

/// Compile the embedded manifest schema
///
/// # Errors
///
/// Returns a `Configuration` error if the embedded schema is not valid JSON
/// or not a valid draft 7 schema.
pub fn get_schema() -> Result<Validator, StyleError> {
    let schema_str = include_str!("../../docs/schema.json");
    let schema: Value = serde_json::from_str(schema_str).map_err(|e| {
        StyleError::configuration(format!("Failed to parse embedded JSON schema: {e}"))
    })?;

    jsonschema::draft7::new(&schema).map_err(|e| {
        StyleError::configuration(format!("Failed to compile JSON schema: {e}"))
    })
}

/// Validate a manifest value against the schema
///
/// # Errors
///
/// Returns a `Configuration` error listing every violation with its path.
pub fn validate_against_schema(manifest: &Value) -> Result<(), StyleError> {
    let validator = get_schema()?;

    let error_messages: Vec<String> = validator
        .iter_errors(manifest)
        .map(|e| format!("  - Path '{}': {}", e.instance_path, e))
        .collect();

    if error_messages.is_empty() {
        return Ok(());
    }

    Err(StyleError::configuration(format!(
        "Manifest validation failed:\n{}",
        error_messages.join("\n")
    )))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embedded_schema_compiles() {
        get_schema().unwrap();
    }

    #[test]
    fn minimal_manifest_is_valid() {
        let manifest = json!({
            "from": "12",
            "to": 16,
            "files": [{ "input": ".clang-format", "output": "out/.clang-format" }]
        });
        validate_against_schema(&manifest).unwrap();
    }

    #[test]
    fn entries_need_input_and_output() {
        let manifest = json!({ "files": [{ "input": "a" }] });
        let err = validate_against_schema(&manifest).unwrap_err();
        assert!(err.to_string().contains("output"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let manifest = json!({
            "files": [{ "input": "a", "output": "b" }],
            "target": "16"
        });
        let err = validate_against_schema(&manifest).unwrap_err();
        assert!(err.to_string().contains("target"));
    }

    #[test]
    fn empty_file_list_is_rejected() {
        let manifest = json!({ "files": [] });
        assert!(validate_against_schema(&manifest).is_err());
    }

    #[test]
    fn skip_same_must_be_boolean() {
        let manifest = json!({
            "skipSame": "yes",
            "files": [{ "input": "a", "output": "b" }]
        });
        let err = validate_against_schema(&manifest).unwrap_err();
        assert!(err.to_string().contains("/skipSame"));
    }
}
