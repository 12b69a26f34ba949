//! Semantic validation of batch manifests

use crate::config::{FileEntry, Manifest};
use crate::error::StyleError;
use crate::profile;
use std::collections::HashSet;

/// Validate a complete manifest
///
/// # Errors
///
/// Returns an error if:
/// - An entry has an empty, absolute or traversing path
/// - Two entries write the same output
/// - An entry's versions, language or fallback style do not resolve
#[inline]
pub fn validate_manifest(manifest: &Manifest) -> Result<(), StyleError> {
    let mut outputs = HashSet::new();
    for (index, entry) in manifest.files.iter().enumerate() {
        validate_entry(manifest, entry, index)?;
        if !outputs.insert(entry.output.as_str()) {
            return Err(StyleError::configuration(format!(
                "File entry #{}: output '{}' is written by an earlier entry",
                index + 1,
                entry.output
            )));
        }
    }
    Ok(())
}

fn validate_entry(manifest: &Manifest, entry: &FileEntry, index: usize) -> Result<(), StyleError> {
    let context = format!("File entry #{}", index + 1);
    let with_context = |e: StyleError| StyleError::configuration(format!("{context}: {e}"));

    validate_path_safety(&entry.input).map_err(with_context)?;
    validate_path_safety(&entry.output).map_err(with_context)?;

    let options = entry.settings.or(&manifest.defaults).to_options().map_err(with_context)?;
    for version in [options.source, options.target] {
        if !version.schema().supports(options.language) {
            return Err(with_context(StyleError::UnsupportedLanguage {
                language: options.language.to_string(),
                version: version.to_string(),
            }));
        }
    }

    let fallback = options.fallback_style.to_lowercase();
    if !profile::style_names(options.source).contains(&fallback.as_str()) {
        return Err(with_context(StyleError::UnknownProfile {
            name: options.fallback_style,
            version: options.source.to_string(),
        }));
    }
    Ok(())
}

/// Validate path safety (prevent directory traversal)
///
/// # Errors
///
/// Returns an error if:
/// - The path is empty
/// - The path contains unsafe directory traversal
/// - The path is an absolute path
#[inline]
pub fn validate_path_safety(path: &str) -> Result<(), StyleError> {
    if path.trim().is_empty() {
        return Err(StyleError::configuration("Path cannot be empty"));
    }

    if path.split(['/', '\\']).any(|part| part == "..") {
        return Err(StyleError::configuration(format!(
            "Path contains unsafe directory traversal: '{path}'"
        )));
    }

    if path.starts_with('/') {
        return Err(StyleError::configuration(format!(
            "Absolute paths are not allowed: '{path}'. Use paths relative to the manifest."
        )));
    }

    Ok(())
}
