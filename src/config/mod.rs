//! Batch manifest handling
//!
//! A manifest (`stylemigrate.yaml`) lists configuration files to migrate,
//! with run-wide defaults that each entry may override. Loading goes
//! through YAML parsing, JSON Schema validation and semantic validation,
//! in that order.

pub mod schema;
pub mod validation;
pub mod yaml;

use crate::error::StyleError;
use crate::migrate::{DEFAULT_FALLBACK_STYLE, MigrateOptions};
use crate::schema::{Language, Version};
use crate::system::System;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Default manifest file name
pub const MANIFEST_FILE: &str = "stylemigrate.yaml";

/// Settings shared by the manifest and its entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(
        default,
        deserialize_with = "version_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<String>,

    #[serde(
        default,
        deserialize_with = "version_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub to: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_style: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_same: Option<bool>,
}

impl Settings {
    /// Entry settings win over the manifest defaults
    #[must_use]
    pub fn or(&self, defaults: &Self) -> Self {
        Self {
            from: self.from.clone().or_else(|| defaults.from.clone()),
            to: self.to.clone().or_else(|| defaults.to.clone()),
            language: self.language.clone().or_else(|| defaults.language.clone()),
            fallback_style: self
                .fallback_style
                .clone()
                .or_else(|| defaults.fallback_style.clone()),
            skip_same: self.skip_same.or(defaults.skip_same),
        }
    }

    /// Resolve into migration options
    ///
    /// # Errors
    ///
    /// Returns `Configuration` when a version is missing, `UnknownVersion`
    /// for an unrecognised one and `InvalidValue` for an unknown language.
    pub fn to_options(&self) -> Result<MigrateOptions, StyleError> {
        let version = |value: Option<&String>, key: &str| {
            value
                .ok_or_else(|| StyleError::configuration(format!("'{key}' is not set")))?
                .parse::<Version>()
        };
        let source = version(self.from.as_ref(), "from")?;
        let target = version(self.to.as_ref(), "to")?;
        let language = self
            .language
            .as_deref()
            .map_or(Ok(Language::Cpp), |s| s.parse::<Language>())?;
        Ok(MigrateOptions::new(source, target, language)
            .with_fallback_style(
                self.fallback_style
                    .as_deref()
                    .unwrap_or(DEFAULT_FALLBACK_STYLE),
            )
            .with_skip_same(self.skip_same.unwrap_or(true)))
    }
}

/// One file to migrate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub input: String,
    pub output: String,
    #[serde(flatten)]
    pub settings: Settings,
}

/// Parsed batch manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(flatten)]
    pub defaults: Settings,
    pub files: Vec<FileEntry>,
}

/// A manifest entry with paths and options resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: MigrateOptions,
}

impl Manifest {
    /// Load and validate a manifest file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML,
    /// fails schema validation or fails semantic validation.
    pub fn load_from_file(system: &dyn System, path: &Path) -> anyhow::Result<Self> {
        yaml::load_manifest(system, path)
    }

    /// Resolve every entry against the defaults
    ///
    /// Relative paths are taken relative to `base`, normally the directory
    /// holding the manifest.
    ///
    /// # Errors
    ///
    /// Returns the first entry whose settings do not resolve.
    pub fn jobs(&self, base: &Path) -> Result<Vec<Job>, StyleError> {
        self.files
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let options = entry.settings.or(&self.defaults).to_options().map_err(|e| {
                    StyleError::configuration(format!("File entry #{}: {e}", index + 1))
                })?;
                Ok(Job {
                    input: base.join(&entry.input),
                    output: base.join(&entry.output),
                    options,
                })
            })
            .collect()
    }
}

/// Versions may be written as YAML numbers (`to: 16`)
fn version_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a version, found {other}"
        ))),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    fn settings(from: &str, to: &str) -> Settings {
        Settings {
            from: Some(from.to_owned()),
            to: Some(to.to_owned()),
            ..Settings::default()
        }
    }

    #[test]
    fn entry_settings_override_defaults() {
        let defaults = Settings {
            language: Some("Java".to_owned()),
            skip_same: Some(false),
            ..settings("3.6", "12")
        };
        let entry = Settings {
            to: Some("16".to_owned()),
            ..Settings::default()
        };
        let merged = entry.or(&defaults);
        assert_eq!(merged.from.as_deref(), Some("3.6"));
        assert_eq!(merged.to.as_deref(), Some("16"));
        assert_eq!(merged.language.as_deref(), Some("Java"));
        assert_eq!(merged.skip_same, Some(false));
    }

    #[test]
    fn options_default_to_cpp_and_llvm() {
        let options = settings("3.4", "v16.0.6").to_options().unwrap();
        assert_eq!(options.source, Version::V3_4);
        assert_eq!(options.target, Version::V16);
        assert_eq!(options.language, Language::Cpp);
        assert_eq!(options.fallback_style, "llvm");
        assert!(options.skip_same);
    }

    #[test]
    fn missing_version_is_a_configuration_error() {
        let err = Settings::default().to_options().unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("'from'"));
    }

    #[test]
    fn jobs_resolve_paths_against_the_base() {
        let manifest = Manifest {
            defaults: settings("12", "16"),
            files: vec![FileEntry {
                input: "a/.clang-format".to_owned(),
                output: "out/a.clang-format".to_owned(),
                settings: Settings::default(),
            }],
        };
        let jobs = manifest.jobs(Path::new("/repo")).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].input, PathBuf::from("/repo/a/.clang-format"));
        assert_eq!(jobs[0].output, PathBuf::from("/repo/out/a.clang-format"));
    }

    #[test]
    fn numeric_versions_deserialize_as_text() {
        let manifest: Manifest =
            serde_yaml::from_str("from: 12\nto: 16\nfiles:\n  - input: a\n    output: b\n").unwrap();
        assert_eq!(manifest.defaults.from.as_deref(), Some("12"));
        assert_eq!(manifest.defaults.to.as_deref(), Some("16"));
    }
}
