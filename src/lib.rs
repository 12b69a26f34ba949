//! `stylemigrate` - Versioned style configurations for clang-format
//!
//! This library models four revisions of the formatter's option schema. It
//! resolves named styles, parses multi-document configuration files,
//! serializes minimal configurations and migrates configurations between
//! revisions, reporting what could not be carried over.

pub mod cli;
pub mod config;
pub mod error;
pub mod migrate;
pub mod operations;
pub mod parser;
pub mod preset;
pub mod profile;
pub mod record;
pub mod schema;
pub mod serializer;
pub mod system;

use anyhow::{Context as _, Result};
use cli::{BatchArgs, CheckArgs, CompatibleArgs, InputArgs, MigrateArgs, ResolveArgs, StylesArgs};
use error::StyleError;
use migrate::{MigrateOptions, compatible_versions};
use operations::{BatchOperation, write_output};
use schema::{Language, Version};
use std::path::Path;
use system::System;
use tracing::{debug, info, warn};

/// Run the migrate command
///
/// # Errors
///
/// Returns an error if the input cannot be read, fails to parse under the
/// source version, cannot be migrated or the output cannot be written.
pub fn run_migrate(system: &dyn System, args: &MigrateArgs) -> Result<()> {
    let source = args.from.parse::<Version>()?;
    let target = args.to.parse::<Version>()?;
    let language = args.input.language.parse::<Language>()?;
    let text = read_input(system, &args.input)?;

    let options = MigrateOptions::new(source, target, language)
        .with_fallback_style(args.fallback_style.as_str())
        .with_skip_same(!args.keep_same);
    let migration = migrate::migrate(&text, &options)
        .with_context(|| format!("Failed to migrate {} from {source} to {target}", args.input.input))?;

    for warning in &migration.warnings {
        warn!("{}", warning);
    }
    if migration.warnings.is_empty() {
        debug!("Migration lost nothing");
    }

    match args.output.as_deref() {
        Some(path) => {
            write_output(system, Path::new(path), &migration.text)?;
            info!("Wrote {}", path);
        }
        // Output to stdout (not using logging)
        None => print!("{}", migration.text),
    }
    Ok(())
}

/// Run the check command
///
/// # Errors
///
/// Returns any parse or validation error for the input.
pub fn run_check(system: &dyn System, args: &CheckArgs) -> Result<()> {
    let text = check_text(system, args)?;
    print!("{text}");
    Ok(())
}

/// Parse, validate and re-serialize the input of a check command
///
/// # Errors
///
/// Returns any parse or validation error for the input.
pub fn check_text(system: &dyn System, args: &CheckArgs) -> Result<String> {
    let version = args.schema.parse::<Version>()?;
    let language = args.input.language.parse::<Language>()?;
    let text = read_input(system, &args.input)?;

    let fallback = args.fallback_style.to_lowercase();
    let ambient = profile::resolve(version, &fallback, language)?;
    let parsed = parser::parse(version, &text, language, &ambient)
        .with_context(|| format!("{} is not a valid {version} configuration", args.input.input))?;

    let style = parsed
        .based_on
        .as_deref()
        .map_or(fallback, str::to_lowercase);
    let baseline = if parsed.record.inherits_parent() {
        ambient
    } else {
        profile::resolve(version, &style, language)?
    };
    Ok(serializer::serialize(&parsed.record, Some(&baseline)))
}

/// Run the resolve command
///
/// # Errors
///
/// Returns an error for unknown versions, languages or styles.
pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    print!("{}", resolve_text(args)?);
    Ok(())
}

/// Render a style, in full or as a diff against another style
///
/// # Errors
///
/// Returns an error for unknown versions, languages or styles.
pub fn resolve_text(args: &ResolveArgs) -> Result<String> {
    let version = args.schema.parse::<Version>()?;
    let language = args.language.parse::<Language>()?;
    let record = profile::resolve(version, &args.style, language)?;
    let baseline = args
        .diff_from
        .as_deref()
        .map(|name| profile::resolve(version, name, language))
        .transpose()?;
    Ok(serializer::serialize(&record, baseline.as_ref()))
}

/// Run the compatible command
///
/// # Errors
///
/// Returns an error if the input cannot be read or the language is unknown.
pub fn run_compatible(system: &dyn System, args: &CompatibleArgs) -> Result<()> {
    let language = args.input.language.parse::<Language>()?;
    let text = read_input(system, &args.input)?;
    let versions = compatible_versions(&text, language);
    if versions.is_empty() {
        warn!("No supported version accepts {}", args.input.input);
    }
    for version in versions {
        println!("{version}");
    }
    Ok(())
}

/// Run the styles command
///
/// # Errors
///
/// Returns an error for unknown version identifiers.
pub fn run_styles(args: &StylesArgs) -> Result<()> {
    for name in style_list(args)? {
        println!("{name}");
    }
    Ok(())
}

/// Style names for a single version, or those common to a version range
///
/// # Errors
///
/// Returns an error for unknown version identifiers, or when neither a
/// version nor a range is given.
pub fn style_list(args: &StylesArgs) -> Result<Vec<&'static str>> {
    match (args.schema.as_deref(), args.from.as_deref(), args.to.as_deref()) {
        (Some(version), _, _) => Ok(profile::style_names(version.parse()?)),
        (None, Some(from), Some(to)) => {
            Ok(profile::common_style_names(from.parse()?, to.parse()?))
        }
        _ => Err(StyleError::configuration("Specify --version, or both --from and --to").into()),
    }
}

/// Run the batch command
///
/// # Errors
///
/// Returns an error if the manifest is invalid or any migration fails.
pub fn run_batch(system: &dyn System, args: &BatchArgs) -> Result<()> {
    let batch = BatchOperation::new(&args.manifest, args.dry_run, system)?;
    batch.execute()?;
    Ok(())
}

/// Read configuration text from a file or, for `-`, standard input
fn read_input(system: &dyn System, input: &InputArgs) -> Result<String> {
    if input.input == "-" {
        return Ok(system
            .read_stdin()
            .map_err(|e| StyleError::filesystem(e.to_string()))
            .context("Failed to read standard input")?);
    }
    let path = Path::new(&input.input);
    if !system.is_file(path) {
        return Err(StyleError::filesystem(format!("Input file not found: {}", input.input)).into());
    }
    Ok(system
        .read_to_string(path)
        .map_err(|e| StyleError::filesystem(e.to_string()))
        .with_context(|| format!("Failed to read {}", input.input))?)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    fn input(path: &str) -> InputArgs {
        InputArgs {
            input: path.to_owned(),
            language: "Cpp".to_owned(),
        }
    }

    #[test]
    fn migrate_writes_the_output_file() {
        let system = MockSystem::new()
            .with_file("/w/.clang-format", b"BasedOnStyle: Google\nColumnLimit: 100\n")
            .unwrap();
        let args = MigrateArgs {
            from: "3.6".to_owned(),
            to: "16".to_owned(),
            input: input("/w/.clang-format"),
            fallback_style: "llvm".to_owned(),
            keep_same: false,
            output: Some("/w/out/.clang-format".to_owned()),
        };
        run_migrate(&system, &args).unwrap();
        let written = system.read_to_string(Path::new("/w/out/.clang-format")).unwrap();
        assert!(written.starts_with("---\nLanguage: Cpp\nBasedOnStyle: google\n"));
        assert!(written.contains("ColumnLimit: 100\n"));
    }

    #[test]
    fn unknown_version_keeps_its_exit_code() {
        let system = MockSystem::new().with_stdin("ColumnLimit: 100\n").unwrap();
        let args = MigrateArgs {
            from: "3.5".to_owned(),
            to: "16".to_owned(),
            input: input("-"),
            fallback_style: "llvm".to_owned(),
            keep_same: false,
            output: None,
        };
        let err = run_migrate(&system, &args).unwrap_err();
        assert_eq!(err.downcast_ref::<StyleError>().unwrap().exit_code(), 11);
    }

    #[test]
    fn check_normalizes_stdin() {
        let system = MockSystem::new()
            .with_stdin("BasedOnStyle: LLVM\nUseTab: Never\nIndentWidth: 4\n")
            .unwrap();
        let args = CheckArgs {
            schema: "12".to_owned(),
            input: input("-"),
            fallback_style: "llvm".to_owned(),
        };
        assert_eq!(
            check_text(&system, &args).unwrap(),
            "---\nLanguage: Cpp\nBasedOnStyle: llvm\nIndentWidth: 4\n...\n"
        );
    }

    #[test]
    fn check_reports_parse_errors_with_their_kind() {
        let system = MockSystem::new().with_stdin("Frobnicate: true\n").unwrap();
        let args = CheckArgs {
            schema: "16".to_owned(),
            input: input("-"),
            fallback_style: "llvm".to_owned(),
        };
        let err = check_text(&system, &args).unwrap_err();
        assert_eq!(err.downcast_ref::<StyleError>().unwrap().exit_code(), 2);
    }

    #[test]
    fn resolve_diff_lists_differences_only() {
        let args = ResolveArgs {
            schema: "16".to_owned(),
            style: "google".to_owned(),
            language: "Cpp".to_owned(),
            diff_from: Some("google".to_owned()),
        };
        assert_eq!(
            resolve_text(&args).unwrap(),
            "---\nLanguage: Cpp\nBasedOnStyle: google\n...\n"
        );
    }

    #[test]
    fn style_ranges_intersect() {
        let args = StylesArgs {
            schema: None,
            from: Some("3.4".to_owned()),
            to: Some("16".to_owned()),
        };
        assert_eq!(
            style_list(&args).unwrap(),
            vec!["chromium", "google", "llvm", "mozilla", "webkit"]
        );
    }

    #[test]
    fn missing_input_file_is_a_filesystem_error() {
        let system = MockSystem::new();
        let args = CompatibleArgs {
            input: input("/nowhere/.clang-format"),
        };
        let err = run_compatible(&system, &args).unwrap_err();
        assert_eq!(err.downcast_ref::<StyleError>().unwrap().exit_code(), 13);
    }
}
