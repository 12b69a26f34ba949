//! Batch migration coordination

use crate::config::{Job, Manifest};
use crate::error::StyleError;
use crate::migrate::{Migration, migrate};
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of migrating one manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub files_written: usize,
    pub warnings: usize,
}

/// Coordinates the migrations a manifest lists
#[non_exhaustive]
#[expect(clippy::module_name_repetitions, reason = "BatchOperation")]
pub struct BatchOperation<'src> {
    jobs: Vec<Job>,
    dry_run: bool,
    system: &'src dyn System,
}

impl<'src> BatchOperation<'src> {
    /// Load the manifest at `manifest_path` and resolve its jobs
    ///
    /// Relative manifest paths are resolved against the current directory,
    /// and entry paths against the manifest's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The manifest cannot be loaded or fails validation
    /// - An entry's settings do not resolve
    #[inline]
    pub fn new(manifest_path: &str, dry_run: bool, system: &'src dyn System) -> Result<Self> {
        let path = Path::new(manifest_path);
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            system
                .current_dir()
                .map_err(|e| StyleError::filesystem(e.to_string()))
                .context("Failed to determine the current directory")?
                .join(path)
        };

        let manifest = Manifest::load_from_file(system, &path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let jobs = manifest.jobs(base)?;
        debug!("Loaded {} job(s) from {}", jobs.len(), path.display());

        Ok(Self {
            jobs,
            dry_run,
            system,
        })
    }

    /// Run every job, or preview them in dry-run mode
    ///
    /// # Errors
    ///
    /// Returns the first job failure, with the input file as context.
    /// Files written before the failure are kept.
    #[inline]
    pub fn execute(&self) -> Result<BatchOutcome> {
        if self.dry_run {
            self.preview_operations();
            return Ok(BatchOutcome {
                files_written: 0,
                warnings: 0,
            });
        }

        info!("Starting batch migration...");

        let mut outcome = BatchOutcome {
            files_written: 0,
            warnings: 0,
        };

        for (index, job) in self.jobs.iter().enumerate() {
            info!("=> Migration #{}", index + 1);
            let migration = self
                .execute_single(job)
                .with_context(|| format!("Failed to migrate {}", job.input.display()))?;

            outcome.files_written += 1;
            outcome.warnings += migration.warnings.len();

            info!(
                "  \u{2713} {} \u{2192} {} ({} \u{2192} {}, {})",
                job.input.display(),
                job.output.display(),
                job.options.source,
                job.options.target,
                migration.style
            );
        }

        info!("\u{2713} Completed batch migration successfully");
        info!("  Files written: {}", outcome.files_written);
        info!("  Warnings: {}", outcome.warnings);

        Ok(outcome)
    }

    fn preview_operations(&self) {
        info!("Dry run preview - no files will be modified:");
        info!("");
        info!("Planned migrations:");

        for (index, job) in self.jobs.iter().enumerate() {
            info!(
                "  [{}] {} \u{2192} {}",
                index + 1,
                job.input.display(),
                job.output.display()
            );
            info!(
                "      - Versions: {} \u{2192} {}",
                job.options.source, job.options.target
            );
            info!("      - Language: {}", job.options.language);
            info!("      - Fallback style: {}", job.options.fallback_style);
            if !job.options.skip_same {
                info!("      - Would write every option");
            }
        }

        info!("");
        info!("Run without --dry-run to execute these migrations.");
    }

    fn execute_single(&self, job: &Job) -> Result<Migration> {
        let text = self
            .system
            .read_to_string(&job.input)
            .map_err(|e| StyleError::filesystem(format!("{}: {e}", job.input.display())))?;

        let migration = migrate(&text, &job.options)?;
        for warning in &migration.warnings {
            warn!("{}: {}", job.input.display(), warning);
        }

        write_output(self.system, &job.output, &migration.text)?;
        Ok(migration)
    }
}

/// Write `text` to `path`, creating parent directories
///
/// # Errors
///
/// Returns a `Filesystem` error if the directory or file cannot be written.
pub fn write_output(system: &dyn System, path: &Path, text: &str) -> Result<(), StyleError> {
    if let Some(parent) = path.parent()
        && parent != Path::new("")
        && !system.exists(parent)
    {
        system
            .create_dir_all(parent)
            .map_err(|e| StyleError::filesystem(format!("{}: {e}", parent.display())))?;
    }
    system
        .write(path, text.as_bytes())
        .map_err(|e| StyleError::filesystem(format!("{}: {e}", path.display())))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    const MANIFEST: &str = "from: 12\nto: 16\nfiles:\n  - input: a.yaml\n    output: out/a.yaml\n";

    #[test]
    fn migrates_each_entry_into_its_output() {
        let system = MockSystem::new()
            .with_file("/repo/stylemigrate.yaml", MANIFEST.as_bytes())
            .unwrap()
            .with_file("/repo/a.yaml", b"BasedOnStyle: google\nColumnLimit: 100\n")
            .unwrap();
        let batch = BatchOperation::new("/repo/stylemigrate.yaml", false, &system).unwrap();
        let outcome = batch.execute().unwrap();
        assert_eq!(outcome.files_written, 1);
        assert_eq!(outcome.warnings, 0);
        let written = system.read_to_string(Path::new("/repo/out/a.yaml")).unwrap();
        assert!(written.starts_with("---\nLanguage: Cpp\nBasedOnStyle: google\n"));
        assert!(written.contains("ColumnLimit: 100\n"));
        assert!(written.ends_with("...\n"));
    }

    #[test]
    fn relative_manifest_uses_current_dir() {
        let system = MockSystem::new()
            .with_current_dir("/repo")
            .unwrap()
            .with_file("/repo/stylemigrate.yaml", MANIFEST.as_bytes())
            .unwrap()
            .with_file("/repo/a.yaml", b"ColumnLimit: 90\n")
            .unwrap();
        BatchOperation::new("stylemigrate.yaml", false, &system)
            .unwrap()
            .execute()
            .unwrap();
        assert!(system.is_file(Path::new("/repo/out/a.yaml")));
    }

    #[test]
    fn dry_run_writes_nothing() {
        let system = MockSystem::new()
            .with_file("/repo/stylemigrate.yaml", MANIFEST.as_bytes())
            .unwrap()
            .with_file("/repo/a.yaml", b"ColumnLimit: 90\n")
            .unwrap();
        let outcome = BatchOperation::new("/repo/stylemigrate.yaml", true, &system)
            .unwrap()
            .execute()
            .unwrap();
        assert_eq!(outcome.files_written, 0);
        assert!(!system.exists(Path::new("/repo/out/a.yaml")));
    }

    #[test]
    fn missing_input_is_a_filesystem_error() {
        let system = MockSystem::new()
            .with_file("/repo/stylemigrate.yaml", MANIFEST.as_bytes())
            .unwrap();
        let err = BatchOperation::new("/repo/stylemigrate.yaml", false, &system)
            .unwrap()
            .execute()
            .unwrap_err();
        assert!(err.to_string().contains("Failed to migrate /repo/a.yaml"));
        assert_eq!(err.downcast_ref::<StyleError>().unwrap().exit_code(), 13);
    }

    #[test]
    fn warnings_are_counted() {
        let manifest = "from: 16\nto: 12\nfiles:\n  - input: a.yaml\n    output: a12.yaml\n";
        let system = MockSystem::new()
            .with_file("/repo/stylemigrate.yaml", manifest.as_bytes())
            .unwrap()
            .with_file("/repo/a.yaml", b"InsertBraces: true\n")
            .unwrap();
        let outcome = BatchOperation::new("/repo/stylemigrate.yaml", false, &system)
            .unwrap()
            .execute()
            .unwrap();
        assert_eq!(outcome.warnings, 1);
    }
}
