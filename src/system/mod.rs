//! System abstraction for filesystem and standard input
//!
//! The command entry points take a `&dyn System` so that batch runs and
//! output files can be tested without touching the real filesystem.

use std::io;
use std::path::{Path, PathBuf};

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Operations the command layer needs from the operating system
///
/// # Implementations
/// - `RealSystem`: delegates to `std::fs` and `std::io::stdin`
/// - `MockSystem`: in-memory files and a canned stdin
pub trait System: Send + Sync {
    /// Get the current working directory
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Read all of standard input as a string
    fn read_stdin(&self) -> io::Result<String>;

    /// Write bytes to a file, creating it if it doesn't exist
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Recursively create a directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path points to a file
    fn is_file(&self, path: &Path) -> bool;
}
