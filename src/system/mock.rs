//! In-memory `System` for tests

use super::System;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Files, directories and stdin held in memory
///
/// # Example
/// ```
/// use stylemigrate::system::{mock::MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_file("/styles/.clang-format", b"BasedOnStyle: google\n").unwrap()
///     .with_stdin("ColumnLimit: 100\n").unwrap();
///
/// assert!(system.exists(Path::new("/styles")));
/// assert_eq!(system.read_stdin().unwrap(), "ColumnLimit: 100\n");
/// ```
#[derive(Clone)]
pub struct MockSystem {
    tree: Arc<RwLock<Tree>>,
}

/// Shared by every clone of a `MockSystem`
#[derive(Default)]
struct Tree {
    cwd: PathBuf,
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    stdin: String,
}

impl MockSystem {
    /// Create a new `MockSystem` with an empty root directory
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        let tree = Tree {
            cwd: PathBuf::from("/"),
            dirs: HashSet::from([PathBuf::from("/")]),
            ..Tree::default()
        };
        Self {
            tree: Arc::new(RwLock::new(tree)),
        }
    }

    /// Start from `dir` instead of `/`
    ///
    /// # Errors
    ///
    /// Returns an error if the tree lock is poisoned
    #[inline]
    pub fn with_current_dir<P: AsRef<Path>>(self, dir: P) -> io::Result<Self> {
        {
            let mut tree = self.tree_mut()?;
            tree.add_dirs(dir.as_ref());
            tree.cwd = dir.as_ref().to_path_buf();
        }
        Ok(self)
    }

    /// Seed a file, creating its ancestors
    ///
    /// # Errors
    ///
    /// Returns an error if the tree lock is poisoned
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> io::Result<Self> {
        {
            let mut tree = self.tree_mut()?;
            if let Some(parent) = path.as_ref().parent() {
                tree.add_dirs(parent);
            }
            tree.files.insert(path.as_ref().to_path_buf(), contents.to_vec());
        }
        Ok(self)
    }

    /// Seed a directory
    ///
    /// # Errors
    ///
    /// Returns an error if the tree lock is poisoned
    #[inline]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> io::Result<Self> {
        self.tree_mut()?.add_dirs(path.as_ref());
        Ok(self)
    }

    /// Set what `read_stdin` returns
    ///
    /// # Errors
    ///
    /// Returns an error if the tree lock is poisoned
    #[inline]
    pub fn with_stdin(self, text: &str) -> io::Result<Self> {
        text.clone_into(&mut self.tree_mut()?.stdin);
        Ok(self)
    }

    fn tree(&self) -> io::Result<RwLockReadGuard<'_, Tree>> {
        self.tree.read().map_err(|e| io::Error::other(e.to_string()))
    }

    fn tree_mut(&self) -> io::Result<RwLockWriteGuard<'_, Tree>> {
        self.tree.write().map_err(|e| io::Error::other(e.to_string()))
    }
}

impl Tree {
    fn add_dirs(&mut self, path: &Path) {
        self.dirs.extend(
            path.ancestors()
                .take_while(|ancestor| !ancestor.as_os_str().is_empty())
                .map(Path::to_path_buf),
        );
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.tree()?.cwd.clone())
    }

    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = self.tree()?.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such file: {}", path.display()),
            )
        })?;
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    #[inline]
    fn read_stdin(&self) -> io::Result<String> {
        Ok(self.tree()?.stdin.clone())
    }

    #[inline]
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut tree = self.tree_mut()?;
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !tree.dirs.contains(parent) => {
                Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("No such directory: {}", parent.display()),
                ))
            }
            _ => {
                tree.files.insert(path.to_path_buf(), contents.to_vec());
                Ok(())
            }
        }
    }

    #[inline]
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.tree_mut()?.add_dirs(path);
        Ok(())
    }

    #[inline]
    fn exists(&self, path: &Path) -> bool {
        self.tree()
            .is_ok_and(|tree| tree.files.contains_key(path) || tree.dirs.contains(path))
    }

    #[inline]
    fn is_file(&self, path: &Path) -> bool {
        self.tree().is_ok_and(|tree| tree.files.contains_key(path))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn files_create_their_parent_directories() {
        let system = MockSystem::new().with_file("/a/b/c.yaml", b"x").unwrap();
        assert!(system.exists(Path::new("/a")));
        assert!(system.exists(Path::new("/a/b")));
        assert!(system.is_file(Path::new("/a/b/c.yaml")));
        assert!(!system.is_file(Path::new("/a/b")));
    }

    #[test]
    fn write_requires_an_existing_parent() {
        let system = MockSystem::new();
        assert!(system.write(Path::new("/out/x.yaml"), b"x").is_err());
        system.create_dir_all(Path::new("/out")).unwrap();
        system.write(Path::new("/out/x.yaml"), b"x").unwrap();
        assert_eq!(system.read_to_string(Path::new("/out/x.yaml")).unwrap(), "x");
    }

    #[test]
    fn clones_share_state() {
        let system = MockSystem::new().with_dir("/work").unwrap();
        let other = system.clone();
        other.write(Path::new("/work/f"), b"1").unwrap();
        assert!(system.is_file(Path::new("/work/f")));
    }
}
