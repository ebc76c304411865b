//! Test utilities for exercising the comparison engine.
//!
//! This module is only compiled for tests and benchmarks.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};

use tempfile::TempDir;

use crate::compare::DiffKind;
use crate::error::Result;
use crate::report::Reporter;
use crate::source::{EntryInfo, IGNORED_NAMES, TreeSource};

/// An in-memory [`TreeSource`], built with a fluent API.
///
/// Lets engine tests pin down sizes, mtimes and link targets exactly,
/// with no filesystem involved. Doubles as proof that the walker only
/// depends on the trait, not on real directories.
///
/// ```
/// use drift::test_utils::MemFolder;
///
/// let tree = MemFolder::root()
///     .file("readme.txt", b"hello", 100)
///     .folder("src", MemFolder::root().file("main.rs", b"fn main() {}", 200))
///     .symlink("latest", "src");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemFolder {
    display: String,
    entries: BTreeMap<String, MemEntry>,
}

#[derive(Debug, Clone)]
enum MemEntry {
    File { content: Vec<u8>, mtime: i64 },
    Folder(MemFolder),
    Symlink { target: String },
}

impl MemFolder {
    /// An empty folder with an empty display path, suitable as a tree
    /// root or as a subfolder value.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn file(mut self, name: &str, content: &[u8], mtime: i64) -> Self {
        self.entries.insert(
            name.to_string(),
            MemEntry::File {
                content: content.to_vec(),
                mtime,
            },
        );
        self
    }

    pub fn folder(mut self, name: &str, folder: MemFolder) -> Self {
        self.entries
            .insert(name.to_string(), MemEntry::Folder(folder));
        self
    }

    pub fn symlink(mut self, name: &str, target: &str) -> Self {
        self.entries.insert(
            name.to_string(),
            MemEntry::Symlink {
                target: target.to_string(),
            },
        );
        self
    }

    fn not_found(&self, name: &str) -> crate::error::Error {
        crate::error::Error::io(
            name,
            io::Error::new(io::ErrorKind::NotFound, "no such entry"),
        )
    }
}

impl TreeSource for MemFolder {
    fn list_entries(&self) -> Result<BTreeSet<String>> {
        Ok(self
            .entries
            .keys()
            .filter(|name| !IGNORED_NAMES.contains(&name.as_str()))
            .cloned()
            .collect())
    }

    fn resolve(&self, name: &str) -> Result<EntryInfo> {
        match self.entries.get(name) {
            Some(MemEntry::File { content, mtime }) => Ok(EntryInfo::File {
                size: content.len() as u64,
                mtime: *mtime,
            }),
            Some(MemEntry::Folder(_)) => Ok(EntryInfo::Folder),
            Some(MemEntry::Symlink { target }) => Ok(EntryInfo::Symlink {
                target: target.clone(),
            }),
            None => Err(self.not_found(name)),
        }
    }

    fn child_folder(&self, name: &str) -> Result<Option<Box<dyn TreeSource>>> {
        match self.entries.get(name) {
            Some(MemEntry::Folder(folder)) => {
                let mut child = folder.clone();
                child.display = self.display_name(name);
                Ok(Some(Box::new(child)))
            }
            Some(_) => Ok(None),
            None => Err(self.not_found(name)),
        }
    }

    fn open_for_read(&self, name: &str) -> Result<Box<dyn Read>> {
        match self.entries.get(name) {
            Some(MemEntry::File { content, .. }) => Ok(Box::new(Cursor::new(content.clone()))),
            _ => Err(self.not_found(name)),
        }
    }

    fn display_name(&self, name: &str) -> String {
        if self.display.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.display, name)
        }
    }
}

/// A [`Reporter`] that records every call for assertions.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub calls: Vec<(DiffKind, String)>,
}

impl Reporter for RecordingReporter {
    fn difference(&mut self, kind: DiffKind, display_path: &str) -> io::Result<()> {
        self.calls.push((kind, display_path.to_string()));
        Ok(())
    }
}

/// A temporary on-disk tree for filesystem-source tests.
///
/// Cleaned up when dropped.
pub struct TreeFixture {
    dir: TempDir,
}

impl TreeFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, rel: &str, content: &[u8]) -> PathBuf {
        let full = self.dir.path().join(rel);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        fs::write(&full, content).expect("failed to write file");
        full
    }

    pub fn add_dir(&self, rel: &str) -> PathBuf {
        let full = self.dir.path().join(rel);
        fs::create_dir_all(&full).expect("failed to create dir");
        full
    }

    /// Pin a file's modification time to `secs` seconds after the Unix
    /// epoch.
    pub fn set_mtime(&self, rel: &str, secs: u64) {
        let full = self.dir.path().join(rel);
        let file = fs::OpenOptions::new()
            .write(true)
            .open(&full)
            .expect("failed to open file for mtime change");
        file.set_modified(UNIX_EPOCH + Duration::from_secs(secs))
            .expect("failed to set mtime");
    }

    #[cfg(unix)]
    pub fn add_symlink(&self, rel: &str, target: &str) -> PathBuf {
        let full = self.dir.path().join(rel);
        std::os::unix::fs::symlink(target, &full).expect("failed to create symlink");
        full
    }
}

impl Default for TreeFixture {
    fn default() -> Self {
        Self::new()
    }
}
