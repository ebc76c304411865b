//! Filesystem-backed tree source

use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};

use super::{EntryInfo, IGNORED_NAMES, TreeSource};

/// A real directory on disk, plus the display path reports use for it.
///
/// The display path is deliberately decoupled from `path`: roots are
/// created with an empty display path so their entries print as bare
/// names, and children extend it with `/` separators on every platform.
pub struct FsFolder {
    path: PathBuf,
    display: String,
}

impl FsFolder {
    /// A root folder. Entries directly under it display as bare names.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            display: String::new(),
        }
    }

    fn full_name(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    fn child(&self, name: &str) -> Self {
        Self {
            path: self.full_name(name),
            display: self.display_name(name),
        }
    }
}

/// Whole seconds since the Unix epoch, signed so pre-epoch mtimes
/// still order correctly.
fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(since) => since.as_secs() as i64,
        Err(before) => -(before.duration().as_secs() as i64),
    }
}

impl TreeSource for FsFolder {
    fn list_entries(&self) -> Result<BTreeSet<String>> {
        let entries = fs::read_dir(&self.path).map_err(|e| Error::io(&self.path, e))?;

        let mut names = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&self.path, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !IGNORED_NAMES.contains(&name.as_str()) {
                names.insert(name);
            }
        }
        Ok(names)
    }

    fn resolve(&self, name: &str) -> Result<EntryInfo> {
        let full = self.full_name(name);
        // symlink_metadata never follows links, so a link to a
        // directory stays a link here.
        let meta = fs::symlink_metadata(&full).map_err(|e| Error::io(&full, e))?;

        if meta.file_type().is_symlink() {
            let target = fs::read_link(&full).map_err(|e| Error::io(&full, e))?;
            Ok(EntryInfo::Symlink {
                target: target.to_string_lossy().into_owned(),
            })
        } else if meta.file_type().is_dir() {
            Ok(EntryInfo::Folder)
        } else {
            let mtime = meta.modified().map_err(|e| Error::io(&full, e))?;
            Ok(EntryInfo::File {
                size: meta.len(),
                mtime: unix_seconds(mtime),
            })
        }
    }

    fn child_folder(&self, name: &str) -> Result<Option<Box<dyn TreeSource>>> {
        match self.resolve(name)? {
            EntryInfo::Folder => Ok(Some(Box::new(self.child(name)))),
            _ => Ok(None),
        }
    }

    fn open_for_read(&self, name: &str) -> Result<Box<dyn Read>> {
        let full = self.full_name(name);
        let file = fs::File::open(&full).map_err(|e| Error::io(&full, e))?;
        Ok(Box::new(file))
    }

    fn display_name(&self, name: &str) -> String {
        if self.display.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.display, name)
        }
    }
}

impl FsFolder {
    /// The real path this source reads from. Reports never use this;
    /// error messages do.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
