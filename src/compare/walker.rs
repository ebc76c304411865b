//! The recursive walk that pairs and classifies entries
//!
//! `FolderComparer` is the only component with real logic: it lists
//! both sides, pairs entries by name, picks exactly one [`DiffKind`]
//! per pairing with a fixed decision order, and recurses into matched
//! subfolders. It owns no output format; every classification goes
//! through the injected [`Reporter`].

use std::collections::BTreeSet;
use std::io;

use crate::error::{Error, Result};
use crate::report::Reporter;
use crate::source::{EntryInfo, TreeSource};

use super::config::CompareConfig;
use super::content::equal_contents;
use super::kind::DiffKind;

/// Recursive comparer over two trees.
///
/// The first tree (A) is the "new" side, the second (B) the "old" one;
/// directional kinds like `Newer` and `Larger` read as "A relative to
/// B". The reporter is a required constructor dependency and receives
/// every compared path, equal ones included.
pub struct FolderComparer<R: Reporter> {
    config: CompareConfig,
    reporter: R,
}

impl<R: Reporter> FolderComparer<R> {
    pub fn new(config: CompareConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    /// Compare two folders and report every difference beneath them.
    ///
    /// One side may be absent, in which case everything under the
    /// present side is reported as created (A present) or deleted
    /// (B present).
    ///
    /// # Panics
    ///
    /// Panics if both sides are absent; that is a caller bug, not a
    /// runtime condition.
    pub fn compare(
        &mut self,
        a: Option<&dyn TreeSource>,
        b: Option<&dyn TreeSource>,
    ) -> Result<()> {
        assert!(
            a.is_some() || b.is_some(),
            "compare requires at least one side"
        );

        let a_names = match a {
            Some(source) => source.list_entries()?,
            None => BTreeSet::new(),
        };
        let b_names = match b {
            Some(source) => source.list_entries()?,
            None => BTreeSet::new(),
        };

        // Names in A first, in listing order; a name present on both
        // sides is handled here exactly once.
        for name in &a_names {
            if b_names.contains(name) {
                self.compare_item(a, name, b)?;
            } else {
                self.compare_item(a, name, None)?;
            }
        }

        // Then whatever exists only in B.
        for name in &b_names {
            if !a_names.contains(name) {
                self.compare_item(None, name, b)?;
            }
        }

        Ok(())
    }

    /// Classify one name. `a`/`b` are the parents holding it; at least
    /// one is present.
    fn compare_item(
        &mut self,
        a: Option<&dyn TreeSource>,
        name: &str,
        b: Option<&dyn TreeSource>,
    ) -> Result<()> {
        let display = match (a, b) {
            (Some(a), _) => a.display_name(name),
            (_, Some(b)) => b.display_name(name),
            (None, None) => unreachable!("compare_item requires at least one side"),
        };

        match (a, b) {
            // Only in A: the entry is new. A folder is announced once,
            // then its whole subtree is reported as created.
            (Some(a), None) => match a.resolve(name)? {
                EntryInfo::Folder => {
                    self.report(DiffKind::CreatedFolder, &display)?;
                    if let Some(folder) = a.child_folder(name)? {
                        self.compare(Some(folder.as_ref()), None)?;
                    }
                }
                _ => self.report(DiffKind::Created, &display)?,
            },

            // Only in B: the entry is gone from A.
            (None, Some(b)) => match b.resolve(name)? {
                EntryInfo::Folder => {
                    self.report(DiffKind::RemovedFolder, &display)?;
                    if let Some(folder) = b.child_folder(name)? {
                        self.compare(None, Some(folder.as_ref()))?;
                    }
                }
                _ => self.report(DiffKind::Deleted, &display)?,
            },

            (Some(a), Some(b)) => {
                let a_folder = a.child_folder(name)?;
                let b_folder = b.child_folder(name)?;

                match (a_folder, b_folder) {
                    // Folders are opaque at this level: existence and
                    // type are all that count, never size or time.
                    (Some(af), Some(bf)) => {
                        self.report(DiffKind::EqualFolder, &display)?;
                        self.compare(Some(af.as_ref()), Some(bf.as_ref()))?;
                    }
                    // Type changed on one side. Neither side is
                    // descended into: there is no folder pair to walk,
                    // so descendants of the folder side go unreported.
                    (Some(_), None) => self.report(DiffKind::FileBecameFolder, &display)?,
                    (None, Some(_)) => self.report(DiffKind::FolderBecameFile, &display)?,
                    (None, None) => self.compare_leaves(a, name, b, &display)?,
                }
            }

            (None, None) => unreachable!("compare_item requires at least one side"),
        }

        Ok(())
    }

    /// Both sides exist and neither is a folder: links first, then the
    /// regular-file ladder.
    fn compare_leaves(
        &mut self,
        a: &dyn TreeSource,
        name: &str,
        b: &dyn TreeSource,
        display: &str,
    ) -> Result<()> {
        let a_info = a.resolve(name)?;
        let b_info = b.resolve(name)?;

        let kind = match (a_info, b_info) {
            (EntryInfo::Symlink { target: a_target }, EntryInfo::Symlink { target: b_target }) => {
                if a_target == b_target {
                    DiffKind::EqualLinks
                } else {
                    DiffKind::DifferingLinks
                }
            }
            // Link state changed; the size/time/content ladder is
            // never consulted for links.
            (EntryInfo::File { .. }, EntryInfo::Symlink { .. }) => DiffKind::FileBecameLink,
            (EntryInfo::Symlink { .. }, EntryInfo::File { .. }) => DiffKind::LinkBecameFile,
            (
                EntryInfo::File {
                    size: a_size,
                    mtime: a_mtime,
                },
                EntryInfo::File {
                    size: b_size,
                    mtime: b_mtime,
                },
            ) => self.classify_files(a, name, b, display, (a_size, a_mtime), (b_size, b_mtime))?,
            // Both sides already failed the folder check above, so a
            // folder here means the entry changed type mid-scan.
            (EntryInfo::Folder, _) | (_, EntryInfo::Folder) => {
                return Err(Error::io(
                    display,
                    io::Error::other("entry changed type during comparison"),
                ));
            }
        };

        self.report(kind, display)
    }

    /// The regular-file decision ladder: time (if enabled), then size,
    /// then content (if enabled). The first difference found wins.
    fn classify_files(
        &mut self,
        a: &dyn TreeSource,
        name: &str,
        b: &dyn TreeSource,
        display: &str,
        (a_size, a_mtime): (u64, i64),
        (b_size, b_mtime): (u64, i64),
    ) -> Result<DiffKind> {
        if self.config.compare_times {
            // The tolerance is inclusive: a difference of exactly
            // `time_epsilon` seconds is still equal.
            if a_mtime > b_mtime + self.config.time_epsilon {
                return Ok(DiffKind::Newer);
            }
            if a_mtime < b_mtime - self.config.time_epsilon {
                return Ok(DiffKind::Older);
            }
        }

        if a_size > b_size {
            return Ok(DiffKind::Larger);
        }
        if a_size < b_size {
            return Ok(DiffKind::Smaller);
        }

        if self.config.compare_content {
            let a_reader = a.open_for_read(name)?;
            let b_reader = b.open_for_read(name)?;
            let equal = equal_contents(a_reader, b_reader).map_err(|e| Error::io(display, e))?;
            if !equal {
                return Ok(DiffKind::Modified);
            }
        }

        Ok(DiffKind::Equal)
    }

    fn report(&mut self, kind: DiffKind, display: &str) -> Result<()> {
        self.reporter
            .difference(kind, display)
            .map_err(Error::Report)
    }
}
