//! Tree sources - the folder abstraction the comparer walks
//!
//! A [`TreeSource`] is one folder at one path in one tree. The comparer
//! never touches the filesystem directly; it only consumes this
//! interface, so any backing store (filesystem, archive, remote
//! listing) can be diffed by implementing it. The one concrete
//! implementation here is [`FsFolder`].

mod filesystem;

use std::collections::BTreeSet;
use std::io::Read;

use crate::error::Result;

pub use filesystem::FsFolder;

/// Entry names excluded from every listing: the reserved self/parent
/// markers plus well-known OS bookkeeping files.
pub const IGNORED_NAMES: [&str; 4] = [".", "..", ".DS_Store", "Thumbs.db"];

/// What one name under a folder resolves to.
///
/// Size and modification time only exist for plain files; symlinks are
/// never followed, so a symlink to a directory resolves as `Symlink`,
/// not `Folder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryInfo {
    /// A plain file. `mtime` is whole seconds since the Unix epoch,
    /// negative for pre-epoch timestamps.
    File { size: u64, mtime: i64 },
    /// A real (non-symlink) directory.
    Folder,
    /// A symlink of any kind, including broken ones. `target` is the
    /// raw link text.
    Symlink { target: String },
}

impl EntryInfo {
    pub fn is_folder(&self) -> bool {
        matches!(self, EntryInfo::Folder)
    }
}

/// One folder's worth of a tree, listable and resolvable per name.
///
/// Implementations attach their own path context to errors; the walker
/// propagates every failure unchanged (fail-fast, no retries).
pub trait TreeSource {
    /// Names present directly under this folder, deduplicated and in a
    /// stable order, with [`IGNORED_NAMES`] already filtered out.
    fn list_entries(&self) -> Result<BTreeSet<String>>;

    /// Resolve one listed name to its metadata.
    fn resolve(&self, name: &str) -> Result<EntryInfo>;

    /// A child source rooted at `name`, iff `name` is a folder and not
    /// itself a symlink. Symlinked folders yield `None` so the walk
    /// cannot cycle.
    fn child_folder(&self, name: &str) -> Result<Option<Box<dyn TreeSource>>>;

    /// Sequential byte stream over a file's content.
    fn open_for_read(&self, name: &str) -> Result<Box<dyn Read>>;

    /// Human-facing path for reports. Components are joined with `/`
    /// regardless of platform, so report text is stable.
    fn display_name(&self, name: &str) -> String;
}
