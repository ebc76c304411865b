//! The closed set of difference classifications

use std::fmt;

/// What happened to one path between the new tree (A) and the old tree
/// (B). Exactly one kind is emitted per compared path.
///
/// Directional kinds read relative to A: `Newer` means A's copy is
/// newer than B's, `FileBecameFolder` means A holds a folder where B
/// holds a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    Equal,
    Created,
    Deleted,
    FileBecameFolder,
    FolderBecameFile,
    Newer,
    Older,
    Larger,
    Smaller,
    /// Used instead of `Equal` for folders.
    EqualFolder,
    CreatedFolder,
    RemovedFolder,
    EqualLinks,
    DifferingLinks,
    Modified,
    LinkBecameFile,
    FileBecameLink,
}

impl DiffKind {
    /// Every kind, for table-driven tests and exhaustive reporting.
    pub const ALL: [DiffKind; 17] = [
        DiffKind::Equal,
        DiffKind::Created,
        DiffKind::Deleted,
        DiffKind::FileBecameFolder,
        DiffKind::FolderBecameFile,
        DiffKind::Newer,
        DiffKind::Older,
        DiffKind::Larger,
        DiffKind::Smaller,
        DiffKind::EqualFolder,
        DiffKind::CreatedFolder,
        DiffKind::RemovedFolder,
        DiffKind::EqualLinks,
        DiffKind::DifferingLinks,
        DiffKind::Modified,
        DiffKind::LinkBecameFile,
        DiffKind::FileBecameLink,
    ];

    /// The fixed human label printed in reports.
    pub fn label(self) -> &'static str {
        match self {
            DiffKind::Equal => "Equal",
            DiffKind::Created => "Created",
            DiffKind::Deleted => "Deleted",
            DiffKind::FileBecameFolder => "File became folder",
            DiffKind::FolderBecameFile => "Folder became file",
            DiffKind::Newer => "Newer",
            DiffKind::Older => "Older",
            DiffKind::Larger => "Larger",
            DiffKind::Smaller => "Smaller",
            DiffKind::EqualFolder => "Equal folder",
            DiffKind::CreatedFolder => "Created folder",
            DiffKind::RemovedFolder => "Removed folder",
            DiffKind::EqualLinks => "Equal links",
            DiffKind::DifferingLinks => "Differing links",
            DiffKind::Modified => "Modified",
            DiffKind::LinkBecameFile => "Link became file",
            DiffKind::FileBecameLink => "File became link",
        }
    }

    /// True for the kinds suppressed unless equal entries were asked
    /// for.
    pub fn is_equal(self) -> bool {
        matches!(
            self,
            DiffKind::Equal | DiffKind::EqualFolder | DiffKind::EqualLinks
        )
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
