//! Drift - compare two folder trees and report what changed

pub mod compare;
pub mod error;
pub mod report;
pub mod source;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use compare::{CompareConfig, DiffKind, FolderComparer};
pub use error::{Error, Result};
pub use report::{Reporter, TextReporter};
pub use source::{EntryInfo, FsFolder, TreeSource};
