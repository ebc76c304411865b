//! Reporting - how classifications reach the user
//!
//! The walker calls [`Reporter::difference`] once per compared path,
//! equal entries included; whether equal entries are shown is decided
//! here, not in the walk. [`TextReporter`] is the reference
//! implementation: one grep-friendly line per difference on stdout.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::compare::DiffKind;

/// Receives one call per compared path.
pub trait Reporter {
    fn difference(&mut self, kind: DiffKind, display_path: &str) -> io::Result<()>;
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn difference(&mut self, kind: DiffKind, display_path: &str) -> io::Result<()> {
        (**self).difference(kind, display_path)
    }
}

/// Prints `<label, 18 columns>: <path>` lines to stdout.
///
/// Equal entries are suppressed unless asked for. Labels are colored
/// by family when the stream supports it; the text is identical either
/// way.
pub struct TextReporter {
    stdout: StandardStream,
    show_equal: bool,
}

impl TextReporter {
    pub fn new(use_color: bool, show_equal: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
            show_equal,
        }
    }

    fn color_for(kind: DiffKind) -> Option<Color> {
        match kind {
            DiffKind::Created | DiffKind::CreatedFolder => Some(Color::Green),
            DiffKind::Deleted | DiffKind::RemovedFolder => Some(Color::Red),
            kind if kind.is_equal() => None,
            _ => Some(Color::Yellow),
        }
    }
}

impl Reporter for TextReporter {
    fn difference(&mut self, kind: DiffKind, display_path: &str) -> io::Result<()> {
        if !self.show_equal && kind.is_equal() {
            return Ok(());
        }

        if let Some(color) = Self::color_for(kind) {
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(color)))?;
        }
        write!(self.stdout, "{:<18}", kind.label())?;
        self.stdout.reset()?;
        writeln!(self.stdout, ": {}", display_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_family_is_green_and_deleted_family_is_red() {
        assert_eq!(TextReporter::color_for(DiffKind::Created), Some(Color::Green));
        assert_eq!(
            TextReporter::color_for(DiffKind::CreatedFolder),
            Some(Color::Green)
        );
        assert_eq!(TextReporter::color_for(DiffKind::Deleted), Some(Color::Red));
        assert_eq!(
            TextReporter::color_for(DiffKind::RemovedFolder),
            Some(Color::Red)
        );
    }

    #[test]
    fn test_equal_family_is_uncolored() {
        assert_eq!(TextReporter::color_for(DiffKind::Equal), None);
        assert_eq!(TextReporter::color_for(DiffKind::EqualFolder), None);
        assert_eq!(TextReporter::color_for(DiffKind::EqualLinks), None);
    }

    #[test]
    fn test_changes_are_yellow() {
        for kind in [
            DiffKind::Newer,
            DiffKind::Older,
            DiffKind::Larger,
            DiffKind::Smaller,
            DiffKind::Modified,
            DiffKind::FileBecameFolder,
            DiffKind::FolderBecameFile,
            DiffKind::DifferingLinks,
            DiffKind::FileBecameLink,
            DiffKind::LinkBecameFile,
        ] {
            assert_eq!(TextReporter::color_for(kind), Some(Color::Yellow));
        }
    }
}
