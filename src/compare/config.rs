//! Configuration for a comparison run

/// Immutable options shared by the whole walk.
///
/// Whether equal entries are shown is a presentation decision and lives
/// in the reporter, not here; the walker reports every kind.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Compare file modification times before anything else.
    pub compare_times: bool,
    /// Tolerance in seconds when `compare_times` is on: an absolute
    /// mtime difference of at most this many seconds counts as equal.
    pub time_epsilon: i64,
    /// Compare byte content of same-size files. When off, equal sizes
    /// mean equal files.
    pub compare_content: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            compare_times: false,
            time_epsilon: 0,
            compare_content: true,
        }
    }
}
