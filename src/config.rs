use std::env;
use std::path::PathBuf;

/// Name of the trash directory under the user's home.
const TRASH_DIR_NAME: &str = ".trash";

/// Days a dated trash directory is kept before it becomes purge-eligible.
const DEFAULT_RETENTION_DAYS: i64 = 7;

/// Process-wide trash configuration.
///
/// Passed explicitly into the components rather than read from globals, so
/// tests can point everything at a temporary root.
#[derive(Debug, Clone)]
pub struct TrashConfig {
    /// Top-level holding directory for all removed items.
    pub trash_root: PathBuf,
    /// Retention window in days.
    pub retention_days: i64,
}

impl TrashConfig {
    pub fn new(trash_root: impl Into<PathBuf>, retention_days: i64) -> Self {
        Self {
            trash_root: trash_root.into(),
            retention_days,
        }
    }
}

impl Default for TrashConfig {
    fn default() -> Self {
        let home = env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/"));
        Self::new(home.join(TRASH_DIR_NAME), DEFAULT_RETENTION_DAYS)
    }
}
