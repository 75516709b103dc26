use std::{io, path::PathBuf};

/// Error taxonomy for the trash lifecycle engine.
///
/// Every variant is terminal for the current invocation; nothing is retried.
/// Validation errors carry the offending path so messages can name it.
#[derive(thiserror::Error, Debug)]
pub enum TrashError {
    /// The target is one of the protected system directories.
    #[error("{} is protected", .0.display())]
    ProtectedPath(PathBuf),

    /// The parent directory refuses the write+execute access a move needs.
    #[error("cannot remove {}: permission denied", .0.display())]
    PermissionDenied(PathBuf),

    /// The target does not exist (symlinks are not dereferenced, so a
    /// dangling link does not land here).
    #[error("could not find {}", .0.display())]
    NotFound(PathBuf),

    /// The target is a directory but the recursive flag was not given.
    #[error("{} is a directory but the recursive flag was not used", .0.display())]
    DirectoryNeedsRecurse(PathBuf),

    /// The dated destination directory could not be created.
    #[error("cannot create trash directory {}", .0.display())]
    StorageUnavailable(PathBuf, #[source] io::Error),

    /// The user declined, or gave an empty answer to, a confirmation prompt.
    #[error("aborted")]
    Aborted,

    /// File system I/O failure while acting on a path.
    #[error("I/O error while accessing {}", .0.display())]
    Io(PathBuf, #[source] io::Error),
}

impl TrashError {
    pub fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::Io(path.into(), error)
    }

    pub fn storage(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::StorageUnavailable(path.into(), error)
    }
}

/// Shared result alias for the crate.
pub type Result<T> = std::result::Result<T, TrashError>;
