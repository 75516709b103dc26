use crate::errors::TrashError;
use std::ffi::CString;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Filesystem abstraction boundary for the removal engine.
///
/// Keeping this trait narrow makes it easy to write deterministic tests:
/// the retention logic reads the clock through `now()`, and the permission
/// rule goes through `can_write_dir()`, so both can be scripted.
pub trait FileSystem {
    /// Returns the current wall-clock time.
    fn now(&self) -> SystemTime;

    /// Returns true when the path exists, without dereferencing symlinks.
    /// A dangling symlink therefore counts as existing.
    fn lexists(&self, path: &Path) -> bool;

    /// Returns true when the path is a directory (symlinks dereferenced).
    fn is_dir(&self, path: &Path) -> bool;

    /// Returns true when the path itself is a symlink.
    fn is_symlink(&self, path: &Path) -> bool;

    /// Returns true when the process may write to and traverse the
    /// directory. Moving or unlinking an entry needs both on its parent.
    fn can_write_dir(&self, path: &Path) -> bool;

    /// Creates a directory and all missing parents. Idempotent.
    fn create_dir_all(&self, path: &Path) -> crate::Result<()>;

    /// Renames/moves a path.
    fn rename(&self, from: &Path, to: &Path) -> crate::Result<()>;

    /// Removes a file or symlink.
    fn remove_file(&self, path: &Path) -> crate::Result<()>;

    /// Removes a directory and everything under it.
    fn remove_dir_all(&self, path: &Path) -> crate::Result<()>;

    /// Lists directory children as concrete paths.
    fn list_dir(&self, path: &Path) -> crate::Result<Vec<PathBuf>>;
}

/// Default filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }

    fn lexists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .map(|metadata| metadata.file_type().is_symlink())
            .unwrap_or(false)
    }

    fn can_write_dir(&self, path: &Path) -> bool {
        let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
            return false;
        };
        unsafe { libc::access(c_path.as_ptr(), libc::W_OK | libc::X_OK) == 0 }
    }

    fn create_dir_all(&self, path: &Path) -> crate::Result<()> {
        fs::create_dir_all(path).map_err(|err| TrashError::io(path, err))
    }

    fn rename(&self, from: &Path, to: &Path) -> crate::Result<()> {
        fs::rename(from, to).map_err(|err| TrashError::io(from, err))
    }

    fn remove_file(&self, path: &Path) -> crate::Result<()> {
        fs::remove_file(path).map_err(|err| TrashError::io(path, err))
    }

    fn remove_dir_all(&self, path: &Path) -> crate::Result<()> {
        fs::remove_dir_all(path).map_err(|err| TrashError::io(path, err))
    }

    fn list_dir(&self, path: &Path) -> crate::Result<Vec<PathBuf>> {
        fs::read_dir(path)
            .map_err(|err| TrashError::io(path, err))?
            .map(|entry| entry.map(|v| v.path()))
            .collect::<Result<Vec<PathBuf>, std::io::Error>>()
            .map_err(|err| TrashError::io(path, err))
    }
}
