//! Safety rules applied to removal targets before anything is touched.

use crate::errors::TrashError;
use crate::fs::FileSystem;
use std::env;
use std::path::{Path, PathBuf};

/// Absolute paths the removal logic refuses to touch regardless of flags.
pub const PROTECTED_DIRS: [&str; 26] = [
    "/bin",
    "/boot",
    "/dev",
    "/etc",
    "/home",
    "/initrd",
    "/lib",
    "/lib32",
    "/lib64",
    "/proc",
    "/root",
    "/sbin",
    "/sys",
    "/usr",
    "/usr/bin",
    "/usr/include",
    "/usr/lib",
    "/usr/local",
    "/usr/local/bin",
    "/usr/local/include",
    "/usr/local/sbin",
    "/usr/local/share",
    "/usr/sbin",
    "/usr/share",
    "/usr/src",
    "/var",
];

/// Returns true when the path lexically matches a protected entry.
pub fn is_protected(path: &Path) -> bool {
    PROTECTED_DIRS.iter().any(|dir| Path::new(dir) == path)
}

/// Checks every target against the safety rules, in order: protected set,
/// parent-directory permissions, existence, directory-vs-recurse.
///
/// Fail-fast: the first violation aborts the whole batch, and no target is
/// touched. Pure observation, no filesystem mutation.
pub fn validate_targets<F: FileSystem>(
    fs: &F,
    targets: &[PathBuf],
    recurse: bool,
) -> crate::Result<()> {
    for target in targets {
        if is_protected(target) {
            return Err(TrashError::ProtectedPath(target.clone()));
        }

        // Moving an entry needs write+execute on its parent directory; no
        // permissions are required on the entry itself.
        if !fs.can_write_dir(&resolved_parent(target)) {
            return Err(TrashError::PermissionDenied(target.clone()));
        }

        // Symlink-aware existence, so broken symlinks remain removable.
        if !fs.lexists(target) {
            return Err(TrashError::NotFound(target.clone()));
        }

        if fs.is_dir(target) && !fs.is_symlink(target) && !recurse {
            return Err(TrashError::DirectoryNeedsRecurse(target.clone()));
        }
    }
    Ok(())
}

/// Parent of the target after anchoring relative paths to the current
/// working directory. The target itself may not exist yet, so this never
/// hits the filesystem.
fn resolved_parent(target: &Path) -> PathBuf {
    let absolute = if target.is_absolute() {
        target.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(target))
            .unwrap_or_else(|_| target.to_path_buf())
    };
    absolute
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::test_support::ScriptedFs;
    use crate::fs::RealFileSystem;
    use std::fs::File;
    use std::os::unix::fs::symlink;
    use std::time::SystemTime;

    #[test]
    fn every_protected_path_is_refused() {
        for dir in PROTECTED_DIRS {
            let targets = vec![PathBuf::from(dir)];
            let err = validate_targets(&RealFileSystem, &targets, true).unwrap_err();
            assert!(
                matches!(err, TrashError::ProtectedPath(p) if p == Path::new(dir)),
                "{dir} should be protected"
            );
        }
    }

    #[test]
    fn trailing_slash_does_not_bypass_protection() {
        let targets = vec![PathBuf::from("/etc/")];
        let err = validate_targets(&RealFileSystem, &targets, true).unwrap_err();
        assert!(matches!(err, TrashError::ProtectedPath(_)));
    }

    #[test]
    fn missing_target_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let targets = vec![dir.path().join("ghost.txt")];
        let err = validate_targets(&RealFileSystem, &targets, false).unwrap_err();
        assert!(matches!(err, TrashError::NotFound(_)));
    }

    #[test]
    fn dangling_symlink_is_a_valid_target() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("dangling");
        symlink(dir.path().join("nowhere"), &link).unwrap();

        let targets = vec![link];
        validate_targets(&RealFileSystem, &targets, false).unwrap();
    }

    #[test]
    fn directory_requires_recurse() {
        let dir = tempfile::tempdir().unwrap();
        let child = dir.path().join("sub");
        std::fs::create_dir(&child).unwrap();

        let targets = vec![child.clone()];
        let err = validate_targets(&RealFileSystem, &targets, false).unwrap_err();
        assert!(matches!(err, TrashError::DirectoryNeedsRecurse(p) if p == child));

        validate_targets(&RealFileSystem, &targets, true).unwrap();
    }

    #[test]
    fn symlink_to_directory_needs_no_recurse() {
        let dir = tempfile::tempdir().unwrap();
        let child = dir.path().join("sub");
        std::fs::create_dir(&child).unwrap();
        let link = dir.path().join("sublink");
        symlink(&child, &link).unwrap();

        let targets = vec![link];
        validate_targets(&RealFileSystem, &targets, false).unwrap();
    }

    #[test]
    fn unwritable_parent_is_permission_denied() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("locked.txt");
        File::create(&target).unwrap();

        let fs = ScriptedFs::at(SystemTime::now()).deny_writes_in(dir.path());
        let targets = vec![target.clone()];
        let err = validate_targets(&fs, &targets, false).unwrap_err();
        assert!(matches!(err, TrashError::PermissionDenied(p) if p == target));
    }

    #[test]
    fn first_violation_wins() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("real.txt");
        File::create(&existing).unwrap();

        // The missing target comes first, so the batch fails on NotFound
        // even though a protected path follows it.
        let targets = vec![dir.path().join("ghost"), PathBuf::from("/etc")];
        let err = validate_targets(&RealFileSystem, &targets, false).unwrap_err();
        assert!(matches!(err, TrashError::NotFound(_)));
    }
}
