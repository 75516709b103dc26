//! Orchestration of one removal invocation.
//!
//! The flow is linear: Validate -> Confirm -> Purge -> Act. Validate and
//! Confirm only observe; the filesystem changes in Purge and Act alone.
//! Two concurrent invocations sharing a trash root can race the
//! check-then-act in `unique_name` and collide in the same destination
//! second; this is an accepted limitation of a single-user local tool.

use crate::config::TrashConfig;
use crate::errors::TrashError;
use crate::fs::FileSystem;
use crate::helpers::unique_name;
use crate::store::TrashStore;
use crate::ui::{yellow, Confirm};
use crate::validate::validate_targets;
use std::path::{Path, PathBuf};

/// One parsed invocation: the ordered targets plus the flags that shape
/// how they are handled.
#[derive(Debug, Clone)]
pub struct RemovalRequest {
    pub targets: Vec<PathBuf>,
    pub recurse: bool,
    pub permanent: bool,
}

/// Drives validation, confirmation, trash hygiene, and the move or delete.
pub struct RemovalEngine<'a, F, C> {
    fs: &'a F,
    config: &'a TrashConfig,
    confirmer: &'a C,
}

impl<'a, F: FileSystem, C: Confirm> RemovalEngine<'a, F, C> {
    pub fn new(fs: &'a F, config: &'a TrashConfig, confirmer: &'a C) -> Self {
        Self {
            fs,
            config,
            confirmer,
        }
    }

    /// Runs the invocation to completion or to the first error.
    ///
    /// Expired trash is purged on every run, before anything new is filed,
    /// so an invocation can never expire the directory it just created.
    /// A mid-act failure leaves earlier targets moved; there is no
    /// rollback.
    pub fn run(&self, request: &RemovalRequest) -> crate::Result<()> {
        validate_targets(self.fs, &request.targets, request.recurse)?;
        self.confirm_intent(request)?;

        let store = TrashStore::new(self.fs, self.config);
        store.purge_expired()?;

        if request.permanent {
            for target in &request.targets {
                self.remove_item(target)?;
            }
        } else {
            // One destination shared by every target of this invocation.
            let destination = store.current_destination()?;
            for target in &request.targets {
                self.file_item(target, &destination)?;
            }
        }
        Ok(())
    }

    /// Asks for confirmation when the request removes multiple items or
    /// deletes forever. Declining, or answering with an empty line, aborts
    /// with no side effects.
    fn confirm_intent(&self, request: &RemovalRequest) -> crate::Result<()> {
        let count = request.targets.len();
        let prompt = if request.permanent && count > 1 {
            format!(
                "Delete {} files {}? [yN] ",
                yellow(count),
                yellow("forever")
            )
        } else if count > 1 {
            format!(
                "Multiple items ({}) passed for removal. Continue? [yN] ",
                yellow(count)
            )
        } else if request.permanent {
            format!("Delete {}? [yN] ", yellow("forever"))
        } else {
            return Ok(());
        };

        if self.confirmer.confirm(&prompt) {
            Ok(())
        } else {
            Err(TrashError::Aborted)
        }
    }

    /// Permanent deletion: directories recursively, everything else
    /// (broken symlinks included) directly.
    fn remove_item(&self, target: &Path) -> crate::Result<()> {
        if self.fs.is_dir(target) && !self.fs.is_symlink(target) {
            self.fs.remove_dir_all(target)
        } else {
            self.fs.remove_file(target)
        }
    }

    /// Moves the target into the destination under a collision-free name.
    /// A rename, never a copy, so the entry type is preserved exactly.
    fn file_item(&self, target: &Path, destination: &Path) -> crate::Result<()> {
        let name = target
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("item");
        let name = unique_name(self.fs, name, destination);
        self.fs.rename(target, &destination.join(name))
    }
}
