//! Dated layout under the trash root:
//! `<trash_root>/<YYYY-MM-DD>/<HH-MM-SS>/<item>`.

use crate::config::TrashConfig;
use crate::errors::TrashError;
use crate::fs::FileSystem;
use crate::helpers::{DATE_FORMAT, TIME_FORMAT};
use chrono::{DateTime, Duration, Local, NaiveDate};
use std::path::PathBuf;

/// Creates destination directories and purges expired dated directories.
pub struct TrashStore<'a, F> {
    fs: &'a F,
    config: &'a TrashConfig,
}

impl<'a, F: FileSystem> TrashStore<'a, F> {
    pub fn new(fs: &'a F, config: &'a TrashConfig) -> Self {
        Self { fs, config }
    }

    /// Computes and creates the destination directory for this invocation.
    ///
    /// Two calls within the same clock second return the identical path;
    /// the second create is a no-op. Creation failure surfaces as
    /// `StorageUnavailable` before any target is touched.
    pub fn current_destination(&self) -> crate::Result<PathBuf> {
        let now: DateTime<Local> = self.fs.now().into();
        let path = self
            .config
            .trash_root
            .join(now.format(DATE_FORMAT).to_string())
            .join(now.format(TIME_FORMAT).to_string());

        self.fs.create_dir_all(&path).map_err(|err| match err {
            TrashError::Io(p, source) => TrashError::StorageUnavailable(p, source),
            other => other,
        })?;
        Ok(path)
    }

    /// Deletes dated directories that have aged out of the retention window.
    ///
    /// The comparison uses `retention_days + 1` so a partial first day
    /// rounds up: an entry always survives at least `retention_days` full
    /// days. Children whose names do not parse as dates are left alone,
    /// and a missing trash root is a no-op.
    pub fn purge_expired(&self) -> crate::Result<()> {
        if !self.fs.lexists(&self.config.trash_root) {
            return Ok(());
        }

        let now: DateTime<Local> = self.fs.now().into();
        let cutoff = now.naive_local() - Duration::days(self.config.retention_days + 1);

        for child in self.fs.list_dir(&self.config.trash_root)? {
            let Some(name) = child.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Ok(date) = NaiveDate::parse_from_str(name, DATE_FORMAT) else {
                continue;
            };
            let Some(midnight) = date.and_hms_opt(0, 0, 0) else {
                continue;
            };
            if midnight < cutoff {
                self.fs.remove_dir_all(&child)?;
            }
        }
        Ok(())
    }
}
