//! Safe-delete engine behind the `t` command.
//!
//! Removal targets are validated against a protected-path list, then moved
//! into a time-stamped holding area under the trash root
//! (`<root>/<YYYY-MM-DD>/<HH-MM-SS>/<name>`) instead of being destroyed.
//! Dated directories older than the retention window are purged on every
//! invocation. The clock, the filesystem, and the confirmation prompt are
//! injected so the whole lifecycle is testable against a temporary root.

pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod helpers;
pub mod store;
pub mod ui;
pub mod validate;

pub use config::TrashConfig;
pub use engine::{RemovalEngine, RemovalRequest};
pub use errors::{Result, TrashError};
pub use fs::{FileSystem, RealFileSystem};
pub use helpers::{display_path, split_name, unique_name, DATE_FORMAT, TIME_FORMAT};
pub use store::TrashStore;
pub use ui::{render_error, yellow, Confirm, StdinConfirmer};
pub use validate::{is_protected, validate_targets, PROTECTED_DIRS};
