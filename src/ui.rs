//! Terminal-facing collaborators: confirmation prompts and message
//! rendering. Nothing here affects what the engine decides, only how it
//! talks to the user.

use crate::errors::TrashError;
use crate::helpers::display_path;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Yes/no confirmation capability, injected into the engine so tests can
/// script the answer instead of reading standard input.
pub trait Confirm {
    /// Shows `prompt` and returns the user's answer.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Reads one line from standard input. Truthy iff the first character of
/// the answer is 'y' or 'Y'; an empty line declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirmer;

impl Confirm for StdinConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.chars().next(), Some('y' | 'Y'))
    }
}

/// Yellow tty text, used to highlight paths, flags, and counts.
pub fn yellow(text: impl ToString) -> String {
    text.to_string().yellow().to_string()
}

/// One-line user-facing rendering of an engine error. No stack traces, no
/// internal diagnostics.
pub fn render_error(err: &TrashError) -> String {
    match err {
        TrashError::ProtectedPath(path) => {
            format!("{} is protected. Aborting.", yellow(display_path(path)))
        }
        TrashError::PermissionDenied(path) => {
            format!(
                "Cannot remove {}: permission denied. Aborting.",
                yellow(display_path(path))
            )
        }
        TrashError::NotFound(path) => {
            format!("Could not find {}. Aborting.", yellow(display_path(path)))
        }
        TrashError::DirectoryNeedsRecurse(path) => {
            format!(
                "{} is a directory, but {} flag was not used. Aborting.",
                yellow(display_path(path)),
                yellow("-r")
            )
        }
        TrashError::StorageUnavailable(path, source) => {
            format!(
                "Cannot create trash directory {}: {}. Aborting.",
                yellow(display_path(path)),
                source
            )
        }
        TrashError::Aborted => "Aborted.".to_string(),
        TrashError::Io(path, source) => {
            format!(
                "Failed to remove {}: {}. Aborting.",
                yellow(display_path(path)),
                source
            )
        }
    }
}
