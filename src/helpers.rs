//! Naming helpers shared by the store and the engine.

use crate::fs::FileSystem;
use std::path::Path;

/// Date format of a dated directory under the trash root.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format of a destination directory under a dated directory.
pub const TIME_FORMAT: &str = "%H-%M-%S";

/// Returns a trimmed path string safe to embed in user-facing messages.
pub fn display_path(path: &Path) -> String {
    path.display().to_string().trim().to_string()
}

/// Splits a file name into stem and extension, `os.path.splitext` style:
/// the extension starts at the last dot of the name, except that leading
/// dots never open an extension (`.bashrc` has no extension).
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if name[..idx].bytes().any(|b| b != b'.') => name.split_at(idx),
        _ => (name, ""),
    }
}

/// Returns a name unused in `dir`, based on `name`.
///
/// `name` itself is returned when free; otherwise candidates
/// `{stem}__{k}{ext}` are probed for `k = 1, 2, 3, ...` and the first
/// unused one wins. The directory has finitely many entries, so the loop
/// terminates, and for a fixed directory snapshot the result is
/// deterministic.
pub fn unique_name<F: FileSystem>(fs: &F, name: &str, dir: &Path) -> String {
    if !fs.lexists(&dir.join(name)) {
        return name.to_string();
    }

    let (stem, ext) = split_name(name);
    let mut counter = 1u64;
    loop {
        let candidate = format!("{stem}__{counter}{ext}");
        if !fs.lexists(&dir.join(&candidate)) {
            return candidate;
        }
        counter += 1;
    }
}
