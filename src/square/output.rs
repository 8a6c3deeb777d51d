use crate::error::ActivityError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Sibling path with `suffix` inserted before the extension:
/// `photos/tea.jpg` + `-crop` → `photos/tea-crop.jpg`.
///
/// The extension starts at the last dot of the file name; a leading dot
/// (`.hidden`) does not start one.
pub fn derived_path(path: &Path, suffix: &str) -> crate::Result<PathBuf> {
    let stem = path
        .file_stem()
        .ok_or_else(|| ActivityError::InvalidPath(path.to_path_buf()))?;

    let mut file_name = OsString::from(stem);
    file_name.push(suffix);
    if let Some(extension) = path.extension() {
        file_name.push(".");
        file_name.push(extension);
    }

    Ok(path.with_file_name(file_name))
}
