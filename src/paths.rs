//! Path resolution for generator working directories and published filenames.
//!
//! Everything here is pure: no filesystem access.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Working directory for a service's generator.
///
/// `local_path` joined with `service_path` when the latter is non-empty.
pub fn resolve_working_dir(local_path: &str, service_path: &str) -> PathBuf {
    if service_path.is_empty() {
        PathBuf::from(local_path)
    } else {
        Path::new(local_path).join(service_path)
    }
}

/// Anchor a possibly relative working directory at the project root.
///
/// Absolute paths are returned unchanged.
pub fn anchor(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

/// Filename a service's spec is published under: the final segment of `spec_path`.
///
/// Returns `None` when there is no final segment (empty, `..`, or a root).
pub fn output_file_name(spec_path: &str) -> Option<&OsStr> {
    Path::new(spec_path).file_name()
}
