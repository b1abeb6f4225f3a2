// src/paths.rs
//! Output path derivation for compressed and restored files.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension given to every container file.
pub const COMPRESSED_EXTENSION: &str = "zmh";

/// Suffix added to the restored file name in test mode.
pub const TEST_SUFFIX: &str = "_new";

/// Final extension of `path` without the dot, or empty if there is none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `dir/name.ext` → `dir/name.zmh`.
pub fn compressed_path(path: &Path) -> PathBuf {
    path.with_extension(COMPRESSED_EXTENSION)
}

/// `dir/name.zmh` → `dir/name<suffix>.<extension>`.
///
/// With an empty extension no dot is appended.
pub fn restored_path(path: &Path, extension: &str, suffix: Option<&str>) -> PathBuf {
    let mut name: OsString = path.file_stem().map(OsString::from).unwrap_or_default();
    if let Some(suffix) = suffix {
        name.push(suffix);
    }
    if !extension.is_empty() {
        name.push(".");
        name.push(extension);
    }
    path.with_file_name(name)
}
