// src/files.rs
//! Whole-file wrappers around [`compress`](crate::compress) and
//! [`decompress`](crate::decompress).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::paths;

/// Sizes and locations of one file operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub input_path:  PathBuf,
    pub input_len:   u64,
    pub output_path: PathBuf,
    pub output_len:  u64,
}

impl FileReport {
    /// Percentage of the input removed, `None` for an empty input.
    pub fn deflated_percent(&self) -> Option<f64> {
        if self.input_len == 0 {
            return None;
        }
        Some(100.0 - 100.0 * (self.output_len as f64 / self.input_len as f64))
    }
}

/// Compress `path` into a sibling `.zmh` file.
pub fn compress_file(path: &Path) -> Result<FileReport> {
    let input = fs::read(path)?;
    let extension = paths::extension_of(path);
    let output = crate::compress(&input, &extension)?;

    let output_path = paths::compressed_path(path);
    fs::write(&output_path, &output)?;
    info!(
        input = %path.display(),
        output = %output_path.display(),
        "compressed {} → {} bytes",
        input.len(),
        output.len()
    );

    Ok(FileReport {
        input_path: path.to_path_buf(),
        input_len: input.len() as u64,
        output_path,
        output_len: output.len() as u64,
    })
}

/// Restore a `.zmh` file next to itself, using the stored extension.
///
/// `suffix` is appended to the file stem, e.g. `_new` to avoid overwriting
/// the original during a round-trip check.
pub fn decompress_file(path: &Path, suffix: Option<&str>) -> Result<FileReport> {
    let input = fs::read(path)?;
    let restored = crate::decompress(&input)?;

    let output_path = paths::restored_path(path, &restored.extension, suffix);
    fs::write(&output_path, &restored.data)?;
    info!(
        input = %path.display(),
        output = %output_path.display(),
        "decompressed {} → {} bytes",
        input.len(),
        restored.data.len()
    );

    Ok(FileReport {
        input_path: path.to_path_buf(),
        input_len: input.len() as u64,
        output_path,
        output_len: restored.data.len() as u64,
    })
}

/// Byte-for-byte comparison of two files.
pub fn same_contents(a: &Path, b: &Path) -> Result<bool> {
    if fs::metadata(a)?.len() != fs::metadata(b)?.len() {
        return Ok(false);
    }
    Ok(fs::read(a)? == fs::read(b)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::TEST_SUFFIX;
    use tempfile::tempdir;

    #[test]
    fn test_compress_then_decompress_file() {
        let dir = tempdir().unwrap();
        let original = dir.path().join("sample.txt");
        let text = b"she sells sea shells by the sea shore".repeat(20);
        fs::write(&original, &text).unwrap();

        let packed = compress_file(&original).unwrap();
        assert_eq!(packed.output_path, dir.path().join("sample.zmh"));
        assert_eq!(packed.input_len, text.len() as u64);
        assert!(packed.output_len < packed.input_len);
        assert!(packed.deflated_percent().unwrap() > 0.0);

        let restored = decompress_file(&packed.output_path, Some(TEST_SUFFIX)).unwrap();
        assert_eq!(restored.output_path, dir.path().join("sample_new.txt"));
        assert!(same_contents(&original, &restored.output_path).unwrap());
    }

    #[test]
    fn test_empty_file() {
        let dir = tempdir().unwrap();
        let original = dir.path().join("empty.dat");
        fs::write(&original, b"").unwrap();

        let packed = compress_file(&original).unwrap();
        assert_eq!(packed.output_len, 4);
        assert_eq!(packed.deflated_percent(), None);

        let restored = decompress_file(&packed.output_path, None).unwrap();
        assert_eq!(restored.output_path, dir.path().join("empty.dat"));
        assert_eq!(restored.output_len, 0);
    }

    #[test]
    fn test_same_contents_detects_difference() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, b"abcd").unwrap();
        fs::write(&b, b"abce").unwrap();
        assert!(!same_contents(&a, &b).unwrap());
        fs::write(&b, b"abcd").unwrap();
        assert!(same_contents(&a, &b).unwrap());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = compress_file(&dir.path().join("absent.txt")).unwrap_err();
        assert_eq!(err.category(), "io_error");
    }
}
