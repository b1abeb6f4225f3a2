// src/header.rs
//! Extension block: one length byte followed by that many bytes of UTF-8
//! extension text (no leading dot). Always present, even for empty files.

use crate::error::{Error, Result};

pub const MAX_EXTENSION_LEN: usize = u8::MAX as usize;

pub fn write_extension(extension: &str) -> Result<Vec<u8>> {
    let bytes = extension.as_bytes();
    if bytes.len() > MAX_EXTENSION_LEN {
        return Err(Error::ExtensionTooLong { len: bytes.len() });
    }
    let mut out = Vec::with_capacity(1 + bytes.len());
    out.push(bytes.len() as u8);
    out.extend_from_slice(bytes);
    Ok(out)
}

/// Parse the extension block at the front of `data`.
///
/// Returns the extension and the number of bytes it occupied.
pub fn read_extension(data: &[u8]) -> Result<(String, usize)> {
    let Some(&len) = data.first() else {
        return Err(Error::malformed("container is empty, expected extension length"));
    };
    let end = 1 + len as usize;
    let Some(raw) = data.get(1..end) else {
        return Err(Error::malformed(format!(
            "extension declares {} bytes, only {} present",
            len,
            data.len() - 1
        )));
    };
    let extension = std::str::from_utf8(raw)
        .map_err(|e| Error::malformed(format!("extension is not UTF-8: {}", e)))?;
    Ok((extension.to_owned(), end))
}
