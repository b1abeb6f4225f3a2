// src/lib.rs
//! ZMH — static Huffman file compression.
//!
//! The core is a pair of pure functions over byte slices: [`compress`] and
//! [`decompress`]. File handling lives in [`files`] and [`paths`].
pub mod bitreader;
pub mod bitwriter;
pub mod codes;
pub mod error;
pub mod files;
pub mod frequency;
pub mod header;
pub mod paths;
pub mod pqueue;
pub mod table;
pub mod tree;

use tracing::debug;

pub use codes::{Code, CodeTable};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;

/// Container layout:
///   Byte 0:              extension length L (0–255)
///   Bytes 1..1+L:        extension, UTF-8, without the leading dot
///   Then, for non-empty input only:
///     table block        see [`table`]
///     payload block      see [`bitwriter`]
///
/// An empty input produces just the extension block.
pub fn compress(input: &[u8], extension: &str) -> Result<Vec<u8>> {
    let mut output = header::write_extension(extension)?;
    if input.is_empty() {
        debug!(extension, "empty input, writing extension block only");
        return Ok(output);
    }

    let freq  = FrequencyTable::count(input);
    let codes = CodeTable::build(&freq)?;

    let table_bytes = table::serialize_table(&codes)?;
    let payload     = bitwriter::write_payload(input, &codes)?;
    debug!(
        symbols = freq.len(),
        entropy = freq.entropy(),
        max_code_bits = codes.max_code_len(),
        table_bytes = table_bytes.len(),
        payload_bytes = payload.len(),
        "compressed {} bytes",
        input.len()
    );

    output.reserve(table_bytes.len() + payload.len());
    output.extend_from_slice(&table_bytes);
    output.extend_from_slice(&payload);
    Ok(output)
}

/// The contents recovered from a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decompressed {
    /// Extension of the original file, without the dot; may be empty.
    pub extension: String,
    pub data: Vec<u8>,
}

/// Invert [`compress`].
///
/// Any inconsistency between the container's headers and its contents is
/// reported as [`Error::MalformedContainer`]; no partial output is returned.
pub fn decompress(input: &[u8]) -> Result<Decompressed> {
    let (extension, mut pos) = header::read_extension(input)?;
    if pos == input.len() {
        debug!(extension = %extension, "no table block, original input was empty");
        return Ok(Decompressed {
            extension,
            data: Vec::new(),
        });
    }

    let (codes, table_len) = table::deserialize_table(&input[pos..])
        .map_err(|e| shift_offset(e, pos))?;
    pos += table_len;

    let data = bitreader::read_payload(&input[pos..], &codes)?;
    debug!(
        symbols = codes.len(),
        table_bytes = table_len,
        payload_bytes = input.len() - pos,
        "decompressed {} bytes",
        data.len()
    );
    Ok(Decompressed { extension, data })
}

/// Note where the table block started so offsets read as container positions.
fn shift_offset(err: Error, base: usize) -> Error {
    match err {
        Error::MalformedContainer { message } => Error::MalformedContainer {
            message: format!("{} (table block starts at offset {})", message, base),
        },
        other => other,
    }
}
