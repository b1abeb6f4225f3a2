// src/error.rs
//! Error types for compression and container decoding.

use thiserror::Error;

/// Result type alias for zmh operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while building codes, packing payloads, or parsing a container.
#[derive(Debug, Error)]
pub enum Error {
    /// A code table was requested for an input with no symbols.
    #[error("cannot build a code table from an empty alphabet")]
    EmptyAlphabet,

    /// Container bytes do not match what their own headers declare.
    #[error("malformed container: {message}")]
    MalformedContainer { message: String },

    /// A byte being encoded has no code in the table.
    #[error("symbol 0x{symbol:02x} has no entry in the code table")]
    UnknownSymbol { symbol: u8 },

    /// The extension does not fit behind a single length byte.
    #[error("file extension is {len} bytes, at most 255 fit in the container")]
    ExtensionTooLong { len: usize },

    /// A code is too long for the single length byte of a table entry.
    #[error("code for symbol 0x{symbol:02x} is {len} bits, at most 255 fit in the table")]
    CodeTooLong { symbol: u8, len: usize },

    /// A textual code contained something other than `0` and `1`.
    #[error("code string contains {found:?}, only '0' and '1' are allowed")]
    InvalidCodeString { found: char },

    /// I/O error from the bit writer or the file system.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a malformed container error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedContainer {
            message: message.into(),
        }
    }

    /// Create a malformed container error with offset context.
    pub fn malformed_at(message: impl Into<String>, offset: usize) -> Self {
        Error::MalformedContainer {
            message: format!("{} at offset {}", message.into(), offset),
        }
    }

    /// Short, stable name of the error kind.
    pub fn category(&self) -> &'static str {
        match self {
            Error::EmptyAlphabet => "empty_alphabet",
            Error::MalformedContainer { .. } => "malformed_container",
            Error::UnknownSymbol { .. } => "unknown_symbol",
            Error::ExtensionTooLong { .. } => "extension_too_long",
            Error::CodeTooLong { .. } => "code_too_long",
            Error::InvalidCodeString { .. } => "invalid_code_string",
            Error::Io(_) => "io_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_at_includes_offset() {
        let err = Error::malformed_at("table truncated", 12);
        assert_eq!(err.to_string(), "malformed container: table truncated at offset 12");
        assert_eq!(err.category(), "malformed_container");
    }

    #[test]
    fn test_unknown_symbol_message() {
        let err = Error::UnknownSymbol { symbol: 0x7a };
        assert_eq!(err.to_string(), "symbol 0x7a has no entry in the code table");
    }

    #[test]
    fn test_io_conversion() {
        let err: Error = std::io::Error::other("disk gone").into();
        assert_eq!(err.category(), "io_error");
    }
}
