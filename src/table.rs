// src/table.rs
//! Code table serialisation.
//!
//! Table block layout:
//!   Byte 0:        entry count − 1 (so 1–256 entries fit in one byte)
//!   Per entry, in ascending symbol order:
//!     1 byte       symbol
//!     1 byte       code length in bits (1–255)
//!     ⌈len/8⌉ B    code bits MSB-first, zero-padded in their own last byte

use std::io::Cursor;

use bitstream_io::{BigEndian, BitReader, BitWrite, BitWriter};

use crate::bitreader::read_code;
use crate::bitwriter::write_code;
use crate::codes::CodeTable;
use crate::error::{Error, Result};

pub const MAX_CODE_BITS: usize = u8::MAX as usize;

/// Bytes needed to hold `bits` packed bits.
fn packed_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Serialise a non-empty code table into a table block.
pub fn serialize_table(table: &CodeTable) -> Result<Vec<u8>> {
    if table.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    let mut out = Vec::new();
    out.push((table.len() - 1) as u8);
    for (symbol, code) in table {
        if code.is_empty() || code.len() > MAX_CODE_BITS {
            return Err(Error::CodeTooLong {
                symbol,
                len: code.len(),
            });
        }
        out.push(symbol);
        out.push(code.len() as u8);
        let mut w = BitWriter::endian(&mut out, BigEndian);
        write_code(&mut w, code)?;
        w.byte_align()?;
    }
    Ok(out)
}

/// Parse a table block from the front of `data`.
///
/// Returns the table and the number of bytes it occupied.
pub fn deserialize_table(data: &[u8]) -> Result<(CodeTable, usize)> {
    let Some(&count_byte) = data.first() else {
        return Err(Error::malformed("table: missing entry count"));
    };
    let entries = count_byte as usize + 1;

    let mut table = CodeTable::new();
    let mut pos = 1;
    for entry in 0..entries {
        if data.len() < pos + 2 {
            return Err(Error::malformed_at(
                format!("table: entry {} of {} truncated", entry + 1, entries),
                pos,
            ));
        }
        let symbol = data[pos];
        let bits   = data[pos + 1] as usize;
        if bits == 0 {
            return Err(Error::malformed_at(
                format!("table: symbol 0x{:02x} has a zero-length code", symbol),
                pos + 1,
            ));
        }

        let start = pos + 2;
        let end   = start + packed_len(bits);
        if data.len() < end {
            return Err(Error::malformed_at(
                format!("table: code for symbol 0x{:02x} truncated", symbol),
                start,
            ));
        }

        let mut r = BitReader::endian(Cursor::new(&data[start..end]), BigEndian);
        let code = read_code(&mut r, bits)?;
        if table.insert(symbol, code).is_some() {
            return Err(Error::malformed_at(
                format!("table: symbol 0x{:02x} listed twice", symbol),
                pos,
            ));
        }
        pos = end;
    }

    if !table.is_prefix_free() {
        return Err(Error::malformed("table: codes are not prefix-free"));
    }
    Ok((table, pos))
}
