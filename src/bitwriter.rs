// src/bitwriter.rs
//! Packs a byte sequence into its Huffman bitstream.
//!
//! Payload block layout:
//!   Byte 0:        significant bits in the last packed byte (1–8)
//!   Bytes 1..:     codes concatenated MSB-first, zero-padded to a byte boundary

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::codes::{Code, CodeTable};
use crate::error::{Error, Result};

pub const BYTE_BITS: u64 = 8;

/// Significant bits in the final byte of a `total_bits`-long stream.
///
/// A stream that ends exactly on a byte boundary has 8, never 0.
pub fn significant_bits(total_bits: u64) -> u8 {
    match total_bits % BYTE_BITS {
        0 => BYTE_BITS as u8,
        n => n as u8,
    }
}

/// Write every bit of `code` to `writer`.
pub fn write_code<W: BitWrite>(writer: &mut W, code: &Code) -> std::io::Result<()> {
    for &bit in code.bits() {
        writer.write_bit(bit)?;
    }
    Ok(())
}

/// Encode `input` through `table` into a wire-ready payload block.
///
/// Every byte of `input` must have a code; a missing one is reported as
/// [`Error::UnknownSymbol`] and nothing is returned.
pub fn write_payload(input: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    let mut codes = Vec::with_capacity(input.len());
    let mut total_bits = 0u64;
    for &symbol in input {
        let code = table.get(symbol).ok_or(Error::UnknownSymbol { symbol })?;
        total_bits += code.len() as u64;
        codes.push(code);
    }

    let mut output = Vec::with_capacity(1 + total_bits.div_ceil(BYTE_BITS) as usize);
    output.push(significant_bits(total_bits));
    {
        let mut writer = BitWriter::endian(&mut output, BigEndian);
        for code in codes {
            write_code(&mut writer, code)?;
        }
        writer.byte_align()?;
    }
    Ok(output)
}
