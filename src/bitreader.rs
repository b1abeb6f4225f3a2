// src/bitreader.rs
//! Unpacks a Huffman payload block back into bytes.
//! The code table must be the one stored alongside the payload.

use std::collections::HashMap;
use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader};

use crate::codes::{Code, CodeTable};
use crate::error::{Error, Result};

const BYTE_BITS: u64 = 8;

/// Reverse lookup from code to symbol.
pub type DecodeTable = HashMap<Code, u8>;

pub fn decode_table(table: &CodeTable) -> DecodeTable {
    table.iter().map(|(symbol, code)| (code.clone(), symbol)).collect()
}

/// Read `len` bits from `reader` into a code.
pub fn read_code<R: BitRead>(reader: &mut R, len: usize) -> std::io::Result<Code> {
    (0..len).map(|_| reader.read_bit()).collect()
}

/// Number of meaningful bits in a payload block, from its marker byte.
fn payload_bits(block: &[u8]) -> Result<u64> {
    let Some((&significant, packed)) = block.split_first() else {
        return Err(Error::malformed("payload is missing its significant-bits byte"));
    };
    if significant == 0 || significant as u64 > BYTE_BITS {
        return Err(Error::malformed(format!(
            "significant-bits byte is {}, expected 1..=8",
            significant
        )));
    }

    // A table block means the input was non-empty, so at least one byte follows.
    if packed.is_empty() {
        return Err(Error::malformed(format!(
            "significant-bits byte is {} but no payload bytes follow",
            significant
        )));
    }
    let full_bits = packed.len() as u64 * BYTE_BITS;
    Ok(full_bits - (BYTE_BITS - significant as u64))
}

/// Decode a payload block (marker byte plus packed bytes) with `table`.
///
/// The bits must split exactly into codes from `table`; a bit run that
/// matches nothing, or a dangling partial code at the end, fails the whole
/// decode rather than returning what was matched so far.
pub fn read_payload(block: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    let total_bits = payload_bits(block)?;
    let dtable     = decode_table(table);
    let max_len    = table.max_code_len();

    let mut output  = Vec::new();
    let mut pending = Code::new();
    let mut reader  = BitReader::endian(Cursor::new(&block[1..]), BigEndian);

    for bit_pos in 0..total_bits {
        pending.push(reader.read_bit()?);
        if let Some(&symbol) = dtable.get(&pending) {
            output.push(symbol);
            pending.clear();
        } else if pending.len() >= max_len {
            return Err(Error::malformed(format!(
                "bits {} ending at bit {} match no code",
                pending, bit_pos
            )));
        }
    }

    if !pending.is_empty() {
        return Err(Error::malformed(format!(
            "payload ends inside a code ({} dangling bits)",
            pending.len()
        )));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitwriter::write_payload;
    use crate::frequency::FrequencyTable;

    fn code(bits: &str) -> Code {
        bits.parse().unwrap()
    }

    fn table_for(input: &[u8]) -> CodeTable {
        CodeTable::build(&FrequencyTable::count(input)).unwrap()
    }

    fn round_trip(input: &[u8]) -> Vec<u8> {
        let table = table_for(input);
        let payload = write_payload(input, &table).unwrap();
        read_payload(&payload, &table).unwrap()
    }

    #[test]
    fn test_round_trip_text() {
        let input = b"hello, world!";
        assert_eq!(round_trip(input), input);
    }

    #[test]
    fn test_round_trip_single_symbol() {
        let input = vec![b'x'; 50];
        assert_eq!(round_trip(&input), input);
    }

    #[test]
    fn test_round_trip_all_bytes() {
        let input: Vec<u8> = (0..=255).collect();
        assert_eq!(round_trip(&input), input);
    }

    #[test]
    fn test_round_trip_binary_data() {
        let input: Vec<u8> = (0..500).map(|i| ((i * 17 + 31) % 256) as u8).collect();
        assert_eq!(round_trip(&input), input);
    }

    #[test]
    fn test_full_last_byte_not_truncated() {
        let table = table_for(b"ab");
        let decoded = read_payload(&[8, 0b0101_0101], &table).unwrap();
        assert_eq!(decoded, b"abababab");
    }

    #[test]
    fn test_padding_is_discarded() {
        // 6 significant bits: 001011, the trailing 00 is padding
        let table = table_for(b"aabc");
        let decoded = read_payload(&[6, 0b0010_1100], &table).unwrap();
        assert_eq!(decoded, b"aabc");
    }

    #[test]
    fn test_missing_marker() {
        let err = read_payload(&[], &table_for(b"ab")).unwrap_err();
        assert!(matches!(err, Error::MalformedContainer { .. }));
    }

    #[test]
    fn test_bad_marker_values() {
        let table = table_for(b"ab");
        for marker in [0u8, 9, 255] {
            assert!(read_payload(&[marker, 0xff], &table).is_err());
        }
        assert!(read_payload(&[3], &table).is_err());
    }

    #[test]
    fn test_full_marker_without_bytes() {
        let err = read_payload(&[8], &table_for(b"ab")).unwrap_err();
        assert!(err.to_string().contains("no payload bytes"));
    }

    #[test]
    fn test_unmatched_bits() {
        let table: CodeTable = [(b'a', code("00")), (b'b', code("01"))]
            .into_iter()
            .collect();
        let err = read_payload(&[8, 0b0001_1000], &table).unwrap_err();
        assert!(matches!(err, Error::MalformedContainer { .. }));
    }

    #[test]
    fn test_dangling_partial_code() {
        // a=0, b=10: a lone trailing 1 is half of b
        let table: CodeTable = [(b'a', code("0")), (b'b', code("10"))]
            .into_iter()
            .collect();
        let err = read_payload(&[3, 0b0010_0000], &table).unwrap_err();
        assert!(err.to_string().contains("dangling"));
    }
}
