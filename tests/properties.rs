//! Property-based tests for the Huffman core and the container format.
//!
//! - payload round-trip through a table derived from the same input
//! - container round-trip for any input (including empty) and extension
//! - generated codes form a prefix code
//! - the significant-bits marker is always in 1..=8

use proptest::prelude::*;

use zmh::bitreader::read_payload;
use zmh::bitwriter::write_payload;
use zmh::{compress, decompress, CodeTable, FrequencyTable};

/// Byte strings biased towards small alphabets, where code lengths vary most.
fn skewed_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 1..2048),
        prop::collection::vec(0u8..4, 1..512),
        prop::collection::vec(prop_oneof![9 => Just(b'e'), 1 => any::<u8>()], 1..1024),
    ]
}

/// Extensions of 0–255 bytes, always UTF-8.
fn extension() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z0-9]{1,8}",
        "[a-zA-Z0-9_é]{0,60}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        max_shrink_iters: 200,
        ..ProptestConfig::default()
    })]

    /// Property: unpack(pack(S, table(S))) == S for non-empty S.
    #[test]
    fn prop_payload_roundtrip(input in skewed_bytes()) {
        let table = CodeTable::build(&FrequencyTable::count(&input)).unwrap();
        let payload = write_payload(&input, &table).unwrap();
        prop_assert!((1..=8).contains(&payload[0]));
        prop_assert_eq!(read_payload(&payload, &table).unwrap(), input);
    }

    /// Property: decoding the container yields the original bytes and extension.
    #[test]
    fn prop_container_roundtrip(
        input in prop::collection::vec(any::<u8>(), 0..1024),
        ext in extension(),
    ) {
        let container = compress(&input, &ext).unwrap();
        let restored = decompress(&container).unwrap();
        prop_assert_eq!(restored.extension, ext);
        prop_assert_eq!(restored.data, input);
    }

    /// Property: for two or more symbols no code prefixes another.
    #[test]
    fn prop_codes_are_prefix_free(input in skewed_bytes()) {
        let freq = FrequencyTable::count(&input);
        prop_assume!(freq.len() >= 2);
        let table = CodeTable::build(&freq).unwrap();
        prop_assert_eq!(table.len(), freq.len());
        prop_assert!(table.is_prefix_free());
    }

    /// Property: a container cut short never decodes to a wrong answer silently.
    #[test]
    fn prop_truncated_container_fails(input in skewed_bytes(), cut in 1usize..16) {
        let container = compress(&input, "bin").unwrap();
        let keep = container.len().saturating_sub(cut).max(4);
        prop_assume!(keep < container.len());
        match decompress(&container[..keep]) {
            Ok(restored) => prop_assert_ne!(restored.data, input),
            Err(e) => prop_assert_eq!(e.category(), "malformed_container"),
        }
    }
}
