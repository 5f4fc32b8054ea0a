//! Compact text codec for rule tables.
//!
//! A rule table serializes to a short printable string in three steps: table
//! entries pack two to a byte as 4-bit nibbles, the byte stream is LZ4
//! compressed with its length prepended, and each compressed byte maps onto a
//! printable character via [`alphabet`]. Decoding runs the chain in reverse
//! and infers the state count from the unpacked length, so the string alone
//! fully describes the rule.
//!
//! ```
//! use rulespace::{codec, RuleSpace};
//!
//! let mut space = RuleSpace::new(3)?;
//! space.set_table(&rulespace::presets::GAME_OF_LIFE)?;
//! let text = codec::encode(&space);
//! assert_eq!(codec::decode(&text)?, space);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod alphabet;

use crate::error::DecodeError;
use crate::infer::{min_states, rule_length, MIN_STATES};
use crate::space::RuleSpace;

use self::alphabet::{alphabet_char, alphabet_index};

/// Encodes a rule table as a printable string.
///
/// The string round-trips through [`decode`]. Tables whose length is not a
/// multiple of four are padded with zero entries; the padding is dropped on
/// decode because the state count pins the exact table length.
#[must_use]
pub fn encode(space: &RuleSpace) -> String {
    let packed = pack_nibbles(space.as_slice());
    let compressed = lz4_flex::compress_prepend_size(&packed);
    compressed.iter().map(|&b| alphabet_char(b)).collect()
}

/// Decodes a rule string back into a [`RuleSpace`].
///
/// The state count is inferred as the largest one whose table fits in the
/// decoded stream; trailing padding entries are ignored.
pub fn decode(input: &str) -> Result<RuleSpace, DecodeError> {
    let mut compressed = Vec::with_capacity(input.len());
    for (position, character) in input.chars().enumerate() {
        match alphabet_index(character) {
            Some(byte) => compressed.push(byte),
            None => return Err(DecodeError::InvalidCharacter { character, position }),
        }
    }
    let packed = lz4_flex::decompress_size_prepended(&compressed)?;
    let entries = unpack_nibbles(&packed);
    if entries.len() < rule_length(MIN_STATES) {
        return Err(DecodeError::TooShort {
            length: entries.len(),
        });
    }
    let states = min_states(entries.len());
    let mut space = RuleSpace::new(states)?;
    space.set_table(&entries[..rule_length(states)])?;
    Ok(space)
}

/// Packs table entries four to a 16-bit little-endian word, low nibble
/// first, padding the final word with zero entries.
fn pack_nibbles(entries: &[u8]) -> Vec<u8> {
    let mut packed = Vec::with_capacity(entries.len().div_ceil(4) * 2);
    for group in entries.chunks(4) {
        let mut word = 0u16;
        for (shift, &entry) in group.iter().enumerate() {
            word |= u16::from(entry & 0x0F) << (shift * 4);
        }
        packed.extend_from_slice(&word.to_le_bytes());
    }
    packed
}

/// Unpacks bytes into table entries, low nibble first.
fn unpack_nibbles(packed: &[u8]) -> Vec<u8> {
    let mut entries = Vec::with_capacity(packed.len() * 2);
    for &byte in packed {
        entries.push(byte & 0x0F);
        entries.push(byte >> 4);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    #[test]
    fn test_nibble_packing() {
        assert_eq!(pack_nibbles(&[1, 2, 3, 4]), vec![0x21, 0x43]);
        // Partial final word pads with zero entries.
        assert_eq!(pack_nibbles(&[13, 0, 7]), vec![0x0D, 0x07]);
        assert_eq!(pack_nibbles(&[1]), vec![0x01, 0x00]);
        assert_eq!(unpack_nibbles(&[0x21, 0x43]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_encode_is_printable() {
        let mut space = RuleSpace::new(2).unwrap();
        space.set_table(&presets::MAZE).unwrap();
        let text = encode(&space);
        assert!(!text.is_empty());
        assert!(text.chars().all(|c| alphabet_index(c).is_some()));
    }

    #[test]
    fn test_round_trip_preserves_table_and_states() {
        for &(name, table) in presets::ALL {
            let mut space = RuleSpace::new(2).unwrap();
            space.set_table(table).unwrap();
            let decoded = decode(&encode(&space)).unwrap();
            assert_eq!(decoded, space, "preset {name}");
        }
    }

    #[test]
    fn test_round_trip_larger_state_counts() {
        for states in [3u8, 5, 9, 14] {
            let mut space = RuleSpace::new(states).unwrap();
            for index in (0..space.len()).step_by(7) {
                space.set(index, (index % states as usize) as u8);
            }
            let decoded = decode(&encode(&space)).unwrap();
            assert_eq!(decoded.states(), states);
            assert_eq!(decoded, space);
        }
    }

    #[test]
    fn test_decode_rejects_characters_outside_the_alphabet() {
        let err = decode("ab cd").unwrap_err();
        match err {
            DecodeError::InvalidCharacter {
                character,
                position,
            } => {
                assert_eq!(character, ' ');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_corrupt_payload() {
        let err = decode("!!!!!!!!").unwrap_err();
        assert!(matches!(err, DecodeError::Decompress(_)));
    }

    #[test]
    fn test_decode_rejects_truncated_table() {
        // Four zero entries: a valid compressed stream, but shorter than any
        // rule table.
        let packed = pack_nibbles(&[0, 0, 0, 0]);
        let compressed = lz4_flex::compress_prepend_size(&packed);
        let text: String = compressed.iter().map(|&b| alphabet_char(b)).collect();
        let err = decode(&text).unwrap_err();
        assert!(matches!(err, DecodeError::TooShort { length: 4 }));
    }
}
