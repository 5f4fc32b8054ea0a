//! End-to-end codec round trips over realistic rule tables.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use rulespace::{codec, presets, random_rule, rule_length, DecodeError, RuleSpace};

fn seeded_space(states: u8, seed: u64) -> RuleSpace {
    let mut rng = SmallRng::seed_from_u64(seed);
    let table = random_rule(states, &mut rng).unwrap();
    let mut space = RuleSpace::new(states).unwrap();
    space.set_table(&table).unwrap();
    space
}

#[test]
fn random_rules_round_trip_across_the_state_range() {
    for (seed, states) in [(11u64, 2u8), (12, 3), (13, 5), (14, 8), (15, 14)] {
        let space = seeded_space(states, seed);
        let text = codec::encode(&space);
        let decoded = codec::decode(&text).unwrap();
        assert_eq!(decoded.states(), states, "states survive at {states}");
        assert_eq!(decoded, space, "table survives at {states}");
    }
}

#[test]
fn presets_round_trip() {
    for &(name, table) in presets::ALL {
        let mut space = RuleSpace::new(2).unwrap();
        space.set_table(table).unwrap();
        let decoded = codec::decode(&codec::encode(&space)).unwrap();
        assert_eq!(decoded.as_slice(), &table[..], "preset {name}");
    }
}

#[test]
fn encoded_strings_are_paste_safe() {
    let space = seeded_space(5, 99);
    let text = codec::encode(&space);
    assert!(!text.contains(char::is_whitespace));
    assert!(!text.contains('\u{AD}'));
    // Much smaller than one character per table entry.
    assert!(text.chars().count() < rule_length(5));
}

#[test]
fn decode_reports_the_first_bad_character() {
    let space = seeded_space(3, 7);
    let mut text = codec::encode(&space);
    text.insert(4, '\n');
    match codec::decode(&text).unwrap_err() {
        DecodeError::InvalidCharacter {
            character,
            position,
        } => {
            assert_eq!(character, '\n');
            assert_eq!(position, 4);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn decode_rejects_garbage() {
    // Size prefix of 93 bytes followed by a truncated block.
    assert!(matches!(
        codec::decode("~!!!!!!!").unwrap_err(),
        DecodeError::Decompress(_)
    ));
}

#[test]
fn oversized_tables_decode_to_the_largest_fitting_state_count() {
    // A 14-state table plus nibble padding still infers 14 states.
    let space = seeded_space(14, 3);
    let decoded = codec::decode(&codec::encode(&space)).unwrap();
    assert_eq!(decoded.states(), 14);
    assert_eq!(decoded.len(), rule_length(14));
}
