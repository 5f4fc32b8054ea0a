//! Byte-to-character bijection for the text codec.
//!
//! Compressed payload bytes map onto printable characters so encoded rules
//! survive copy-paste through chats, URLs, and plain-text files. The first 94
//! symbols are the visible ASCII range starting at `!`; the remaining 162 come
//! from the Latin-1 supplement and beyond, starting at `¡` and skipping the
//! soft hyphen, which many renderers swallow silently.

/// First visible ASCII symbol, `!`.
const ASCII_BASE: u32 = 0x21;

/// Number of symbols drawn from visible ASCII (`!` through `~`).
const ASCII_SPAN: u32 = 94;

/// First symbol past ASCII, `¡`.
const EXTENDED_BASE: u32 = 0xA1;

/// Soft hyphen, excluded from the alphabet.
const SOFT_HYPHEN: u32 = 0xAD;

/// Returns the alphabet character for a payload byte.
#[must_use]
pub const fn alphabet_char(byte: u8) -> char {
    let index = byte as u32;
    let code = if index < ASCII_SPAN {
        ASCII_BASE + index
    } else {
        let code = EXTENDED_BASE + (index - ASCII_SPAN);
        if code >= SOFT_HYPHEN {
            code + 1
        } else {
            code
        }
    };
    // All 256 code points land in the BMP and are assigned.
    match char::from_u32(code) {
        Some(c) => c,
        None => unreachable!(),
    }
}

/// Returns the payload byte for an alphabet character, or `None` if the
/// character is outside the alphabet.
#[must_use]
pub const fn alphabet_index(c: char) -> Option<u8> {
    let code = c as u32;
    if code >= ASCII_BASE && code < ASCII_BASE + ASCII_SPAN {
        Some((code - ASCII_BASE) as u8)
    } else if code == SOFT_HYPHEN {
        None
    } else if code >= EXTENDED_BASE {
        let adjusted = if code > SOFT_HYPHEN { code - 1 } else { code };
        let index = adjusted - EXTENDED_BASE + ASCII_SPAN;
        if index < 256 {
            Some(index as u8)
        } else {
            None
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_a_bijection() {
        let mut seen = [false; 0x144];
        for byte in 0..=u8::MAX {
            let c = alphabet_char(byte);
            assert!(!seen[c as usize], "duplicate symbol {c:?}");
            seen[c as usize] = true;
            assert_eq!(alphabet_index(c), Some(byte));
        }
    }

    #[test]
    fn test_known_endpoints() {
        assert_eq!(alphabet_char(0), '!');
        assert_eq!(alphabet_char(93), '~');
        assert_eq!(alphabet_char(94), '¡');
        assert_eq!(alphabet_char(255), '\u{143}');
    }

    #[test]
    fn test_soft_hyphen_is_skipped() {
        for byte in 0..=u8::MAX {
            assert_ne!(alphabet_char(byte) as u32, SOFT_HYPHEN);
        }
        assert_eq!(alphabet_index('\u{AD}'), None);
    }

    #[test]
    fn test_rejects_characters_outside_the_alphabet() {
        assert_eq!(alphabet_index(' '), None);
        assert_eq!(alphabet_index('\n'), None);
        assert_eq!(alphabet_index('\u{A0}'), None);
        assert_eq!(alphabet_index('\u{144}'), None);
        assert_eq!(alphabet_index('漢'), None);
    }
}
