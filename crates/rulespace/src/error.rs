//! Error types for rule space operations.

use thiserror::Error;

/// Errors raised by validation at public operation boundaries.
///
/// Validation always happens before any mutation, so a failed operation
/// never leaves a rule table partially modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// State count outside the supported `[2, 14]` range.
    #[error("state count {states} outside supported range [2, 14]")]
    StatesOutOfRange {
        /// The rejected state count.
        states: u8,
    },

    /// A state value at or above the current state count.
    #[error("state {state} out of range for {states} states")]
    StateOutOfRange {
        /// The rejected state value.
        state: u8,
        /// The current state count.
        states: u8,
    },

    /// Neighbor counts summing past the Moore neighborhood size.
    #[error("neighbor counts sum to {sum}, exceeding the 8 Moore neighbors")]
    NeighborSumTooLarge {
        /// The offending sum.
        sum: usize,
    },

    /// Neighbor vector of the wrong length for the current state count.
    #[error("neighbor vector has {len} entries, expected {expected}")]
    VectorLength {
        /// Provided length.
        len: usize,
        /// Expected length (`states - 1`).
        expected: usize,
    },

    /// A flat table whose length matches no state count in `[2, 14]`.
    #[error("table length {length} matches no supported state count")]
    InvalidRuleLength {
        /// The rejected length.
        length: usize,
    },
}

/// Errors raised while decoding a rule string.
///
/// All variants are recoverable input errors: a failed decode surfaces here
/// and leaves any existing rule table untouched.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A character outside the rule string alphabet.
    #[error("invalid character '{character}' (U+{:04X}) at position {position}", *character as u32)]
    InvalidCharacter {
        /// The invalid character.
        character: char,
        /// Character position in the input string.
        position: usize,
    },

    /// The compressed payload is malformed.
    #[error("corrupt rule string: {0}")]
    Decompress(#[from] lz4_flex::block::DecompressError),

    /// The decoded stream is shorter than the smallest rule table.
    #[error("decoded rule has only {length} entries, fewer than the smallest table")]
    TooShort {
        /// Number of decoded entries.
        length: usize,
    },

    /// The decoded table failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
