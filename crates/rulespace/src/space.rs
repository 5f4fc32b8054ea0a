//! The rule space: an owned transition table buffer.

use core::fmt;

use crate::combin::{rank, sub_index_count, NEIGHBORS};
use crate::error::ValidationError;
use crate::infer::{rule_length, states_for_length, states_in_range, MAX_STATES};

/// Backing capacity of every rule table, in entries.
///
/// Sized for the largest supported state count so a space can be resized
/// across the whole `[2, 14]` range without reallocating, and so consumers
/// that mirror the buffer (a GPU stepping kernel reading it as a flat
/// lookup, say) can allocate once.
pub const TABLE_CAPACITY: usize = rule_length(MAX_STATES);

/// A transition table for a K-state outer-totalistic automaton.
///
/// Owns a fixed-capacity buffer of next-state values, logically truncated to
/// `states * sub_index_count(states)` entries; entries beyond the logical
/// length are undefined. Every mutating operation validates its inputs
/// before touching the buffer, so the table is self-consistent whenever a
/// call returns, even for consumers that snapshot it between mutations.
///
/// # Example
///
/// ```
/// use rulespace::RuleSpace;
///
/// let mut space = RuleSpace::new(2).unwrap();
/// // Freshly constructed tables map every state to itself.
/// let index = space.rule_index(1, &[3]).unwrap();
/// assert_eq!(space.get(index), 1);
///
/// space.set(index, 0);
/// assert_eq!(space.get(index), 0);
/// ```
#[derive(Clone)]
pub struct RuleSpace {
    states: u8,
    sub_index_count: usize,
    table: Box<[u8]>,
}

impl RuleSpace {
    /// Creates a rule space initialized to the identity mapping: every state
    /// transitions to itself under every neighbor configuration.
    pub fn new(states: u8) -> Result<Self, ValidationError> {
        validate_states(states)?;
        let mut space = Self {
            states,
            sub_index_count: sub_index_count(states),
            table: vec![0u8; TABLE_CAPACITY].into_boxed_slice(),
        };
        space.fill_identity();
        Ok(space)
    }

    /// Current state count.
    #[inline]
    #[must_use]
    pub fn states(&self) -> u8 {
        self.states
    }

    /// Number of neighbor configurations per state.
    #[inline]
    #[must_use]
    pub fn sub_index_count(&self) -> usize {
        self.sub_index_count
    }

    /// Logical table length: `states * sub_index_count`.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.states as usize * self.sub_index_count
    }

    /// Always false; the smallest table (2 states) has 18 entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flat index of (current state, neighbor vector).
    ///
    /// `vector[i]` counts the Moore neighbors in state `i + 1`; the state-0
    /// count is implicit. Validates the state, the vector length, and the
    /// neighbor sum before ranking.
    pub fn rule_index(&self, state: u8, vector: &[u8]) -> Result<usize, ValidationError> {
        if state >= self.states {
            return Err(ValidationError::StateOutOfRange {
                state,
                states: self.states,
            });
        }
        let expected = self.states as usize - 1;
        if vector.len() != expected {
            return Err(ValidationError::VectorLength {
                len: vector.len(),
                expected,
            });
        }
        let sum: usize = vector.iter().map(|&v| v as usize).sum();
        if sum > NEIGHBORS {
            return Err(ValidationError::NeighborSumTooLarge { sum });
        }
        Ok(state as usize * self.sub_index_count + rank(vector, self.states))
    }

    /// Next state stored at a rule index.
    ///
    /// The index must be below [`len`](Self::len); entries past the logical
    /// length are undefined.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> u8 {
        debug_assert!(index < self.len());
        self.table[index]
    }

    /// Overwrites the next state at a rule index.
    #[inline]
    pub fn set(&mut self, index: usize, value: u8) {
        debug_assert!(index < self.len());
        self.table[index] = value;
    }

    /// Fills every neighbor-configuration slot of `state` with `value`.
    ///
    /// Used for the identity fill and for unconditional rules.
    pub fn set_range(&mut self, state: u8, value: u8) -> Result<(), ValidationError> {
        if state >= self.states {
            return Err(ValidationError::StateOutOfRange {
                state,
                states: self.states,
            });
        }
        let start = state as usize * self.sub_index_count;
        self.table[start..start + self.sub_index_count].fill(value);
        Ok(())
    }

    /// Replaces the table with a flat rule, inferring the state count from
    /// the exact length.
    ///
    /// Fails with [`ValidationError::InvalidRuleLength`] when the length
    /// matches no state count in `[2, 14]`; the table is untouched on
    /// failure.
    pub fn set_table(&mut self, flat: &[u8]) -> Result<(), ValidationError> {
        let states = states_for_length(flat.len()).ok_or(ValidationError::InvalidRuleLength {
            length: flat.len(),
        })?;
        self.states = states;
        self.sub_index_count = sub_index_count(states);
        self.table[..flat.len()].copy_from_slice(flat);
        Ok(())
    }

    /// Resizes the logical view to a new state count without reallocating.
    ///
    /// The table is re-initialized to the identity mapping; entries beyond
    /// the new logical length become undefined. The caller re-uploads to any
    /// external consumer after a shape change.
    pub fn change_states(&mut self, states: u8) -> Result<(), ValidationError> {
        validate_states(states)?;
        self.states = states;
        self.sub_index_count = sub_index_count(states);
        self.fill_identity();
        Ok(())
    }

    /// The logical table: one next-state byte per rule index.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.table[..self.len()]
    }

    /// The full fixed-capacity backing buffer, for consumers that mirror
    /// the table at [`TABLE_CAPACITY`] regardless of the state count.
    #[inline]
    #[must_use]
    pub fn raw_table(&self) -> &[u8] {
        &self.table
    }

    fn fill_identity(&mut self) {
        for state in 0..self.states {
            let start = state as usize * self.sub_index_count;
            self.table[start..start + self.sub_index_count].fill(state);
        }
    }
}

pub(crate) fn validate_states(states: u8) -> Result<(), ValidationError> {
    if states_in_range(states) {
        Ok(())
    } else {
        Err(ValidationError::StatesOutOfRange { states })
    }
}

impl fmt::Debug for RuleSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let non_identity = (0..self.states as usize)
            .flat_map(|s| {
                self.as_slice()[s * self.sub_index_count..(s + 1) * self.sub_index_count]
                    .iter()
                    .filter(move |&&v| v as usize != s)
            })
            .count();
        write!(
            f,
            "RuleSpace {{ states: {}, len: {}, non-identity entries: {} }}",
            self.states,
            self.len(),
            non_identity
        )
    }
}

impl PartialEq for RuleSpace {
    fn eq(&self, other: &Self) -> bool {
        self.states == other.states && self.as_slice() == other.as_slice()
    }
}

impl Eq for RuleSpace {}
