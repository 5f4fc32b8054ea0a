//! State-count inference from rule table lengths.
//!
//! `rule_length` is strictly increasing over the supported state range, so a
//! table length identifies its state count exactly, and a decoded nibble
//! stream (which may carry packing padding) identifies the largest state
//! count whose table fits.

use crate::combin::sub_index_count;

/// Smallest supported state count.
pub const MIN_STATES: u8 = 2;

/// Largest supported state count (next states are stored in 4 bits).
pub const MAX_STATES: u8 = 14;

/// Returns true if `states` is within the supported range.
#[inline]
#[must_use]
pub const fn states_in_range(states: u8) -> bool {
    states >= MIN_STATES && states <= MAX_STATES
}

/// Number of entries in the rule table for a given state count.
///
/// One entry per (current state, neighbor configuration) pair. Strictly
/// increasing over `[2, 14]`.
///
/// ```
/// use rulespace::infer::rule_length;
///
/// assert_eq!(rule_length(2), 18);
/// assert_eq!(rule_length(14), 2_848_860);
/// ```
#[inline]
#[must_use]
pub const fn rule_length(states: u8) -> usize {
    states as usize * sub_index_count(states)
}

/// Exact reverse lookup: the state count whose table has exactly `length`
/// entries, if any.
///
/// Well-defined because `rule_length` is strictly increasing.
#[must_use]
pub fn states_for_length(length: usize) -> Option<u8> {
    (MIN_STATES..=MAX_STATES).find(|&s| rule_length(s) == length)
}

/// The largest state count whose full rule table fits in `length` entries.
///
/// Used to infer the state count of a decoded nibble stream, whose length is
/// the rule length rounded up to the 4-entry packing granularity. Saturates
/// to [`MAX_STATES`] for oversized inputs and floors at [`MIN_STATES`] for
/// undersized ones.
///
/// ```
/// use rulespace::infer::min_states;
///
/// assert_eq!(min_states(18), 2);
/// assert_eq!(min_states(20), 2); // padded two-state table
/// assert_eq!(min_states(135), 3);
/// ```
#[must_use]
pub fn min_states(length: usize) -> u8 {
    for states in (MIN_STATES..=MAX_STATES).rev() {
        if rule_length(states) <= length {
            return states;
        }
    }
    MIN_STATES
}
