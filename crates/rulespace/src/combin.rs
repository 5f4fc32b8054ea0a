//! Combinatorial indexing for neighbor-count vectors.
//!
//! An outer-totalistic rule table is indexed by (current state, neighbor
//! configuration). A neighbor configuration over `states` states is a weak
//! composition: how many of the 8 Moore neighbors are in each non-zero state,
//! with the state-0 count implicit. This module provides the dense bijection
//! between those configurations and the range `[0, sub_index_count(states))`
//! via a combinatorial number system.
//!
//! All tables are computed at compile time and all functions are total over
//! their documented domains; callers validate before crossing into them.
//!
//! # Example
//!
//! ```
//! use rulespace::combin::{rank, unrank, sub_index_count};
//!
//! // Two states: the sub-index is just the live-neighbor count.
//! assert_eq!(sub_index_count(2), 9);
//! assert_eq!(rank(&[3], 2), 3);
//! assert_eq!(unrank(3, 2), vec![3]);
//! ```

/// Maximum number of neighbors in the Moore neighborhood.
pub const NEIGHBORS: usize = 8;

/// Side length of the precomputed binomial table.
///
/// `rank`/`unrank` never look up past `C(21, k)` (14 states + 8 neighbors);
/// the table is sized with headroom and exposed whole for consumers that
/// mirror it elsewhere, such as a GPU stepping kernel.
pub const BINOMIAL_SIZE: usize = 32;

/// Precomputed binomial coefficients, `BINOMIAL[n][k] = C(n, k)`.
///
/// Built by the Pascal recurrence so every entry is exact; `C(31, 15)` still
/// fits comfortably in a `u32`. Entries with `k > n` are zero.
pub const BINOMIAL: [[u32; BINOMIAL_SIZE]; BINOMIAL_SIZE] = {
    let mut table = [[0u32; BINOMIAL_SIZE]; BINOMIAL_SIZE];
    let mut n = 0;
    while n < BINOMIAL_SIZE {
        table[n][0] = 1;
        let mut k = 1;
        while k <= n {
            let upper = if k < n { table[n - 1][k] } else { 0 };
            table[n][k] = table[n - 1][k - 1] + upper;
            k += 1;
        }
        n += 1;
    }
    table
};

/// O(1) binomial coefficient lookup.
///
/// Returns 0 for `k > n`, matching the convention that there are no ways to
/// choose more items than exist. Both arguments must be below
/// [`BINOMIAL_SIZE`].
#[inline]
#[must_use]
pub const fn binomial(n: usize, k: usize) -> usize {
    if n >= BINOMIAL_SIZE || k >= BINOMIAL_SIZE {
        0
    } else {
        BINOMIAL[n][k] as usize
    }
}

/// Number of distinct neighbor configurations for a given state count.
///
/// This is the number of weak compositions of at most 8 into `states - 1`
/// parts: `C(states + 7, states - 1)`.
///
/// ```
/// use rulespace::combin::sub_index_count;
///
/// assert_eq!(sub_index_count(2), 9);
/// assert_eq!(sub_index_count(3), 45);
/// ```
#[inline]
#[must_use]
pub const fn sub_index_count(states: u8) -> usize {
    binomial(states as usize + NEIGHBORS - 1, states as usize - 1)
}

/// Ranks a neighbor vector into `[0, sub_index_count(states))`.
///
/// `vector[i]` counts the Moore neighbors in state `i + 1`; the state-0 count
/// is implicit. At each level the peeling step adds the number of weak
/// compositions of the remaining neighbor budget whose leading part is
/// strictly smaller than the current entry, which are exactly the
/// configurations preceding `vector` in lexicographic order.
///
/// # Preconditions
///
/// `states` in `[2, 14]`, `vector.len() == states - 1`, and the entries sum
/// to at most 8. Callers validate; violations are unspecified (checked by
/// debug assertions only).
#[must_use]
pub fn rank(vector: &[u8], states: u8) -> usize {
    debug_assert_eq!(vector.len(), states as usize - 1);
    debug_assert!(vector.iter().map(|&v| v as usize).sum::<usize>() <= NEIGHBORS);

    let mut x = states as usize;
    let mut y = NEIGHBORS;
    let mut index = 0;
    for &entry in vector {
        let v = entry as usize;
        if v > 0 {
            index += binomial(y + x - 1, x - 1) - binomial(y - v + x - 1, x - 1);
        }
        x -= 1;
        y -= v;
    }
    index
}

/// Inverts [`rank`]: recovers the neighbor vector from its dense sub-index.
///
/// At each level the largest leading part whose cumulative offset does not
/// exceed the remaining index is peeled off.
///
/// # Preconditions
///
/// `states` in `[2, 14]` and `index < sub_index_count(states)`.
#[must_use]
pub fn unrank(mut index: usize, states: u8) -> Vec<u8> {
    debug_assert!(index < sub_index_count(states));

    let mut x = states as usize;
    let mut y = NEIGHBORS;
    let mut vector = Vec::with_capacity(states as usize - 1);
    for _ in 0..states as usize - 1 {
        let total = binomial(y + x - 1, x - 1);
        let mut v = 0;
        while v < y && total - binomial(y - (v + 1) + x - 1, x - 1) <= index {
            v += 1;
        }
        index -= total - binomial(y - v + x - 1, x - 1);
        vector.push(v as u8);
        x -= 1;
        y -= v;
    }
    vector
}

/// Calls `f` with every weak composition of `total` into `parts` parts.
///
/// Enumerates compositions directly rather than filtering a cartesian
/// product, so no invalid combination is ever materialized. With zero parts
/// the only composition is the empty one, and it exists only when `total`
/// is zero.
pub fn for_each_composition<F>(total: u8, parts: usize, f: &mut F)
where
    F: FnMut(&[u8]),
{
    let mut scratch = vec![0u8; parts];
    descend(total, 0, &mut scratch, f);
}

fn descend<F>(remaining: u8, position: usize, scratch: &mut Vec<u8>, f: &mut F)
where
    F: FnMut(&[u8]),
{
    if position == scratch.len() {
        if remaining == 0 {
            f(scratch);
        }
        return;
    }
    if position == scratch.len() - 1 {
        // Last part takes whatever budget is left.
        scratch[position] = remaining;
        f(scratch);
        return;
    }
    for v in 0..=remaining {
        scratch[position] = v;
        descend(remaining - v, position + 1, scratch, f);
    }
}
