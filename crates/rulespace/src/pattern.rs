//! Declarative rule specs and their compilation into full tables.
//!
//! A [`RuleSpec`] describes a rule the way an author thinks about it: "state
//! 0 becomes state 1 when it has exactly three state-1 neighbors". The
//! compiler expands each declaration into every concrete neighbor
//! configuration it matches and writes the corresponding table entries.
//!
//! # Example
//!
//! Conway's Game of Life as a spec:
//!
//! ```
//! use std::collections::BTreeMap;
//! use rulespace::pattern::{compile, PatternRule, RuleSpec};
//!
//! let spec = RuleSpec {
//!     states: 2,
//!     rules: vec![
//!         // Birth: exactly three live neighbors.
//!         PatternRule {
//!             input: 0,
//!             output: 1,
//!             neighbors: Some(BTreeMap::from([(1, vec![3])])),
//!         },
//!         // Death: anything but two or three live neighbors.
//!         PatternRule {
//!             input: 1,
//!             output: 0,
//!             neighbors: Some(BTreeMap::from([(1, vec![0, 1, 4, 5, 6, 7, 8])])),
//!         },
//!     ],
//! };
//! let space = compile(&spec).unwrap();
//! assert_eq!(space.as_slice(), rulespace::presets::GAME_OF_LIFE);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::combin::{for_each_composition, rank, NEIGHBORS};
use crate::error::ValidationError;
use crate::space::RuleSpace;

/// A declarative rule space: state count plus a list of pattern rules,
/// applied in declaration order over an identity default.
///
/// Serde round-trips the JSON authoring literal:
/// `{"states": 2, "rules": [{"in": 0, "out": 1, "N": {"1": [3]}}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Number of automaton states, in `[2, 14]`.
    pub states: u8,
    /// Pattern rules, applied in order.
    #[serde(default)]
    pub rules: Vec<PatternRule>,
}

/// One declarative transition rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    /// Current state this rule applies to.
    #[serde(rename = "in")]
    pub input: u8,
    /// Next state for every matched configuration.
    #[serde(rename = "out")]
    pub output: u8,
    /// Per-state candidate neighbor counts. Absent or empty means the rule
    /// matches unconditionally. State 0 may be constrained too: its count
    /// takes part in the 8-neighbor budget even though it never appears in
    /// the rank.
    #[serde(rename = "N", default, skip_serializing_if = "Option::is_none")]
    pub neighbors: Option<BTreeMap<u8, Vec<u8>>>,
}

/// Compiles a rule spec into a concrete rule space.
///
/// Pass one initializes every state to map to itself under all neighbor
/// configurations. Each declared rule then either overwrites a whole state
/// row (no constraints) or expands its constraints into matching
/// configurations. An entry is only overwritten while it still holds the
/// identity default for the rule's input state, so when patterns overlap the
/// first declared rule wins.
///
/// An over-constrained pattern that matches nothing is a no-op, not an
/// error. Compilation cost is exponential in the number of unconstrained
/// states but bounded by `states <= 14` and the 8-neighbor budget, and it
/// runs at authoring time only.
pub fn compile(spec: &RuleSpec) -> Result<RuleSpace, ValidationError> {
    let mut space = RuleSpace::new(spec.states)?;
    for rule in &spec.rules {
        check_state(rule.input, spec.states)?;
        check_state(rule.output, spec.states)?;
        match &rule.neighbors {
            Some(constraints) if !constraints.is_empty() => {
                apply_pattern(&mut space, rule, constraints)?;
            }
            _ => space.set_range(rule.input, rule.output)?,
        }
    }
    Ok(space)
}

fn check_state(state: u8, states: u8) -> Result<(), ValidationError> {
    if state < states {
        Ok(())
    } else {
        Err(ValidationError::StateOutOfRange { state, states })
    }
}

fn apply_pattern(
    space: &mut RuleSpace,
    rule: &PatternRule,
    constraints: &BTreeMap<u8, Vec<u8>>,
) -> Result<(), ValidationError> {
    let states = space.states();
    for &state in constraints.keys() {
        check_state(state, states)?;
    }
    // An empty candidate list can match nothing; whole pattern is a no-op.
    if constraints.values().any(|counts| counts.is_empty()) {
        return Ok(());
    }

    let specified: Vec<usize> = constraints.keys().map(|&s| s as usize).collect();
    let unspecified: Vec<usize> = (0..states as usize)
        .filter(|s| !constraints.contains_key(&(*s as u8)))
        .collect();
    let lists: Vec<&[u8]> = constraints.values().map(Vec::as_slice).collect();

    let row = rule.input as usize * space.sub_index_count();
    let mut full = vec![0u8; states as usize];
    let mut choice = vec![0usize; lists.len()];
    loop {
        let mut partial = 0usize;
        for (slot, (&list_index, list)) in choice.iter().zip(&lists).enumerate() {
            let count = list[list_index];
            full[specified[slot]] = count;
            partial += count as usize;
        }
        if partial <= NEIGHBORS {
            // The remaining budget is spread over the unconstrained slots so
            // every full configuration sums to exactly 8; ranking each one
            // covers all matching sub-indices exactly once.
            let remainder = (NEIGHBORS - partial) as u8;
            for_each_composition(remainder, unspecified.len(), &mut |composition| {
                for (&slot, &count) in unspecified.iter().zip(composition) {
                    full[slot] = count;
                }
                let index = row + rank(&full[1..], states);
                if space.get(index) == rule.input {
                    space.set(index, rule.output);
                }
            });
        }
        if !advance(&mut choice, &lists) {
            return Ok(());
        }
    }
}

/// Odometer step over the candidate lists; false when exhausted.
fn advance(choice: &mut [usize], lists: &[&[u8]]) -> bool {
    for (digit, list) in choice.iter_mut().zip(lists) {
        *digit += 1;
        if *digit < list.len() {
            return true;
        }
        *digit = 0;
    }
    false
}
