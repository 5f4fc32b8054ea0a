//! Rule spaces for outer-totalistic cellular automata.
//!
//! An outer-totalistic rule on the Moore neighborhood maps a cell's current
//! state plus the multiset of its eight neighbors' states to a next state.
//! For `n` states every neighborhood reading is a weak composition of 8 into
//! `n` parts, and a combinatorial ranking packs all of them into one dense,
//! gap-free table. This crate manages those tables across the full supported
//! range of 2 to 14 states.
//!
//! # Table Layout
//!
//! ```text
//! index      = state * sub_index_count(n) + rank(neighbor_vector)
//! rank       = combinatorial rank of the (n-1)-entry neighbor count vector
//!              (the state-0 count is implicit: 8 minus the rest)
//! table size = n * C(n + 7, n - 1)   // 18 entries at n=2, 2 848 860 at n=14
//! ```
//!
//! The table indexes *every* reachable neighborhood exactly once, so rules
//! can be stored flat, mutated entry-wise, and compared byte-for-byte.
//!
//! # Example: Conway's Game of Life
//!
//! ```
//! use rulespace::{compile, PatternRule, RuleSpec};
//! use std::collections::BTreeMap;
//!
//! let spec = RuleSpec {
//!     states: 2,
//!     rules: vec![
//!         PatternRule {
//!             input: 0,
//!             output: 1,
//!             neighbors: Some(BTreeMap::from([(1, vec![3])])),
//!         },
//!         PatternRule {
//!             input: 1,
//!             output: 0,
//!             neighbors: Some(BTreeMap::from([(1, vec![0, 1, 4, 5, 6, 7, 8])])),
//!         },
//!     ],
//! };
//! let space = compile(&spec)?;
//! assert_eq!(space.as_slice(), rulespace::presets::GAME_OF_LIFE);
//! # Ok::<(), rulespace::ValidationError>(())
//! ```
//!
//! # Example: Sharing a Rule as Text
//!
//! ```
//! use rulespace::{codec, RuleSpace};
//!
//! let mut space = RuleSpace::new(2)?;
//! space.set_table(&rulespace::presets::WORMS)?;
//! let text = codec::encode(&space);
//! assert_eq!(codec::decode(&text)?, space);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Design Principles
//!
//! - **Dense Indexing**: no hashing, no sparse maps; one flat table per rule
//! - **Validated Boundaries**: public operations validate before mutating
//! - **Self-Describing Strings**: an encoded rule carries its own state count

// Binomial tables and weak-composition ranking
pub mod combin;

// Compact printable-text codec (packing, compression, alphabet)
pub mod codec;

// Error types shared across the crate
pub mod error;

// State-count inference from table lengths
pub mod infer;

// Declarative pattern rules and their compiler
pub mod pattern;

// Named two-state rule tables
pub mod presets;

// Random rule generation and mutation
pub mod random;

// The rule table itself
pub mod space;

// Re-export the rule table and its capacity bound
pub use space::{RuleSpace, TABLE_CAPACITY};

// Re-export error types at crate root
pub use error::{DecodeError, ValidationError};

// Re-export the pattern compiler
pub use pattern::{compile, PatternRule, RuleSpec};

// Re-export random generation
pub use random::{mutate, random_rule};

// Re-export inference helpers and range constants
pub use infer::{min_states, rule_length, states_for_length, MAX_STATES, MIN_STATES};

// Re-export the codec entry points
pub use codec::{decode, encode};
