//! Core automaton types and simulation logic.
//!
//! This module contains the pure functional core of the simulator:
//! - State and symbol identifiers via the `State` and `Symbol` traits
//! - Rules and the indexed rulebook that forms the transition relation
//! - The runtime `Automaton` tracking every simultaneously occupied state
//! - The immutable `Design` that manufactures fresh runs
//!
//! Nothing in this module can fail: missing transitions and unknown symbols
//! lead to an empty state set, which simply never accepts.

mod automaton;
mod design;
mod rule;
mod rulebook;
mod state;
mod state_set;

pub use automaton::Automaton;
pub use design::Design;
pub use rule::Rule;
pub use rulebook::Rulebook;
pub use state::{State, Symbol};
pub use state_set::StateSet;
