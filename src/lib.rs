//! Multistate: A pure functional nondeterministic finite automaton simulator
//!
//! Multistate decides whether an input string is accepted by a
//! nondeterministic finite automaton. Instead of converting the automaton to
//! a DFA, a run tracks the whole set of states the machine could occupy and
//! advances every branch together on each symbol.
//!
//! # Core Concepts
//!
//! - **Rule**: One labeled `(state, symbol) -> next_state` transition
//! - **Rulebook**: The immutable, indexed transition relation
//! - **Automaton**: A run in progress, holding the current state set
//! - **Design**: Immutable start/accept/rulebook description producing runs
//! - **Checkpoint**: Serializable snapshot of a run that can be resumed
//!
//! The simulation never fails. Unknown symbols and missing transitions
//! empty the current state set, and an empty set never accepts.
//!
//! # Example
//!
//! ```rust
//! use multistate::core::Design;
//! use multistate::rulebook;
//!
//! // Accepts strings whose third-from-last symbol is 'b'
//! let rulebook = rulebook![
//!     (1, 'a', 1), (1, 'b', 1), (1, 'b', 2),
//!     (2, 'a', 3), (2, 'b', 3),
//!     (3, 'a', 4), (3, 'b', 4),
//! ];
//! let design = Design::new(1, [4], rulebook);
//!
//! assert!(design.accepts_str("bab"));
//! assert!(design.accepts_str("bbbbb"));
//! assert!(!design.accepts_str("bbabb"));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, DesignBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use self::core::{Automaton, Design, Rule, Rulebook, State, StateSet, Symbol};
