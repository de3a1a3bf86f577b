//! Identifier traits for automaton states and input symbols.
//!
//! States and symbols are opaque values: the simulation only ever compares
//! and hashes them. Both traits are blanket-implemented, so integers, chars,
//! strings and plain enums work without any extra code.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// A state is an identifier for one configuration of the automaton. No
/// arithmetic or ordering on states is meaningful; only equality and hashing
/// are used.
///
/// # Required Traits
///
/// - `Clone`: states are copied into fresh state sets on every step
/// - `Eq` + `Hash`: states are stored in hash sets and used as index keys
/// - `Debug`: states appear in log output
/// - `Serialize` + `DeserializeOwned`: designs and checkpoints are serializable
///
/// # Example
///
/// ```rust
/// use multistate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn takes_state<S: State>(_state: S) {}
///
/// takes_state(Door::Open);
/// takes_state(1u32);
/// takes_state(String::from("q0"));
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
}

impl<T> State for T where
    T: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
}

/// Trait for input symbols.
///
/// A symbol is one unit of input consumed per simulation step, usually a
/// `char`. Symbols that no rule mentions are still valid input; they simply
/// have no transitions.
pub trait Symbol:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
}

impl<T> Symbol for T where
    T: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
}
