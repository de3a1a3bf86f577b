//! Sets of simultaneously occupied states.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::collections::hash_set;
use std::collections::HashSet;

/// An unordered set of states.
///
/// Used both for the set of states an automaton currently occupies and for
/// the set of accepting states of a design. Duplicates collapse on insert.
///
/// # Example
///
/// ```rust
/// use multistate::core::StateSet;
///
/// let left: StateSet<u32> = [1, 2].into_iter().collect();
/// let right: StateSet<u32> = [2, 3].into_iter().collect();
///
/// assert!(left.intersects(&right));
/// assert_eq!(left.union(&right).len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "", transparent)]
pub struct StateSet<S: State> {
    states: HashSet<S>,
}

impl<S: State> Default for StateSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateSet<S> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
        }
    }

    /// Create a set holding exactly one state.
    pub fn singleton(state: S) -> Self {
        let mut set = Self::new();
        set.insert(state);
        set
    }

    /// Insert a state, returning `false` if it was already present.
    pub fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, S> {
        self.states.iter()
    }

    /// Return a new set holding every state of `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        self.states.union(&other.states).cloned().collect()
    }

    /// Check whether the two sets share at least one state.
    ///
    /// Iterates the smaller of the two sets.
    pub fn intersects(&self, other: &Self) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().any(|state| large.contains(state))
    }

    /// Check whether every state of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.states.is_subset(&other.states)
    }
}

impl<S: State> FromIterator<S> for StateSet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

impl<S: State> Extend<S> for StateSet<S> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.states.extend(iter);
    }
}

impl<S: State> IntoIterator for StateSet<S> {
    type Item = S;
    type IntoIter = hash_set::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

impl<'a, S: State> IntoIterator for &'a StateSet<S> {
    type Item = &'a S;
    type IntoIter = hash_set::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl<S: State, const N: usize> From<[S; N]> for StateSet<S> {
    fn from(states: [S; N]) -> Self {
        states.into_iter().collect()
    }
}
