//! A single labeled transition.

use super::state::{State, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One allowed `(state, symbol) -> next_state` transition.
///
/// Rules are immutable values with no identity beyond their fields: two rules
/// with equal fields are interchangeable.
///
/// # Example
///
/// ```rust
/// use multistate::core::Rule;
///
/// let rule = Rule::new(1, 'b', 2);
///
/// assert!(rule.applies_to(&1, &'b'));
/// assert!(!rule.applies_to(&1, &'a'));
/// assert_eq!(rule.follow(), &2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Rule<S: State, C: Symbol> {
    state: S,
    symbol: C,
    next_state: S,
}

impl<S: State, C: Symbol> Rule<S, C> {
    pub fn new(state: S, symbol: C, next_state: S) -> Self {
        Self {
            state,
            symbol,
            next_state,
        }
    }

    /// Check whether this rule fires from `state` on `symbol`.
    pub fn applies_to(&self, state: &S, symbol: &C) -> bool {
        self.state == *state && self.symbol == *symbol
    }

    /// The state this rule leads to.
    pub fn follow(&self) -> &S {
        &self.next_state
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn symbol(&self) -> &C {
        &self.symbol
    }

    pub fn next_state(&self) -> &S {
        &self.next_state
    }
}

impl<S: State, C: Symbol> From<(S, C, S)> for Rule<S, C> {
    fn from((state, symbol, next_state): (S, C, S)) -> Self {
        Self::new(state, symbol, next_state)
    }
}

impl<S: State, C: Symbol> fmt::Display for Rule<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} --{:?}--> {:?}",
            self.state, self.symbol, self.next_state
        )
    }
}
