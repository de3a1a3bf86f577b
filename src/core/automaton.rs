//! Runtime simulation of a nondeterministic automaton.

use super::rulebook::Rulebook;
use super::state::{State, Symbol};
use super::state_set::StateSet;
use log::{debug, trace};
use std::borrow::Borrow;
use std::sync::Arc;

/// A running automaton.
///
/// Tracks the set of every state the machine could currently be in. Each
/// symbol read replaces that set with the states reachable from it, so all
/// nondeterministic branches advance together without building a DFA.
///
/// The current-state set is the only mutable part of a simulation. The
/// accept states and the rulebook are shared read-only with the
/// [`Design`](super::Design) that created the automaton.
///
/// Reading never fails: a symbol with no matching rules just empties the
/// current-state set, after which the automaton can never accept again.
///
/// # Example
///
/// ```rust
/// use multistate::core::{Automaton, Rule, Rulebook, StateSet};
/// use std::sync::Arc;
///
/// let rulebook = Arc::new(Rulebook::new(vec![
///     Rule::new(1, 'a', 2),
///     Rule::new(2, 'b', 3),
/// ]));
/// let accept = Arc::new(StateSet::singleton(3));
///
/// let mut automaton = Automaton::new(StateSet::singleton(1), accept, rulebook);
/// assert!(!automaton.accepting());
///
/// automaton.read_string("ab".chars());
/// assert!(automaton.accepting());
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S: State, C: Symbol> {
    current_states: StateSet<S>,
    accept_states: Arc<StateSet<S>>,
    rulebook: Arc<Rulebook<S, C>>,
}

impl<S: State, C: Symbol> Automaton<S, C> {
    pub fn new(
        current_states: StateSet<S>,
        accept_states: Arc<StateSet<S>>,
        rulebook: Arc<Rulebook<S, C>>,
    ) -> Self {
        Self {
            current_states,
            accept_states,
            rulebook,
        }
    }

    /// Every state the automaton could currently occupy.
    pub fn current_states(&self) -> &StateSet<S> {
        &self.current_states
    }

    pub fn accept_states(&self) -> &StateSet<S> {
        &self.accept_states
    }

    pub fn rulebook(&self) -> &Rulebook<S, C> {
        &self.rulebook
    }

    /// Check if any current state is an accept state.
    pub fn accepting(&self) -> bool {
        self.current_states.intersects(&self.accept_states)
    }

    /// Check if no run configuration is live.
    ///
    /// A stuck automaton stays stuck for any further input.
    pub fn is_stuck(&self) -> bool {
        self.current_states.is_empty()
    }

    /// Advance every live branch by one symbol.
    pub fn read_character(&mut self, symbol: &C) {
        let next = self.rulebook.next_states(&self.current_states, symbol);
        trace!(
            "Read {:?}: {:?} -> {:?}",
            symbol,
            self.current_states,
            next
        );

        if next.is_empty() && !self.current_states.is_empty() {
            debug!("Automaton stuck after reading {:?}", symbol);
        }

        self.current_states = next;
    }

    /// Read every symbol of `symbols` in order.
    ///
    /// Accepts owned or borrowed symbols, so both `"ab".chars()` and
    /// `&['a', 'b']` work for a `char` automaton.
    pub fn read_string<I>(&mut self, symbols: I)
    where
        I: IntoIterator,
        I::Item: Borrow<C>,
    {
        for symbol in symbols {
            self.read_character(symbol.borrow());
        }
    }
}
