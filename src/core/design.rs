//! Immutable automaton designs.

use super::automaton::Automaton;
use super::rulebook::Rulebook;
use super::state::{State, Symbol};
use super::state_set::StateSet;
use log::debug;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::sync::Arc;

/// Immutable description of a nondeterministic finite automaton.
///
/// A design holds a start state, a set of accept states and a rulebook. It
/// manufactures fresh [`Automaton`] runs that share the accept states and
/// rulebook read-only, so one design can evaluate any number of inputs,
/// from any number of threads, without runs interfering with each other.
///
/// Cloning a design is cheap.
///
/// # Example
///
/// ```rust
/// use multistate::core::{Design, Rule, Rulebook};
///
/// let rulebook = Rulebook::new(vec![
///     Rule::new(1, 'a', 1),
///     Rule::new(1, 'b', 1),
///     Rule::new(1, 'b', 2),
///     Rule::new(2, 'a', 3),
///     Rule::new(2, 'b', 3),
///     Rule::new(3, 'a', 4),
///     Rule::new(3, 'b', 4),
/// ]);
/// let design = Design::new(1, [4], rulebook);
///
/// assert!(design.accepts("bab".chars()));
/// assert!(design.accepts("bbbbb".chars()));
/// assert!(!design.accepts("bbabb".chars()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Design<S: State, C: Symbol> {
    start_state: S,
    accept_states: Arc<StateSet<S>>,
    rulebook: Arc<Rulebook<S, C>>,
}

impl<S: State, C: Symbol> Design<S, C> {
    /// Create a design.
    ///
    /// The rulebook may be passed owned or already wrapped in an `Arc` to
    /// share it between designs.
    pub fn new<A, R>(start_state: S, accept_states: A, rulebook: R) -> Self
    where
        A: IntoIterator<Item = S>,
        R: Into<Arc<Rulebook<S, C>>>,
    {
        let accept_states: StateSet<S> = accept_states.into_iter().collect();
        let rulebook = rulebook.into();

        debug!(
            "Created design starting at {:?} with {} accept states and {} rules",
            start_state,
            accept_states.len(),
            rulebook.len()
        );

        Self {
            start_state,
            accept_states: Arc::new(accept_states),
            rulebook,
        }
    }

    pub fn start_state(&self) -> &S {
        &self.start_state
    }

    pub fn accept_states(&self) -> &StateSet<S> {
        &self.accept_states
    }

    pub fn rulebook(&self) -> &Rulebook<S, C> {
        &self.rulebook
    }

    /// Every state this design can mention: the start state, the accept
    /// states and every state named by a rule.
    pub fn states(&self) -> StateSet<S> {
        let mut states = self.rulebook.states();
        states.insert(self.start_state.clone());
        states.extend(self.accept_states.iter().cloned());
        states
    }

    /// Build a fresh automaton positioned at the start state.
    pub fn to_automaton(&self) -> Automaton<S, C> {
        self.automaton_at(StateSet::singleton(self.start_state.clone()))
    }

    /// Build an automaton positioned at `current_states` instead of the
    /// start state. Used to resume checkpointed runs.
    pub(crate) fn automaton_at(&self, current_states: StateSet<S>) -> Automaton<S, C> {
        Automaton::new(
            current_states,
            Arc::clone(&self.accept_states),
            Arc::clone(&self.rulebook),
        )
    }

    /// Run `symbols` through a fresh automaton and report acceptance.
    ///
    /// Each call is independent; the design is never modified.
    pub fn accepts<I>(&self, symbols: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<C>,
    {
        let mut automaton = self.to_automaton();
        automaton.read_string(symbols);
        automaton.accepting()
    }
}

impl<S: State> Design<S, char> {
    /// Run every character of `input` through a fresh automaton.
    pub fn accepts_str(&self, input: &str) -> bool {
        self.accepts(input.chars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rule;
    use test_log::test;

    fn sample_design() -> Design<u32, char> {
        let rulebook = Rulebook::new(vec![
            Rule::new(1, 'a', 1),
            Rule::new(1, 'b', 1),
            Rule::new(1, 'b', 2),
            Rule::new(2, 'a', 3),
            Rule::new(2, 'b', 3),
            Rule::new(3, 'a', 4),
            Rule::new(3, 'b', 4),
        ]);
        Design::new(1, [4], rulebook)
    }

    #[test]
    fn accepts_third_from_last_b() {
        let design = sample_design();

        assert!(design.accepts_str("bab"));
        assert!(design.accepts_str("bbbbb"));
        assert!(!design.accepts_str("bbabb"));
    }

    #[test]
    fn rejects_empty_string_when_start_is_not_accepting() {
        assert!(!sample_design().accepts_str(""));
    }

    #[test]
    fn rejects_string_without_b() {
        assert!(!sample_design().accepts_str("aaaa"));
    }

    #[test]
    fn rejects_unknown_symbols() {
        let design = sample_design();
        assert!(!design.accepts_str("bxb"));
        assert!(!design.accepts_str("bab?"));
    }

    #[test]
    fn accepting_start_state_accepts_empty_string() {
        let design: Design<u32, char> = Design::new(1, [1], Rulebook::default());
        assert!(design.accepts_str(""));
        assert!(!design.accepts_str("a"));
    }

    #[test]
    fn to_automaton_starts_at_start_state() {
        let design = sample_design();
        let automaton = design.to_automaton();

        assert_eq!(automaton.current_states(), &StateSet::singleton(1));
        assert_eq!(automaton.accept_states(), design.accept_states());
    }

    #[test]
    fn accepts_matches_manual_run() {
        let design = sample_design();
        for input in ["", "a", "b", "bab", "bbabb", "bbbbb", "abba", "zzz"] {
            let mut automaton = design.to_automaton();
            automaton.read_string(input.chars());
            assert_eq!(design.accepts_str(input), automaton.accepting(), "{input}");
        }
    }

    #[test]
    fn automata_from_one_design_are_independent() {
        let design = sample_design();
        let mut first = design.to_automaton();
        let second = design.to_automaton();

        first.read_string("bab".chars());

        assert!(first.accepting());
        assert_eq!(second.current_states(), &StateSet::singleton(1));
    }

    #[test]
    fn designs_can_share_a_rulebook() {
        let rulebook = Arc::new(sample_design().rulebook().clone());
        let ends_at_two = Design::new(1u32, [2], Arc::clone(&rulebook));
        let ends_at_four = Design::new(1u32, [4], rulebook);

        assert!(ends_at_two.accepts_str("ab"));
        assert!(!ends_at_four.accepts_str("ab"));
    }

    #[test]
    fn design_is_shareable_across_threads() {
        let design = sample_design();
        let inputs = ["bab", "bbbbb", "bbabb", "", "aaaa"];

        let results: Vec<bool> = std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| {
                    let design = &design;
                    scope.spawn(move || design.accepts_str(input))
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(results, vec![true, true, false, false, false]);
    }

    #[test]
    fn states_include_start_and_accept() {
        let design: Design<u32, char> =
            Design::new(0, [9], Rulebook::new(vec![Rule::new(1, 'a', 2)]));
        assert_eq!(design.states(), StateSet::from([0, 1, 2, 9]));
    }

    #[test]
    fn design_serializes_correctly() {
        let design = sample_design();
        let json = serde_json::to_string(&design).unwrap();
        let deserialized: Design<u32, char> = serde_json::from_str(&json).unwrap();

        assert_eq!(design, deserialized);
        assert!(deserialized.accepts_str("bab"));
    }
}
