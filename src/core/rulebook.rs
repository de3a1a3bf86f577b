//! The transition relation of an automaton.

use super::rule::Rule;
use super::state::{State, Symbol};
use super::state_set::StateSet;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Rule positions grouped by source state, then by symbol.
type RuleIndex<S, C> = HashMap<S, HashMap<C, Vec<usize>>>;

/// An immutable collection of rules.
///
/// The rulebook answers "which states are reachable from this set of states
/// on this symbol". Rule order never changes the answer. Lookups go through
/// an index keyed by `(state, symbol)` built once at construction, which
/// gives the same results as filtering every rule with [`Rule::applies_to`].
///
/// A rulebook serializes as its plain list of rules.
///
/// # Example
///
/// ```rust
/// use multistate::core::{Rule, Rulebook, StateSet};
///
/// let rulebook = Rulebook::new(vec![
///     Rule::new(1, 'a', 1),
///     Rule::new(1, 'b', 1),
///     Rule::new(1, 'b', 2),
/// ]);
///
/// let next = rulebook.next_states(&StateSet::singleton(1), &'b');
/// assert_eq!(next, StateSet::from([1, 2]));
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(
    bound = "",
    from = "Vec<Rule<S, C>>",
    into = "Vec<Rule<S, C>>"
)]
pub struct Rulebook<S: State, C: Symbol> {
    rules: Vec<Rule<S, C>>,
    index: RuleIndex<S, C>,
}

impl<S: State, C: Symbol> Rulebook<S, C> {
    /// Create a rulebook from rules in any order.
    pub fn new(rules: Vec<Rule<S, C>>) -> Self {
        let mut index: RuleIndex<S, C> = HashMap::new();
        for (position, rule) in rules.iter().enumerate() {
            index
                .entry(rule.state().clone())
                .or_default()
                .entry(rule.symbol().clone())
                .or_default()
                .push(position);
        }

        debug!(
            "Built rulebook with {} rules over {} source states",
            rules.len(),
            index.len()
        );

        Self { rules, index }
    }

    /// The rules that fire from `state` on `symbol`, in rulebook order.
    ///
    /// Empty when no transition is defined; that is a dead end for this
    /// state, not an error.
    pub fn rules_for<'a>(
        &'a self,
        state: &S,
        symbol: &C,
    ) -> impl Iterator<Item = &'a Rule<S, C>> + 'a {
        self.index
            .get(state)
            .and_then(|by_symbol| by_symbol.get(symbol))
            .into_iter()
            .flatten()
            .map(move |&position| &self.rules[position])
    }

    /// Destinations of every rule that fires from `state` on `symbol`.
    pub fn follow_rules_for(&self, state: &S, symbol: &C) -> StateSet<S> {
        self.rules_for(state, symbol)
            .map(|rule| rule.follow().clone())
            .collect()
    }

    /// Every state reachable in one step from any state in `states` on
    /// `symbol`.
    ///
    /// This is the nondeterministic transition operator: all live branches
    /// advance together. The empty set maps to the empty set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use multistate::core::{Rule, Rulebook, StateSet};
    ///
    /// let rulebook = Rulebook::new(vec![
    ///     Rule::new(1, 'b', 2),
    ///     Rule::new(2, 'b', 3),
    /// ]);
    ///
    /// let next = rulebook.next_states(&StateSet::from([1, 2]), &'b');
    /// assert_eq!(next, StateSet::from([2, 3]));
    ///
    /// let none = rulebook.next_states(&StateSet::from([1, 2]), &'z');
    /// assert!(none.is_empty());
    /// ```
    pub fn next_states(&self, states: &StateSet<S>, symbol: &C) -> StateSet<S> {
        states
            .iter()
            .flat_map(|state| self.rules_for(state, symbol))
            .map(|rule| rule.follow().clone())
            .collect()
    }

    pub fn rules(&self) -> &[Rule<S, C>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every state mentioned by some rule, as a source or a destination.
    pub fn states(&self) -> StateSet<S> {
        self.rules
            .iter()
            .flat_map(|rule| [rule.state().clone(), rule.next_state().clone()])
            .collect()
    }

    /// Every symbol mentioned by some rule.
    pub fn alphabet(&self) -> HashSet<C> {
        self.rules.iter().map(|rule| rule.symbol().clone()).collect()
    }
}

impl<S: State, C: Symbol> fmt::Debug for Rulebook<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rulebook")
            .field("rules", &self.rules)
            .finish()
    }
}

impl<S: State, C: Symbol> PartialEq for Rulebook<S, C> {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
    }
}

impl<S: State, C: Symbol> Eq for Rulebook<S, C> {}

impl<S: State, C: Symbol> Default for Rulebook<S, C> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<S: State, C: Symbol> From<Vec<Rule<S, C>>> for Rulebook<S, C> {
    fn from(rules: Vec<Rule<S, C>>) -> Self {
        Self::new(rules)
    }
}

impl<S: State, C: Symbol> From<Rulebook<S, C>> for Vec<Rule<S, C>> {
    fn from(rulebook: Rulebook<S, C>) -> Self {
        rulebook.rules
    }
}

impl<S: State, C: Symbol> FromIterator<Rule<S, C>> for Rulebook<S, C> {
    fn from_iter<I: IntoIterator<Item = Rule<S, C>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<S: State, C: Symbol> IntoIterator for Rulebook<S, C> {
    type Item = Rule<S, C>;
    type IntoIter = std::vec::IntoIter<Rule<S, C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a, S: State, C: Symbol> IntoIterator for &'a Rulebook<S, C> {
    type Item = &'a Rule<S, C>;
    type IntoIter = std::slice::Iter<'a, Rule<S, C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rulebook() -> Rulebook<u32, char> {
        Rulebook::new(vec![
            Rule::new(1, 'a', 1),
            Rule::new(1, 'b', 1),
            Rule::new(1, 'b', 2),
            Rule::new(2, 'a', 3),
            Rule::new(2, 'b', 3),
            Rule::new(3, 'a', 4),
            Rule::new(3, 'b', 4),
        ])
    }

    #[test]
    fn rules_for_returns_matching_rules_in_order() {
        let rulebook = sample_rulebook();
        let rules: Vec<_> = rulebook.rules_for(&1, &'b').collect();

        assert_eq!(rules, vec![&Rule::new(1, 'b', 1), &Rule::new(1, 'b', 2)]);
    }

    #[test]
    fn rules_for_is_empty_without_transition() {
        let rulebook = sample_rulebook();
        assert_eq!(rulebook.rules_for(&4, &'a').count(), 0);
        assert_eq!(rulebook.rules_for(&1, &'z').count(), 0);
        assert_eq!(rulebook.rules_for(&99, &'a').count(), 0);
    }

    #[test]
    fn rules_for_agrees_with_linear_scan() {
        let rulebook = sample_rulebook();
        for state in 0..6u32 {
            for symbol in ['a', 'b', 'c'] {
                let indexed: Vec<_> = rulebook.rules_for(&state, &symbol).collect();
                let scanned: Vec<_> = rulebook
                    .rules()
                    .iter()
                    .filter(|rule| rule.applies_to(&state, &symbol))
                    .collect();
                assert_eq!(indexed, scanned);
            }
        }
    }

    #[test]
    fn follow_rules_for_collapses_duplicates() {
        let rulebook = Rulebook::new(vec![
            Rule::new(1u32, 'a', 2u32),
            Rule::new(1u32, 'a', 2u32),
            Rule::new(1u32, 'a', 3u32),
        ]);

        assert_eq!(rulebook.follow_rules_for(&1, &'a'), StateSet::from([2, 3]));
    }

    #[test]
    fn next_states_unions_all_branches() {
        let rulebook = sample_rulebook();

        let next = rulebook.next_states(&StateSet::from([1, 2, 3]), &'b');
        assert_eq!(next, StateSet::from([1, 2, 3, 4]));
    }

    #[test]
    fn next_states_of_empty_set_is_empty() {
        let rulebook = sample_rulebook();
        assert!(rulebook.next_states(&StateSet::new(), &'a').is_empty());
    }

    #[test]
    fn next_states_with_unknown_symbol_is_empty() {
        let rulebook = sample_rulebook();
        assert!(rulebook
            .next_states(&StateSet::from([1, 2, 3]), &'?')
            .is_empty());
    }

    #[test]
    fn empty_rulebook_has_no_transitions() {
        let rulebook: Rulebook<u32, char> = Rulebook::default();
        assert!(rulebook.is_empty());
        assert!(rulebook.next_states(&StateSet::singleton(1), &'a').is_empty());
    }

    #[test]
    fn states_and_alphabet_cover_all_rules() {
        let rulebook = sample_rulebook();
        assert_eq!(rulebook.states(), StateSet::from([1, 2, 3, 4]));
        assert_eq!(rulebook.alphabet(), HashSet::from(['a', 'b']));
        assert_eq!(rulebook.len(), 7);
    }

    #[test]
    fn rule_order_does_not_change_results() {
        let forward = sample_rulebook();
        let mut rules = forward.rules().to_vec();
        rules.reverse();
        let backward = Rulebook::new(rules);

        let states = StateSet::from([1, 2, 3]);
        for symbol in ['a', 'b'] {
            assert_eq!(
                forward.next_states(&states, &symbol),
                backward.next_states(&states, &symbol)
            );
        }
    }

    #[test]
    fn rulebook_serializes_as_rule_list() {
        let rulebook = sample_rulebook();
        let json = serde_json::to_string(&rulebook).unwrap();
        let deserialized: Rulebook<u32, char> = serde_json::from_str(&json).unwrap();

        assert_eq!(rulebook, deserialized);
        assert_eq!(
            deserialized.next_states(&StateSet::singleton(1), &'b'),
            StateSet::from([1, 2])
        );
    }
}
