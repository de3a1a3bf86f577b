//! Builder for constructing designs.

use crate::builder::error::BuildError;
use crate::core::{Design, Rule, Rulebook, State, StateSet, Symbol};

/// Builder for constructing designs with a fluent API.
pub struct DesignBuilder<S: State, C: Symbol> {
    start: Option<S>,
    accept: StateSet<S>,
    rules: Vec<Rule<S, C>>,
}

impl<S: State, C: Symbol> DesignBuilder<S, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            start: None,
            accept: StateSet::new(),
            rules: Vec::new(),
        }
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Add one accept state.
    pub fn accept(mut self, state: S) -> Self {
        self.accept.insert(state);
        self
    }

    /// Add several accept states at once.
    pub fn accept_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.accept.extend(states);
        self
    }

    /// Add a rule from its parts.
    pub fn rule(mut self, state: S, symbol: C, next_state: S) -> Self {
        self.rules.push(Rule::new(state, symbol, next_state));
        self
    }

    /// Add multiple pre-built rules.
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule<S, C>>,
    {
        self.rules.extend(rules);
        self
    }

    /// Build the design.
    /// Returns an error if the start state is missing.
    pub fn build(self) -> Result<Design<S, C>, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;
        Ok(Design::new(start, self.accept, Rulebook::new(self.rules)))
    }
}

impl<S: State, C: Symbol> Default for DesignBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
