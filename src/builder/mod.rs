//! Builder API for ergonomic design construction.
//!
//! This module provides a fluent builder and macros for creating designs
//! with minimal boilerplate while maintaining type safety.

pub mod design;
pub mod error;
pub mod macros;

pub use design::DesignBuilder;
pub use error::BuildError;

use crate::core::{Design, Rule, Rulebook, State, Symbol};

/// Create a design whose only accept state is `accept`.
///
/// # Example
///
/// ```
/// use multistate::builder::single_accept_design;
/// use multistate::core::Rule;
///
/// let design = single_accept_design(0, 2, vec![
///     Rule::new(0, 'a', 1),
///     Rule::new(1, 'b', 2),
/// ]);
///
/// assert!(design.accepts_str("ab"));
/// assert!(!design.accepts_str("a"));
/// ```
pub fn single_accept_design<S, C>(start: S, accept: S, rules: Vec<Rule<S, C>>) -> Design<S, C>
where
    S: State,
    C: Symbol,
{
    Design::new(start, [accept], Rulebook::new(rules))
}
