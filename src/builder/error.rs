//! Build errors for the design builder.

use thiserror::Error;

/// Errors that can occur when building a design.
///
/// Only missing required fields are errors. Empty rulebooks, empty accept
/// sets and unreachable states all produce valid designs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,
}
