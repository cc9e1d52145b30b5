//! Findings reported by model analysis.

use crate::core::{StateId, Symbol};
use thiserror::Error;

/// A problem found in a lexer model.
///
/// Diagnostics are advisory: the model is still valid and scannable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("State {state}, transition #{index}: range {lo:?}-{hi:?} is backwards and never matches")]
    EmptyRange {
        state: StateId,
        index: usize,
        lo: char,
        hi: char,
    },

    #[error("State {state}, transition #{index} never fires; transition #{by} matches first")]
    ShadowedTransition {
        state: StateId,
        index: usize,
        by: usize,
    },

    #[error("State {state} is unreachable from state 0")]
    UnreachableState { state: StateId },

    #[error("State {state} is reachable but has no transitions")]
    DeadEndState { state: StateId },

    #[error("Feed chain on {symbol} returns to state {state} and never terminates")]
    FeedCycle { state: StateId, symbol: Symbol },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
