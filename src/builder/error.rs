//! Construction errors for lexer models.

use crate::core::InvalidAction;
use crate::syntax::InvalidCondition;
use std::fmt;
use thiserror::Error;

/// Which end of a transition carried the bad state id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateBound {
    From,
    To,
}

impl fmt::Display for StateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => f.write_str("from"),
            Self::To => f.write_str("to"),
        }
    }
}

/// Errors that can occur when declaring a lexer model.
///
/// A failed declaration leaves the builder exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("The \"{bound}\" state {state} is not a possible state; valid states are 0..{num_states}")]
    InvalidState {
        bound: StateBound,
        state: usize,
        num_states: usize,
    },

    #[error(transparent)]
    InvalidCondition(#[from] InvalidCondition),

    #[error(transparent)]
    InvalidAction(#[from] InvalidAction),

    #[error("A lexer model needs at least one state")]
    NoStates,

    #[error("Model declares {num_states} states but has {lists} transition lists")]
    StateCountMismatch { num_states: usize, lists: usize },
}
