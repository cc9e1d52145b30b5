//! Scan-time errors.

use crate::core::{Action, StateId, Symbol};
use thiserror::Error;

/// Errors that end a scan.
///
/// Every error is a deterministic function of the model and the input:
/// scanning the same input again reproduces it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// No condition in the current state matched the current symbol.
    #[error("No transition from state {state} matches {symbol} at position {position}")]
    NoMatchingTransition {
        state: StateId,
        symbol: Symbol,
        position: usize,
    },

    /// `Append` or `Emit` ran without a preceding `Begin`.
    #[error("Action {action} in state {state} needs an open token buffer (position {position})")]
    BufferNotOpen {
        state: StateId,
        action: Action,
        position: usize,
    },

    /// The model raised a lexical error on purpose.
    #[error("{kind} raised in state {state} on {symbol} at position {position}")]
    Raised {
        kind: String,
        state: StateId,
        symbol: Symbol,
        position: usize,
    },

    /// `Append` ran while the end-of-input sentinel was being matched.
    #[error("Cannot append end of input to the token buffer in state {state}")]
    AppendAtEnd { state: StateId, position: usize },

    /// A chain of `Feed` actions at one position returned to a state it had
    /// already visited, so it would never terminate.
    #[error("Feed cycle on {symbol} at position {position} returns to state {state}")]
    FeedCycle {
        state: StateId,
        symbol: Symbol,
        position: usize,
    },
}

impl ScanError {
    /// Byte offset in the input where the scan stopped.
    pub fn position(&self) -> usize {
        match self {
            Self::NoMatchingTransition { position, .. }
            | Self::BufferNotOpen { position, .. }
            | Self::Raised { position, .. }
            | Self::AppendAtEnd { position, .. }
            | Self::FeedCycle { position, .. } => *position,
        }
    }

    /// True when the failure is a defect in the model rather than rejected
    /// input.
    pub fn is_model_defect(&self) -> bool {
        matches!(
            self,
            Self::BufferNotOpen { .. } | Self::AppendAtEnd { .. } | Self::FeedCycle { .. }
        )
    }
}
