//! Step-by-step record of a scan.
//!
//! A trace lists every transition the scanner fired, in order. Backends
//! that generate code can compare their own execution against the
//! interpreter's trace for the same input.

use super::error::ScanError;
use super::token::Token;
use crate::core::{StateId, Symbol};
use serde::{Deserialize, Serialize};

/// One fired transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStep {
    /// State the symbol was matched in
    pub state: StateId,
    /// Symbol that was matched
    pub symbol: Symbol,
    /// Byte offset of the symbol
    pub position: usize,
    /// Index of the fired transition within its state's list
    pub transition: usize,
    /// Destination state
    pub to: StateId,
    /// Whether the symbol was fed back instead of consumed
    pub fed: bool,
}

/// Ordered steps of one scan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanTrace {
    steps: Vec<ScanStep>,
}

impl ScanTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[ScanStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// States visited: the starting state, then each step's destination.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(first.state);
        }
        path.extend(self.steps.iter().map(|step| step.to));
        path
    }

    /// Number of steps that fed their symbol back.
    pub fn feeds(&self) -> usize {
        self.steps.iter().filter(|step| step.fed).count()
    }

    pub(crate) fn push(&mut self, step: ScanStep) {
        self.steps.push(step);
    }
}

/// Everything a traced scan produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracedScan {
    pub trace: ScanTrace,
    /// Tokens emitted before the scan ended, whether or not it failed.
    pub tokens: Vec<Token>,
    pub error: Option<ScanError>,
}

impl TracedScan {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
