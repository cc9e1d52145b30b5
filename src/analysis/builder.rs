//! Builder API for choosing model analyses.

use crate::analysis::diagnostics::Diagnostic;
use crate::analysis::rules::{AnalysisRules, ModelCheck};
use crate::core::LexerModel;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for analysis rules. Every built-in check starts enabled.
pub struct AnalysisBuilder {
    rules: AnalysisRules,
}

impl AnalysisBuilder {
    pub fn new() -> Self {
        Self {
            rules: AnalysisRules::default(),
        }
    }

    /// Report backwards ranges
    pub fn empty_ranges(mut self, enabled: bool) -> Self {
        self.rules.empty_ranges = enabled;
        self
    }

    /// Report transitions hidden behind earlier ones
    pub fn shadowed_transitions(mut self, enabled: bool) -> Self {
        self.rules.shadowed_transitions = enabled;
        self
    }

    /// Report states not reachable from state 0
    pub fn unreachable_states(mut self, enabled: bool) -> Self {
        self.rules.unreachable_states = enabled;
        self
    }

    /// Report reachable states without transitions
    pub fn dead_end_states(mut self, enabled: bool) -> Self {
        self.rules.dead_end_states = enabled;
        self
    }

    /// Report non-terminating feed chains
    pub fn feed_cycles(mut self, enabled: bool) -> Self {
        self.rules.feed_cycles = enabled;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&LexerModel) -> Validation<(), NonEmptyVec<Diagnostic>> + Send + Sync + 'static,
    {
        let check: ModelCheck = Box::new(check);
        self.rules.custom_checks.push(check);
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&LexerModel) -> bool + Send + Sync + 'static,
    {
        self.require(move |model: &LexerModel| {
            if predicate(model) {
                Validation::success(())
            } else {
                Validation::fail(Diagnostic::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        })
    }

    pub fn build(self) -> AnalysisRules {
        self.rules
    }
}

impl Default for AnalysisBuilder {
    fn default() -> Self {
        Self::new()
    }
}
