//! Static analysis of lexer models.
//!
//! Construction only checks that a model is well formed. It deliberately
//! does not reject rules that can never fire, unreachable states or feed
//! chains that loop, because declaration order is the only precedence rule.
//! This module finds those problems after the fact, using Stillwater's
//! `Validation` type to accumulate ALL findings instead of stopping at the
//! first.
//!
//! # Example
//!
//! ```rust
//! use lexspec::analysis::{analyze, Diagnostic};
//! use lexspec::lexer_model;
//! use stillwater::validation::Validation;
//!
//! let model = lexer_model! {
//!     states: 1;
//!     0 => 0 on "else";
//!     0 => 0 on "x", do ["B", "A", "E:X"];
//! }
//! .unwrap();
//!
//! match analyze(&model) {
//!     Validation::Failure(errors) => assert!(errors
//!         .iter()
//!         .any(|e| matches!(e, Diagnostic::ShadowedTransition { index: 1, .. }))),
//!     Validation::Success(_) => panic!("expected a shadowed transition"),
//! }
//! ```

pub mod builder;
pub mod diagnostics;
pub mod rules;
mod symbols;

pub use builder::AnalysisBuilder;
pub use diagnostics::Diagnostic;
pub use rules::{AnalysisRules, ModelCheck};

use crate::core::LexerModel;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Run every built-in analysis over `model`.
pub fn analyze(model: &LexerModel) -> Validation<(), NonEmptyVec<Diagnostic>> {
    AnalysisRules::default().check(model)
}
