//! Core lexer model types.
//!
//! This module contains the data the rest of the crate is built around:
//! - `Condition` and `Symbol`, the character-matching predicate algebra
//! - `Action`, the token-buffer operations a transition executes
//! - `Transition` and the frozen, read-only `LexerModel`
//!
//! Everything here is plain immutable data with pure evaluation functions.

mod action;
mod condition;
mod model;
mod transition;

pub use action::{parse_actions, Action, InvalidAction};
pub use condition::{Condition, Symbol};
pub use model::LexerModel;
pub use transition::{StateId, Transition};
