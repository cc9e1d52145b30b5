//! User-facing condition notation.
//!
//! Conditions are declared in a compact notation (`"a-z"`, `"!x"`, lists and
//! groups) and translated into the [`crate::core::Condition`] algebra here.
//! Parsing is pure and never looks at the model.

mod condition;

pub use condition::{check_condition, parse_condition, ConditionSyntax, InvalidCondition};
