//! Lexspec: declare finite-state tokenizers as transition tables
//!
//! A lexer is described as a fixed number of states, each holding an ordered
//! list of transitions. A transition fires when its character condition
//! matches, runs a short sequence of token-buffer actions and moves to its
//! destination state. Within a state, the first matching transition in
//! declaration order wins; there is no specificity ranking.
//!
//! # Core Concepts
//!
//! - **Conditions**: `Char`, `Range`, `Not`, `Or`, `Neither`, `Else`, written
//!   as `"x"`, `"a-z"`, `"!x"`, `["a", "0-9"]`, `("a", "0-9")`, `"else"`
//! - **Actions**: `B` begin, `A` append, `E:<kind>` emit, `F` feed,
//!   `R:<kind>` raise
//! - **Model**: built once through [`builder::LexerModelBuilder`], then
//!   frozen into an immutable [`core::LexerModel`]
//! - **Scanning**: [`scan::Scanner`] interprets a model and defines the
//!   behaviour every code-generation [`backend::Backend`] must reproduce
//!
//! # Example
//!
//! ```rust
//! use lexspec::builder::{LexerModelBuilder, NO_ACTIONS};
//! use lexspec::scan::Scanner;
//!
//! let mut builder = LexerModelBuilder::new(2);
//! builder
//!     .add_transition(0, 0, [" ", "\t"], NO_ACTIONS)?
//!     .add_transition(0, 0, "+", ["B", "A", "E:PLUS"])?
//!     .add_transition(0, 1, "0-9", ["B", "A"])?
//!     .add_transition(1, 1, "0-9", ["A"])?
//!     .add_transition(1, 0, "else", ["E:NUM", "F"])?;
//! let model = builder.build()?;
//!
//! let tokens = Scanner::new(&model).scan("3+").unwrap();
//! assert_eq!(tokens[0].as_pair(), ("NUM", "3"));
//! assert_eq!(tokens[1].as_pair(), ("PLUS", "+"));
//! # Ok::<(), lexspec::builder::ModelError>(())
//! ```

pub mod analysis;
pub mod backend;
pub mod builder;
pub mod core;
pub mod scan;
pub mod syntax;

// Re-export commonly used types
pub use crate::builder::{LexerModelBuilder, ModelError};
pub use crate::core::{Action, Condition, LexerModel, StateId, Symbol, Transition};
pub use crate::scan::{ScanError, Scanner, Token};
