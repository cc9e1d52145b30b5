//! Builder API for lexer model construction.
//!
//! Models have a two-phase lifecycle: declare transitions on a
//! [`LexerModelBuilder`], then `build` it into a frozen
//! [`crate::core::LexerModel`]. The [`lexer_model!`](crate::lexer_model)
//! macro declares a whole table at once.

pub mod error;
pub mod macros;
pub mod model;

pub use error::{ModelError, StateBound};
pub use model::{LexerModelBuilder, NO_ACTIONS};
