//! Scanning: the runtime semantics of a lexer model.
//!
//! [`Scanner`] interprets a frozen [`crate::core::LexerModel`] directly and
//! is the behaviour every generated lexer must reproduce:
//!
//! - the scan starts in state 0 at the first character with no open buffer
//! - the first matching transition of the current state fires
//! - its actions run in order; `Raise` ends the scan on the spot
//! - the cursor advances unless the transition fed the character back
//! - an unemitted buffer is dropped, never flushed, when input runs out

mod config;
mod error;
mod scanner;
mod token;
mod trace;

pub use config::{EndOfInput, ScanConfig, ScanConfigBuilder};
pub use error::ScanError;
pub use scanner::{Scanner, Tokens};
pub use token::{Span, Token};
pub use trace::{ScanStep, ScanTrace, TracedScan};
