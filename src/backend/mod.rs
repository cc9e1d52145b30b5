//! Code-generation backends.
//!
//! A backend receives a validated, immutable [`LexerModel`] and turns it
//! into something that scans input: generated source, a compiled table, or
//! an interpreter. Whatever it produces must follow the semantics of
//! [`crate::scan::Scanner`] exactly, including its errors.

use crate::core::LexerModel;
use crate::scan::{ScanConfig, Scanner};
use std::convert::Infallible;

/// Turns a lexer model into an executable or emittable form.
pub trait Backend {
    /// What the backend produces for a model.
    type Output<'m>;
    type Error;

    fn compile<'m>(&self, model: &'m LexerModel) -> Result<Self::Output<'m>, Self::Error>;
}

/// Backend that runs the model directly instead of generating code.
///
/// # Example
///
/// ```rust
/// use lexspec::backend::{Backend, Interpreter};
/// use lexspec::lexer_model;
///
/// let model = lexer_model! {
///     states: 1;
///     0 => 0 on "a-z", do ["B", "A", "E:LETTER"];
/// }
/// .unwrap();
///
/// let scanner = Interpreter::default().compile(&model).unwrap();
/// assert_eq!(scanner.scan("ab").unwrap().len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interpreter {
    config: ScanConfig,
}

impl Interpreter {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }
}

impl Backend for Interpreter {
    type Output<'m> = Scanner<'m>;
    type Error = Infallible;

    fn compile<'m>(&self, model: &'m LexerModel) -> Result<Scanner<'m>, Infallible> {
        Ok(Scanner::with_config(model, self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;
    use crate::lexer_model;
    use crate::scan::{EndOfInput, ScanError};

    #[test]
    fn interpreter_passes_config_to_scanner() {
        let model = lexer_model! {
            states: 1;
            0 => 0 on "a";
        }
        .unwrap();
        let config = ScanConfig::builder()
            .end_of_input(EndOfInput::Sentinel)
            .build();

        let scanner = Interpreter::new(config).compile(&model).unwrap();
        assert_eq!(scanner.config(), &config);
        assert_eq!(
            scanner.scan("a").unwrap_err(),
            ScanError::NoMatchingTransition {
                state: 0,
                symbol: Symbol::End,
                position: 1,
            }
        );
    }

    #[test]
    fn generic_backend_usage() {
        fn compile_with<B: Backend>(backend: &B, model: &LexerModel) -> bool {
            backend.compile(model).is_ok()
        }

        let model = lexer_model! { states: 1; }.unwrap();
        assert!(compile_with(&Interpreter::default(), &model));
    }
}
