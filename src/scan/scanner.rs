//! Reference interpreter for lexer models.
//!
//! The scanner walks the input one character at a time. In each step it
//! picks the first transition of the current state whose condition matches
//! the current symbol, runs that transition's actions in order, moves to the
//! destination state and, unless the transition fed the symbol back,
//! advances past it.

use super::config::{EndOfInput, ScanConfig};
use super::error::ScanError;
use super::token::{Span, Token};
use super::trace::{ScanStep, ScanTrace, TracedScan};
use crate::core::{Action, LexerModel, StateId, Symbol};
use log::{debug, trace, warn};
use std::collections::VecDeque;

/// Runs a lexer model over input strings.
///
/// A scanner only borrows its model, so any number of scanners can share
/// one model, including across threads.
///
/// # Example
///
/// ```rust
/// use lexspec::lexer_model;
/// use lexspec::scan::Scanner;
///
/// let model = lexer_model! {
///     states: 2;
///     0 => 0 on [" ", "\t"];
///     0 => 0 on "+", do ["B", "A", "E:PLUS"];
///     0 => 1 on "0-9", do ["B", "A"];
///     1 => 1 on "0-9", do ["A"];
///     1 => 0 on "else", do ["E:NUM", "F"];
/// }
/// .unwrap();
///
/// let tokens = Scanner::new(&model).scan("3+").unwrap();
/// let pairs: Vec<_> = tokens.iter().map(|t| t.as_pair()).collect();
/// assert_eq!(pairs, vec![("NUM", "3"), ("PLUS", "+")]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'m> {
    model: &'m LexerModel,
    config: ScanConfig,
}

impl<'m> Scanner<'m> {
    /// Create a scanner with the default configuration.
    pub fn new(model: &'m LexerModel) -> Self {
        Self::with_config(model, ScanConfig::default())
    }

    pub fn with_config(model: &'m LexerModel, config: ScanConfig) -> Self {
        Self { model, config }
    }

    pub fn model(&self) -> &'m LexerModel {
        self.model
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Lazily scan `input`.
    ///
    /// Yields tokens as they are emitted. If the scan fails, the error is
    /// yielded after every token emitted before it, and the iterator ends.
    pub fn tokens<'i>(&self, input: &'i str) -> Tokens<'m, 'i> {
        Tokens {
            run: Run::new(self.model, self.config, input),
            error: None,
        }
    }

    /// Scan `input` to completion.
    pub fn scan(&self, input: &str) -> Result<Vec<Token>, ScanError> {
        self.tokens(input).collect()
    }

    /// Scan `input`, recording every fired transition.
    pub fn trace(&self, input: &str) -> TracedScan {
        let mut run = Run::new(self.model, self.config, input);
        let mut trace = ScanTrace::new();
        let error = loop {
            match run.step() {
                Ok(Some(step)) => trace.push(step),
                Ok(None) => break None,
                Err(err) => break Some(err),
            }
        };
        TracedScan {
            trace,
            tokens: run.pending.into_iter().collect(),
            error,
        }
    }
}

/// Streaming token iterator returned by [`Scanner::tokens`].
pub struct Tokens<'m, 'i> {
    run: Run<'m, 'i>,
    error: Option<ScanError>,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.run.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.run.finished {
                return self.error.take().map(Err);
            }
            if let Err(err) = self.run.step() {
                self.error = Some(err);
            }
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}

/// Open token buffer.
struct Buffer {
    text: String,
    start: usize,
    end: usize,
}

/// Private mutable state of one scan.
struct Run<'m, 'i> {
    model: &'m LexerModel,
    config: ScanConfig,
    input: &'i str,
    cursor: usize,
    state: StateId,
    buffer: Option<Buffer>,
    pending: VecDeque<Token>,
    /// `(state, buffer open)` pairs that fed the current symbol onward.
    fed_states: Vec<(StateId, bool)>,
    finished: bool,
}

impl<'m, 'i> Run<'m, 'i> {
    fn new(model: &'m LexerModel, config: ScanConfig, input: &'i str) -> Self {
        Self {
            model,
            config,
            input,
            cursor: 0,
            state: 0,
            buffer: None,
            pending: VecDeque::new(),
            fed_states: Vec::new(),
            finished: false,
        }
    }

    /// Execute one step. Returns `Ok(None)` once the scan is over.
    fn step(&mut self) -> Result<Option<ScanStep>, ScanError> {
        if self.finished {
            return Ok(None);
        }
        let result = self.fire();
        if let Err(err) = &result {
            self.finished = true;
            if err.is_model_defect() {
                warn!("Scan stopped by a model defect: {err}");
            } else {
                debug!("Scan stopped: {err}");
            }
        }
        result
    }

    fn fire(&mut self) -> Result<Option<ScanStep>, ScanError> {
        let symbol = match self.input[self.cursor..].chars().next() {
            Some(c) => Symbol::Char(c),
            None if self.config.end_of_input == EndOfInput::Sentinel => Symbol::End,
            None => {
                self.finish();
                return Ok(None);
            }
        };

        let state = self.state;
        let position = self.cursor;
        let model = self.model;
        let Some((index, transition)) = model.select(state, symbol) else {
            return Err(ScanError::NoMatchingTransition {
                state,
                symbol,
                position,
            });
        };
        trace!("State {state}: {symbol} at {position} fires #{index} {transition}");

        let opened = self.buffer.is_some();
        let mut fed = false;
        for action in &transition.actions {
            match action {
                Action::Begin => {
                    self.buffer = Some(Buffer {
                        text: String::new(),
                        start: position,
                        end: position,
                    });
                }
                Action::Append => {
                    let buffer = self.buffer.as_mut().ok_or_else(|| ScanError::BufferNotOpen {
                        state,
                        action: action.clone(),
                        position,
                    })?;
                    let Symbol::Char(c) = symbol else {
                        return Err(ScanError::AppendAtEnd { state, position });
                    };
                    buffer.text.push(c);
                    buffer.end = position + c.len_utf8();
                }
                Action::Emit(kind) => {
                    let buffer = self.buffer.take().ok_or_else(|| ScanError::BufferNotOpen {
                        state,
                        action: action.clone(),
                        position,
                    })?;
                    let token = Token {
                        kind: kind.clone(),
                        text: buffer.text,
                        span: Span::new(buffer.start, buffer.end),
                    };
                    trace!("Emit {token}");
                    self.pending.push_back(token);
                }
                Action::Feed => fed = true,
                Action::Raise(kind) => {
                    return Err(ScanError::Raised {
                        kind: kind.clone(),
                        state,
                        symbol,
                        position,
                    });
                }
            }
        }

        self.state = transition.to;
        if fed {
            if self.config.detect_feed_cycles {
                // The same state with the same buffer status repeats the same step.
                self.fed_states.push((state, opened));
                if self.fed_states.contains(&(transition.to, self.buffer.is_some())) {
                    return Err(ScanError::FeedCycle {
                        state: transition.to,
                        symbol,
                        position,
                    });
                }
            }
        } else {
            self.fed_states.clear();
            match symbol {
                Symbol::Char(c) => self.cursor += c.len_utf8(),
                Symbol::End => self.finish(),
            }
        }

        Ok(Some(ScanStep {
            state,
            symbol,
            position,
            transition: index,
            to: transition.to,
            fed,
        }))
    }

    fn finish(&mut self) {
        self.finished = true;
        if let Some(buffer) = &self.buffer {
            debug!(
                "Scan ended in state {} with {:?} still buffered and not emitted",
                self.state, buffer.text
            );
        }
    }
}
