//! Finite stand-ins for the infinite input alphabet.
//!
//! Every condition is a boolean combination of single characters and
//! ranges, so its value only changes at characters the model mentions.
//! Evaluating the model on those characters, their neighbours, both ends of
//! the char space and `End` covers every behaviour any input can trigger.

use crate::core::{LexerModel, StateId, Symbol};
use std::collections::BTreeSet;

const SURROGATE_LOW: u32 = 0xD800;
const SURROGATE_HIGH: u32 = 0xDFFF;

fn next_char(c: char) -> Option<char> {
    match c as u32 + 1 {
        SURROGATE_LOW => char::from_u32(SURROGATE_HIGH + 1),
        n => char::from_u32(n),
    }
}

fn prev_char(c: char) -> Option<char> {
    match (c as u32).checked_sub(1)? {
        SURROGATE_HIGH => char::from_u32(SURROGATE_LOW - 1),
        n => char::from_u32(n),
    }
}

/// Representative symbols for `model`, in ascending order with `End` last.
pub(crate) fn representatives(model: &LexerModel) -> Vec<Symbol> {
    let mut chars = BTreeSet::from(['\0', char::MAX]);
    for (_, transitions) in model.states() {
        for transition in transitions {
            transition.condition.for_each_char(&mut |c| {
                chars.insert(c);
                chars.extend(prev_char(c));
                chars.extend(next_char(c));
            });
        }
    }
    chars
        .into_iter()
        .map(Symbol::Char)
        .chain(std::iter::once(Symbol::End))
        .collect()
}

/// Which transition fires for every (state, representative symbol) pair.
pub(crate) struct DispatchTable {
    pub symbols: Vec<Symbol>,
    /// `selected[state][i]` is the firing transition for `symbols[i]`.
    pub selected: Vec<Vec<Option<usize>>>,
}

impl DispatchTable {
    pub fn new(model: &LexerModel) -> Self {
        let symbols = representatives(model);
        let selected = model
            .states()
            .map(|(state, _)| {
                symbols
                    .iter()
                    .map(|symbol| model.select(state, *symbol).map(|(index, _)| index))
                    .collect()
            })
            .collect();
        Self { symbols, selected }
    }

    /// Firing transition index for `state` on the `i`th representative.
    pub fn fires(&self, state: StateId, i: usize) -> Option<usize> {
        self.selected[state][i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer_model;

    #[test]
    fn neighbours_skip_surrogates() {
        assert_eq!(next_char('\u{D7FF}'), Some('\u{E000}'));
        assert_eq!(prev_char('\u{E000}'), Some('\u{D7FF}'));
        assert_eq!(prev_char('\0'), None);
        assert_eq!(next_char(char::MAX), None);
    }

    #[test]
    fn representatives_cover_boundaries() {
        let model = lexer_model! {
            states: 1;
            0 => 0 on "b-d";
        }
        .unwrap();

        let symbols = representatives(&model);
        for c in ['\0', 'a', 'b', 'c', 'd', 'e', char::MAX] {
            assert!(symbols.contains(&Symbol::Char(c)), "missing {c:?}");
        }
        assert_eq!(symbols.last(), Some(&Symbol::End));
    }

    #[test]
    fn dispatch_table_uses_first_match() {
        let model = lexer_model! {
            states: 1;
            0 => 0 on "a";
            0 => 0 on "else";
        }
        .unwrap();

        let table = DispatchTable::new(&model);
        for (i, symbol) in table.symbols.iter().enumerate() {
            let expected = if *symbol == Symbol::Char('a') { 0 } else { 1 };
            assert_eq!(table.fires(0, i), Some(expected));
        }
    }
}
