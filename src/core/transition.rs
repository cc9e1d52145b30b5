//! Transitions: condition, actions, destination.

use super::action::Action;
use super::condition::{Condition, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a state in `[0, num_states)`.
pub type StateId = usize;

/// A rule filed under its origin state.
///
/// When `condition` is the first in its state to match the current symbol,
/// `actions` run in declared order and the scanner moves to `to`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub condition: Condition,
    pub actions: Vec<Action>,
    pub to: StateId,
}

impl Transition {
    /// Check if this transition fires on `symbol` (pure).
    pub fn accepts(&self, symbol: Symbol) -> bool {
        self.condition.matches(symbol)
    }

    /// Whether the current symbol is re-presented instead of consumed.
    ///
    /// Actions after a `Raise` never run, so a `Feed` behind one does not count.
    pub fn feeds(&self) -> bool {
        self.actions
            .iter()
            .take_while(|action| !matches!(action, Action::Raise(_)))
            .any(|action| matches!(action, Action::Feed))
    }

    /// Whether executing this transition always ends the scan.
    pub fn raises(&self) -> bool {
        self.actions
            .iter()
            .any(|action| matches!(action, Action::Raise(_)))
    }

    /// Whether the token buffer is open after running the actions on
    /// `symbol`, starting from `open`.
    ///
    /// Returns `None` when the actions end the scan instead: a `Raise`, an
    /// `Append` or `Emit` without an open buffer, or an `Append` at end of
    /// input.
    pub fn buffer_after(&self, open: bool, symbol: Symbol) -> Option<bool> {
        self.actions.iter().try_fold(open, |open, action| match action {
            Action::Begin => Some(true),
            Action::Append => (open && symbol != Symbol::End).then_some(true),
            Action::Emit(_) => open.then_some(false),
            Action::Feed => Some(open),
            Action::Raise(_) => None,
        })
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "on {} do [", self.condition)?;
        for (i, action) in self.actions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{action}")?;
        }
        write!(f, "] -> {}", self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(actions: Vec<Action>) -> Transition {
        Transition {
            condition: Condition::Else,
            actions,
            to: 0,
        }
    }

    #[test]
    fn feeds_detects_feed_action() {
        assert!(transition(vec![Action::Emit("NUM".into()), Action::Feed]).feeds());
        assert!(!transition(vec![Action::Begin, Action::Append]).feeds());
    }

    #[test]
    fn feed_after_raise_is_unreachable() {
        let t = transition(vec![Action::Raise("Bad".into()), Action::Feed]);
        assert!(!t.feeds());
        assert!(t.raises());
    }

    #[test]
    fn buffer_after_follows_actions() {
        let emit_and_feed = transition(vec![Action::Emit("TOK".into()), Action::Feed]);
        assert_eq!(emit_and_feed.buffer_after(true, Symbol::Char('b')), Some(false));
        assert_eq!(emit_and_feed.buffer_after(false, Symbol::Char('b')), None);

        let begin_append = transition(vec![Action::Begin, Action::Append]);
        assert_eq!(begin_append.buffer_after(false, Symbol::Char('a')), Some(true));
        assert_eq!(begin_append.buffer_after(false, Symbol::End), None);

        let feed_only = transition(vec![Action::Feed]);
        assert_eq!(feed_only.buffer_after(true, Symbol::End), Some(true));
        let raise = transition(vec![Action::Raise("Bad".into())]);
        assert_eq!(raise.buffer_after(true, Symbol::End), None);
    }

    #[test]
    fn display_lists_actions() {
        let t = Transition {
            condition: Condition::Range('0', '9'),
            actions: vec![Action::Begin, Action::Append],
            to: 1,
        };
        assert_eq!(t.to_string(), "on \"0-9\" do [B, A] -> 1");
    }
}
