//! Character-matching conditions.
//!
//! A [`Condition`] is a closed algebra of predicates over a single input
//! [`Symbol`]. Evaluation is a single recursive match, so adding a variant
//! forces every consumer to handle it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single unit of scanner input.
///
/// `End` is the end-of-input sentinel. Only `Else`, and combinators that
/// invert their operands, ever match it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    Char(char),
    End,
}

impl Symbol {
    /// The character carried by this symbol, if any.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            Self::End => None,
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{:?}", c),
            Self::End => f.write_str("<end of input>"),
        }
    }
}

/// Predicate over one input symbol.
///
/// Conditions are immutable values compared structurally. They are built
/// once, usually through [`crate::syntax::parse_condition`], and owned by the
/// transition that holds them.
///
/// # Example
///
/// ```rust
/// use lexspec::core::{Condition, Symbol};
///
/// let digit = Condition::Range('0', '9');
/// let not_digit = Condition::Not(Box::new(digit.clone()));
///
/// assert!(digit.matches('5'.into()));
/// assert!(!not_digit.matches('5'.into()));
/// assert!(not_digit.matches(Symbol::End));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Exactly this character.
    Char(char),
    /// Any character in the inclusive code point interval `[lo, hi]`.
    /// A backwards interval is legal and never matches.
    Range(char, char),
    /// Matches iff the inner condition does not.
    Not(Box<Condition>),
    /// Matches iff any operand matches, tried left to right.
    Or(Vec<Condition>),
    /// Matches iff no operand matches. Equivalent to `Not(Or(..))`.
    Neither(Vec<Condition>),
    /// Matches every symbol, including end of input.
    Else,
}

impl Condition {
    /// Evaluate the predicate against `symbol` (pure).
    pub fn matches(&self, symbol: Symbol) -> bool {
        match self {
            Self::Char(c) => symbol == Symbol::Char(*c),
            Self::Range(lo, hi) => symbol
                .as_char()
                .is_some_and(|c| (*lo..=*hi).contains(&c)),
            Self::Not(inner) => !inner.matches(symbol),
            Self::Or(subs) => subs.iter().any(|sub| sub.matches(symbol)),
            Self::Neither(subs) => !subs.iter().any(|sub| sub.matches(symbol)),
            Self::Else => true,
        }
    }

    /// Shorthand for matching a plain character.
    pub fn matches_char(&self, c: char) -> bool {
        self.matches(Symbol::Char(c))
    }

    /// True for a range whose bounds are reversed.
    pub fn is_empty_range(&self) -> bool {
        matches!(self, Self::Range(lo, hi) if lo > hi)
    }

    /// Visit every character literal mentioned by this condition, range
    /// bounds included.
    pub fn for_each_char<F: FnMut(char)>(&self, f: &mut F) {
        match self {
            Self::Char(c) => f(*c),
            Self::Range(lo, hi) => {
                f(*lo);
                f(*hi);
            }
            Self::Not(inner) => inner.for_each_char(f),
            Self::Or(subs) | Self::Neither(subs) => {
                for sub in subs {
                    sub.for_each_char(f);
                }
            }
            Self::Else => {}
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{:?}", c.to_string()),
            Self::Range(lo, hi) => write!(f, "{:?}", format!("{lo}-{hi}")),
            Self::Not(inner) => match inner.as_ref() {
                Self::Char(c) => write!(f, "{:?}", format!("!{c}")),
                Self::Range(lo, hi) => write!(f, "{:?}", format!("!{lo}-{hi}")),
                other => write!(f, "not {other}"),
            },
            Self::Or(subs) => {
                f.write_str("[")?;
                write_list(f, subs)?;
                f.write_str("]")
            }
            Self::Neither(subs) => {
                f.write_str("(")?;
                write_list(f, subs)?;
                f.write_str(")")
            }
            Self::Else => f.write_str("else"),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, subs: &[Condition]) -> fmt::Result {
    for (i, sub) in subs.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{sub}")?;
    }
    Ok(())
}
