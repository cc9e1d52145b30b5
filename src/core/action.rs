//! Token-buffer actions executed when a transition fires.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One operation on the scanner's token buffer or control flow.
///
/// Actions are parsed from compact tokens:
///
/// | token      | action          |
/// |------------|-----------------|
/// | `B`        | `Begin`         |
/// | `A`        | `Append`        |
/// | `F`        | `Feed`          |
/// | `E:<kind>` | `Emit(kind)`    |
/// | `R:<kind>` | `Raise(kind)`   |
///
/// ```rust
/// use lexspec::core::Action;
///
/// let action: Action = "E:NUM".parse().unwrap();
/// assert_eq!(action, Action::Emit("NUM".to_string()));
/// assert_eq!(action.to_string(), "E:NUM");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Open a new, empty token buffer, discarding any unemitted text.
    Begin,
    /// Append the current input character to the open buffer.
    Append,
    /// Produce a token of this kind from the buffer and close it.
    Emit(String),
    /// Re-present the current character to the destination state.
    Feed,
    /// Abort the scan with this error kind.
    Raise(String),
}

/// The action token was not one of the recognized forms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("The action {token:?} is invalid")]
pub struct InvalidAction {
    pub token: String,
}

impl FromStr for Action {
    type Err = InvalidAction;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "B" => Ok(Self::Begin),
            "A" => Ok(Self::Append),
            "F" => Ok(Self::Feed),
            _ => {
                if let Some(kind) = token.strip_prefix("E:") {
                    Ok(Self::Emit(kind.to_string()))
                } else if let Some(kind) = token.strip_prefix("R:") {
                    Ok(Self::Raise(kind.to_string()))
                } else {
                    Err(InvalidAction {
                        token: token.to_string(),
                    })
                }
            }
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Begin => f.write_str("B"),
            Self::Append => f.write_str("A"),
            Self::Feed => f.write_str("F"),
            Self::Emit(kind) => write!(f, "E:{kind}"),
            Self::Raise(kind) => write!(f, "R:{kind}"),
        }
    }
}

/// Parse a sequence of action tokens, preserving their order.
///
/// Fails on the first unrecognized token.
pub fn parse_actions<I, T>(tokens: I) -> Result<Vec<Action>, InvalidAction>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| token.as_ref().parse())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_five_forms() {
        assert_eq!("B".parse::<Action>().unwrap(), Action::Begin);
        assert_eq!("A".parse::<Action>().unwrap(), Action::Append);
        assert_eq!("F".parse::<Action>().unwrap(), Action::Feed);
        assert_eq!(
            "E:PLUS".parse::<Action>().unwrap(),
            Action::Emit("PLUS".to_string())
        );
        assert_eq!(
            "R:IllegalChar".parse::<Action>().unwrap(),
            Action::Raise("IllegalChar".to_string())
        );
    }

    #[test]
    fn kind_is_opaque() {
        assert_eq!(
            "E:".parse::<Action>().unwrap(),
            Action::Emit(String::new())
        );
        assert_eq!(
            "E:a:b".parse::<Action>().unwrap(),
            Action::Emit("a:b".to_string())
        );
    }

    #[test]
    fn rejects_unknown_tokens() {
        for token in ["", "b", "X", "E", "EMIT", " B", "R"] {
            let err = token.parse::<Action>().unwrap_err();
            assert_eq!(err.token, token);
        }
    }

    #[test]
    fn sequence_order_is_preserved() {
        let actions = parse_actions(["E:NUM", "F"]).unwrap();
        assert_eq!(actions, vec![Action::Emit("NUM".to_string()), Action::Feed]);
    }

    #[test]
    fn sequence_fails_on_first_bad_token() {
        let err = parse_actions(["B", "Q", "Z"]).unwrap_err();
        assert_eq!(err.token, "Q");
    }

    #[test]
    fn display_round_trips_token() {
        for token in ["B", "A", "F", "E:NUM", "R:Bad"] {
            assert_eq!(token.parse::<Action>().unwrap().to_string(), token);
        }
    }
}
