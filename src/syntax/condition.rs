//! Parser for the compact condition notation.

use crate::core::Condition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-facing condition notation, before validation.
///
/// - `Text`: `"else"`, a single character, a range such as `"a-z"`, or a
///   negation such as `"!x"` / `"!0-9"`.
/// - `AnyOf`: an ordered list of two or more texts, any of which may match.
/// - `NoneOf`: a group of two or more characters or ranges, none of which
///   may match.
///
/// Plain strings convert to `Text`, arrays and vectors to `AnyOf`, and
/// tuples to `NoneOf`:
///
/// ```rust
/// use lexspec::syntax::ConditionSyntax;
///
/// assert!(matches!(ConditionSyntax::from("0-9"), ConditionSyntax::Text(_)));
/// assert!(matches!(ConditionSyntax::from([" ", "\t"]), ConditionSyntax::AnyOf(_)));
/// assert!(matches!(ConditionSyntax::from(("a-z", "_")), ConditionSyntax::NoneOf(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionSyntax {
    Text(String),
    AnyOf(Vec<String>),
    NoneOf(Vec<String>),
}

impl ConditionSyntax {
    /// Build the "none of" grouping from any list of texts.
    pub fn none_of<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::NoneOf(items.into_iter().map(Into::into).collect())
    }

    /// Build the "any of" grouping from any list of texts.
    pub fn any_of<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::AnyOf(items.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for ConditionSyntax {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ConditionSyntax {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<char> for ConditionSyntax {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

impl From<Vec<&str>> for ConditionSyntax {
    fn from(items: Vec<&str>) -> Self {
        Self::any_of(items)
    }
}

impl From<Vec<String>> for ConditionSyntax {
    fn from(items: Vec<String>) -> Self {
        Self::AnyOf(items)
    }
}

impl From<&[&str]> for ConditionSyntax {
    fn from(items: &[&str]) -> Self {
        Self::any_of(items.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for ConditionSyntax {
    fn from(items: [&str; N]) -> Self {
        Self::any_of(items)
    }
}

macro_rules! none_of_tuple {
    ($($name:ident),+) => {
        impl From<($(none_of_tuple!(@str $name),)+)> for ConditionSyntax {
            fn from(($($name,)+): ($(none_of_tuple!(@str $name),)+)) -> Self {
                Self::NoneOf(vec![$($name.to_string()),+])
            }
        }
    };
    (@str $name:ident) => { &str };
}

none_of_tuple!(a, b);
none_of_tuple!(a, b, c);
none_of_tuple!(a, b, c, d);
none_of_tuple!(a, b, c, d, e);
none_of_tuple!(a, b, c, d, e, f);

impl fmt::Display for ConditionSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text:?}"),
            Self::AnyOf(items) => write!(f, "{items:?}"),
            Self::NoneOf(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// The condition notation was not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("The condition {syntax} is invalid: {reason}")]
pub struct InvalidCondition {
    /// The offending value, rendered in surface notation.
    pub syntax: String,
    pub reason: &'static str,
}

impl InvalidCondition {
    fn new(syntax: &ConditionSyntax, reason: &'static str) -> Self {
        Self {
            syntax: syntax.to_string(),
            reason,
        }
    }

    fn malformed(condition: &Condition, reason: &'static str) -> Self {
        Self {
            syntax: condition.to_string(),
            reason,
        }
    }
}

/// Translate surface notation into a [`Condition`].
///
/// ```rust
/// use lexspec::core::Condition;
/// use lexspec::syntax::parse_condition;
///
/// assert_eq!(parse_condition("0-9").unwrap(), Condition::Range('0', '9'));
/// assert_eq!(
///     parse_condition("!x").unwrap(),
///     Condition::Not(Box::new(Condition::Char('x')))
/// );
/// assert_eq!(parse_condition("else").unwrap(), Condition::Else);
/// assert!(parse_condition("abc").is_err());
/// ```
pub fn parse_condition(syntax: impl Into<ConditionSyntax>) -> Result<Condition, InvalidCondition> {
    let syntax = syntax.into();
    let (items, allow_negation) = match &syntax {
        ConditionSyntax::Text(text) if text == "else" => return Ok(Condition::Else),
        ConditionSyntax::Text(text) => {
            return parse_text(text, true).ok_or_else(|| {
                InvalidCondition::new(
                    &syntax,
                    "expected \"else\", a character, a range or a negation",
                )
            });
        }
        ConditionSyntax::AnyOf(items) => (items, true),
        ConditionSyntax::NoneOf(items) => (items, false),
    };

    if items.len() < 2 {
        return Err(InvalidCondition::new(
            &syntax,
            "a grouping needs at least two elements",
        ));
    }
    let parsed = items
        .iter()
        .map(|item| parse_text(item, allow_negation))
        .collect::<Option<Vec<_>>>();

    match (parsed, allow_negation) {
        (Some(subs), true) => Ok(Condition::Or(subs)),
        (Some(subs), false) => Ok(Condition::Neither(subs)),
        (None, true) => Err(InvalidCondition::new(
            &syntax,
            "list elements must be characters, ranges or negations",
        )),
        (None, false) => Err(InvalidCondition::new(
            &syntax,
            "group elements must be characters or ranges",
        )),
    }
}

/// Check that an already-built [`Condition`] has a shape the notation can
/// express.
///
/// Conditions that skip [`parse_condition`], such as prebuilt transitions or
/// deserialized models, go through this before they are stored.
///
/// ```rust
/// use lexspec::core::Condition;
/// use lexspec::syntax::check_condition;
///
/// assert!(check_condition(&Condition::Range('a', 'z')).is_ok());
/// assert!(check_condition(&Condition::Or(vec![])).is_err());
/// ```
pub fn check_condition(condition: &Condition) -> Result<(), InvalidCondition> {
    let well_formed = match condition {
        Condition::Char(_) | Condition::Range(..) | Condition::Else => true,
        Condition::Not(inner) => is_atom(inner),
        Condition::Or(subs) => subs.len() >= 2 && subs.iter().all(is_list_element),
        Condition::Neither(subs) => subs.len() >= 2 && subs.iter().all(is_atom),
    };
    if well_formed {
        return Ok(());
    }
    let reason = match condition {
        Condition::Not(_) => "only a character or a range can be negated",
        Condition::Or(subs) | Condition::Neither(subs) if subs.len() < 2 => {
            "a grouping needs at least two elements"
        }
        Condition::Or(_) => "list elements must be characters, ranges or negations",
        _ => "group elements must be characters or ranges",
    };
    Err(InvalidCondition::malformed(condition, reason))
}

fn is_atom(condition: &Condition) -> bool {
    matches!(condition, Condition::Char(_) | Condition::Range(..))
}

fn is_list_element(condition: &Condition) -> bool {
    match condition {
        Condition::Not(inner) => is_atom(inner),
        other => is_atom(other),
    }
}

/// Single character, range, or (when allowed) a negation of either.
fn parse_text(text: &str, allow_negation: bool) -> Option<Condition> {
    if let Some(atom) = parse_atom(text) {
        return Some(atom);
    }
    if !allow_negation {
        return None;
    }
    text.strip_prefix('!')
        .filter(|rest| !rest.is_empty())
        .and_then(parse_atom)
        .map(|inner| Condition::Not(Box::new(inner)))
}

fn parse_atom(text: &str) -> Option<Condition> {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(c), None, _, _) => Some(Condition::Char(c)),
        (Some(lo), Some('-'), Some(hi), None) => Some(Condition::Range(lo, hi)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_else() {
        assert_eq!(parse_condition("else").unwrap(), Condition::Else);
    }

    #[test]
    fn parses_single_character() {
        assert_eq!(parse_condition("+").unwrap(), Condition::Char('+'));
        assert_eq!(parse_condition("-").unwrap(), Condition::Char('-'));
        assert_eq!(parse_condition("!").unwrap(), Condition::Char('!'));
        assert_eq!(parse_condition('é').unwrap(), Condition::Char('é'));
    }

    #[test]
    fn parses_range() {
        assert_eq!(parse_condition("0-9").unwrap(), Condition::Range('0', '9'));
        assert_eq!(parse_condition("a-z").unwrap(), Condition::Range('a', 'z'));
        assert_eq!(parse_condition("α-ω").unwrap(), Condition::Range('α', 'ω'));
    }

    #[test]
    fn backwards_range_is_accepted() {
        assert_eq!(parse_condition("9-0").unwrap(), Condition::Range('9', '0'));
    }

    #[test]
    fn parses_negation() {
        assert_eq!(
            parse_condition("!x").unwrap(),
            Condition::Not(Box::new(Condition::Char('x')))
        );
        assert_eq!(
            parse_condition("!0-9").unwrap(),
            Condition::Not(Box::new(Condition::Range('0', '9')))
        );
        assert_eq!(
            parse_condition("!!").unwrap(),
            Condition::Not(Box::new(Condition::Char('!')))
        );
    }

    #[test]
    fn rejects_unrecognized_text() {
        for text in ["", "ab", "a-", "a+z", "!ab", "!else", "Else", "a-zz"] {
            let err = parse_condition(text).unwrap_err();
            assert_eq!(err.syntax, format!("{text:?}"));
        }
    }

    #[test]
    fn parses_any_of_list() {
        let cond = parse_condition(["a", "0-9", "!z"]).unwrap();
        assert_eq!(
            cond,
            Condition::Or(vec![
                Condition::Char('a'),
                Condition::Range('0', '9'),
                Condition::Not(Box::new(Condition::Char('z'))),
            ])
        );
    }

    #[test]
    fn any_of_list_matches_members() {
        let cond = parse_condition(vec!["a", "0-9"]).unwrap();
        assert!(cond.matches_char('a'));
        assert!(cond.matches_char('5'));
        assert!(!cond.matches_char('-'));
    }

    #[test]
    fn any_of_rejects_else_and_short_lists() {
        assert!(parse_condition(["else", "a"]).is_err());
        assert!(parse_condition(["a"]).is_err());
        assert!(parse_condition(Vec::<String>::new()).is_err());
    }

    #[test]
    fn one_bad_element_fails_the_list() {
        let err = parse_condition(["a", "bad", "c"]).unwrap_err();
        assert_eq!(err.syntax, r#"["a", "bad", "c"]"#);
    }

    #[test]
    fn parses_none_of_group() {
        let cond = parse_condition((" ", "0-9")).unwrap();
        assert_eq!(
            cond,
            Condition::Neither(vec![Condition::Char(' '), Condition::Range('0', '9')])
        );
        assert!(cond.matches_char('x'));
        assert!(!cond.matches_char('3'));
    }

    #[test]
    fn none_of_rejects_negation_and_short_groups() {
        assert!(parse_condition(("!a", "b")).is_err());
        assert!(parse_condition(ConditionSyntax::none_of(["a"])).is_err());
    }

    #[test]
    fn parsed_conditions_are_well_formed() {
        let parsed = [
            parse_condition("else").unwrap(),
            parse_condition("!0-9").unwrap(),
            parse_condition(["a", "!b", "0-9"]).unwrap(),
            parse_condition(("a", "0-9")).unwrap(),
        ];
        for condition in &parsed {
            assert_eq!(check_condition(condition), Ok(()));
        }
    }

    #[test]
    fn check_rejects_shapes_the_notation_cannot_express() {
        let malformed = [
            Condition::Or(vec![]),
            Condition::Neither(vec![Condition::Char('a')]),
            Condition::Or(vec![
                Condition::Char('a'),
                Condition::Or(vec![Condition::Char('b'), Condition::Char('c')]),
            ]),
            Condition::Neither(vec![
                Condition::Char('a'),
                Condition::Not(Box::new(Condition::Char('b'))),
            ]),
            Condition::Or(vec![Condition::Char('a'), Condition::Else]),
            Condition::Not(Box::new(Condition::Else)),
        ];
        for condition in &malformed {
            let err = check_condition(condition).unwrap_err();
            assert_eq!(err.syntax, condition.to_string());
        }
    }

    #[test]
    fn check_reports_short_groupings() {
        let err = check_condition(&Condition::Or(vec![])).unwrap_err();
        assert_eq!(err.reason, "a grouping needs at least two elements");
    }

    #[test]
    fn error_renders_group_notation() {
        let err = parse_condition(("a", "xyz")).unwrap_err();
        assert_eq!(err.syntax, r#"("a", "xyz")"#);
    }
}
