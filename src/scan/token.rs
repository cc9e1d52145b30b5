//! Tokens produced by a scan.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Byte offsets `[start, end)` of a token's text in the scanned input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

/// One output record: the author's tag, the buffered text and its span.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: String,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// `(kind, text)` pair, handy for comparing token streams.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.kind, &self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}) @ {}..{}",
            self.kind, self.text, self.span.start, self.span.end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_range_slices_input() {
        let input = "ab+cd";
        let span = Span::new(2, 3);
        assert_eq!(&input[span.range()], "+");
        assert_eq!(span.len(), 1);
        assert!(!span.is_empty());
        assert!(Span::new(4, 4).is_empty());
    }

    #[test]
    fn token_display() {
        let token = Token {
            kind: "NUM".to_string(),
            text: "42".to_string(),
            span: Span::new(0, 2),
        };
        assert_eq!(token.to_string(), "NUM(\"42\") @ 0..2");
        assert_eq!(token.as_pair(), ("NUM", "42"));
    }

    #[test]
    fn token_serializes_correctly() {
        let token = Token {
            kind: "PLUS".to_string(),
            text: "+".to_string(),
            span: Span::new(1, 2),
        };
        let json = serde_json::to_string(&token).unwrap();
        let deserialized: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(token, deserialized);
    }
}
