//! Lexer error types for the cooking layer.
//!
//! Errors carry two parts:
//! - WHERE: `span` locating the offending text
//! - WHAT: `kind` describing what went wrong
//!
//! The parser does not surface these directly (a lexer error reaches the
//! grammar as a plain [`TokenKind::Error`](bld_ir::TokenKind::Error)); they
//! are kept for callers that want a precise lexical diagnostic.

use bld_ir::Span;

/// A lexer error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// `'` without a closing `'`.
    #[error("unterminated string")]
    UnterminatedString,
    /// `'''` without a closing `'''`.
    #[error("unterminated triple-quoted string")]
    UnterminatedTripleString,
    /// Radix prefix without digits, or a number glued to a word (`0x`, `12ab`).
    #[error("malformed number")]
    MalformedNumber,
    /// `!` not followed by `=`.
    #[error("unexpected `!`")]
    LoneBang,
    /// A character that starts no token.
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
}

impl LexError {
    /// Create an unterminated string error.
    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    /// Create an unterminated triple-quoted string error.
    #[cold]
    pub fn unterminated_triple_string(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedTripleString,
        }
    }

    /// Create a malformed number error.
    #[cold]
    pub fn malformed_number(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::MalformedNumber,
        }
    }

    /// Create a lone `!` error.
    #[cold]
    pub fn lone_bang(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::LoneBang,
        }
    }

    /// Create an invalid character error.
    #[cold]
    pub fn invalid_character(span: Span, found: char) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidCharacter(found),
        }
    }

    /// An actionable hint for fixing the error, if one applies.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self.kind {
            LexErrorKind::UnterminatedString => Some("add a closing `'`"),
            LexErrorKind::UnterminatedTripleString => Some("add a closing `'''`"),
            LexErrorKind::MalformedNumber => {
                Some("separate the number from the following word with a space")
            }
            LexErrorKind::LoneBang => Some("use `not` for negation or `!=` for inequality"),
            LexErrorKind::InvalidCharacter('"') => Some("strings use single quotes"),
            LexErrorKind::InvalidCharacter(';') => Some("statements need no terminator"),
            LexErrorKind::InvalidCharacter(_) => None,
        }
    }
}
