//! Token cooking layer.
//!
//! Transforms `(RawTag, len)` pairs from the raw scanner into `TokenKind`
//! values plus the lexeme payload the parser reads.
//!
//! # Architecture
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → (TokenKind, lexeme)
//! ```
//!
//! Each `RawTag` category has a dedicated cooking path:
//! - **Operators/delimiters**: direct 1:1 mapping, fixed lexeme
//! - **Identifiers**: keyword lookup gated on the following byte
//! - **Numerics**: radix prefix stripped from the lexeme
//! - **Strings**: quotes stripped from the lexeme
//! - **Errors**: record a `LexError`, return `TokenKind::Error`

use bld_ir::{Span, TokenKind};
use bld_lexer_core::class::is_boundary;
use bld_lexer_core::RawTag;

use crate::keywords;
use crate::lex_error::LexError;

/// Cooks raw tokens into parser-ready kinds and lexemes.
///
/// Stateless with respect to individual tokens; each `cook()` call is
/// independent. Remembers the most recent error.
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    error: Option<LexError>,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            error: None,
        }
    }

    /// The error recorded by the most recent failing `cook()`.
    pub(crate) fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    /// Cook a single raw token.
    ///
    /// `offset` is the byte position of the token in source, `len` its
    /// byte length. Trivia is filtered by the driver loop.
    pub(crate) fn cook(&mut self, tag: RawTag, offset: u32, len: u32) -> (TokenKind, &'src str) {
        let end = offset + len;
        let kind = match tag {
            // Direct-map operators
            RawTag::Plus => TokenKind::Plus,
            RawTag::Minus => TokenKind::Minus,
            RawTag::Star => TokenKind::Star,
            RawTag::Slash => TokenKind::Slash,
            RawTag::Percent => TokenKind::Percent,
            RawTag::Equal => TokenKind::Assign,
            RawTag::Less => TokenKind::Lt,
            RawTag::Greater => TokenKind::Gt,
            RawTag::Dot => TokenKind::Dot,
            RawTag::Question => TokenKind::Question,
            RawTag::Comma => TokenKind::Comma,
            RawTag::Colon => TokenKind::Colon,

            // Compound operators
            RawTag::PlusEqual => TokenKind::PlusEq,
            RawTag::MinusEqual => TokenKind::MinusEq,
            RawTag::StarEqual => TokenKind::StarEq,
            RawTag::SlashEqual => TokenKind::SlashEq,
            RawTag::PercentEqual => TokenKind::PercentEq,
            RawTag::EqualEqual => TokenKind::EqEq,
            RawTag::BangEqual => TokenKind::NotEq,
            RawTag::LessEqual => TokenKind::LtEq,
            RawTag::GreaterEqual => TokenKind::GtEq,

            // Delimiters
            RawTag::LeftParen => TokenKind::LParen,
            RawTag::RightParen => TokenKind::RParen,
            RawTag::LeftBrace => TokenKind::LBrace,
            RawTag::RightBrace => TokenKind::RBrace,
            RawTag::LeftBracket => TokenKind::LBracket,
            RawTag::RightBracket => TokenKind::RBracket,

            // Identifiers
            RawTag::Ident => return (self.cook_ident(offset, end), self.slice(offset, end)),

            // Numeric literals: decimal keeps its text, radix forms drop `0?`
            RawTag::DecInt => return (TokenKind::DecNumber, self.slice(offset, end)),
            RawTag::BinInt => return (TokenKind::BinNumber, self.slice(offset + 2, end)),
            RawTag::OctInt => return (TokenKind::OctNumber, self.slice(offset + 2, end)),
            RawTag::HexInt => return (TokenKind::HexNumber, self.slice(offset + 2, end)),

            // Strings: content between the quotes
            RawTag::String => return (TokenKind::String, self.slice(offset + 1, end - 1)),
            RawTag::TripleString => {
                return (TokenKind::TripleString, self.slice(offset + 3, end - 3));
            }

            // Error tags
            RawTag::InvalidByte => {
                let found = self.slice(offset, end).chars().next().unwrap_or('\0');
                self.fail(LexError::invalid_character(Span::new(offset, end), found))
            }
            RawTag::UnterminatedString => {
                self.fail(LexError::unterminated_string(Span::new(offset, end)))
            }
            RawTag::UnterminatedTripleString => {
                self.fail(LexError::unterminated_triple_string(Span::new(offset, end)))
            }
            RawTag::MalformedNumber => {
                self.fail(LexError::malformed_number(Span::new(offset, end)))
            }
            RawTag::LoneBang => self.fail(LexError::lone_bang(Span::new(offset, end))),

            RawTag::Eof => TokenKind::End,

            // Trivia (should not reach cook; handled by driver)
            RawTag::Whitespace | RawTag::LineComment => {
                debug_assert!(
                    false,
                    "trivia should be skipped by the driver loop, not cooked"
                );
                TokenKind::Error
            }
        };
        let lexeme = tag.lexeme().unwrap_or_else(|| self.slice(offset, end));
        (kind, lexeme)
    }

    #[cold]
    fn fail(&mut self, error: LexError) -> TokenKind {
        self.error = Some(error);
        TokenKind::Error
    }

    /// A word is a keyword only when it is followed by a boundary, so
    /// `if'x'` is the identifier `if` followed by a string.
    #[inline]
    fn cook_ident(&self, offset: u32, end: u32) -> TokenKind {
        let text = self.slice(offset, end);
        match keywords::lookup(text) {
            Some(kw) if is_boundary(self.source.as_bytes().get(end as usize).copied()) => kw,
            _ => TokenKind::Ident,
        }
    }

    /// Source text in `start..end`. Token boundaries always fall on char
    /// boundaries; anything else yields an empty lexeme.
    #[inline]
    fn slice(&self, start: u32, end: u32) -> &'src str {
        self.source
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }
}
