//! Lexer for the bld build language.
//!
//! Two layers:
//! - `bld_lexer_core::RawScanner` splits the source into `(RawTag, len)`
//!   pairs, trivia included.
//! - [`TokenCooker`](cooker) resolves keywords, extracts lexeme payloads
//!   and records a [`LexError`] for malformed input.
//!
//! [`Lexer`] drives both on demand: the parser pulls one token at a time
//! and never looks further ahead than the current token.

mod cooker;
mod keywords;
mod lex_error;

use bld_ir::{Span, TokenKind};
use bld_lexer_core::{RawScanner, SourceBuffer};

use cooker::TokenCooker;

pub use lex_error::{LexError, LexErrorKind};

/// One cooked token.
///
/// `lexeme` borrows from the source. For numbers with a radix marker it
/// holds only the digits, for strings only the text between the quotes;
/// `span` always covers the full token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub span: Span,
}

impl Token<'_> {
    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}

/// Pull-based lexer over one source text.
///
/// After the first [`TokenKind::Error`] the lexer is poisoned: every later
/// `next_token()` returns that same error token.
pub struct Lexer<'src> {
    buffer: SourceBuffer,
    cooker: TokenCooker<'src>,
    /// Byte offset where the next raw scan starts.
    pos: u32,
    poisoned: Option<Token<'src>>,
    /// Iterator state: set once the final token has been yielded.
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            buffer: SourceBuffer::new(source),
            cooker: TokenCooker::new(source),
            pos: 0,
            poisoned: None,
            finished: false,
        }
    }

    /// Produce the next token, skipping whitespace, `\` and comments.
    ///
    /// Returns [`TokenKind::End`] at end of input, repeatedly.
    pub fn next_token(&mut self) -> Token<'src> {
        if let Some(token) = self.poisoned {
            return token;
        }

        let mut scanner = RawScanner::new(self.buffer.cursor_at(self.pos));
        let (raw, offset) = loop {
            let offset = scanner.pos();
            let raw = scanner.next_token();
            if !raw.tag.is_trivia() {
                break (raw, offset);
            }
        };
        self.pos = scanner.pos();

        let (kind, lexeme) = self.cooker.cook(raw.tag, offset, raw.len);
        let token = Token {
            kind,
            lexeme,
            span: Span::new(offset, offset + raw.len),
        };
        if kind == TokenKind::Error {
            self.poisoned = Some(token);
        }
        token
    }

    /// Detail for the error token, once one has been produced.
    pub fn last_error(&self) -> Option<&LexError> {
        self.cooker.error()
    }
}

/// Yields every token up to, not including, [`TokenKind::End`]. An error
/// token is yielded once and ends the iteration.
impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        match token.kind {
            TokenKind::End => {
                self.finished = true;
                None
            }
            TokenKind::Error => {
                self.finished = true;
                Some(token)
            }
            _ => Some(token),
        }
    }
}

/// Lex a whole source text, stopping after `End` or the first error.
///
/// The returned list always ends in an `End` or `Error` token.
pub fn lex(source: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        tokens.push(token);
        if token.is_end() || token.is_error() {
            return tokens;
        }
    }
}

#[cfg(test)]
mod tests;
