//! Token cursor for the parser.
//!
//! Wraps a [`Lexer`] with a one-token peek buffer: the current token has
//! been lexed but not consumed. The grammar inspects it with `check` and
//! consumes it with `accept` or `advance`; nothing looks further ahead.

use bld_ir::TokenKind;
use bld_lexer::{Lexer, Token};
use tracing::trace;

pub(crate) struct Cursor<'src> {
    lexer: Lexer<'src>,
    current: Token<'src>,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Cursor { lexer, current }
    }

    /// The token under the cursor, not yet consumed.
    #[inline]
    pub(crate) fn current(&self) -> Token<'src> {
        self.current
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consume the current token and return it.
    ///
    /// At end of input (or after a lexer error) the lexer keeps producing
    /// the same token, so advancing there is harmless.
    pub(crate) fn advance(&mut self) -> Token<'src> {
        let token = self.current;
        trace!(
            kind = ?token.kind,
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        self.current = self.lexer.next_token();
        token
    }

    /// Consume the current token if it is `kind`.
    #[inline]
    pub(crate) fn accept(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}
