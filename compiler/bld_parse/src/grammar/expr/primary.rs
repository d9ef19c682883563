//! Primary Expression Parsing
//!
//! Parenthesized expressions, identifiers and literals: booleans, numbers
//! in four radices, both string forms, arrays and dictionaries.

use bld_ir::{Node, NodeId, TokenKind};
use bld_lexer::Token;
use tracing::trace;

use crate::{ParseError, ParseResult, Parser};

impl Parser<'_> {
    pub(super) fn parse_primary(&mut self) -> ParseResult {
        let token = self.cursor.current();
        trace!(
            kind = ?token.kind,
            span_start = token.span.start,
            span_end = token.span.end,
            "parse_primary"
        );

        match token.kind {
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self
                    .parse_expr()?
                    .ok_or_else(|| ParseError::syntax("invalid expression"))?;
                if !self.cursor.accept(TokenKind::RParen) {
                    return Err(ParseError::syntax("expected closing paren"));
                }
                Ok(Some(inner))
            }
            TokenKind::Ident => self.parse_ident(),
            _ => self.parse_literal(),
        }
    }

    /// An identifier node if the current token is an identifier.
    pub(crate) fn parse_ident(&mut self) -> ParseResult {
        let token = self.cursor.current();
        if token.kind != TokenKind::Ident {
            return Ok(None);
        }
        self.cursor.advance();
        let name = self.arena.alloc_text(token.lexeme)?;
        Ok(Some(self.alloc(Node::Ident(name))?))
    }

    fn parse_literal(&mut self) -> ParseResult {
        let token = self.cursor.current();
        let node = match token.kind {
            TokenKind::True | TokenKind::False => Node::Bool(token.kind == TokenKind::True),
            TokenKind::BinNumber
            | TokenKind::OctNumber
            | TokenKind::DecNumber
            | TokenKind::HexNumber => Node::Number(number_value(token)?),
            TokenKind::String | TokenKind::TripleString => {
                Node::Str(self.arena.alloc_text(token.lexeme)?)
            }
            TokenKind::LBracket => return self.parse_array().map(Some),
            TokenKind::LBrace => return self.parse_dictionary().map(Some),
            _ => return Ok(None),
        };
        self.cursor.advance();
        Ok(Some(self.alloc(node)?))
    }

    /// `[ expr, ... ]`, trailing comma allowed.
    fn parse_array(&mut self) -> ParseResult<NodeId> {
        self.cursor.advance();
        let mut items = Vec::new();

        if !self.cursor.accept(TokenKind::RBracket) {
            loop {
                let item = self
                    .parse_expr()?
                    .ok_or_else(|| ParseError::expected("array", "expression"))?;
                items.push(item);
                if !self.list_continues(TokenKind::RBracket) {
                    break;
                }
            }
            if !self.cursor.accept(TokenKind::RBracket) {
                return Err(ParseError::expected("array", "closing bracket"));
            }
        }

        let items = self.arena.alloc_list(items)?;
        self.alloc(Node::Array(items))
    }

    /// `{ key : value, ... }`, trailing comma allowed.
    fn parse_dictionary(&mut self) -> ParseResult<NodeId> {
        self.cursor.advance();
        let mut entries = Vec::new();

        if !self.cursor.accept(TokenKind::RBrace) {
            loop {
                let key = self
                    .parse_expr()?
                    .ok_or_else(|| ParseError::expected("dictionary", "key"))?;
                if !self.cursor.accept(TokenKind::Colon) {
                    return Err(ParseError::expected("dictionary", "colon"));
                }
                let value = self
                    .parse_expr()?
                    .ok_or_else(|| ParseError::expected("dictionary", "value"))?;
                entries.push(self.alloc(Node::KeyValue { key, value })?);
                if !self.list_continues(TokenKind::RBrace) {
                    break;
                }
            }
            if !self.cursor.accept(TokenKind::RBrace) {
                return Err(ParseError::expected("dictionary", "closing brace"));
            }
        }

        let entries = self.arena.alloc_list(entries)?;
        self.alloc(Node::Dictionary(entries))
    }
}

/// Value of a number token. The lexer has already checked the digits, so
/// the only failure left is overflow.
fn number_value(token: Token<'_>) -> ParseResult<i64> {
    let radix = token.kind.radix().unwrap_or(10);
    i64::from_str_radix(token.lexeme, radix)
        .map_err(|_| ParseError::syntax("number: integer constant out of range"))
}
