//! Postfix Expression Parsing
//!
//! Member access, calls and subscripts. These only apply when the primary
//! expression is an identifier: `a.b(c)[d]` is a chain, `'s'.f` is not.

use bld_ir::{Node, NodeId, TokenKind};

use crate::{ParseError, ParseResult, Parser};

impl Parser<'_> {
    pub(super) fn parse_postfix(&mut self) -> ParseResult {
        let Some(mut expr) = self.parse_primary()? else {
            return Ok(None);
        };
        if !self.is_ident(expr) {
            return Ok(Some(expr));
        }

        loop {
            expr = match self.cursor.current_kind() {
                TokenKind::Dot => self.parse_member(expr)?,
                TokenKind::LParen => self.parse_application(expr)?,
                TokenKind::LBracket => self.parse_subscript(expr)?,
                _ => return Ok(Some(expr)),
            };
        }
    }

    /// `object . field`. The field goes through the primary production, so
    /// `o.(f)` names field `f` while `o.1` is rejected.
    fn parse_member(&mut self, object: NodeId) -> ParseResult<NodeId> {
        self.cursor.advance();
        let field = self
            .parse_primary()?
            .ok_or_else(|| ParseError::syntax("expected field name"))?;
        if !self.is_ident(field) {
            return Err(ParseError::syntax("field name must be plain id"));
        }
        self.alloc(Node::Member { object, field })
    }

    /// `target [ index ]`.
    fn parse_subscript(&mut self, target: NodeId) -> ParseResult<NodeId> {
        self.cursor.advance();
        let index = self
            .parse_expr()?
            .ok_or_else(|| ParseError::expected("subscript", "expression"))?;
        if !self.cursor.accept(TokenKind::RBracket) {
            return Err(ParseError::expected("subscript", "closing bracket"));
        }
        self.alloc(Node::Index { target, index })
    }

    /// `callee ( args )`.
    ///
    /// Positional arguments come first. An argument followed by `:` is a
    /// keyword argument; once one is seen, every later argument must be one.
    fn parse_application(&mut self, callee: NodeId) -> ParseResult<NodeId> {
        self.cursor.advance();
        let mut args = Vec::new();
        let mut kwargs = Vec::new();

        if !self.cursor.accept(TokenKind::RParen) {
            loop {
                let arg = self
                    .parse_expr()?
                    .ok_or_else(|| ParseError::expected("application", "argument"))?;

                if self.cursor.accept(TokenKind::Colon) {
                    if !self.is_ident(arg) {
                        return Err(ParseError::expected("application", "kwarg name"));
                    }
                    let value = self
                        .parse_expr()?
                        .ok_or_else(|| ParseError::expected("application", "kwarg value"))?;
                    kwargs.push(self.alloc(Node::KeywordArg { name: arg, value })?);
                } else if kwargs.is_empty() {
                    args.push(arg);
                } else {
                    return Err(ParseError::expected("application", "keyword"));
                }

                if !self.list_continues(TokenKind::RParen) {
                    break;
                }
            }

            if !self.cursor.accept(TokenKind::RParen) {
                return Err(ParseError::expected("application", "closing paren"));
            }
        }

        let args = self.arena.alloc_list(args)?;
        let kwargs = self.arena.alloc_list(kwargs)?;
        self.alloc(Node::Application {
            callee,
            args,
            kwargs,
        })
    }
}
