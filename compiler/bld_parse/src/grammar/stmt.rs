//! Statement parsing.
//!
//! A program is a sequence of statements with no separators; a statement
//! ends where the expression grammar stops. `if` and `foreach` bodies are
//! themselves sequences, closed by their `end` keyword.

use bld_ir::{JumpKind, Node, NodeId, TokenKind};
use bld_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, ParseResult, Parser};

impl Parser<'_> {
    /// Parse statements until one comes back empty.
    ///
    /// Returns a [`Node::Empty`] node, not an empty sequence, when there
    /// are no statements at all.
    pub(crate) fn parse_sequence(&mut self) -> ParseResult<NodeId> {
        let Some(first) = self.parse_statement()? else {
            return self.alloc(Node::Empty);
        };

        let mut stmts = vec![first];
        while let Some(stmt) = self.parse_statement()? {
            stmts.push(stmt);
        }

        let stmts = self.arena.alloc_list(stmts)?;
        self.alloc(Node::Sequence(stmts))
    }

    fn parse_statement(&mut self) -> ParseResult {
        ensure_sufficient_stack(|| {
            let kind = self.cursor.current_kind();
            trace!(kind = ?kind, "parse_statement");

            match kind {
                TokenKind::End => Ok(None),
                TokenKind::If => self.parse_if().map(Some),
                TokenKind::Foreach => self.parse_foreach().map(Some),
                TokenKind::Break => self.parse_jump(JumpKind::Break).map(Some),
                TokenKind::Continue => self.parse_jump(JumpKind::Continue).map(Some),
                _ => self.parse_expr(),
            }
        })
    }

    fn parse_jump(&mut self, kind: JumpKind) -> ParseResult<NodeId> {
        self.cursor.advance();
        self.alloc(Node::Jump(kind))
    }

    /// `if pred body (elif pred body)* (else body)? endif`
    fn parse_if(&mut self) -> ParseResult<NodeId> {
        self.cursor.advance();
        let mut clauses = Vec::new();

        loop {
            let predicate = self
                .parse_expr()?
                .ok_or_else(|| ParseError::expected("if", "predicate"))?;
            let body = self.parse_sequence()?;
            clauses.push(self.alloc(Node::IfClause { predicate, body })?);
            if !self.cursor.accept(TokenKind::Elif) {
                break;
            }
        }

        let else_body = if self.cursor.accept(TokenKind::Else) {
            Some(self.parse_sequence()?)
        } else {
            None
        };

        if !self.cursor.accept(TokenKind::EndIf) {
            return Err(ParseError::expected("if", "endif"));
        }

        let clauses = self.arena.alloc_list(clauses)?;
        self.alloc(Node::If { clauses, else_body })
    }

    /// `foreach id (, id)* : iterable body endforeach`
    fn parse_foreach(&mut self) -> ParseResult<NodeId> {
        self.cursor.advance();
        let mut vars = Vec::new();

        loop {
            let var = self
                .parse_ident()?
                .ok_or_else(|| ParseError::expected("foreach", "identifier"))?;
            vars.push(var);
            if !self.cursor.accept(TokenKind::Comma) {
                break;
            }
        }

        if !self.cursor.accept(TokenKind::Colon) {
            return Err(ParseError::expected("foreach", "colon"));
        }
        let iterable = self
            .parse_expr()?
            .ok_or_else(|| ParseError::expected("foreach", "expression"))?;
        let body = self.parse_sequence()?;

        if !self.cursor.accept(TokenKind::EndForeach) {
            return Err(ParseError::expected("foreach", "endforeach"));
        }

        let vars = self.arena.alloc_list(vars)?;
        self.alloc(Node::Foreach {
            vars,
            iterable,
            body,
        })
    }
}
