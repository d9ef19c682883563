//! Expression parsing.
//!
//! Precedence, loosest first:
//!
//! ```text
//! assignment  = += -= *= /= %=     (once, target must be an identifier)
//! conditional ? :                  (once)
//! or, and                          (left-associative)
//! equality    == !=                (once)
//! relational  < <= > >= in not-in  (once)
//! additive    + -                  (left-associative)
//! multiplicative * / %             (left-associative)
//! unary       not + -              (one prefix)
//! postfix     . () []              (identifier-rooted only)
//! primary     ( ), identifiers, literals
//! ```
//!
//! # Module Structure
//!
//! - `mod.rs`: entry point (`parse_expr`) and the binary operator chain
//! - `operators.rs`: operator matching helpers
//! - `postfix.rs`: member access, calls, subscripts
//! - `primary.rs`: parentheses, identifiers, literals, arrays, dictionaries

mod operators;
mod postfix;
mod primary;

use bld_ir::{LogicalOp, Node, RelOp, TokenKind};
use bld_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseResult, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input cannot
    /// overflow the native stack.
    pub(crate) fn parse_expr(&mut self) -> ParseResult {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    fn parse_assignment(&mut self) -> ParseResult {
        let lhs = self.parse_conditional()?;
        let Some(op) = self.match_assign_op() else {
            return Ok(lhs);
        };
        self.cursor.advance();

        // The target is checked before the value is parsed.
        let target = match lhs {
            Some(id) if self.is_ident(id) => id,
            _ => return Err(ParseError::syntax("assignment target must be an id")),
        };
        let value = self
            .parse_expr()?
            .ok_or_else(|| ParseError::expected("assignment", "expression"))?;
        Ok(Some(self.alloc(Node::Assignment { op, target, value })?))
    }

    fn parse_conditional(&mut self) -> ParseResult {
        let condition = self.parse_logical_or()?;
        if !self.cursor.accept(TokenKind::Question) {
            return Ok(condition);
        }
        let condition = self.or_empty(condition)?;

        let then_branch = self
            .parse_expr()?
            .ok_or_else(|| ParseError::expected("ternary", "true clause"))?;
        if !self.cursor.accept(TokenKind::Colon) {
            return Err(ParseError::expected("ternary", "colon"));
        }
        let else_branch = self
            .parse_expr()?
            .ok_or_else(|| ParseError::expected("ternary", "false clause"))?;

        Ok(Some(self.alloc(Node::Ternary {
            condition,
            then_branch,
            else_branch,
        })?))
    }

    /// Parse `or` (loosest binary operator).
    fn parse_logical_or(&mut self) -> ParseResult {
        let mut lhs = self.parse_logical_and()?;

        while self.cursor.accept(TokenKind::Or) {
            let left = self.or_empty(lhs)?;
            let right = self
                .parse_logical_and()?
                .ok_or_else(|| ParseError::expected("logical or", "expression"))?;
            lhs = Some(self.alloc(Node::Logical {
                op: LogicalOp::Or,
                lhs: left,
                rhs: right,
            })?);
        }

        Ok(lhs)
    }

    /// Parse `and`.
    fn parse_logical_and(&mut self) -> ParseResult {
        let mut lhs = self.parse_equality()?;

        while self.cursor.accept(TokenKind::And) {
            let left = self.or_empty(lhs)?;
            let right = self
                .parse_equality()?
                .ok_or_else(|| ParseError::expected("logical and", "expression"))?;
            lhs = Some(self.alloc(Node::Logical {
                op: LogicalOp::And,
                lhs: left,
                rhs: right,
            })?);
        }

        Ok(lhs)
    }

    /// Parse `==` / `!=`. Does not chain: `a == b == c` stops after `b`.
    fn parse_equality(&mut self) -> ParseResult {
        let lhs = self.parse_relational()?;
        let Some(op) = self.match_equality_op() else {
            return Ok(lhs);
        };
        self.cursor.advance();

        let lhs = self.or_empty(lhs)?;
        let rhs = self
            .parse_relational()?
            .ok_or_else(|| ParseError::expected("equality", "expression"))?;
        Ok(Some(self.alloc(Node::Relational { op, lhs, rhs })?))
    }

    /// Parse `<`, `<=`, `>`, `>=`, `in` and `not in`. Does not chain.
    fn parse_relational(&mut self) -> ParseResult {
        let lhs = self.parse_additive()?;
        let Some(op) = self.match_relational_op() else {
            return Ok(lhs);
        };
        self.cursor.advance();
        if op == RelOp::NotIn && !self.cursor.accept(TokenKind::In) {
            return Err(ParseError::syntax("expected `in' after `not'"));
        }

        let lhs = self.or_empty(lhs)?;
        let rhs = self
            .parse_additive()?
            .ok_or_else(|| ParseError::expected("relational", "expression"))?;
        Ok(Some(self.alloc(Node::Relational { op, lhs, rhs })?))
    }

    /// Parse `+` / `-`.
    fn parse_additive(&mut self) -> ParseResult {
        let mut lhs = self.parse_multiplicative()?;

        while let Some(op) = self.match_additive_op() {
            self.cursor.advance();
            let left = self.or_empty(lhs)?;
            let right = self
                .parse_multiplicative()?
                .ok_or_else(|| ParseError::expected("additive", "expression"))?;
            lhs = Some(self.alloc(Node::Arithmetic {
                op,
                lhs: left,
                rhs: right,
            })?);
        }

        Ok(lhs)
    }

    /// Parse `*`, `/` and `%`.
    fn parse_multiplicative(&mut self) -> ParseResult {
        let mut lhs = self.parse_unary()?;

        while let Some(op) = self.match_multiplicative_op() {
            self.cursor.advance();
            let left = self.or_empty(lhs)?;
            let right = self
                .parse_unary()?
                .ok_or_else(|| ParseError::expected("multiplicative", "expression"))?;
            lhs = Some(self.alloc(Node::Arithmetic {
                op,
                lhs: left,
                rhs: right,
            })?);
        }

        Ok(lhs)
    }

    /// Parse at most one prefix operator followed by a postfix expression.
    fn parse_unary(&mut self) -> ParseResult {
        let op = self.match_unary_op();
        if op.is_some() {
            self.cursor.advance();
        }

        match (op, self.parse_postfix()?) {
            (None, operand) => Ok(operand),
            (Some(_), None) => Err(ParseError::expected("unary", "expression")),
            (Some(op), Some(operand)) => Ok(Some(self.alloc(Node::Unary { op, operand })?)),
        }
    }

    /// After an element of a bracketed list: consume a `,` and report
    /// whether another element follows. A `,` directly before `close` is a
    /// trailing comma.
    fn list_continues(&mut self, close: TokenKind) -> bool {
        self.cursor.accept(TokenKind::Comma) && !self.cursor.check(close)
    }
}
