//! Operator Matching Helpers
//!
//! Map the current token to an operator without consuming it.

use bld_ir::{ArithOp, AssignOp, RelOp, TokenKind, UnaryOp};

use crate::Parser;

impl Parser<'_> {
    pub(super) fn match_assign_op(&self) -> Option<AssignOp> {
        match self.cursor.current_kind() {
            TokenKind::Assign => Some(AssignOp::Assign),
            TokenKind::PlusEq => Some(AssignOp::AddAssign),
            TokenKind::MinusEq => Some(AssignOp::SubAssign),
            TokenKind::StarEq => Some(AssignOp::MulAssign),
            TokenKind::SlashEq => Some(AssignOp::DivAssign),
            TokenKind::PercentEq => Some(AssignOp::ModAssign),
            _ => None,
        }
    }

    pub(super) fn match_equality_op(&self) -> Option<RelOp> {
        match self.cursor.current_kind() {
            TokenKind::EqEq => Some(RelOp::Eq),
            TokenKind::NotEq => Some(RelOp::Ne),
            _ => None,
        }
    }

    /// `not` maps to [`RelOp::NotIn`]; the caller must then see `in`.
    pub(super) fn match_relational_op(&self) -> Option<RelOp> {
        match self.cursor.current_kind() {
            TokenKind::Lt => Some(RelOp::Lt),
            TokenKind::LtEq => Some(RelOp::Le),
            TokenKind::Gt => Some(RelOp::Gt),
            TokenKind::GtEq => Some(RelOp::Ge),
            TokenKind::In => Some(RelOp::In),
            TokenKind::Not => Some(RelOp::NotIn),
            _ => None,
        }
    }

    pub(super) fn match_additive_op(&self) -> Option<ArithOp> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(ArithOp::Add),
            TokenKind::Minus => Some(ArithOp::Sub),
            _ => None,
        }
    }

    pub(super) fn match_multiplicative_op(&self) -> Option<ArithOp> {
        match self.cursor.current_kind() {
            TokenKind::Star => Some(ArithOp::Mul),
            TokenKind::Slash => Some(ArithOp::Div),
            TokenKind::Percent => Some(ArithOp::Mod),
            _ => None,
        }
    }

    pub(super) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Not => Some(UnaryOp::Not),
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Minus => Some(UnaryOp::Minus),
            _ => None,
        }
    }
}
