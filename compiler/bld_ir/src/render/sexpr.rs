//! S-expression tree dump.
//!
//! ```text
//! foreach x : xs break endforeach
//! (seq (foreach ids:((id x)) (id xs) (seq (break))))
//! ```

use std::fmt::{self, Write};

use bld_stack::ensure_sufficient_stack;

use crate::ast::{Node, RelOp, UnaryOp};
use crate::{NodeArena, NodeId, NodeRange};

/// `Display` adapter printing a subtree as an s-expression.
#[derive(Copy, Clone)]
pub struct SexprDisplay<'a> {
    arena: &'a NodeArena,
    root: NodeId,
}

impl<'a> SexprDisplay<'a> {
    pub fn new(arena: &'a NodeArena, root: NodeId) -> Self {
        SexprDisplay { arena, root }
    }
}

impl fmt::Display for SexprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        SexprWriter {
            arena: self.arena,
            out: f,
        }
        .node(self.root)
    }
}

struct SexprWriter<'a, W> {
    arena: &'a NodeArena,
    out: W,
}

impl<W: Write> SexprWriter<'_, W> {
    fn node(&mut self, id: NodeId) -> fmt::Result {
        ensure_sufficient_stack(|| {
            self.out.write_char('(')?;
            self.body(*self.arena.get(id))?;
            self.out.write_char(')')
        })
    }

    /// Space-prefixed children.
    fn each(&mut self, range: NodeRange) -> fmt::Result {
        let arena = self.arena;
        for &child in arena.list(range) {
            self.out.write_char(' ')?;
            self.node(child)?;
        }
        Ok(())
    }

    /// `label:(a b c)`, omitted entirely when the range is empty.
    fn labeled(&mut self, label: &str, range: NodeRange) -> fmt::Result {
        let arena = self.arena;
        let items = arena.list(range);
        if items.is_empty() {
            return Ok(());
        }
        write!(self.out, " {label}:(")?;
        for (i, &item) in items.iter().enumerate() {
            if i > 0 {
                self.out.write_char(' ')?;
            }
            self.node(item)?;
        }
        self.out.write_char(')')
    }

    fn operands(&mut self, label: &str, operands: &[NodeId]) -> fmt::Result {
        self.out.write_str(label)?;
        for &operand in operands {
            self.out.write_char(' ')?;
            self.node(operand)?;
        }
        Ok(())
    }

    fn body(&mut self, node: Node) -> fmt::Result {
        match node {
            Node::Empty => self.out.write_str("empty"),
            Node::Sequence(stmts) => {
                self.out.write_str("seq")?;
                self.each(stmts)
            }
            Node::Assignment { op, target, value } => {
                let symbol = op.as_symbol();
                let suffix = &symbol[..symbol.len() - 1];
                self.operands(&format!("assign{suffix}"), &[target, value])
            }
            Node::If { clauses, else_body } => {
                self.out.write_str("cond")?;
                self.each(clauses)?;
                if let Some(alt) = else_body {
                    self.out.write_str(" (else ")?;
                    self.node(alt)?;
                    self.out.write_char(')')?;
                }
                Ok(())
            }
            // Printed inside `cond` as a bare pair.
            Node::IfClause { predicate, body } => {
                self.node(predicate)?;
                self.out.write_char(' ')?;
                self.node(body)
            }
            Node::Foreach {
                vars,
                iterable,
                body,
            } => {
                self.out.write_str("foreach")?;
                self.labeled("ids", vars)?;
                self.operands("", &[iterable, body])
            }
            Node::Jump(kind) => self.out.write_str(kind.as_keyword()),
            Node::Unary { op, operand } => {
                let name = match op {
                    UnaryOp::Not => "not",
                    UnaryOp::Plus => "plus",
                    UnaryOp::Minus => "minus",
                };
                self.operands(&format!("unary {name}"), &[operand])
            }
            Node::Logical { op, lhs, rhs } => self.operands(op.as_symbol(), &[lhs, rhs]),
            Node::Ternary {
                condition,
                then_branch,
                else_branch,
            } => self.operands("ternary", &[condition, then_branch, else_branch]),
            Node::Arithmetic { op, lhs, rhs } => self.operands(op.as_symbol(), &[lhs, rhs]),
            Node::Relational { op, lhs, rhs } => {
                let label = match op {
                    RelOp::NotIn => "notin",
                    _ => op.as_symbol(),
                };
                self.operands(label, &[lhs, rhs])
            }
            Node::Member { object, field } => self.operands("member", &[object, field]),
            Node::Index { target, index } => self.operands("index", &[target, index]),
            Node::Application {
                callee,
                args,
                kwargs,
            } => {
                self.operands("app", &[callee])?;
                self.labeled("args", args)?;
                self.labeled("kw-args", kwargs)
            }
            Node::KeywordArg { name: a, value: b } | Node::KeyValue { key: a, value: b } => {
                self.node(a)?;
                self.out.write_char(' ')?;
                self.node(b)
            }
            Node::Ident(name) => write!(self.out, "id {}", self.arena.text(name)),
            Node::Bool(value) => write!(self.out, "bool {value}"),
            Node::Number(value) => write!(self.out, "num {value}"),
            Node::Str(text) => write!(self.out, "str `{}`", self.arena.text(text)),
            Node::Array(items) => {
                self.out.write_str("array")?;
                self.each(items)
            }
            Node::Dictionary(entries) => {
                self.out.write_str("dict")?;
                self.each(entries)
            }
        }
    }
}
