//! Render a tree back to build-language source.
//!
//! Parentheses are inserted only where a child binds looser than its
//! position allows, so parsing the output yields the same tree.
//!
//! Some trees have no spelling and yield `None`:
//! - a string whose content fits neither quoting form;
//! - an identifier spelled like a reserved word (the lexer only produces
//!   one when the word is glued to a following `'`, `#` or `\`);
//! - a statement that would glue onto the expression before it
//!   (`a` followed by `-1`, `(b)`, `[c]` or `not d`), since newlines
//!   do not separate statements;
//! - an empty operand (`* b`) or a negative number.

use bld_stack::ensure_sufficient_stack;

use crate::ast::{LogicalOp, Node, UnaryOp};
use crate::{NodeArena, NodeId, NodeRange};

const INDENT: &str = "  ";

const RESERVED: [&str; 14] = [
    "and",
    "break",
    "continue",
    "elif",
    "else",
    "endforeach",
    "endif",
    "false",
    "foreach",
    "if",
    "in",
    "not",
    "or",
    "true",
];

/// Binding strength of an expression node, loosest first.
fn precedence(node: &Node) -> u8 {
    match node {
        Node::Assignment { .. } => 1,
        Node::Ternary { .. } => 2,
        Node::Logical {
            op: LogicalOp::Or, ..
        } => 3,
        Node::Logical {
            op: LogicalOp::And, ..
        } => 4,
        Node::Relational { op, .. } if op.is_equality() => 5,
        Node::Relational { .. } => 6,
        Node::Arithmetic { op, .. } if !op.is_multiplicative() => 7,
        Node::Arithmetic { .. } => 8,
        Node::Unary { .. } => 9,
        _ => 10,
    }
}

/// Statements are separated only by whitespace, so a statement opening
/// with one of these would be read as a continuation of a preceding
/// expression.
fn continues_expression(text: &str) -> bool {
    matches!(text.as_bytes().first(), Some(b'(' | b'[' | b'+' | b'-')) || text.starts_with("not ")
}

pub(crate) fn render(arena: &NodeArena, root: NodeId) -> Option<String> {
    let mut writer = SourceWriter {
        arena,
        out: String::new(),
        depth: 0,
    };
    writer.block(root, false)?;
    Some(writer.out)
}

struct SourceWriter<'a> {
    arena: &'a NodeArena,
    out: String,
    depth: usize,
}

impl SourceWriter<'_> {
    fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn new_line(&mut self) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    // ─── Statements ──────────────────────────────────────────────────

    /// One line per statement. `after_expr` is set when the text already
    /// written ends in an expression the first statement could extend.
    fn block(&mut self, body: NodeId, mut after_expr: bool) -> Option<()> {
        let arena = self.arena;
        let stmts = match arena.get(body) {
            Node::Empty => &[][..],
            Node::Sequence(range) => arena.list(*range),
            _ => std::slice::from_ref(&body),
        };
        for &stmt in stmts {
            self.new_line();
            let start = self.out.len();
            self.statement(stmt)?;
            if after_expr && continues_expression(&self.out[start..]) {
                return None;
            }
            after_expr = !matches!(
                arena.get(stmt),
                Node::If { .. } | Node::Foreach { .. } | Node::Jump(_)
            );
        }
        Some(())
    }

    fn nested(&mut self, body: NodeId, after_expr: bool) -> Option<()> {
        self.depth += 1;
        let result = self.block(body, after_expr);
        self.depth -= 1;
        result
    }

    fn statement(&mut self, id: NodeId) -> Option<()> {
        ensure_sufficient_stack(|| match *self.arena.get(id) {
            Node::If { clauses, else_body } => self.if_statement(clauses, else_body),
            Node::Foreach {
                vars,
                iterable,
                body,
            } => {
                self.push("foreach ");
                let arena = self.arena;
                for (i, &var) in arena.list(vars).iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    self.ident(var)?;
                }
                self.push(" : ");
                self.expr(iterable, 1)?;
                self.nested(body, true)?;
                self.new_line();
                self.push("endforeach");
                Some(())
            }
            Node::Jump(kind) => {
                self.push(kind.as_keyword());
                Some(())
            }
            Node::Empty
            | Node::Sequence(_)
            | Node::IfClause { .. }
            | Node::KeywordArg { .. }
            | Node::KeyValue { .. } => None,
            _ => self.expr(id, 1),
        })
    }

    fn if_statement(&mut self, clauses: NodeRange, else_body: Option<NodeId>) -> Option<()> {
        let arena = self.arena;
        let clauses = arena.list(clauses);
        if clauses.is_empty() {
            return None;
        }
        for (i, &clause) in clauses.iter().enumerate() {
            let Node::IfClause { predicate, body } = *arena.get(clause) else {
                return None;
            };
            if i > 0 {
                self.new_line();
                self.push("elif ");
            } else {
                self.push("if ");
            }
            self.expr(predicate, 1)?;
            self.nested(body, true)?;
        }
        if let Some(alt) = else_body {
            self.new_line();
            self.push("else");
            self.nested(alt, false)?;
        }
        self.new_line();
        self.push("endif");
        Some(())
    }

    // ─── Expressions ─────────────────────────────────────────────────

    /// Render `id`, parenthesized if it binds looser than `min_prec`.
    fn expr(&mut self, id: NodeId, min_prec: u8) -> Option<()> {
        ensure_sufficient_stack(|| {
            let node = *self.arena.get(id);
            let wrap = precedence(&node) < min_prec;
            if wrap {
                self.push("(");
            }
            self.expr_inner(id, node)?;
            if wrap {
                self.push(")");
            }
            Some(())
        })
    }

    fn binary(&mut self, lhs: NodeId, symbol: &str, rhs: NodeId, min: (u8, u8)) -> Option<()> {
        self.expr(lhs, min.0)?;
        self.push(" ");
        self.push(symbol);
        self.push(" ");
        self.expr(rhs, min.1)
    }

    fn expr_inner(&mut self, id: NodeId, node: Node) -> Option<()> {
        let prec = precedence(&node);
        match node {
            Node::Assignment { op, target, value } => {
                self.ident(target)?;
                self.push(" ");
                self.push(op.as_symbol());
                self.push(" ");
                self.expr(value, 1)
            }
            Node::Ternary {
                condition,
                then_branch,
                else_branch,
            } => {
                self.expr(condition, 3)?;
                self.push(" ? ");
                self.expr(then_branch, 1)?;
                self.push(" : ");
                self.expr(else_branch, 1)
            }
            // Left-associative chains.
            Node::Logical { op, lhs, rhs } => self.binary(lhs, op.as_symbol(), rhs, (prec, prec + 1)),
            Node::Arithmetic { op, lhs, rhs } => {
                self.binary(lhs, op.as_symbol(), rhs, (prec, prec + 1))
            }
            // Comparisons do not chain.
            Node::Relational { op, lhs, rhs } => {
                self.binary(lhs, op.as_symbol(), rhs, (prec + 1, prec + 1))
            }
            Node::Unary { op, operand } => {
                self.push(op.as_symbol());
                if op == UnaryOp::Not {
                    self.push(" ");
                }
                self.expr(operand, 10)
            }
            Node::Ident(_)
            | Node::Member { .. }
            | Node::Index { .. }
            | Node::Application { .. } => self.postfix(id),
            Node::Bool(value) => {
                self.push(if value { "true" } else { "false" });
                Some(())
            }
            Node::Number(value) => {
                // A leading `-` would read back as a unary minus.
                if value < 0 {
                    return None;
                }
                self.push(&value.to_string());
                Some(())
            }
            Node::Str(text) => {
                let arena = self.arena;
                self.string(arena.text(text))
            }
            Node::Array(items) => {
                self.push("[");
                self.list(items, |writer, item| writer.expr(item, 1))?;
                self.push("]");
                Some(())
            }
            Node::Dictionary(entries) => {
                self.push("{");
                self.list(entries, |writer, entry| {
                    let Node::KeyValue { key, value } = *writer.arena.get(entry) else {
                        return None;
                    };
                    writer.expr(key, 1)?;
                    writer.push(": ");
                    writer.expr(value, 1)
                })?;
                self.push("}");
                Some(())
            }
            Node::Empty
            | Node::Sequence(_)
            | Node::If { .. }
            | Node::IfClause { .. }
            | Node::Foreach { .. }
            | Node::Jump(_)
            | Node::KeywordArg { .. }
            | Node::KeyValue { .. } => None,
        }
    }

    /// Postfix operators apply only to identifier-rooted chains.
    fn postfix(&mut self, id: NodeId) -> Option<()> {
        ensure_sufficient_stack(|| match *self.arena.get(id) {
            Node::Ident(_) => self.ident(id),
            Node::Member { object, field } => {
                self.postfix(object)?;
                self.push(".");
                self.ident(field)
            }
            Node::Index { target, index } => {
                self.postfix(target)?;
                self.push("[");
                self.expr(index, 1)?;
                self.push("]");
                Some(())
            }
            Node::Application {
                callee,
                args,
                kwargs,
            } => {
                self.postfix(callee)?;
                self.push("(");
                self.list(args, |writer, arg| writer.expr(arg, 1))?;
                if !args.is_empty() && !kwargs.is_empty() {
                    self.push(", ");
                }
                self.list(kwargs, |writer, kwarg| {
                    let Node::KeywordArg { name, value } = *writer.arena.get(kwarg) else {
                        return None;
                    };
                    writer.ident(name)?;
                    writer.push(": ");
                    writer.expr(value, 1)
                })?;
                self.push(")");
                Some(())
            }
            _ => None,
        })
    }

    /// Comma-separated items.
    fn list(
        &mut self,
        range: NodeRange,
        mut item: impl FnMut(&mut Self, NodeId) -> Option<()>,
    ) -> Option<()> {
        let arena = self.arena;
        for (i, &id) in arena.list(range).iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            item(self, id)?;
        }
        Some(())
    }

    fn ident(&mut self, id: NodeId) -> Option<()> {
        let arena = self.arena;
        let Node::Ident(name) = *arena.get(id) else {
            return None;
        };
        let name = arena.text(name);
        if RESERVED.contains(&name) {
            return None;
        }
        self.push(name);
        Some(())
    }

    /// `'...'` when possible, else `'''...'''`. There are no escapes, so
    /// content containing `'''` or ending in `'` has no spelling.
    fn string(&mut self, text: &str) -> Option<()> {
        if !text.contains('\'') {
            self.push("'");
            self.push(text);
            self.push("'");
        } else if !text.contains("'''") && !text.ends_with('\'') {
            self.push("'''");
            self.push(text);
            self.push("'''");
        } else {
            return None;
        }
        Some(())
    }
}

#[cfg(test)]
mod tests;
