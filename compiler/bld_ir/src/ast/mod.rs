//! Syntax tree node types.
//!
//! # Design
//! - One [`Node`] variant per construct; the operator or subtype is a
//!   payload enum, never a shared secondary tag.
//! - Children are [`NodeId`]s into the owning arena; ordered child
//!   collections are [`NodeRange`]s into the arena's list storage.
//! - Ownership is tree-shaped: every id stored in a node was allocated
//!   for that node alone.

mod operators;

pub use operators::{ArithOp, AssignOp, JumpKind, LogicalOp, RelOp, UnaryOp};

use crate::{NodeId, NodeRange, TextId};

/// A syntax tree node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Node {
    /// No expression or statement here. A valid value, not an error.
    Empty,

    // ===== Statements =====
    /// Statements in source order.
    Sequence(NodeRange),
    /// `target op value`; the target is always an [`Node::Ident`].
    Assignment {
        op: AssignOp,
        target: NodeId,
        value: NodeId,
    },
    /// `if`/`elif` clauses (each a [`Node::IfClause`]) and optional `else` body.
    If {
        clauses: NodeRange,
        else_body: Option<NodeId>,
    },
    IfClause {
        predicate: NodeId,
        body: NodeId,
    },
    /// `foreach vars : iterable body endforeach`; vars are [`Node::Ident`]s.
    Foreach {
        vars: NodeRange,
        iterable: NodeId,
        body: NodeId,
    },
    Jump(JumpKind),

    // ===== Operators =====
    Unary {
        op: UnaryOp,
        operand: NodeId,
    },
    Logical {
        op: LogicalOp,
        lhs: NodeId,
        rhs: NodeId,
    },
    /// `condition ? then_branch : else_branch`. Shares the `LOGICAL` kind.
    Ternary {
        condition: NodeId,
        then_branch: NodeId,
        else_branch: NodeId,
    },
    Arithmetic {
        op: ArithOp,
        lhs: NodeId,
        rhs: NodeId,
    },
    Relational {
        op: RelOp,
        lhs: NodeId,
        rhs: NodeId,
    },

    // ===== Postfix =====
    /// `object.field`; the field is an [`Node::Ident`].
    Member {
        object: NodeId,
        field: NodeId,
    },
    /// `target[index]`.
    Index {
        target: NodeId,
        index: NodeId,
    },
    /// `callee(args..., kwargs...)`; kwargs are [`Node::KeywordArg`]s.
    Application {
        callee: NodeId,
        args: NodeRange,
        kwargs: NodeRange,
    },
    /// `name: value` inside a call; the name is an [`Node::Ident`].
    KeywordArg {
        name: NodeId,
        value: NodeId,
    },

    // ===== Primaries =====
    Ident(TextId),
    Bool(bool),
    Number(i64),
    Str(TextId),
    Array(NodeRange),
    /// Entries are [`Node::KeyValue`]s.
    Dictionary(NodeRange),
    KeyValue {
        key: NodeId,
        value: NodeId,
    },
}

impl Node {
    /// The node's kind tag.
    pub const fn kind(&self) -> NodeKind {
        match self {
            Node::Empty => NodeKind::Empty,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Assignment { .. } => NodeKind::Assignment,
            Node::If { .. } => NodeKind::If,
            Node::IfClause { .. } => NodeKind::IfClause,
            Node::Foreach { .. } => NodeKind::Foreach,
            Node::Jump(_) => NodeKind::Jump,
            Node::Unary { .. } => NodeKind::Unary,
            Node::Logical { .. } | Node::Ternary { .. } => NodeKind::Logical,
            Node::Arithmetic { .. } => NodeKind::Arithmetic,
            Node::Relational { .. } => NodeKind::Relational,
            Node::Member { .. } => NodeKind::Member,
            Node::Index { .. } => NodeKind::Index,
            Node::Application { .. } => NodeKind::Application,
            Node::KeywordArg { .. } => NodeKind::KeywordArg,
            Node::Ident(_) => NodeKind::Ident,
            Node::Bool(_) => NodeKind::Boolean,
            Node::Number(_) => NodeKind::Number,
            Node::Str(_) => NodeKind::String,
            Node::Array(_) => NodeKind::Array,
            Node::Dictionary(_) => NodeKind::Dictionary,
            Node::KeyValue { .. } => NodeKind::KeyValue,
        }
    }

    #[inline]
    pub const fn is_ident(&self) -> bool {
        matches!(self, Node::Ident(_))
    }
}

/// Kind tag of a [`Node`], used for diagnostics and tree dumps.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    Empty,
    Sequence,
    Assignment,
    If,
    IfClause,
    Foreach,
    Jump,
    Unary,
    Logical,
    Arithmetic,
    Relational,
    Member,
    Index,
    Application,
    KeywordArg,
    Ident,
    Boolean,
    Number,
    String,
    Array,
    Dictionary,
    KeyValue,
}

impl NodeKind {
    /// Every kind, in declaration order.
    pub const ALL: [NodeKind; 22] = [
        NodeKind::Empty,
        NodeKind::Sequence,
        NodeKind::Assignment,
        NodeKind::If,
        NodeKind::IfClause,
        NodeKind::Foreach,
        NodeKind::Jump,
        NodeKind::Unary,
        NodeKind::Logical,
        NodeKind::Arithmetic,
        NodeKind::Relational,
        NodeKind::Member,
        NodeKind::Index,
        NodeKind::Application,
        NodeKind::KeywordArg,
        NodeKind::Ident,
        NodeKind::Boolean,
        NodeKind::Number,
        NodeKind::String,
        NodeKind::Array,
        NodeKind::Dictionary,
        NodeKind::KeyValue,
    ];

    /// Upper-case diagnostic name, e.g. `"IF_CLAUSE"`.
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Empty => "EMPTY",
            NodeKind::Sequence => "SEQUENCE",
            NodeKind::Assignment => "ASSIGNMENT",
            NodeKind::If => "IF",
            NodeKind::IfClause => "IF_CLAUSE",
            NodeKind::Foreach => "FOREACH",
            NodeKind::Jump => "JUMP",
            NodeKind::Unary => "UNARY",
            NodeKind::Logical => "LOGICAL",
            NodeKind::Arithmetic => "ARITHMETIC",
            NodeKind::Relational => "RELATIONAL",
            NodeKind::Member => "MEMBER",
            NodeKind::Index => "INDEX",
            NodeKind::Application => "APPLICATION",
            NodeKind::KeywordArg => "KEYWORD_ARG",
            NodeKind::Ident => "ID",
            NodeKind::Boolean => "BOOLEAN",
            NodeKind::Number => "NUMBER",
            NodeKind::String => "STRING",
            NodeKind::Array => "ARRAY",
            NodeKind::Dictionary => "DICTIONARY",
            NodeKind::KeyValue => "KV",
        }
    }
}

// A node is at most three machine words.
const _: () = assert!(std::mem::size_of::<Node>() <= 24);

#[cfg(test)]
mod tests;
