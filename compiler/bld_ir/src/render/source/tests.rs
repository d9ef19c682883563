#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::ast::{ArithOp, AssignOp, JumpKind, RelOp, UnaryOp};
use crate::Ast;
use pretty_assertions::assert_eq;

/// Small tree builder; every helper allocates one node.
struct Build {
    arena: NodeArena,
}

impl Build {
    fn new() -> Self {
        Build {
            arena: NodeArena::new(),
        }
    }

    fn node(&mut self, node: Node) -> NodeId {
        self.arena.alloc(node).unwrap()
    }

    fn list(&mut self, ids: &[NodeId]) -> NodeRange {
        self.arena.alloc_list(ids.iter().copied()).unwrap()
    }

    fn id(&mut self, name: &str) -> NodeId {
        let text = self.arena.alloc_text(name).unwrap();
        self.node(Node::Ident(text))
    }

    fn num(&mut self, value: i64) -> NodeId {
        self.node(Node::Number(value))
    }

    fn string(&mut self, text: &str) -> NodeId {
        let text = self.arena.alloc_text(text).unwrap();
        self.node(Node::Str(text))
    }

    fn arith(&mut self, op: ArithOp, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.node(Node::Arithmetic { op, lhs, rhs })
    }

    fn seq(&mut self, stmts: &[NodeId]) -> NodeId {
        let range = self.list(stmts);
        self.node(Node::Sequence(range))
    }

    fn source(mut self, stmts: &[NodeId]) -> Option<String> {
        let root = self.seq(stmts);
        Ast::new(self.arena, root).to_source()
    }
}

#[test]
fn left_assoc_needs_parens_only_on_the_right() {
    let mut b = Build::new();
    let (x, y, z) = (b.id("x"), b.id("y"), b.id("z"));
    let left = b.arith(ArithOp::Sub, x, y);
    let left_nested = b.arith(ArithOp::Sub, left, z);
    let (p, q, r) = (b.id("p"), b.id("q"), b.id("r"));
    let right = b.arith(ArithOp::Sub, q, r);
    let right_nested = b.arith(ArithOp::Sub, p, right);
    assert_eq!(
        b.source(&[left_nested, right_nested]).as_deref(),
        Some("x - y - z\np - (q - r)")
    );
}

#[test]
fn lower_precedence_child_is_wrapped() {
    let mut b = Build::new();
    let (a, c, d) = (b.id("a"), b.id("c"), b.id("d"));
    let sum = b.arith(ArithOp::Add, a, c);
    let product = b.arith(ArithOp::Mul, sum, d);
    assert_eq!(b.source(&[product]).as_deref(), Some("(a + c) * d"));
}

#[test]
fn comparisons_do_not_chain() {
    let mut b = Build::new();
    let (a, c, d) = (b.id("a"), b.id("c"), b.id("d"));
    let inner = b.node(Node::Relational {
        op: RelOp::Lt,
        lhs: a,
        rhs: c,
    });
    let outer = b.node(Node::Relational {
        op: RelOp::NotIn,
        lhs: inner,
        rhs: d,
    });
    assert_eq!(b.source(&[outer]).as_deref(), Some("(a < c) not in d"));
}

#[test]
fn nested_unary_is_wrapped() {
    let mut b = Build::new();
    let one = b.num(1);
    let inner = b.node(Node::Unary {
        op: UnaryOp::Minus,
        operand: one,
    });
    let outer = b.node(Node::Unary {
        op: UnaryOp::Not,
        operand: inner,
    });
    assert_eq!(b.source(&[outer]).as_deref(), Some("not (-1)"));
}

#[test]
fn assignment_inside_expression_is_wrapped() {
    let mut b = Build::new();
    let (a, one) = (b.id("a"), b.num(1));
    let assign = b.node(Node::Assignment {
        op: AssignOp::Assign,
        target: a,
        value: one,
    });
    let items = b.list(&[assign]);
    let array = b.node(Node::Array(items));
    let (t, two) = (b.id("t"), b.num(2));
    let sum = b.arith(ArithOp::Add, t, two);
    let (cond, other) = (b.id("c"), b.id("o"));
    let ternary = b.node(Node::Ternary {
        condition: cond,
        then_branch: array,
        else_branch: other,
    });
    let (sum_target, ternary_target) = (b.id("x"), b.id("y"));
    let first = b.node(Node::Assignment {
        op: AssignOp::AddAssign,
        target: sum_target,
        value: sum,
    });
    let second = b.node(Node::Assignment {
        op: AssignOp::Assign,
        target: ternary_target,
        value: ternary,
    });
    assert_eq!(
        b.source(&[first, second]).as_deref(),
        Some("x += t + 2\ny = c ? [a = 1] : o")
    );
}

#[test]
fn postfix_chain_and_call_arguments() {
    let mut b = Build::new();
    let (o, f) = (b.id("o"), b.id("f"));
    let member = b.node(Node::Member {
        object: o,
        field: f,
    });
    let (x, k, v) = (b.id("x"), b.id("k"), b.string("v"));
    let kwarg = b.node(Node::KeywordArg { name: k, value: v });
    let args = b.list(&[x]);
    let kwargs = b.list(&[kwarg]);
    let call = b.node(Node::Application {
        callee: member,
        args,
        kwargs,
    });
    let zero = b.num(0);
    let index = b.node(Node::Index {
        target: call,
        index: zero,
    });
    assert_eq!(b.source(&[index]).as_deref(), Some("o.f(x, k: 'v')[0]"));
}

#[test]
fn postfix_on_non_identifier_has_no_spelling() {
    let mut b = Build::new();
    let (one, zero) = (b.num(1), b.num(0));
    let index = b.node(Node::Index {
        target: one,
        index: zero,
    });
    assert_eq!(b.source(&[index]), None);
}

#[test]
fn dictionary_entries() {
    let mut b = Build::new();
    let (key, value) = (b.string("a"), b.num(1));
    let kv = b.node(Node::KeyValue { key, value });
    let entries = b.list(&[kv]);
    let dict = b.node(Node::Dictionary(entries));
    let empty_entries = b.list(&[]);
    let empty = b.node(Node::Dictionary(empty_entries));
    let (lhs, rhs) = (b.id("d"), b.id("e"));
    let assign_d = b.node(Node::Assignment {
        op: AssignOp::Assign,
        target: lhs,
        value: dict,
    });
    let assign_e = b.node(Node::Assignment {
        op: AssignOp::Assign,
        target: rhs,
        value: empty,
    });
    assert_eq!(
        b.source(&[assign_d, assign_e]).as_deref(),
        Some("d = {'a': 1}\ne = {}")
    );
}

#[test]
fn string_quoting() {
    for (text, expected) in [
        ("plain", Some("'plain'")),
        ("", Some("''")),
        ("it's", Some("'''it's'''")),
        ("'lead", Some("''''lead'''")),
        ("trail'", None),
        ("a'''b", None),
    ] {
        let mut b = Build::new();
        let s = b.string(text);
        assert_eq!(b.source(&[s]).as_deref(), expected, "{text:?}");
    }
}

#[test]
fn negative_number_has_no_spelling() {
    let mut b = Build::new();
    let n = b.num(-3);
    assert_eq!(b.source(&[n]), None);
}

#[test]
fn statement_that_would_merge_is_rejected() {
    let mut b = Build::new();
    let a = b.id("a");
    let one = b.num(1);
    let neg = b.node(Node::Unary {
        op: UnaryOp::Minus,
        operand: one,
    });
    assert_eq!(b.source(&[a, neg]), None);
}

#[test]
fn statement_after_keyword_may_start_with_operator() {
    let mut b = Build::new();
    let brk = b.node(Node::Jump(JumpKind::Break));
    let one = b.num(1);
    let neg = b.node(Node::Unary {
        op: UnaryOp::Minus,
        operand: one,
    });
    assert_eq!(b.source(&[brk, neg]).as_deref(), Some("break\n-1"));
}

#[test]
fn if_layout() {
    let mut b = Build::new();
    let (p, q) = (b.id("p"), b.id("q"));
    let one = b.num(1);
    let body1 = b.seq(&[one]);
    let body2 = b.node(Node::Empty);
    let c1 = b.node(Node::IfClause {
        predicate: p,
        body: body1,
    });
    let c2 = b.node(Node::IfClause {
        predicate: q,
        body: body2,
    });
    let clauses = b.list(&[c1, c2]);
    let brk = b.node(Node::Jump(JumpKind::Continue));
    let alt = b.seq(&[brk]);
    let stmt = b.node(Node::If {
        clauses,
        else_body: Some(alt),
    });
    assert_eq!(
        b.source(&[stmt]).as_deref(),
        Some("if p\n  1\nelif q\nelse\n  continue\nendif")
    );
}

#[test]
fn body_that_would_merge_with_predicate_is_rejected() {
    let mut b = Build::new();
    let p = b.id("p");
    let inner = b.id("x");
    let items = b.list(&[inner]);
    let array = b.node(Node::Array(items));
    let body = b.seq(&[array]);
    let clause = b.node(Node::IfClause { predicate: p, body });
    let clauses = b.list(&[clause]);
    let stmt = b.node(Node::If {
        clauses,
        else_body: None,
    });
    assert_eq!(b.source(&[stmt]), None);
}

#[test]
fn foreach_layout() {
    let mut b = Build::new();
    let (x, y, xs) = (b.id("x"), b.id("y"), b.id("xs"));
    let vars = b.list(&[x, y]);
    let brk = b.node(Node::Jump(JumpKind::Break));
    let body = b.seq(&[brk]);
    let stmt = b.node(Node::Foreach {
        vars,
        iterable: xs,
        body,
    });
    assert_eq!(
        b.source(&[stmt]).as_deref(),
        Some("foreach x, y : xs\n  break\nendforeach")
    );
}

#[test]
fn reserved_word_identifier_has_no_spelling() {
    let mut b = Build::new();
    let (kw, x) = (b.id("if"), b.string("x"));
    assert_eq!(b.source(&[kw, x]), None);

    let mut b = Build::new();
    let iffy = b.id("iffy");
    assert_eq!(b.source(&[iffy]).as_deref(), Some("iffy"));
}
