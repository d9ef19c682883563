#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::{AssignOp, JumpKind, NodeRange};
use pretty_assertions::assert_eq;

/// `a += 1` followed by `break`, built by hand.
fn sample() -> Ast {
    let mut arena = NodeArena::new();
    let name = arena.alloc_text("a").unwrap();
    let target = arena.alloc(Node::Ident(name)).unwrap();
    let value = arena.alloc(Node::Number(1)).unwrap();
    let assign = arena
        .alloc(Node::Assignment {
            op: AssignOp::AddAssign,
            target,
            value,
        })
        .unwrap();
    let jump = arena.alloc(Node::Jump(JumpKind::Break)).unwrap();
    let stmts = arena.alloc_list([assign, jump]).unwrap();
    let root = arena.alloc(Node::Sequence(stmts)).unwrap();
    Ast::new(arena, root)
}

#[test]
fn test_accessors() {
    let ast = sample();
    assert_eq!(*ast.root_node(), Node::Sequence(NodeRange::new(0, 2)));
    let Node::Sequence(stmts) = *ast.root_node() else {
        panic!("root is not a sequence");
    };
    let first = ast.arena().list(stmts)[0];
    let Node::Assignment { target, .. } = *ast.node(first) else {
        panic!("first statement is not an assignment");
    };
    let Node::Ident(name) = *ast.node(target) else {
        panic!("target is not an identifier");
    };
    assert_eq!(ast.text(name), "a");
}

#[test]
fn test_sexpr() {
    let ast = sample();
    assert_eq!(ast.to_sexpr(), "(seq (assign+ (id a) (num 1)) (break))");
    assert_eq!(ast.to_string(), ast.to_sexpr());
}

#[test]
fn test_source() {
    assert_eq!(sample().to_source().as_deref(), Some("a += 1\nbreak"));
}

#[test]
fn test_reachable_count_matches_arena() {
    let ast = sample();
    // ident, number, assignment, jump, sequence
    assert_eq!(ast.reachable_count(), 5);
    assert_eq!(ast.reachable_count(), ast.arena().len());
}

#[test]
fn test_orphans_are_not_reachable() {
    let mut arena = NodeArena::new();
    arena.alloc(Node::Number(7)).unwrap();
    let root = arena.alloc(Node::Empty).unwrap();
    let ast = Ast::new(arena, root);
    assert_eq!(ast.reachable_count(), 1);
    assert_eq!(ast.arena().len(), 2);
    assert_eq!(ast.to_sexpr(), "(empty)");
    assert_eq!(ast.to_source().as_deref(), Some(""));
}

#[test]
fn test_equal_trees_compare_equal() {
    assert_eq!(sample(), sample());
}
