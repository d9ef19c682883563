use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_ternary_shares_logical_kind() {
    let id = NodeId::new(0);
    let ternary = Node::Ternary {
        condition: id,
        then_branch: id,
        else_branch: id,
    };
    let and = Node::Logical {
        op: LogicalOp::And,
        lhs: id,
        rhs: id,
    };
    assert_eq!(ternary.kind(), NodeKind::Logical);
    assert_eq!(and.kind(), NodeKind::Logical);
}

#[test]
fn test_kind_of_primaries() {
    assert_eq!(Node::Ident(TextId::new(0)).kind(), NodeKind::Ident);
    assert_eq!(Node::Str(TextId::new(0)).kind(), NodeKind::String);
    assert_eq!(Node::Bool(true).kind(), NodeKind::Boolean);
    assert_eq!(Node::Number(-1).kind(), NodeKind::Number);
    assert_eq!(Node::Array(NodeRange::EMPTY).kind(), NodeKind::Array);
    assert_eq!(Node::Dictionary(NodeRange::EMPTY).kind(), NodeKind::Dictionary);
    assert_eq!(Node::Jump(JumpKind::Continue).kind(), NodeKind::Jump);
}

#[test]
fn test_predicates() {
    assert!(Node::Ident(TextId::new(3)).is_ident());
    assert!(!Node::Str(TextId::new(3)).is_ident());
}

#[test]
fn test_kind_names() {
    assert_eq!(NodeKind::IfClause.name(), "IF_CLAUSE");
    assert_eq!(NodeKind::Ident.name(), "ID");
    assert_eq!(NodeKind::KeyValue.name(), "KV");
    assert_eq!(NodeKind::KeywordArg.name(), "KEYWORD_ARG");
    assert_eq!(NodeKind::Empty.name(), "EMPTY");
}

#[test]
fn test_kind_names_are_unique() {
    let mut names: Vec<&str> = NodeKind::ALL.iter().map(|k| k.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), NodeKind::ALL.len());
}

#[test]
fn test_operator_symbols() {
    assert_eq!(AssignOp::ModAssign.as_symbol(), "%=");
    assert_eq!(RelOp::NotIn.as_symbol(), "not in");
    assert_eq!(UnaryOp::Not.as_symbol(), "not");
    assert_eq!(JumpKind::Break.as_keyword(), "break");
    assert!(ArithOp::Mod.is_multiplicative());
    assert!(!ArithOp::Sub.is_multiplicative());
    assert!(RelOp::Ne.is_equality());
    assert!(!RelOp::In.is_equality());
}
