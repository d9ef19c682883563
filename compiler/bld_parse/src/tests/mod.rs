//! Parser tests.
//!
//! - `parser`: trees built for valid input, by construct
//! - `errors`: the diagnostic for each kind of invalid input
//! - `properties`: round trips, tree ownership, node limits, deep nesting


use crate::parse;
use pretty_assertions::assert_eq;

/// Parse `source` as a single statement and compare its tree.
#[track_caller]
fn should_pass(source: &str, expected: &str) {
    seq_pass(source, &format!("(seq {expected})"));
}

/// Parse `source` and compare the whole program tree.
#[track_caller]
fn seq_pass(source: &str, expected: &str) {
    match parse(source) {
        Ok(ast) => assert_eq!(ast.to_sexpr(), expected, "source: {source:?}"),
        Err(err) => panic!("{source:?} failed to parse: {err}"),
    }
}

#[track_caller]
fn should_fail(source: &str, message: &str) {
    match parse(source) {
        Ok(ast) => panic!("{source:?} parsed to {ast}, expected error {message:?}"),
        Err(err) => assert_eq!(err.to_string(), message, "source: {source:?}"),
    }
}
