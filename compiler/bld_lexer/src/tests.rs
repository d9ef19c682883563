#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

fn lexemes(source: &str) -> Vec<&str> {
    lex(source).into_iter().map(|t| t.lexeme).collect()
}

// === Trivia ===

#[test]
fn empty_and_trivia_only_sources() {
    for source in ["", "   ", "\n\t\r\x0b\x0c", "# comment", "\\", " \\\n # a\n# b"] {
        assert_eq!(kinds(source), vec![TokenKind::End], "{source:?}");
    }
}

#[test]
fn backslash_is_skipped() {
    let tokens = lex("\\sample");
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].lexeme, "sample");
    assert_eq!(tokens[0].span, Span::new(1, 7));
}

#[test]
fn newlines_do_not_produce_tokens() {
    assert_eq!(
        kinds("a\nb\n\nc"),
        vec![
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::End
        ]
    );
}

#[test]
fn comment_runs_to_end_of_line() {
    assert_eq!(lexemes("x # y z\nw"), vec!["x", "w", ""]);
}

// === Keywords ===

#[test]
fn keyword_and_identifier_prefixes() {
    assert_eq!(kinds("if"), vec![TokenKind::If, TokenKind::End]);
    assert_eq!(kinds("if_"), vec![TokenKind::Ident, TokenKind::End]);
    assert_eq!(kinds("iffy"), vec![TokenKind::Ident, TokenKind::End]);
    assert_eq!(kinds("bin"), vec![TokenKind::Ident, TokenKind::End]);
}

#[test]
fn keyword_followed_by_punctuator() {
    assert_eq!(
        kinds("not(a)"),
        vec![
            TokenKind::Not,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::End
        ]
    );
}

#[test]
fn keyword_glued_to_string_is_identifier() {
    let tokens = lex("if'x'");
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].lexeme, "if");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].lexeme, "x");
}

#[test]
fn all_keywords() {
    let source = "and break continue elif else endforeach endif false foreach if in not or true";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::And,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::Elif,
            TokenKind::Else,
            TokenKind::EndForeach,
            TokenKind::EndIf,
            TokenKind::False,
            TokenKind::Foreach,
            TokenKind::If,
            TokenKind::In,
            TokenKind::Not,
            TokenKind::Or,
            TokenKind::True,
            TokenKind::End,
        ]
    );
}

// === Literals ===

#[test]
fn number_payloads() {
    let tokens = lex("0 0123 0b11 0o17 0x1F");
    let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme)).collect();
    assert_eq!(
        got,
        vec![
            (TokenKind::DecNumber, "0"),
            (TokenKind::DecNumber, "0123"),
            (TokenKind::BinNumber, "11"),
            (TokenKind::OctNumber, "17"),
            (TokenKind::HexNumber, "1F"),
            (TokenKind::End, ""),
        ]
    );
    assert_eq!(tokens[4].span, Span::new(17, 21));
}

#[test]
fn string_payloads() {
    assert_eq!(lexemes("'a' '' '''x''y''' ''' '''"), vec!["a", "", "x''y", " ", ""]);
    assert_eq!(
        kinds("'a' '''b'''"),
        vec![TokenKind::String, TokenKind::TripleString, TokenKind::End]
    );
}

#[test]
fn string_may_span_lines() {
    assert_eq!(lexemes("'a\nb'"), vec!["a\nb", ""]);
}

// === Operators ===

#[test]
fn operators_munch_trailing_equal() {
    assert_eq!(
        kinds("+ += - -= * *= / /= % %= = == != < <= > >="),
        vec![
            TokenKind::Plus,
            TokenKind::PlusEq,
            TokenKind::Minus,
            TokenKind::MinusEq,
            TokenKind::Star,
            TokenKind::StarEq,
            TokenKind::Slash,
            TokenKind::SlashEq,
            TokenKind::Percent,
            TokenKind::PercentEq,
            TokenKind::Assign,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::LtEq,
            TokenKind::Gt,
            TokenKind::GtEq,
            TokenKind::End,
        ]
    );
}

#[test]
fn double_plus_is_two_tokens() {
    assert_eq!(
        kinds("a++"),
        vec![
            TokenKind::Ident,
            TokenKind::Plus,
            TokenKind::Plus,
            TokenKind::End
        ]
    );
}

#[test]
fn spans_cover_tokens() {
    let spans: Vec<_> = lex("ab = 'c'").into_iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 2),
            Span::new(3, 4),
            Span::new(5, 8),
            Span::new(8, 8)
        ]
    );
}

// === Errors ===

#[test]
fn malformed_numbers() {
    for source in ["0x", "0b2", "12ab", "0o8"] {
        let tokens = lex(source);
        assert_eq!(tokens.len(), 1, "{source:?}");
        assert_eq!(tokens[0].kind, TokenKind::Error, "{source:?}");
    }
}

#[test]
fn error_poisons_lexer() {
    let mut lexer = Lexer::new("a ! b");
    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    let error = lexer.next_token();
    assert_eq!(error.kind, TokenKind::Error);
    assert_eq!(error.span, Span::new(2, 3));
    assert_eq!(lexer.next_token(), error);
    assert_eq!(lexer.next_token(), error);
    assert_eq!(lexer.last_error().map(|e| e.kind), Some(LexErrorKind::LoneBang));
}

#[test]
fn last_error_is_none_for_clean_input() {
    let mut lexer = Lexer::new("a = 1");
    while !lexer.next_token().is_end() {}
    assert_eq!(lexer.last_error(), None);
}

#[test]
fn unterminated_strings_report_their_kind() {
    let mut lexer = Lexer::new("x = 'abc");
    let kinds: Vec<_> = lexer.by_ref().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Ident, TokenKind::Assign, TokenKind::Error]
    );
    let err = lexer.last_error().unwrap();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span, Span::new(4, 8));

    let mut lexer = Lexer::new("'''abc''");
    assert!(lexer.next_token().is_error());
    assert_eq!(
        lexer.last_error().map(|e| e.kind),
        Some(LexErrorKind::UnterminatedTripleString)
    );
}

#[test]
fn invalid_characters() {
    for (source, found) in [("\"a\"", '"'), (";", ';'), ("\u{e9}", '\u{e9}'), ("a\0", '\0')] {
        let mut lexer = Lexer::new(source);
        let error = lexer.find(Token::is_error).unwrap();
        assert_eq!(error.kind, TokenKind::Error);
        assert_eq!(
            lexer.last_error().map(|e| e.kind),
            Some(LexErrorKind::InvalidCharacter(found)),
            "{source:?}"
        );
    }
}

// === Iterator ===

#[test]
fn iterator_stops_before_end() {
    let kinds: Vec<_> = Lexer::new("a b").map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Ident, TokenKind::Ident]);
}

#[test]
fn iterator_yields_error_once() {
    let mut lexer = Lexer::new("a @ b");
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Ident));
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Error));
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None);
}

#[test]
fn lex_ends_with_end_or_error() {
    assert_eq!(
        kinds("f(x)"),
        vec![
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::End
        ]
    );
    assert_eq!(
        kinds("f ! x"),
        vec![TokenKind::Ident, TokenKind::Error]
    );
}

// === Properties ===

proptest! {
    #[test]
    fn never_panics(source in "\\PC{0,64}") {
        let tokens = lex(&source);
        let last = tokens.last().unwrap();
        prop_assert!(last.is_end() || last.is_error());
    }

    #[test]
    fn spans_are_ordered_and_in_bounds(source in "[a-z0-9 '#\\\\()+=<>!,.\n-]{0,48}") {
        let mut prev_end = 0;
        for token in lex(&source) {
            prop_assert!(token.span.start >= prev_end);
            prop_assert!(token.span.end as usize <= source.len());
            prev_end = token.span.end;
        }
    }

    #[test]
    fn keyword_needs_boundary(
        kw in prop::sample::select(vec!["if", "in", "or", "and", "not", "true", "else", "endif"]),
        tail in "[a-z0-9_]{1,4}",
    ) {
        let glued = format!("{kw}{tail}");
        let tokens = lex(&glued);
        prop_assert_eq!(tokens[0].kind, TokenKind::Ident);
        prop_assert_eq!(tokens[0].lexeme, glued.as_str());

        let spaced = format!("{kw} {tail}");
        prop_assert!(lex(&spaced)[0].kind.is_keyword());
    }
}
