use crate::Span;
use crate::lexer::{TokenKind, lex};

fn kinds(input: &str) -> Vec<TokenKind> {
    lex(input).tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn test_lex_sexpr_with_negative_integers() {
    use TokenKind::*;
    assert_eq!(
        kinds("(-5 - -oo)"),
        vec![OpenParen, Integer, Op, Integer, CloseParen, Eof]
    );
}

#[test]
fn test_lex_assignment_prefers_longest_operator() {
    let out = lex("$x<-1");
    let spans: Vec<(TokenKind, Span)> = out.tokens.iter().map(|t| (t.kind, t.span)).collect();
    assert_eq!(
        spans,
        vec![
            (TokenKind::Variable, Span::new(0, 2)),
            (TokenKind::Op, Span::new(2, 4)),
            (TokenKind::Integer, Span::new(4, 5)),
            (TokenKind::Eof, Span::new(5, 5)),
        ]
    );
    assert!(out.diagnostics.is_empty());
}

#[test]
fn test_lex_bare_sigil_is_a_variable() {
    let out = lex("$");
    assert_eq!(out.tokens[0].kind, TokenKind::Variable);
    assert_eq!(out.tokens[0].span, Span::new(0, 1));
}

#[test]
fn test_lex_range_type() {
    use TokenKind::*;
    assert_eq!(kinds("0..oo"), vec![Integer, Op, Integer, Eof]);
}

#[test]
fn test_lex_string_with_escaped_quote() {
    let out = lex(r#""a\"b" 1"#);
    assert_eq!(out.tokens[0].kind, TokenKind::String);
    assert_eq!(out.tokens[0].span, Span::new(0, 6));
    assert_eq!(out.tokens[1].kind, TokenKind::Integer);
    assert!(out.diagnostics.is_empty());
}

#[test]
fn test_lex_unterminated_string_reaches_end_of_input() {
    let out = lex(r#""abc"#);
    assert_eq!(out.tokens[0].kind, TokenKind::String);
    assert_eq!(out.tokens[0].span, Span::new(0, 4));
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics.diags[0].message, "unterminated string literal");
}

#[test]
fn test_lex_unknown_char_keeps_going() {
    use TokenKind::*;
    let out = lex("@ 1");
    assert_eq!(
        out.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![Unknown, Integer, Eof]
    );
    assert_eq!(out.diagnostics.diags[0].message, "unexpected char '@'");
}

#[test]
fn test_lex_line_comment_is_trivia() {
    let out = lex("% note\n1");
    assert!(out.tokens[0].is_trivia());
    assert_eq!(out.tokens[0].span, Span::new(0, 6));
    assert_eq!(out.tokens[1].kind, TokenKind::Integer);
}

#[test]
fn test_lex_words_and_word_aliases_are_words() {
    use TokenKind::*;
    assert_eq!(kinds("trunc_div oops"), vec![Word, Word, Eof]);
}
