use crate::Span;
use crate::diagnostics::Diagnostics;
use crate::lexicon::{self, is_word_continue, is_word_start};

mod token;

pub use token::{Token, TokenKind};

pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Diagnostics,
}

/// Lex the input into tokens.
///
/// - Whitespace is skipped; line comments are kept as trivia tokens.
/// - Integers: optional `-` directly followed by ASCII digits, or `oo`/`-oo`.
/// - Strings: double-quoted, `\` escapes the next character.
/// - Unknown characters become [`TokenKind::Unknown`] and lexing continues.
pub fn lex(input: &str) -> LexOutput {
    let mut lexer = Lexer {
        input,
        pos: 0,
        tokens: Vec::new(),
        diagnostics: Diagnostics::default(),
    };
    lexer.run();
    LexOutput {
        tokens: lexer.tokens,
        diagnostics: lexer.diagnostics,
    }
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    tokens: Vec<Token>,
    diagnostics: Diagnostics,
}

impl Lexer<'_> {
    fn run(&mut self) {
        while let Some(ch) = self.peek() {
            let start = self.pos;

            if ch.is_whitespace() {
                self.pos += ch.len_utf8();
                continue;
            }

            let kind = match ch {
                '%' => {
                    self.eat_while(|c| c != '\n');
                    TokenKind::LineComment
                }
                lexicon::VARIABLE_SIGIL => {
                    self.pos += 1;
                    self.eat_while(is_word_continue);
                    TokenKind::Variable
                }
                '"' => self.string(),
                '(' => self.single(TokenKind::OpenParen),
                ')' => self.single(TokenKind::CloseParen),
                '{' => self.single(TokenKind::OpenBrace),
                '}' => self.single(TokenKind::CloseBrace),
                ':' => self.single(TokenKind::Colon),
                '/' => self.single(TokenKind::Slash),
                ';' => self.single(TokenKind::Semicolon),
                c if c.is_ascii_digit() => {
                    self.eat_while(|c| c.is_ascii_digit());
                    TokenKind::Integer
                }
                '-' if self.negative_integer_follows() => {
                    self.pos += 1;
                    self.integer_or_infinity();
                    TokenKind::Integer
                }
                c if is_word_start(c) => {
                    self.eat_while(is_word_continue);
                    if &self.input[start..self.pos] == "oo" {
                        TokenKind::Integer
                    } else {
                        TokenKind::Word
                    }
                }
                _ => match lexicon::symbolic_opalias_prefix(&self.input[start..]) {
                    Some(op) => {
                        self.pos += op.len();
                        TokenKind::Op
                    }
                    None => {
                        self.pos += ch.len_utf8();
                        self.diagnostics.emit_error(
                            Span::new(start as u32, self.pos as u32),
                            format!("unexpected char '{ch}'"),
                        );
                        TokenKind::Unknown
                    }
                },
            };

            self.tokens.push(Token {
                kind,
                span: Span::new(start as u32, self.pos as u32),
            });
        }

        let end = self.input.len() as u32;
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            span: Span::empty(end),
        });
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.pos += 1;
        kind
    }

    fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn negative_integer_follows(&self) -> bool {
        let rest = &self.input[self.pos + 1..];
        rest.starts_with(|c: char| c.is_ascii_digit()) || is_infinity(rest)
    }

    fn integer_or_infinity(&mut self) {
        if is_infinity(&self.input[self.pos..]) {
            self.pos += 2;
        } else {
            self.eat_while(|c| c.is_ascii_digit());
        }
    }

    fn string(&mut self) -> TokenKind {
        let start = self.pos;
        self.pos += 1;
        let mut escaped = false;
        while let Some(c) = self.peek() {
            self.pos += c.len_utf8();
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                return TokenKind::String;
            }
        }
        self.diagnostics.emit_error(
            Span::new(start as u32, self.pos as u32),
            "unterminated string literal",
        );
        TokenKind::String
    }
}

/// `oo` not followed by another word character.
fn is_infinity(rest: &str) -> bool {
    rest.starts_with("oo") && !rest[2..].starts_with(is_word_continue)
}
