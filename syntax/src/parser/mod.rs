//! Error-tolerant parser for Polygolf source.
//!
//! Inputs: lexer tokens that include trivia and an explicit EOF token.
//! Output: a [`SyntaxTree`] that always exists, plus diagnostics. Spans are UTF-8 byte offsets
//! with half-open semantics `[start, end)`.
//!
//! Recovery rules:
//! - an unclosed `(` or `{` ends where the token that forced it closed starts (EOF included),
//!   so an unfinished construct at the end of a document reaches the end of the document;
//! - stray closers and unknown characters become `Error` leaves;
//! - trivia (comments) is attached to whichever node is open when it is reached.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::lexer::{Token, TokenKind};
use crate::lexicon;
use crate::tree::{SyntaxKind, SyntaxTree, TreeBuilder};
use crate::Span;

mod types;

#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub tree: SyntaxTree,
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    builder: TreeBuilder,
    diagnostics: Diagnostics,
    last_end: u32,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, tokens: Vec<Token>) -> Self {
        Parser {
            source,
            tokens,
            pos: 0,
            builder: TreeBuilder::new(source.len() as u32),
            diagnostics: Diagnostics::default(),
            last_end: 0,
        }
    }

    /// Parses a whole program: a sequence of expressions separated by optional `;`.
    pub fn parse(mut self) -> ParseOutput {
        loop {
            match self.nth(0) {
                TokenKind::Eof => break,
                TokenKind::Semicolon => self.bump(SyntaxKind::Semicolon),
                TokenKind::CloseParen | TokenKind::CloseBrace | TokenKind::Slash => {
                    let found = self.describe_cur();
                    self.error_and_bump(format!("unexpected {found}"));
                }
                _ => self.expr(),
            }
        }
        self.flush_trivia();

        let tree = self.builder.finish();
        tracing::trace!(
            nodes = tree.len(),
            diagnostics = self.diagnostics.len(),
            "parsed document"
        );

        ParseOutput {
            tree,
            tokens: self.tokens,
            diagnostics: self.diagnostics.diags,
        }
    }

    /// Parses one value expression with an optional `:type` annotation.
    fn expr(&mut self) {
        match self.nth(0) {
            TokenKind::Variable => self.bump(SyntaxKind::Variable),
            TokenKind::Integer => self.bump(SyntaxKind::Integer),
            TokenKind::String => self.bump(SyntaxKind::String),
            TokenKind::Word => {
                let kind = classify_word(self.cur_text());
                self.bump(kind);
            }
            TokenKind::Op => self.bump(SyntaxKind::Opalias),
            TokenKind::OpenParen => self.sexpr(),
            TokenKind::OpenBrace => self.variants(),
            TokenKind::Colon => {
                // No value to annotate; keep the type so it still reads as a type.
                self.error_and_bump("expected expression before `:`");
                self.ty();
                return;
            }
            TokenKind::Unknown => self.bump(SyntaxKind::Error),
            TokenKind::Eof => {
                self.error_here("expected expression, found end of input");
                return;
            }
            _ => {
                let found = self.describe_cur();
                self.error_and_bump(format!("expected expression, found {found}"));
                return;
            }
        }

        if self.at(TokenKind::Colon) {
            self.annotation();
        }
    }

    fn annotation(&mut self) {
        if self.builder.wrap_last_child(SyntaxKind::TypedExpr).is_none() {
            self.error_and_bump("expected expression before `:`");
            return;
        }
        self.bump(SyntaxKind::Colon);
        self.ty();
        self.builder.finish_node(self.last_end);
    }

    /// `( head args... )`
    fn sexpr(&mut self) {
        self.start_node(SyntaxKind::Sexpr);
        self.bump(SyntaxKind::OpenParen);
        loop {
            match self.nth(0) {
                TokenKind::CloseParen => {
                    self.bump(SyntaxKind::CloseParen);
                    self.builder.finish_node(self.last_end);
                    return;
                }
                TokenKind::Eof | TokenKind::CloseBrace => {
                    self.close_unterminated("`)`");
                    return;
                }
                TokenKind::Semicolon => self.bump(SyntaxKind::Semicolon),
                TokenKind::Slash => self.error_and_bump("unexpected `/` outside of `{ }`"),
                _ => self.expr(),
            }
        }
    }

    /// `{ a... / b... }`
    fn variants(&mut self) {
        self.start_node(SyntaxKind::Variants);
        self.bump(SyntaxKind::OpenBrace);
        loop {
            match self.nth(0) {
                TokenKind::CloseBrace => {
                    self.bump(SyntaxKind::CloseBrace);
                    self.builder.finish_node(self.last_end);
                    return;
                }
                TokenKind::Eof | TokenKind::CloseParen => {
                    self.close_unterminated("`}`");
                    return;
                }
                TokenKind::Slash => self.bump(SyntaxKind::Slash),
                TokenKind::Semicolon => self.bump(SyntaxKind::Semicolon),
                _ => self.expr(),
            }
        }
    }

    /// Ends the innermost open node where the current token starts.
    fn close_unterminated(&mut self, expected: &str) {
        self.flush_trivia();
        let span = self.cur_span();
        let message = format!("expected {expected}, found {}", self.describe_cur());
        self.diagnostics.emit_error(span, message);
        self.builder.finish_node(span.start);
    }

    /// Opens a `kind` node at the current token. Pending comments stay with the enclosing node.
    fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.builder.start_node(kind, self.cur_span().start);
    }

    // ---- token cursor ----

    fn nth_index(&self, n: usize) -> usize {
        let mut remaining = n;
        let mut idx = self.pos;
        while idx < self.tokens.len() {
            let token = &self.tokens[idx];
            if token.kind == TokenKind::Eof {
                return idx;
            }
            if !token.is_trivia() {
                if remaining == 0 {
                    return idx;
                }
                remaining -= 1;
            }
            idx += 1;
        }
        self.tokens.len().saturating_sub(1)
    }

    /// Kind of the `n`-th non-trivia token ahead, without consuming anything.
    fn nth(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.nth_index(n))
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    fn nth_text(&self, n: usize) -> &'a str {
        self.tokens
            .get(self.nth_index(n))
            .and_then(|token| self.source.get(token.span.as_range()))
            .unwrap_or("")
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.nth(0) == kind
    }

    fn cur_span(&self) -> Span {
        self.tokens
            .get(self.nth_index(0))
            .map_or(Span::empty(self.source.len() as u32), |token| token.span)
    }

    fn cur_text(&self) -> &'a str {
        self.nth_text(0)
    }

    /// Attaches pending comments to the current open node.
    fn flush_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos)
            && token.is_trivia()
        {
            self.builder.leaf(SyntaxKind::LineComment, token.span);
            self.last_end = token.span.end;
            self.pos += 1;
        }
    }

    /// Consumes the current token as a `kind` leaf. EOF is never consumed.
    fn bump(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        let Some(token) = self.tokens.get(self.pos).copied() else {
            return;
        };
        if token.kind == TokenKind::Eof {
            return;
        }
        self.builder.leaf(kind, token.span);
        self.last_end = token.span.end;
        self.pos += 1;
    }

    fn error_here(&mut self, message: impl Into<String>) {
        let span = self.cur_span();
        self.diagnostics.emit_error(span, message);
    }

    fn error_and_bump(&mut self, message: impl Into<String>) {
        self.error_here(message);
        self.bump(SyntaxKind::Error);
    }

    fn describe_cur(&self) -> String {
        match self.nth(0) {
            TokenKind::Eof => "end of input".into(),
            _ => format!("`{}`", self.cur_text()),
        }
    }
}

/// Classifies a word in value position.
fn classify_word(word: &str) -> SyntaxKind {
    if lexicon::is_opalias_word(word) {
        SyntaxKind::Opalias
    } else if lexicon::is_nullary_constant(word) {
        SyntaxKind::Nullary
    } else {
        SyntaxKind::Builtin
    }
}
