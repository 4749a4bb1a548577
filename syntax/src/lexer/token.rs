//! Lexer tokens.
//!
//! [`Span`] uses UTF-8 byte offsets into the original source and is half-open `[start, end)`.
//! The lexer also emits a [`TokenKind::Eof`] token with an empty span at end of input.

use crate::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /* Atoms */
    /// `$name`, including a bare `$`.
    Variable,
    /// `12`, `-3`, `oo`, `-oo`
    Integer,
    /// `"..."`
    String,
    /// `[A-Za-z_][A-Za-z0-9_]*`; classified later by the lexicon.
    Word,
    /// Symbolic operator alias such as `<-` or `..`.
    Op,

    /* Structural symbols */
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `:`
    Colon,
    /// `/`
    Slash,
    /// `;`
    Semicolon,

    /// `% ...` up to the end of the line.
    LineComment,
    /// A character no other rule accepts.
    Unknown,
    Eof,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::LineComment)
    }
}
