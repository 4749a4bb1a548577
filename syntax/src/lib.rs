//! Polygolf syntax: lexical tables, lexer, error-tolerant parser and the arena syntax tree.
//!
//! Pipeline: lex → parse → [`SyntaxTree`].
//! All spans are UTF-8 byte offsets into the original source, using `[start, end)`.
//! UTF-16 conversion for editors happens in `ide_wasm`.
use crate::lexer::lex;
use crate::parser::Parser;

mod diagnostics;
pub mod lexer;
pub mod lexicon;
mod parser;
mod source_map;
mod span;
#[cfg(test)]
mod tests;
pub mod tree;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, format_diagnostics};
pub use lexer::{Token, TokenKind};
pub use parser::ParseOutput;
pub use source_map::SourceMap;
pub use span::Span;
pub use tree::{Bias, NodeData, NodeId, SyntaxKind, SyntaxTree, TreeBuilder};

/// Lexes and parses `text`. Never fails; problems are reported as diagnostics.
pub fn parse(text: &str) -> ParseOutput {
    let lex_output = lex(text);
    let mut output = Parser::new(text, lex_output.tokens).parse();
    output.diagnostics.extend(lex_output.diagnostics.diags);
    output
}
