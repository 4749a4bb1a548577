//! Type annotations: the part after `:` in `expr:type`.
//!
//! ```text
//! type     = Type_name | Type_sexpr | Type_range
//! Type_sexpr = "(" Type_name (type | Integer)* ")"
//! Type_range = Integer ".." Integer        % bounds may be `oo` / `-oo`
//! ```

use super::Parser;
use crate::lexer::TokenKind;
use crate::tree::SyntaxKind;

impl Parser<'_> {
    pub(super) fn ty(&mut self) {
        match self.nth(0) {
            TokenKind::Word => self.bump(SyntaxKind::TypeName),
            TokenKind::OpenParen => self.type_sexpr(),
            TokenKind::Integer => self.type_range_or_integer(),
            _ => {
                let found = self.describe_cur();
                self.error_here(format!("expected type, found {found}"));
            }
        }
    }

    fn type_sexpr(&mut self) {
        self.start_node(SyntaxKind::TypeSexpr);
        self.bump(SyntaxKind::OpenParen);
        loop {
            match self.nth(0) {
                TokenKind::CloseParen => {
                    self.bump(SyntaxKind::CloseParen);
                    self.builder.finish_node(self.last_end);
                    return;
                }
                TokenKind::Eof
                | TokenKind::CloseBrace
                | TokenKind::Slash
                | TokenKind::Semicolon => {
                    self.close_unterminated("`)`");
                    return;
                }
                TokenKind::Word | TokenKind::OpenParen | TokenKind::Integer => self.ty(),
                _ => {
                    let found = self.describe_cur();
                    self.error_and_bump(format!("expected type, found {found}"));
                }
            }
        }
    }

    /// `lo..hi` becomes a `Type_range`; a lone integer (as in `(Text 5)`) stays an `Integer`.
    fn type_range_or_integer(&mut self) {
        let is_range = self.nth(1) == TokenKind::Op && self.nth_text(1) == "..";
        if !is_range {
            self.bump(SyntaxKind::Integer);
            return;
        }

        self.start_node(SyntaxKind::TypeRange);
        self.bump(SyntaxKind::Integer);
        self.bump(SyntaxKind::Opalias);
        if self.at(TokenKind::Integer) {
            self.bump(SyntaxKind::Integer);
        } else {
            let found = self.describe_cur();
            self.error_here(format!("expected range bound, found {found}"));
        }
        self.builder.finish_node(self.last_end);
    }
}
