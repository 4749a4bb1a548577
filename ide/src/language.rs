//! Static language data for editor hosts: highlighting, comments, indentation and folding.

use syntax::{NodeId, Span, SyntaxKind, SyntaxTree};

pub use syntax::lexicon;

/// Editor-neutral highlight categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightTag {
    VariableName,
    String,
    Keyword,
    ConstantKeyword,
    Operator,
    TypeName,
    Integer,
    LineComment,
    Paren,
}

impl HighlightTag {
    pub fn name(self) -> &'static str {
        match self {
            HighlightTag::VariableName => "variableName",
            HighlightTag::String => "string",
            HighlightTag::Keyword => "keyword",
            HighlightTag::ConstantKeyword => "constant(keyword)",
            HighlightTag::Operator => "operator",
            HighlightTag::TypeName => "typeName",
            HighlightTag::Integer => "integer",
            HighlightTag::LineComment => "lineComment",
            HighlightTag::Paren => "paren",
        }
    }
}

pub fn highlight_tag(kind: SyntaxKind) -> Option<HighlightTag> {
    let tag = match kind {
        SyntaxKind::Variable => HighlightTag::VariableName,
        SyntaxKind::String => HighlightTag::String,
        SyntaxKind::Builtin => HighlightTag::Keyword,
        SyntaxKind::Nullary => HighlightTag::ConstantKeyword,
        SyntaxKind::Opalias => HighlightTag::Operator,
        SyntaxKind::TypeName => HighlightTag::TypeName,
        SyntaxKind::Integer => HighlightTag::Integer,
        SyntaxKind::LineComment => HighlightTag::LineComment,
        SyntaxKind::OpenParen | SyntaxKind::CloseParen => HighlightTag::Paren,
        _ => return None,
    };
    Some(tag)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub span: Span,
    pub tag: HighlightTag,
}

/// Tagged leaves of `tree`, in document order.
pub fn highlight(tree: &SyntaxTree) -> Vec<HighlightSpan> {
    tree.preorder()
        .filter(|&id| tree.children(id).is_empty())
        .filter_map(|id| {
            let tag = highlight_tag(tree.kind(id))?;
            Some(HighlightSpan {
                span: tree.span(id),
                tag,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentTokens {
    pub line: &'static str,
}

pub const COMMENT_TOKENS: CommentTokens = CommentTokens {
    line: lexicon::LINE_COMMENT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentRule {
    /// Indent children one unit past the opening line; the `closing` delimiter dedents.
    Delimited { closing: char, align: bool },
}

pub fn indent_rule(kind: SyntaxKind) -> Option<IndentRule> {
    match kind {
        SyntaxKind::Variants => Some(IndentRule::Delimited {
            closing: '}',
            align: false,
        }),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldRule {
    /// Fold everything between the first and the last child.
    Inside,
}

pub fn fold_rule(kind: SyntaxKind) -> Option<FoldRule> {
    match kind {
        SyntaxKind::Variants => Some(FoldRule::Inside),
        _ => None,
    }
}

/// Foldable range of `id`, if its kind folds and there is something between its delimiters.
///
/// An unclosed node folds up to its end.
pub fn fold_range(tree: &SyntaxTree, id: NodeId) -> Option<Span> {
    let FoldRule::Inside = fold_rule(tree.kind(id))?;
    let children = tree.children(id);
    let (&first, &last) = (children.first()?, children.last()?);
    if first == last {
        return None;
    }

    let start = tree.span(first).end;
    let last_span = tree.span(last);
    let end = match tree.kind(last) {
        SyntaxKind::CloseBrace => last_span.start,
        _ => tree.span(id).end,
    };
    (start < end).then(|| Span::new(start, end))
}
