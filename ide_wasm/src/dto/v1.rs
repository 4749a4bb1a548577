use serde::Serialize;
use ts_rs::TS;

/// JS/editor-facing span in UTF-16 code units.
///
/// Ranges are half-open `[start, end)`; `end` is exclusive.
#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionContext {
    VariableReference,
    TypePosition,
    General,
}

/// Matches CodeMirror's completion `type` names.
#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CompletionItemKind {
    Type,
    Keyword,
    Variable,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionItemKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub boost: Option<i32>,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct CompletionResult {
    pub context: CompletionContext,
    /// UTF-16 offset where accepted labels start replacing text.
    pub anchor: u32,
    pub items: Vec<CompletionItem>,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub range: Span,
    pub tag: String,
}

#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    #[serde(rename = "error")]
    Error,
}

#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpanView {
    pub range: Span,
    pub line: u32,
    pub col: u32,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: SpanView,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct CommentTokens {
    pub line: String,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct LanguageData {
    pub comment_tokens: CommentTokens,
    pub opcodes: Vec<String>,
    pub special_exprs: Vec<String>,
    pub opaliases: Vec<String>,
    pub nullary_types: Vec<String>,
    pub constructor_types: Vec<String>,
}
