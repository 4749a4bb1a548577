//! Conversion utilities for the WASM/JS boundary.
//!
//! Stateless: parses inputs (config JSON, UTF-16 cursors) and turns `ide`/`syntax` results
//! into `dto::v1` views. No language logic lives here.

use ide::language::{COMMENT_TOKENS, HighlightSpan, lexicon};
use ide::{CompletionConfig, CompletionKind, IdeError};
use syntax::{Diagnostic, DiagnosticKind, SourceMap, Span};

use crate::dto::v1::{
    CommentTokens, CompletionContext as CompletionContextView, CompletionItem as CompletionItemView,
    CompletionItemKind, CompletionResult as CompletionResultView, Diagnostic as DiagnosticView,
    DiagnosticKind as DiagnosticKindView, Highlight, LanguageData, SpanView,
};
use crate::offsets::{byte_offset_to_utf16_offset, utf16_offset_to_byte};
use crate::span::byte_span_to_utf16_span;

pub struct Converter;

impl Converter {
    /// Parse the JS-provided completion config. Blank input means defaults.
    pub fn parse_config(config_json: &str) -> Result<CompletionConfig, IdeError> {
        let trimmed = config_json.trim();
        if trimmed.is_empty() {
            return Ok(CompletionConfig::default());
        }
        serde_json::from_str(trimmed).map_err(|_| IdeError::InvalidConfig)
    }

    /// Convert a UTF-16 cursor offset (CodeMirror) to a byte offset (Rust strings).
    pub fn cursor_utf16_to_byte(source: &str, cursor_utf16: u32) -> Result<usize, IdeError> {
        utf16_offset_to_byte(source, cursor_utf16 as usize).ok_or(IdeError::InvalidCursor)
    }

    pub fn completion_result_view(
        source: &str,
        result: &ide::CompletionResult,
    ) -> CompletionResultView {
        CompletionResultView {
            context: completion_context_view(result.context),
            anchor: byte_offset_to_utf16_offset(source, result.anchor as usize),
            items: result
                .items
                .iter()
                .map(|item| CompletionItemView {
                    label: item.label.clone(),
                    kind: completion_kind_view(item.kind),
                    boost: item.boost.map(|boost| boost.value()),
                })
                .collect(),
        }
    }

    pub fn highlight_view(source: &str, hl: &HighlightSpan) -> Highlight {
        Highlight {
            range: byte_span_to_utf16_span(source, hl.span),
            tag: hl.tag.name().to_string(),
        }
    }

    pub fn diagnostic_view(source: &str, sm: &SourceMap, diag: &Diagnostic) -> DiagnosticView {
        DiagnosticView {
            kind: diagnostic_kind_view(diag.kind),
            message: diag.message.clone(),
            span: Self::span_view(source, sm, diag.span),
        }
    }

    pub fn span_view(source: &str, sm: &SourceMap, span: Span) -> SpanView {
        let (line, col) = sm.line_col(span.start);
        SpanView {
            range: byte_span_to_utf16_span(source, span),
            line: line as u32,
            col: col as u32,
        }
    }

    pub fn language_data_view() -> LanguageData {
        fn owned(table: &[&str]) -> Vec<String> {
            table.iter().map(|name| name.to_string()).collect()
        }

        LanguageData {
            comment_tokens: CommentTokens {
                line: COMMENT_TOKENS.line.to_string(),
            },
            opcodes: owned(lexicon::OPCODES),
            special_exprs: owned(lexicon::SPECIAL_EXPRS),
            opaliases: owned(lexicon::OPALIASES),
            nullary_types: owned(lexicon::NULLARY_TYPES),
            constructor_types: owned(lexicon::CONSTRUCTOR_TYPES),
        }
    }
}

fn completion_context_view(context: ide::CompletionContext) -> CompletionContextView {
    match context {
        ide::CompletionContext::VariableReference => CompletionContextView::VariableReference,
        ide::CompletionContext::TypePosition => CompletionContextView::TypePosition,
        ide::CompletionContext::General => CompletionContextView::General,
    }
}

fn completion_kind_view(kind: CompletionKind) -> CompletionItemKind {
    match kind {
        CompletionKind::Type => CompletionItemKind::Type,
        CompletionKind::Keyword => CompletionItemKind::Keyword,
        CompletionKind::Variable => CompletionItemKind::Variable,
    }
}

fn diagnostic_kind_view(kind: DiagnosticKind) -> DiagnosticKindView {
    match kind {
        DiagnosticKind::Error => DiagnosticKindView::Error,
    }
}
