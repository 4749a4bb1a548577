//! Completion and language data for Polygolf editors.
//!
//! Coordinates are UTF-8 byte offsets (`[start, end)`), matching `syntax`.

mod completion;
mod context;
mod error;
pub mod language;

#[cfg(test)]
mod tests;

use syntax::SyntaxTree;

pub use completion::{
    Boost, CompletionConfig, CompletionContext, CompletionItem, CompletionKind, CompletionResult,
    DEFAULT_LOOKBEHIND,
};
pub use context::Classification;
pub use error::IdeError;

/// Parses `source` and computes completions at a byte cursor.
///
/// Returns `Ok(None)` when the cursor is not a completion position.
pub fn complete(
    source: &str,
    cursor: usize,
    explicit: bool,
    config: CompletionConfig,
) -> Result<Option<CompletionResult>, IdeError> {
    let parsed = syntax::parse(source);
    complete_with_tree(source, &parsed.tree, cursor, explicit, config)
}

/// Like [`complete`], reusing a tree the caller already parsed from `source`.
pub fn complete_with_tree(
    source: &str,
    tree: &SyntaxTree,
    cursor: usize,
    explicit: bool,
    config: CompletionConfig,
) -> Result<Option<CompletionResult>, IdeError> {
    Ok(CompletionSession::new(source, tree, cursor, explicit, config)?.run())
}

/// Context and anchor only, without building candidates.
pub fn classify(
    source: &str,
    tree: &SyntaxTree,
    cursor: usize,
    explicit: bool,
    config: CompletionConfig,
) -> Result<Option<Classification>, IdeError> {
    Ok(CompletionSession::new(source, tree, cursor, explicit, config)?.classify())
}

struct CompletionSession<'a> {
    source: &'a str,
    tree: &'a SyntaxTree,
    cursor: u32,
    explicit: bool,
    config: CompletionConfig,
}

impl<'a> CompletionSession<'a> {
    fn new(
        source: &'a str,
        tree: &'a SyntaxTree,
        cursor: usize,
        explicit: bool,
        config: CompletionConfig,
    ) -> Result<Self, IdeError> {
        Ok(Self {
            source,
            tree,
            cursor: error::validate_cursor(source, cursor)?,
            explicit,
            config,
        })
    }

    fn classify(&self) -> Option<Classification> {
        context::classify_at(
            self.source,
            self.tree,
            self.cursor,
            self.explicit,
            self.config,
        )
    }

    fn run(self) -> Option<CompletionResult> {
        // 1) Classify the cursor; bail out where nothing should pop up.
        let Classification { context, anchor } = self.classify()?;

        // 2) Build candidates for the context.
        let items = match context {
            CompletionContext::VariableReference => {
                completion::variable_items(self.source, self.tree, anchor)
            }
            CompletionContext::TypePosition => completion::type_items(),
            CompletionContext::General => completion::keyword_items(),
        };

        Some(CompletionResult {
            context,
            anchor,
            items,
        })
    }
}
