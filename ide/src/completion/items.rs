//! Builds the raw completion item list for a context.
//! Type and keyword lists do not depend on the document and are built once.

use std::sync::LazyLock;

use syntax::lexicon::{CONSTRUCTOR_TYPES, NULLARY_TYPES, OPCODES, SPECIAL_EXPRS};
use syntax::{SyntaxKind, SyntaxTree};

use crate::completion::{Boost, CompletionItem, CompletionKind};

static TYPE_ITEMS: LazyLock<Vec<CompletionItem>> = LazyLock::new(|| {
    let nullary = NULLARY_TYPES
        .iter()
        .map(|name| CompletionItem::new(*name, CompletionKind::Type).with_boost(Boost::High));
    let constructors = CONSTRUCTOR_TYPES.iter().map(|name| {
        CompletionItem::new(format!("({name}"), CompletionKind::Type).with_boost(Boost::Low)
    });
    nullary.chain(constructors).collect()
});

static KEYWORD_ITEMS: LazyLock<Vec<CompletionItem>> = LazyLock::new(|| {
    OPCODES
        .iter()
        .chain(SPECIAL_EXPRS)
        .map(|name| CompletionItem::new(*name, CompletionKind::Keyword))
        .collect()
});

/// Nullary types (high boost) followed by `(Constructor` openers (low boost).
pub(crate) fn type_items() -> Vec<CompletionItem> {
    TYPE_ITEMS.clone()
}

/// Opcodes followed by special expression heads.
pub(crate) fn keyword_items() -> Vec<CompletionItem> {
    KEYWORD_ITEMS.clone()
}

/// Every variable occurrence in the document except the one being typed at `anchor`.
pub(crate) fn variable_items(source: &str, tree: &SyntaxTree, anchor: u32) -> Vec<CompletionItem> {
    tree.collect_by_kind(source, SyntaxKind::Variable, Some(anchor))
        .into_iter()
        .map(|name| CompletionItem::new(name, CompletionKind::Variable))
        .collect()
}
