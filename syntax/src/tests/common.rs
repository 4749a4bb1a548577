use crate::tree::{NodeId, SyntaxKind, SyntaxTree};

/// Installs a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// First node of `kind` whose text is `text`, in document order.
pub fn find_node(tree: &SyntaxTree, source: &str, kind: SyntaxKind, text: &str) -> NodeId {
    tree.preorder()
        .find(|&id| tree.kind(id) == kind && tree.text(source, id) == text)
        .unwrap_or_else(|| panic!("no {kind:?} node with text {text:?} in {source:?}"))
}
