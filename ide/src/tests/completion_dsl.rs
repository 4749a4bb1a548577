use crate::{
    CompletionConfig, CompletionContext, CompletionKind, CompletionResult, IdeError, complete,
};

const CURSOR_MARKER: &str = "<|>";

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

// ----------------------------
// Completion Test DSL
// ----------------------------

pub fn t(input_with_cursor: &str) -> CompletionTestBuilder {
    CompletionTestBuilder::new(input_with_cursor)
}

pub struct CompletionTestBuilder {
    input_with_cursor: String,
    replaced: String,
    cursor: usize,
    explicit: bool,
    config: CompletionConfig,
    output: Option<Result<Option<CompletionResult>, IdeError>>,
}

impl CompletionTestBuilder {
    fn new(input_with_cursor: &str) -> Self {
        let cursor = input_with_cursor
            .find(CURSOR_MARKER)
            .expect("fixture must contain <|> marker");
        let text = input_with_cursor.to_string();
        let replaced = text.replace(CURSOR_MARKER, "");
        assert!(
            replaced.len() + CURSOR_MARKER.len() == text.len(),
            "fixture must contain exactly one <|> marker"
        );

        Self {
            input_with_cursor: text,
            replaced,
            cursor,
            explicit: false,
            config: CompletionConfig::default(),
            output: None,
        }
    }

    pub fn explicit(mut self) -> Self {
        self.explicit = true;
        self
    }

    pub fn lookbehind(mut self, lookbehind: usize) -> Self {
        self.config = CompletionConfig { lookbehind };
        self
    }

    fn ensure_run(&mut self) -> Option<&CompletionResult> {
        if self.output.is_none() {
            init_tracing();
            let out = complete(&self.replaced, self.cursor, self.explicit, self.config);
            self.output = Some(out);
        }
        match self.output.as_ref() {
            Some(Ok(result)) => result.as_ref(),
            Some(Err(err)) => panic!(
                "completion failed for {:?}: {}",
                self.input_with_cursor,
                err.message()
            ),
            None => unreachable!(),
        }
    }

    fn result(&mut self) -> &CompletionResult {
        let input = self.input_with_cursor.clone();
        self.ensure_run()
            .unwrap_or_else(|| panic!("expected completion at {input:?}, got none"))
    }

    pub fn expect_none(mut self) -> Self {
        let out = self.ensure_run();
        assert!(out.is_none(), "expected no completion, got {out:?}");
        self
    }

    pub fn expect_context(mut self, expected: CompletionContext) -> Self {
        let out = self.result();
        assert_eq!(out.context, expected, "context");
        self
    }

    pub fn expect_anchor(mut self, expected: u32) -> Self {
        let out = self.result();
        assert_eq!(out.anchor, expected, "anchor");
        self
    }

    pub fn expect_labels(mut self, expected: &[&str]) -> Self {
        let out = self.result();
        let labels: Vec<&str> = out.items.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, expected, "labels");
        self
    }

    pub fn expect_contains(mut self, expected: &[&str]) -> Self {
        let out = self.result();
        for label in expected {
            assert!(
                out.items.iter().any(|item| item.label == *label),
                "expected item {label:?} in {:?}",
                out.items
            );
        }
        self
    }

    pub fn expect_kinds_only(mut self, kind: CompletionKind) -> Self {
        let out = self.result();
        assert!(!out.items.is_empty(), "expected at least one completion item");
        for item in &out.items {
            assert_eq!(item.kind, kind, "kind of {:?}", item.label);
        }
        self
    }
}
