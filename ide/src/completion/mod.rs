//! Completion candidates for editors.
//! All coordinates are UTF-8 byte offsets into the input `text`.
//!
//! Candidate lists are returned in full. Narrowing by the already-typed prefix at `anchor`
//! is left to the editor.

use serde::Deserialize;

mod items;

pub(crate) use items::{keyword_items, type_items, variable_items};

/// Default for `CompletionConfig.lookbehind`.
pub const DEFAULT_LOOKBEHIND: usize = 250;

/// Configuration knobs for `complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompletionConfig {
    /// Max number of bytes before the cursor that trigger patterns look at.
    pub lookbehind: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            lookbehind: DEFAULT_LOOKBEHIND,
        }
    }
}

/// Syntactic context of the cursor, recomputed on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionContext {
    /// Right after a `$` sigil, possibly with part of a name typed.
    VariableReference,
    /// After a `:` annotation or inside a type s-expression.
    TypePosition,
    /// Anywhere else: opcodes and special expression heads.
    General,
}

/// Result of a completion query at a byte cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult {
    pub context: CompletionContext,
    /// Byte offset from which an accepted label replaces text up to the cursor.
    pub anchor: u32,
    /// Ordered; intentionally not deduplicated.
    pub items: Vec<CompletionItem>,
}

/// One completion candidate. `label` is also the inserted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    pub boost: Option<Boost>,
}

impl CompletionItem {
    pub fn new(label: impl Into<String>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            boost: None,
        }
    }

    pub fn with_boost(mut self, boost: Boost) -> Self {
        self.boost = Some(boost);
        self
    }
}

/// Presentation bucket; does not affect what gets inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    Type,
    Keyword,
    Variable,
}

/// Fixed priority used to order simple types above type constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Boost {
    Low,
    High,
}

impl Boost {
    /// Numeric boost as editors expect it (`High` = 1, `Low` = 0).
    pub fn value(self) -> i32 {
        match self {
            Boost::High => 1,
            Boost::Low => 0,
        }
    }
}
