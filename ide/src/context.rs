//! Cursor context classification.
//!
//! Classification looks at the text window before the cursor first and only consults the
//! syntax tree to tell type expressions apart from value expressions. Trigger rules are an
//! ordered table; the first rule whose pattern matches decides the outcome.

use std::sync::LazyLock;

use regex::{Match, Regex};
use syntax::{Bias, SyntaxKind, SyntaxTree};
use tracing::{debug, trace};

use crate::completion::{CompletionConfig, CompletionContext};

static VARIABLE_TRIGGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[0-9A-Za-z_]*$").expect("variable trigger pattern"));
static ANNOTATION_TRIGGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r": ?\(?[0-9A-Za-z_]*$").expect("annotation trigger pattern"));
static TYPE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(?[0-9A-Za-z_]*$").expect("type prefix pattern"));
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9A-Za-z_]*$").expect("word pattern"));

static TRIGGER_RULES: [TriggerRule; 3] = [
    TriggerRule {
        name: "variable",
        pattern: &VARIABLE_TRIGGER,
        handler: variable_reference,
    },
    TriggerRule {
        name: "annotation",
        pattern: &ANNOTATION_TRIGGER,
        handler: type_annotation,
    },
    TriggerRule {
        name: "word",
        pattern: &WORD,
        handler: word_fallback,
    },
];

/// Context and replacement anchor for a completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub context: CompletionContext,
    pub anchor: u32,
}

struct TriggerRule {
    name: &'static str,
    pattern: &'static LazyLock<Regex>,
    handler: fn(&Request<'_>, Match<'_>) -> Outcome,
}

enum Outcome {
    Complete(Classification),
    Suppress,
}

/// Line-local text before the cursor, limited by `CompletionConfig::lookbehind`.
#[derive(Debug, Clone, Copy)]
struct Window<'a> {
    text: &'a str,
    start: u32,
}

impl<'a> Window<'a> {
    /// `cursor` must be a char boundary within `source`.
    fn before(source: &'a str, cursor: usize, lookbehind: usize) -> Self {
        let before = &source[..cursor];
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let mut start = line_start.max(cursor.saturating_sub(lookbehind));
        while !source.is_char_boundary(start) {
            start += 1;
        }
        Self {
            text: &source[start..cursor],
            start: start as u32,
        }
    }

    fn offset(&self, m: Match<'_>) -> u32 {
        self.start + m.start() as u32
    }
}

struct Request<'a> {
    tree: &'a SyntaxTree,
    window: Window<'a>,
    cursor: u32,
    explicit: bool,
}

impl Request<'_> {
    fn in_type_expr(&self) -> bool {
        let node = self.tree.resolve_innermost(self.cursor, Bias::Before);
        self.tree.is_ancestor_of_kind(node, SyntaxKind::TypeSexpr)
    }
}

/// Classifies the cursor. `cursor` must already be validated against `source`.
pub(crate) fn classify_at(
    source: &str,
    tree: &SyntaxTree,
    cursor: u32,
    explicit: bool,
    config: CompletionConfig,
) -> Option<Classification> {
    let window = Window::before(source, cursor as usize, config.lookbehind);
    trace!(window = window.text, start = window.start, "completion window");

    let request = Request {
        tree,
        window,
        cursor,
        explicit,
    };

    for rule in &TRIGGER_RULES {
        let Some(m) = rule.pattern.find(window.text) else {
            continue;
        };
        return match (rule.handler)(&request, m) {
            Outcome::Complete(classification) => {
                debug!(
                    rule = rule.name,
                    context = ?classification.context,
                    anchor = classification.anchor,
                    "classified cursor"
                );
                Some(classification)
            }
            Outcome::Suppress => {
                debug!(rule = rule.name, cursor, "no completion at cursor");
                None
            }
        };
    }
    None
}

fn variable_reference(req: &Request<'_>, m: Match<'_>) -> Outcome {
    Outcome::Complete(Classification {
        context: CompletionContext::VariableReference,
        anchor: req.window.offset(m),
    })
}

fn type_annotation(req: &Request<'_>, m: Match<'_>) -> Outcome {
    // Replace from the optional `(` on, keeping the `:` and the space.
    let anchor = TYPE_PREFIX
        .find(req.window.text)
        .map_or_else(|| req.window.offset(m), |prefix| req.window.offset(prefix));
    Outcome::Complete(Classification {
        context: CompletionContext::TypePosition,
        anchor,
    })
}

fn word_fallback(req: &Request<'_>, m: Match<'_>) -> Outcome {
    let in_type = req.in_type_expr();
    if m.is_empty() && !req.window.text.ends_with('(') && !in_type && !req.explicit {
        return Outcome::Suppress;
    }

    let context = if in_type {
        CompletionContext::TypePosition
    } else {
        CompletionContext::General
    };
    Outcome::Complete(Classification {
        context,
        anchor: req.window.offset(m),
    })
}
