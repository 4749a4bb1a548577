use syntax::parse;

use crate::tests::completion_dsl::{init_tracing, t};
use crate::{
    Classification, CompletionConfig, CompletionContext, CompletionKind, IdeError, classify,
    complete, complete_with_tree,
};

#[test]
fn test_variable_after_sigil_lists_other_variables() {
    t("$a + $<|>")
        .expect_context(CompletionContext::VariableReference)
        .expect_anchor(5)
        .expect_labels(&["$a"])
        .expect_kinds_only(CompletionKind::Variable);
}

#[test]
fn test_variable_being_typed_is_excluded_by_start() {
    t("$abc $b + $a<|>")
        .expect_context(CompletionContext::VariableReference)
        .expect_anchor(10)
        .expect_labels(&["$abc", "$b"]);
}

#[test]
fn test_variable_duplicates_are_kept_in_document_order() {
    t("$x $x $x (add $<|>")
        .expect_anchor(14)
        .expect_labels(&["$x", "$x", "$x"]);
}

#[test]
fn test_variable_window_is_line_local() {
    t("$a\n$<|>")
        .expect_context(CompletionContext::VariableReference)
        .expect_anchor(3)
        .expect_labels(&["$a"]);
}

#[test]
fn test_annotation_open_paren_anchors_on_paren() {
    t("x: (<|>")
        .expect_context(CompletionContext::TypePosition)
        .expect_anchor(3)
        .expect_contains(&["Void", "Int", "0..oo", "(List"])
        .expect_kinds_only(CompletionKind::Type);
}

#[test]
fn test_annotation_partial_type_name() {
    t("$n:In<|>")
        .expect_context(CompletionContext::TypePosition)
        .expect_anchor(3);
    t("$l:(Li<|>")
        .expect_context(CompletionContext::TypePosition)
        .expect_anchor(3);
    t("$n: <|>")
        .expect_context(CompletionContext::TypePosition)
        .expect_anchor(4);
}

#[test]
fn test_word_inside_type_sexpr_is_type_position() {
    t("$x:(List <|>")
        .expect_context(CompletionContext::TypePosition)
        .expect_anchor(9);
    t("$x:(List (Set In<|>")
        .expect_context(CompletionContext::TypePosition)
        .expect_anchor(14);
}

#[test]
fn test_sexpr_head_is_general() {
    t("(pri<|>")
        .expect_context(CompletionContext::General)
        .expect_anchor(1)
        .expect_contains(&["println", "print", "for"])
        .expect_kinds_only(CompletionKind::Keyword);
}

#[test]
fn test_empty_word_after_open_paren_is_offered() {
    t("(<|>")
        .expect_context(CompletionContext::General)
        .expect_anchor(1);
}

#[test]
fn test_empty_word_is_suppressed_unless_explicit() {
    t("(add <|>").expect_none();
    t("(add <|>")
        .explicit()
        .expect_context(CompletionContext::General)
        .expect_anchor(5);
}

#[test]
fn test_empty_document() {
    t("<|>").expect_none();
    t("<|>")
        .explicit()
        .expect_context(CompletionContext::General)
        .expect_anchor(0)
        .expect_contains(&["add"]);
}

#[test]
fn test_annotation_does_not_cross_lines() {
    t("x:\n<|>").expect_none();
}

#[test]
fn test_lookbehind_limits_the_window() {
    // Only "c" is visible, so the sigil is out of reach.
    t("$abc<|>")
        .lookbehind(1)
        .expect_context(CompletionContext::General)
        .expect_anchor(3);
}

#[test]
fn test_repeated_requests_are_identical() {
    init_tracing();
    let source = "(for $i 0 10 (println $";
    let tree = parse(source).tree;
    let cursor = source.len();
    let config = CompletionConfig::default();

    let first = classify(source, &tree, cursor, false, config);
    let second = classify(source, &tree, cursor, false, config);
    assert_eq!(first, second);
    assert_eq!(
        first,
        Ok(Some(Classification {
            context: CompletionContext::VariableReference,
            anchor: 22,
        }))
    );

    let first = complete(source, cursor, false, config).expect("valid cursor");
    let second = complete(source, cursor, false, config).expect("valid cursor");
    let reused = complete_with_tree(source, &tree, cursor, false, config).expect("valid cursor");
    assert_eq!(first, second);
    assert_eq!(first, reused);
    let labels: Vec<String> = first
        .expect("variable completion")
        .items
        .into_iter()
        .map(|item| item.label)
        .collect();
    assert_eq!(labels, ["$i"]);
}

#[test]
fn test_invalid_cursor_is_rejected() {
    let config = CompletionConfig::default();
    assert_eq!(
        complete("ab", 3, false, config),
        Err(IdeError::InvalidCursor)
    );
    // Inside the two-byte "é".
    assert_eq!(complete("é", 1, true, config), Err(IdeError::InvalidCursor));
    assert_eq!(IdeError::InvalidCursor.message(), "Invalid cursor");
}

#[test]
fn test_cursor_at_end_of_multibyte_text_is_valid() {
    // "é" is not a word character, so only an explicit request completes here.
    t("(print \"é\" $é<|>").expect_none();
    t("(print \"é\" $é<|>")
        .explicit()
        .expect_context(CompletionContext::General)
        .expect_anchor(15);
}
