//! Static lexical tables for Polygolf.
//!
//! These tables are the shared contract between the lexer, the highlighter and completion:
//! a word that completes as a keyword must also lex and highlight as one.
//! Every table is a `&'static [&'static str]` and never changes at runtime.

/// Opcode names usable as the head of an s-expression.
pub const OPCODES: &[&str] = &[
    // binary
    "add",
    "sub",
    "mul",
    "div",
    "pow",
    "mod",
    "bit_and",
    "bit_or",
    "bit_xor",
    "min",
    "max",
    "lt",
    "leq",
    "eq",
    "neq",
    "gt",
    "geq",
    "or",
    "and",
    "array_contains",
    "list_contains",
    "table_contains_key",
    "set_contains",
    "array_get",
    "list_get",
    "table_get",
    "list_push",
    "concat",
    "repeat",
    "text_contains",
    "text_byte_find",
    "text_codepoint_find",
    "text_split",
    "text_get_byte",
    "text_get_byte_slice",
    "text_get_codepoint",
    "text_get_codepoint_slice",
    "join",
    "right_align",
    "int_to_bin_aligned",
    "int_to_hex_aligned",
    "simplify_fraction",
    // unary
    "abs",
    "bit_not",
    "neg",
    "not",
    "int_to_text",
    "int_to_bin",
    "int_to_hex",
    "text_to_int",
    "bool_to_int",
    "int_to_text_byte",
    "int_to_codepoint",
    "list_length",
    "text_byte_length",
    "text_codepoint_length",
    "text_split_whitespace",
    "text_byte_reversed",
    "text_codepoint_reversed",
    "text_byte_to_int",
    "codepoint_to_int",
    // nullary
    "true",
    "false",
    // effects
    "print",
    "println",
    "print_int",
    "println_int",
    "text_replace",
    "array_set",
    "list_set",
    "table_set",
    "sorted",
];

/// Heads of multi-part expressions that are not plain opcodes.
pub const SPECIAL_EXPRS: &[&str] = &[
    "func",
    "array",
    "list",
    "set",
    "table",
    "conditional",
    "unsafe_conditional",
    "while",
    "for",
    "for_argv",
    "if",
    "any_int",
];

/// Operator aliases. Symbolic aliases are lexed by longest match; word aliases are lexed as
/// words and reclassified.
pub const OPALIASES: &[&str] = &[
    "<-", "+", "-", "*", "^", "&", "|", "~", ">>", "<<", "==", "!=", "<=", "<", ">=", ">", "=>",
    "#", "..", "mod", "rem", "div", "trunc_div",
];

/// Value-level constants that take no arguments.
pub const NULLARY_CONSTANTS: &[&str] = &["true", "false"];

/// Type names that need no arguments.
pub const NULLARY_TYPES: &[&str] = &["Void", "Bool", "Int", "0..oo", "Text", "Ascii"];

/// Type constructors, written as `(Name args...)`.
pub const CONSTRUCTOR_TYPES: &[&str] = &["Text", "Ascii", "List", "Array", "Table", "Set", "Func"];

/// Sigil that introduces a variable reference.
pub const VARIABLE_SIGIL: char = '$';

/// Line comment marker.
pub const LINE_COMMENT: &str = "%";

pub fn is_opalias_word(word: &str) -> bool {
    OPALIASES
        .iter()
        .any(|alias| *alias == word && alias.starts_with(is_word_start))
}

pub fn is_nullary_constant(word: &str) -> bool {
    NULLARY_CONSTANTS.contains(&word)
}

/// Longest symbolic operator alias that `rest` starts with.
pub fn symbolic_opalias_prefix(rest: &str) -> Option<&'static str> {
    OPALIASES
        .iter()
        .copied()
        .filter(|alias| !alias.starts_with(is_word_start))
        .filter(|alias| rest.starts_with(alias))
        .max_by_key(|alias| alias.len())
}

pub fn is_word_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

pub fn is_word_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}
