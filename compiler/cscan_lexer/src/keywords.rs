//! C/C++ keyword table.
//!
//! Keywords stay `Identifier` tokens; this table only answers whether a
//! given identifier is reserved. Symbol tables use it to keep keywords out
//! of the identifier list.
//!
//! The lookup uses the identifier's length as a first-pass filter
//! (keywords range from 2-9 chars), then matches against the keywords of
//! that length.

/// Every recognized keyword, alphabetically.
pub const KEYWORDS: [&str; 52] = [
    "auto",
    "bool",
    "break",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "delete",
    "do",
    "double",
    "else",
    "enum",
    "extern",
    "false",
    "float",
    "for",
    "friend",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "namespace",
    "new",
    "operator",
    "private",
    "protected",
    "public",
    "register",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "struct",
    "switch",
    "template",
    "this",
    "throw",
    "true",
    "try",
    "typedef",
    "union",
    "unsigned",
    "using",
    "virtual",
    "void",
    "volatile",
    "while",
];

/// Returns `true` if `text` is a reserved keyword.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    let len = text.len();
    if !(2..=9).contains(&len) || !text.as_bytes()[0].is_ascii_lowercase() {
        return false;
    }
    match len {
        2 => matches!(text, "do" | "if"),
        3 => matches!(text, "for" | "int" | "new" | "try"),
        4 => matches!(
            text,
            "auto" | "bool" | "case" | "char" | "else" | "enum" | "goto" | "long" | "this"
                | "true" | "void"
        ),
        5 => matches!(
            text,
            "break" | "catch" | "class" | "const" | "false" | "float" | "short" | "throw"
                | "union" | "using" | "while"
        ),
        6 => matches!(
            text,
            "delete"
                | "double"
                | "extern"
                | "friend"
                | "inline"
                | "public"
                | "return"
                | "signed"
                | "sizeof"
                | "static"
                | "struct"
                | "switch"
        ),
        7 => matches!(text, "default" | "private" | "typedef" | "virtual"),
        8 => matches!(
            text,
            "continue" | "operator" | "register" | "template" | "unsigned" | "volatile"
        ),
        9 => matches!(text, "namespace" | "protected"),
        _ => false,
    }
}

#[cfg(test)]
mod tests;
