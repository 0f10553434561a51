/*
 * Character Codes
 *
 * Characters with special meaning in markup attribute names and directive syntax.
 */

//! Character constants used throughout the compiler

// Special characters
pub const TAB: char = '\t';
pub const LF: char = '\n';
pub const CR: char = '\r';
pub const SPACE: char = ' ';
pub const NBSP: char = '\u{00A0}';

// Punctuation
pub const BANG: char = '!';
pub const DQ: char = '"';
pub const SQ: char = '\'';
pub const STAR: char = '*';
pub const SLASH: char = '/';
pub const LT: char = '<';
pub const EQ: char = '=';
pub const GT: char = '>';
pub const QUESTION: char = '?';
pub const AT: char = '@';
pub const COLON: char = ':';

// Brackets
pub const LBRACKET: char = '[';
pub const RBRACKET: char = ']';

/// Whitespace as understood by attribute-name validation: every Unicode
/// whitespace character, including the non-breaking space.
pub fn is_whitespace(code: char) -> bool {
    code.is_whitespace() || code == NBSP
}

/// True for `None`, empty, or whitespace-only text.
pub fn is_null_or_whitespace(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(text) => text.chars().all(is_whitespace),
    }
}
