//! HTML Conventions
//!
//! The fixed rule set deciding which names a bound attribute may use.

use crate::chars;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Reserved for client script; nothing may bind to `data-*` attributes.
pub const DATA_DASH_PREFIX: &str = "data-";

/// Characters that may not appear in an HTML attribute name, other than whitespace.
pub static INVALID_NON_WHITESPACE_HTML_CHARACTERS: Lazy<HashSet<char>> = Lazy::new(|| {
    [
        chars::AT,
        chars::BANG,
        chars::LT,
        chars::SLASH,
        chars::QUESTION,
        chars::LBRACKET,
        chars::GT,
        chars::RBRACKET,
        chars::EQ,
        chars::DQ,
        chars::SQ,
        chars::STAR,
    ]
    .into_iter()
    .collect()
});

/// Returns true when `character` cannot appear in an attribute name.
pub fn is_invalid_name_character(character: char) -> bool {
    chars::is_whitespace(character) || INVALID_NON_WHITESPACE_HTML_CHARACTERS.contains(&character)
}

/// Every offending character of `name`, in order and with repeats, so that each
/// occurrence can be reported on its own.
pub fn invalid_name_characters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().filter(|c| is_invalid_name_character(*c))
}

/// Case-insensitive check for the reserved `data-` prefix.
pub fn starts_with_data_dash(name: &str) -> bool {
    name.len() >= DATA_DASH_PREFIX.len()
        && name.is_char_boundary(DATA_DASH_PREFIX.len())
        && name[..DATA_DASH_PREFIX.len()].eq_ignore_ascii_case(DATA_DASH_PREFIX)
}

/// Strips the leading directive marker when present.
pub fn strip_directive_marker(name: &str) -> Option<&str> {
    name.strip_prefix(chars::AT)
}
