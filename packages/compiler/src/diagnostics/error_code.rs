//! Error Codes

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorCode {
    /// A tag matching rule targets a missing or whitespace-only tag name.
    InvalidTargetedTagNameNullOrWhitespace = 3001,
    InvalidTargetedTagName = 3002,

    /// A required attribute of a tag matching rule has a missing or whitespace-only name.
    InvalidTargetedAttributeNameNullOrWhitespace = 3003,
    InvalidTargetedAttributeName = 3004,

    /// A bound attribute has neither a name nor an indexer prefix, or its indexer
    /// prefix is whitespace only.
    InvalidBoundAttributeNullOrWhitespace = 3005,
    InvalidBoundAttributeName = 3006,
    InvalidBoundAttributeNameStartsWith = 3007,
    InvalidBoundAttributePrefix = 3008,
    InvalidBoundAttributePrefixStartsWith = 3009,

    /// A directive attribute whose name does not begin with `@`.
    InvalidBoundDirectiveAttributeName = 3010,
    InvalidBoundDirectiveAttributePrefix = 3011,

    InvalidBoundAttributeParameterNullOrWhitespace = 3012,
    InvalidBoundAttributeParameterName = 3013,

    /// The same component parameter is supplied more than once at a usage site.
    DuplicateComponentParameter = 9985,

    /// The same markup attribute appears more than once on an element.
    DuplicateMarkupAttribute = 10007,

    /// A markup attribute is also produced by a directive attribute on the same element.
    DuplicateMarkupAttributeDirective = 10008,
}

/// Diagnostic codes are rendered with an `RZ` prefix, e.g. `RZ3006`.
pub const DIAGNOSTIC_PREFIX: &str = "RZ";

pub fn diagnostic_id(code: ErrorCode) -> String {
    format!("{}{}", DIAGNOSTIC_PREFIX, code as i32)
}
