//! Diagnostic Factory
//!
//! Owns every diagnostic message template. Descriptor diagnostics have no source
//! span; usage-site diagnostics carry the span of the offending node.

use super::diagnostic::{Diagnostic, Severity};
use super::error_code::ErrorCode;
use crate::parse_util::SourceSpan;

fn error(code: ErrorCode, message: String, span: Option<SourceSpan>) -> Diagnostic {
    Diagnostic::new(code, Severity::Error, message, span)
}

pub fn invalid_targeted_tag_name_null_or_whitespace() -> Diagnostic {
    error(
        ErrorCode::InvalidTargetedTagNameNullOrWhitespace,
        "Targeted tag name cannot be null or whitespace.".to_string(),
        None,
    )
}

pub fn invalid_targeted_tag_name(tag_name: &str, invalid: char) -> Diagnostic {
    error(
        ErrorCode::InvalidTargetedTagName,
        format!(
            "Tag helpers cannot target tag name '{}' because it contains a '{}' character.",
            tag_name, invalid
        ),
        None,
    )
}

pub fn invalid_targeted_attribute_name_null_or_whitespace() -> Diagnostic {
    error(
        ErrorCode::InvalidTargetedAttributeNameNullOrWhitespace,
        "Targeted attribute name cannot be null or whitespace.".to_string(),
        None,
    )
}

pub fn invalid_targeted_attribute_name(attribute_name: &str, invalid: char) -> Diagnostic {
    error(
        ErrorCode::InvalidTargetedAttributeName,
        format!(
            "Tag helpers cannot target attribute name '{}' because it contains a '{}' character.",
            attribute_name, invalid
        ),
        None,
    )
}

pub fn invalid_bound_attribute_null_or_whitespace(
    tag_helper_display_name: &str,
    property_display_name: &str,
) -> Diagnostic {
    error(
        ErrorCode::InvalidBoundAttributeNullOrWhitespace,
        format!(
            "Invalid tag helper bound property '{}' on tag helper '{}'. Tag helpers cannot bind to HTML attributes with a null or empty name.",
            property_display_name, tag_helper_display_name
        ),
        None,
    )
}

pub fn invalid_bound_attribute_name(
    tag_helper_display_name: &str,
    property_display_name: &str,
    invalid_name: &str,
    invalid: char,
) -> Diagnostic {
    error(
        ErrorCode::InvalidBoundAttributeName,
        format!(
            "Invalid tag helper bound property '{}' on tag helper '{}'. Tag helpers cannot bind to HTML attributes with name '{}' because the name contains a '{}' character.",
            property_display_name, tag_helper_display_name, invalid_name, invalid
        ),
        None,
    )
}

pub fn invalid_bound_attribute_name_starts_with(
    tag_helper_display_name: &str,
    property_display_name: &str,
    invalid_name: &str,
) -> Diagnostic {
    error(
        ErrorCode::InvalidBoundAttributeNameStartsWith,
        format!(
            "Invalid tag helper bound property '{}' on tag helper '{}'. Tag helpers cannot bind to HTML attributes with name '{}' because the name starts with '{}'.",
            property_display_name,
            tag_helper_display_name,
            invalid_name,
            crate::html_conventions::DATA_DASH_PREFIX
        ),
        None,
    )
}

pub fn invalid_bound_attribute_prefix(
    tag_helper_display_name: &str,
    property_display_name: &str,
    invalid_prefix: &str,
    invalid: char,
) -> Diagnostic {
    error(
        ErrorCode::InvalidBoundAttributePrefix,
        format!(
            "Invalid tag helper bound property '{}' on tag helper '{}'. Tag helpers cannot bind to HTML attributes with prefix '{}' because the prefix contains a '{}' character.",
            property_display_name, tag_helper_display_name, invalid_prefix, invalid
        ),
        None,
    )
}

pub fn invalid_bound_attribute_prefix_starts_with(
    tag_helper_display_name: &str,
    property_display_name: &str,
    invalid_prefix: &str,
) -> Diagnostic {
    error(
        ErrorCode::InvalidBoundAttributePrefixStartsWith,
        format!(
            "Invalid tag helper bound property '{}' on tag helper '{}'. Tag helpers cannot bind to HTML attributes with prefix '{}' because the prefix starts with '{}'.",
            property_display_name,
            tag_helper_display_name,
            invalid_prefix,
            crate::html_conventions::DATA_DASH_PREFIX
        ),
        None,
    )
}

pub fn invalid_bound_directive_attribute_name(
    tag_helper_display_name: &str,
    property_display_name: &str,
    invalid_name: &str,
) -> Diagnostic {
    error(
        ErrorCode::InvalidBoundDirectiveAttributeName,
        format!(
            "Invalid tag helper bound attribute '{}' on tag helper '{}'. Tag helpers cannot bind to directive attributes with name '{}' because the name does not start with '@'.",
            property_display_name, tag_helper_display_name, invalid_name
        ),
        None,
    )
}

pub fn invalid_bound_directive_attribute_prefix(
    tag_helper_display_name: &str,
    property_display_name: &str,
    invalid_prefix: &str,
) -> Diagnostic {
    error(
        ErrorCode::InvalidBoundDirectiveAttributePrefix,
        format!(
            "Invalid tag helper bound attribute '{}' on tag helper '{}'. Tag helpers cannot bind to directive attributes with prefix '{}' because the prefix does not start with '@'.",
            property_display_name, tag_helper_display_name, invalid_prefix
        ),
        None,
    )
}

pub fn invalid_bound_attribute_parameter_null_or_whitespace(attribute_display_name: &str) -> Diagnostic {
    error(
        ErrorCode::InvalidBoundAttributeParameterNullOrWhitespace,
        format!(
            "Invalid bound attribute parameter on bound attribute '{}'. Parameters cannot have a null or empty name.",
            attribute_display_name
        ),
        None,
    )
}

pub fn invalid_bound_attribute_parameter_name(
    attribute_display_name: &str,
    invalid_name: &str,
    invalid: char,
) -> Diagnostic {
    error(
        ErrorCode::InvalidBoundAttributeParameterName,
        format!(
            "Invalid bound attribute parameter '{}' on bound attribute '{}'. Parameter names cannot contain a '{}' character.",
            invalid_name, attribute_display_name, invalid
        ),
        None,
    )
}

pub fn duplicate_component_parameter(parameter_name: &str, span: Option<SourceSpan>) -> Diagnostic {
    error(
        ErrorCode::DuplicateComponentParameter,
        format!(
            "The component parameter '{}' is used two or more times for this component. Parameters must be unique (case-sensitive).",
            parameter_name
        ),
        span,
    )
}

pub fn duplicate_markup_attribute(attribute_name: &str, span: Option<SourceSpan>) -> Diagnostic {
    error(
        ErrorCode::DuplicateMarkupAttribute,
        format!(
            "The attribute '{}' is used two or more times for this element. Attributes must be unique (case-insensitive).",
            attribute_name
        ),
        span,
    )
}

pub fn duplicate_markup_attribute_directive(
    attribute_name: &str,
    directive_attribute_name: &str,
    span: Option<SourceSpan>,
) -> Diagnostic {
    error(
        ErrorCode::DuplicateMarkupAttributeDirective,
        format!(
            "The attribute '{}' is used two or more times for this element. Attributes must be unique (case-insensitive). The attribute '{}' is used by the '{}' directive attribute.",
            attribute_name, attribute_name, directive_attribute_name
        ),
        span,
    )
}
