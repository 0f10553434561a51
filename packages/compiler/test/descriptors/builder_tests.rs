//! Descriptor Builder Tests
//!
//! Validation and freezing of bound attributes, parameters and tag helpers.

use markup_compiler::descriptors::metadata::component;
use markup_compiler::descriptors::{
    BoundAttributeDescriptor, BoundAttributeDescriptorBuilder,
    BoundAttributeParameterDescriptorBuilder, DescriptorOwner, TagHelperDescriptorBuilder,
    TagMatchingRuleBuilder,
};
use markup_compiler::diagnostics::ErrorCode;
use markup_compiler::CompilerError;

fn owner() -> DescriptorOwner {
    DescriptorOwner::new("Test.Counter", Some("Test.Counter".to_string()))
}

fn build<F>(configure: F) -> BoundAttributeDescriptor
where
    F: FnOnce(&mut BoundAttributeDescriptorBuilder),
{
    let mut builder = BoundAttributeDescriptorBuilder::create(owner(), component::TAG_HELPER_KIND).unwrap();
    configure(&mut builder);
    builder.build()
}

fn codes(attribute: &BoundAttributeDescriptor) -> Vec<ErrorCode> {
    attribute.diagnostics().iter().map(|d| d.code).collect()
}

#[test]
fn should_report_empty_name_once() {
    let attribute = build(|b| {
        b.name("");
    });
    assert_eq!(codes(&attribute), vec![ErrorCode::InvalidBoundAttributeNullOrWhitespace]);
    assert!(attribute.has_errors());
}

#[test]
fn should_report_missing_name_without_indexer() {
    let attribute = build(|_| {});
    assert_eq!(codes(&attribute), vec![ErrorCode::InvalidBoundAttributeNullOrWhitespace]);
}

#[test]
fn should_allow_missing_name_with_indexer() {
    let attribute = build(|b| {
        b.as_dictionary("item-", "System.String");
    });
    assert!(attribute.diagnostics().is_empty());
    assert!(attribute.has_indexer());
    assert!(attribute.is_indexer_string_property());
}

#[test]
fn should_report_reserved_data_prefix_once() {
    let attribute = build(|b| {
        b.name("data-foo");
    });
    assert_eq!(codes(&attribute), vec![ErrorCode::InvalidBoundAttributeNameStartsWith]);
}

#[test]
fn should_match_data_prefix_ignoring_case() {
    let attribute = build(|b| {
        b.name("DATA-foo");
    });
    assert_eq!(codes(&attribute), vec![ErrorCode::InvalidBoundAttributeNameStartsWith]);
}

#[test]
fn should_require_marker_on_directive_attribute() {
    let attribute = build(|b| {
        b.name("foo").directive_attribute();
    });
    assert_eq!(codes(&attribute), vec![ErrorCode::InvalidBoundDirectiveAttributeName]);
}

#[test]
fn should_strip_marker_before_checking_directive_characters() {
    let attribute = build(|b| {
        b.name("@bind").directive_attribute();
    });
    assert!(attribute.diagnostics().is_empty());
    assert!(attribute.is_directive_attribute());
}

#[test]
fn should_reject_marker_on_plain_attribute() {
    let attribute = build(|b| {
        b.name("@foo");
    });
    assert_eq!(codes(&attribute), vec![ErrorCode::InvalidBoundAttributeName]);
    assert!(attribute.diagnostics()[0].message.contains("'@'"));
}

#[test]
fn should_cite_the_invalid_character() {
    let attribute = build(|b| {
        b.name("a\"b");
    });
    assert_eq!(codes(&attribute), vec![ErrorCode::InvalidBoundAttributeName]);
    assert!(attribute.diagnostics()[0].message.contains("'\"'"));
}

#[test]
fn should_report_each_distinct_invalid_character() {
    let attribute = build(|b| {
        b.name("a b=c");
    });
    assert_eq!(
        codes(&attribute),
        vec![ErrorCode::InvalidBoundAttributeName, ErrorCode::InvalidBoundAttributeName]
    );
}

#[test]
fn should_validate_indexer_prefix() {
    let attribute = build(|b| {
        b.name("Values").as_dictionary("data-", "System.String");
    });
    assert_eq!(codes(&attribute), vec![ErrorCode::InvalidBoundAttributePrefixStartsWith]);

    let attribute = build(|b| {
        b.name("Values").as_dictionary("a>", "System.String");
    });
    assert_eq!(codes(&attribute), vec![ErrorCode::InvalidBoundAttributePrefix]);

    let attribute = build(|b| {
        b.name("@values")
            .as_dictionary("values-", "System.String")
            .directive_attribute();
    });
    assert_eq!(codes(&attribute), vec![ErrorCode::InvalidBoundDirectiveAttributePrefix]);
}

#[test]
fn should_report_whitespace_indexer_prefix_as_null_or_whitespace() {
    let attribute = build(|b| {
        b.name("Values").as_dictionary("   ", "System.String");
    });
    assert_eq!(codes(&attribute), vec![ErrorCode::InvalidBoundAttributeNullOrWhitespace]);
}

#[test]
fn should_compute_display_name_from_owner_and_property() {
    let attribute = build(|b| {
        b.name("IncrementAmount")
            .type_name("System.Int32")
            .property_name("IncrementAmount");
    });
    assert_eq!(attribute.display_name(), Some("int Test.Counter.IncrementAmount"));
}

#[test]
fn should_fall_back_to_name_for_display_name() {
    let attribute = build(|b| {
        b.name("title").type_name("System.String");
    });
    assert_eq!(attribute.display_name(), Some("title"));
    assert!(attribute.is_string_property());
}

#[test]
fn should_keep_explicit_display_name() {
    let attribute = build(|b| {
        b.name("title")
            .type_name("System.String")
            .property_name("Title")
            .display_name("Title");
    });
    assert_eq!(attribute.display_name(), Some("Title"));
}

#[test]
fn should_keep_parameters_differing_only_in_case() {
    let attribute = build(|b| {
        b.name("@bind").directive_attribute();
        b.bind_attribute_parameter(|p| {
            p.name("Foo");
        });
        b.bind_attribute_parameter(|p| {
            p.name("foo");
        });
    });
    let names: Vec<_> = attribute.parameters().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec![Some("Foo"), Some("foo")]);
}

#[test]
fn should_collapse_identical_parameters() {
    let attribute = build(|b| {
        b.name("@bind").directive_attribute();
        for _ in 0..2 {
            b.bind_attribute_parameter(|p| {
                p.name("format").type_name("System.String").documentation("Format.");
            });
        }
    });
    assert_eq!(attribute.parameters().len(), 1);
}

#[test]
fn should_validate_parameters_with_attribute_display_name() {
    let attribute = build(|b| {
        b.name("@bind").directive_attribute();
        b.bind_attribute_parameter(|p| {
            p.name("for/mat");
        });
    });
    let parameter = &attribute.parameters()[0];
    assert_eq!(parameter.diagnostics().len(), 1);
    assert_eq!(parameter.diagnostics()[0].code, ErrorCode::InvalidBoundAttributeParameterName);
    assert!(parameter.diagnostics()[0].message.contains("@bind"));
    assert!(parameter.has_errors());
}

#[test]
fn should_keep_caller_diagnostics() {
    let extra = markup_compiler::diagnostics::factory::duplicate_markup_attribute("x", None);
    let attribute = build(|b| {
        b.name("data-x").add_diagnostic(extra.clone());
    });
    assert_eq!(attribute.diagnostics().len(), 2);
    assert!(attribute.diagnostics().contains(&extra));
}

#[test]
fn should_fail_on_empty_kind() {
    assert_eq!(
        BoundAttributeDescriptorBuilder::create(owner(), "").unwrap_err(),
        CompilerError::MissingArgument("kind")
    );
    assert!(BoundAttributeDescriptorBuilder::create(owner(), "ITagHelper").is_ok());
}

#[test]
fn should_fail_on_empty_parameter_kind() {
    assert_eq!(
        BoundAttributeParameterDescriptorBuilder::create("").unwrap_err(),
        CompilerError::MissingArgument("kind")
    );
    let mut builder = BoundAttributeParameterDescriptorBuilder::create(component::BIND_KIND).unwrap();
    builder.name("format");
    assert_eq!(builder.build().kind(), component::BIND_KIND);
}

#[test]
fn should_aggregate_nested_errors_on_tag_helper() {
    let mut builder =
        TagHelperDescriptorBuilder::create(component::TAG_HELPER_KIND, "Test.Counter", "Test").unwrap();
    builder
        .bind_attribute(|attribute| {
            attribute.name("ok");
        })
        .bind_attribute(|attribute| {
            attribute.name("bad=");
        })
        .tag_matching_rule(|rule| {
            rule.tag_name(" ");
        });
    let descriptor = builder.build();

    let codes: Vec<_> = descriptor.all_diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::InvalidBoundAttributeName,
            ErrorCode::InvalidTargetedTagNameNullOrWhitespace
        ]
    );
    assert!(descriptor.has_errors());
}

#[test]
fn should_dedupe_attributes_ignoring_case() {
    let mut builder =
        TagHelperDescriptorBuilder::create(component::TAG_HELPER_KIND, "Test.Counter", "Test").unwrap();
    builder
        .bind_attribute(|attribute| {
            attribute.name("Title").display_name("Title");
        })
        .bind_attribute(|attribute| {
            attribute.name("title").display_name("Title");
        });
    assert_eq!(builder.build().bound_attributes().len(), 1);
}

#[test]
fn should_validate_required_attributes() {
    let mut builder = TagMatchingRuleBuilder::new();
    builder
        .tag_name("input")
        .require_attribute(|attribute| {
            attribute.name("@bind");
        })
        .require_attribute(|attribute| {
            attribute.name("a<b");
        })
        .require_attribute(|_| {});
    let rule = builder.build();

    let codes: Vec<_> = rule.all_diagnostics().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::InvalidTargetedAttributeName,
            ErrorCode::InvalidTargetedAttributeNameNullOrWhitespace
        ]
    );
}

#[test]
fn should_accept_catch_all_tag_name() {
    let mut builder = TagMatchingRuleBuilder::new();
    builder.tag_name("*");
    let rule = builder.build();
    assert!(rule.is_catch_all());
    assert!(!rule.has_errors());
}
