//! Structural Comparer Tests
//!
//! Equality/hash contract for both comparer variants.

use markup_compiler::descriptors::metadata::component;
use markup_compiler::descriptors::{
    BoundAttributeDescriptor, BoundAttributeDescriptorBuilder, BoundAttributeParameterDescriptor,
    BoundAttributeParameterDescriptorBuilder, DescriptorComparer, DescriptorOwner, StructuralComparer,
    TagHelperDescriptor, TagHelperDescriptorBuilder,
};

fn parameter(name: &str, metadata: &[(&str, &str)]) -> BoundAttributeParameterDescriptor {
    let mut builder = BoundAttributeParameterDescriptorBuilder::create(component::BIND_KIND).unwrap();
    builder
        .name(name)
        .type_name("System.String")
        .documentation("Format used when binding.")
        .display_name(":format");
    for (key, value) in metadata {
        builder.metadata(*key, *value);
    }
    builder.build()
}

fn attribute(name: &str) -> BoundAttributeDescriptor {
    let mut builder = BoundAttributeDescriptorBuilder::create(DescriptorOwner::default(), component::TAG_HELPER_KIND).unwrap();
    builder
        .name(name)
        .type_name("System.Int32")
        .display_name("int Test.Counter.Value");
    builder.build()
}

fn tag_helper(name: &str) -> TagHelperDescriptor {
    let mut builder =
        TagHelperDescriptorBuilder::create(component::TAG_HELPER_KIND, name, "Test").unwrap();
    builder.display_name("Counter").bind_attribute(|attribute| {
        attribute.name("Value").display_name("Value");
    });
    builder.build()
}

const COMPARERS: [DescriptorComparer; 2] = [DescriptorComparer::DEFAULT, DescriptorComparer::CASE_SENSITIVE];

#[test]
fn equal_descriptors_hash_equal() {
    let samples = [
        parameter("format", &[("a", "1")]),
        parameter("Format", &[("a", "1")]),
        parameter("format", &[("a", "2")]),
        parameter("culture", &[]),
    ];
    for comparer in COMPARERS {
        for x in &samples {
            for y in &samples {
                if comparer.equals(x, y) {
                    assert_eq!(comparer.hash_code(x), comparer.hash_code(y));
                }
            }
        }
    }
}

#[test]
fn equality_is_reflexive_symmetric_and_transitive() {
    let a = parameter("format", &[]);
    let b = parameter("FORMAT", &[]);
    let c = parameter("Format", &[]);
    let comparer = DescriptorComparer::DEFAULT;

    assert!(comparer.equals(&a, &a));
    assert_eq!(comparer.equals(&a, &b), comparer.equals(&b, &a));
    assert!(comparer.equals(&a, &b) && comparer.equals(&b, &c));
    assert!(comparer.equals(&a, &c));
}

#[test]
fn metadata_order_does_not_affect_equality() {
    let first = parameter("format", &[("a", "1"), ("b", "2")]);
    let second = parameter("format", &[("b", "2"), ("a", "1")]);
    for comparer in COMPARERS {
        assert!(comparer.equals(&first, &second));
        assert_eq!(comparer.hash_code(&first), comparer.hash_code(&second));
    }
    let keys: Vec<_> = second.metadata().keys().cloned().collect();
    assert_eq!(keys, vec!["b".to_string(), "a".to_string()]);
}

#[test]
fn metadata_values_take_part_in_equality() {
    let first = parameter("format", &[("a", "1")]);
    let second = parameter("format", &[("a", "2")]);
    assert!(!DescriptorComparer::DEFAULT.equals(&first, &second));
}

#[test]
fn name_case_depends_on_comparer() {
    let lower = parameter("format", &[]);
    let upper = parameter("Format", &[]);
    assert!(DescriptorComparer::DEFAULT.equals(&lower, &upper));
    assert!(!DescriptorComparer::CASE_SENSITIVE.equals(&lower, &upper));

    let lower = attribute("value");
    let upper = attribute("Value");
    assert!(DescriptorComparer::DEFAULT.equals(&lower, &upper));
    assert!(!DescriptorComparer::CASE_SENSITIVE.equals(&lower, &upper));

    let lower = tag_helper("test.counter");
    let upper = tag_helper("Test.Counter");
    assert!(DescriptorComparer::DEFAULT.equals(&lower, &upper));
    assert!(!DescriptorComparer::CASE_SENSITIVE.equals(&lower, &upper));
}

#[test]
fn hash_ignores_fields_outside_kind_and_name() {
    let mut documented = BoundAttributeParameterDescriptorBuilder::create(component::BIND_KIND).unwrap();
    documented.name("format").documentation("one");
    let mut other = BoundAttributeParameterDescriptorBuilder::create(component::BIND_KIND).unwrap();
    other.name("format").documentation("two");
    let (documented, other) = (documented.build(), other.build());

    let comparer = DescriptorComparer::DEFAULT;
    assert!(!comparer.equals(&documented, &other));
    assert_eq!(comparer.hash_code(&documented), comparer.hash_code(&other));
}

#[test]
fn kind_is_compared_exactly() {
    let mut bind = BoundAttributeParameterDescriptorBuilder::create(component::BIND_KIND).unwrap();
    bind.name("format");
    let mut other = BoundAttributeParameterDescriptorBuilder::create("components.bind").unwrap();
    other.name("format");
    assert!(!DescriptorComparer::DEFAULT.equals(&bind.build(), &other.build()));
}

#[test]
fn enum_flag_takes_part_in_equality() {
    let mut plain = BoundAttributeParameterDescriptorBuilder::create(component::BIND_KIND).unwrap();
    plain.name("mode");
    let mut flagged = BoundAttributeParameterDescriptorBuilder::create(component::BIND_KIND).unwrap();
    flagged.name("mode").is_enum(true);
    assert!(!DescriptorComparer::DEFAULT.equals(&plain.build(), &flagged.build()));
}

#[test]
fn nested_attributes_are_compared() {
    let mut first =
        TagHelperDescriptorBuilder::create(component::TAG_HELPER_KIND, "Test.Counter", "Test").unwrap();
    first.bind_attribute(|attribute| {
        attribute.name("Value").display_name("Value");
    });
    let mut second =
        TagHelperDescriptorBuilder::create(component::TAG_HELPER_KIND, "Test.Counter", "Test").unwrap();
    second.bind_attribute(|attribute| {
        attribute.name("Value").display_name("Value").documentation("Changed.");
    });
    assert_ne!(first.build(), second.build());
}

#[test]
fn partial_eq_uses_default_comparer() {
    assert_eq!(parameter("format", &[]), parameter("FORMAT", &[]));
    assert_eq!(attribute("value"), attribute("VALUE"));
    assert_eq!(tag_helper("Test.Counter"), tag_helper("test.counter"));
}
