//! Descriptor Model
//!
//! Immutable descriptions of tag helpers, their bound attributes and parameters,
//! each produced by a validating builder.

pub mod bound_attribute;
pub mod bound_attribute_parameter;
pub mod catalog;
pub mod comparer;
pub mod display_name;
pub mod metadata;
pub mod tag_helper;
pub mod tag_matching_rule;

pub use bound_attribute::{BoundAttributeDescriptor, BoundAttributeDescriptorBuilder};
pub use bound_attribute_parameter::{
    BoundAttributeParameterDescriptor, BoundAttributeParameterDescriptorBuilder,
};
pub use catalog::{TagHelperCatalog, TagHelperDefinition};
pub use comparer::{CaseSensitive, DescriptorComparer, StructuralComparer};
pub use display_name::DescriptorOwner;
pub use metadata::Metadata;
pub use tag_helper::{TagHelperDescriptor, TagHelperDescriptorBuilder};
pub use tag_matching_rule::{
    NameComparison, RequiredAttribute, RequiredAttributeBuilder, TagMatchingRule,
    TagMatchingRuleBuilder,
};
