//! Structural Comparers
//!
//! Equality compares every identifying field; hashing covers only kind and
//! name, under the same casing rule as equality. Keep the hash that narrow.

use super::bound_attribute::BoundAttributeDescriptor;
use super::bound_attribute_parameter::BoundAttributeParameterDescriptor;
use super::tag_helper::TagHelperDescriptor;
use super::tag_matching_rule::{RequiredAttribute, TagMatchingRule};
use std::hash::{Hash, Hasher};
use xxhash_rust::xxh3::Xxh3;

/// Equality and hashing for descriptors under one name-casing rule.
pub trait StructuralComparer<T: ?Sized> {
    fn equals(&self, x: &T, y: &T) -> bool;

    fn hash_into<H: Hasher>(&self, value: &T, state: &mut H);

    fn hash_code(&self, value: &T) -> u64 {
        let mut hasher = Xxh3::new();
        self.hash_into(value, &mut hasher);
        hasher.finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorComparer {
    case_sensitive: bool,
}

impl DescriptorComparer {
    /// Case-insensitive names. Used for matching attributes at usage sites.
    pub const DEFAULT: DescriptorComparer = DescriptorComparer {
        case_sensitive: false,
    };

    /// Ordinal names. Used to deduplicate parameter declarations.
    pub const CASE_SENSITIVE: DescriptorComparer = DescriptorComparer {
        case_sensitive: true,
    };

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn names_equal(&self, x: Option<&str>, y: Option<&str>) -> bool {
        match (x, y) {
            (Some(x), Some(y)) if self.case_sensitive => x == y,
            (Some(x), Some(y)) => fold_case(x).eq(fold_case(y)),
            (None, None) => true,
            _ => false,
        }
    }

    fn hash_name<H: Hasher>(&self, name: Option<&str>, state: &mut H) {
        match name {
            None => state.write_u8(0),
            Some(name) => {
                state.write_u8(1);
                if self.case_sensitive {
                    name.hash(state);
                } else {
                    for character in fold_case(name) {
                        character.hash(state);
                    }
                    state.write_u8(0xff);
                }
            }
        }
    }

    fn sequences_equal<T>(&self, x: &[T], y: &[T]) -> bool
    where
        Self: StructuralComparer<T>,
    {
        x.len() == y.len() && x.iter().zip(y).all(|(x, y)| self.equals(x, y))
    }
}

fn fold_case(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

impl StructuralComparer<BoundAttributeParameterDescriptor> for DescriptorComparer {
    fn equals(&self, x: &BoundAttributeParameterDescriptor, y: &BoundAttributeParameterDescriptor) -> bool {
        if std::ptr::eq(x, y) {
            return true;
        }
        x.kind == y.kind
            && x.is_enum == y.is_enum
            && self.names_equal(x.name.as_deref(), y.name.as_deref())
            && x.type_name == y.type_name
            && x.documentation == y.documentation
            && x.display_name == y.display_name
            && x.metadata == y.metadata
    }

    fn hash_into<H: Hasher>(&self, value: &BoundAttributeParameterDescriptor, state: &mut H) {
        value.kind.hash(state);
        self.hash_name(value.name.as_deref(), state);
    }
}

impl StructuralComparer<BoundAttributeDescriptor> for DescriptorComparer {
    fn equals(&self, x: &BoundAttributeDescriptor, y: &BoundAttributeDescriptor) -> bool {
        if std::ptr::eq(x, y) {
            return true;
        }
        x.kind == y.kind
            && x.is_enum == y.is_enum
            && x.is_dictionary == y.is_dictionary
            && self.names_equal(x.name.as_deref(), y.name.as_deref())
            && self.names_equal(
                x.indexer_name_prefix.as_deref(),
                y.indexer_name_prefix.as_deref(),
            )
            && x.type_name == y.type_name
            && x.indexer_value_type_name == y.indexer_value_type_name
            && x.documentation == y.documentation
            && x.display_name == y.display_name
            && x.metadata == y.metadata
            && self.sequences_equal(&x.parameters, &y.parameters)
    }

    fn hash_into<H: Hasher>(&self, value: &BoundAttributeDescriptor, state: &mut H) {
        value.kind.hash(state);
        self.hash_name(value.name.as_deref(), state);
    }
}

impl StructuralComparer<RequiredAttribute> for DescriptorComparer {
    fn equals(&self, x: &RequiredAttribute, y: &RequiredAttribute) -> bool {
        x.name_comparison == y.name_comparison
            && self.names_equal(x.name.as_deref(), y.name.as_deref())
            && x.value == y.value
    }

    fn hash_into<H: Hasher>(&self, value: &RequiredAttribute, state: &mut H) {
        self.hash_name(value.name.as_deref(), state);
    }
}

impl StructuralComparer<TagMatchingRule> for DescriptorComparer {
    fn equals(&self, x: &TagMatchingRule, y: &TagMatchingRule) -> bool {
        self.names_equal(x.tag_name.as_deref(), y.tag_name.as_deref())
            && self.names_equal(x.parent_tag.as_deref(), y.parent_tag.as_deref())
            && self.sequences_equal(&x.attributes, &y.attributes)
    }

    fn hash_into<H: Hasher>(&self, value: &TagMatchingRule, state: &mut H) {
        self.hash_name(value.tag_name.as_deref(), state);
    }
}

impl StructuralComparer<TagHelperDescriptor> for DescriptorComparer {
    fn equals(&self, x: &TagHelperDescriptor, y: &TagHelperDescriptor) -> bool {
        if std::ptr::eq(x, y) {
            return true;
        }
        x.kind == y.kind
            && self.names_equal(Some(x.name.as_str()), Some(y.name.as_str()))
            && x.assembly_name == y.assembly_name
            && x.documentation == y.documentation
            && x.display_name == y.display_name
            && x.tag_output_hint == y.tag_output_hint
            && x.metadata == y.metadata
            && self.sequences_equal(&x.bound_attributes, &y.bound_attributes)
            && self.sequences_equal(&x.tag_matching_rules, &y.tag_matching_rules)
    }

    fn hash_into<H: Hasher>(&self, value: &TagHelperDescriptor, state: &mut H) {
        value.kind.hash(state);
        self.hash_name(Some(value.name.as_str()), state);
    }
}

macro_rules! default_structural_eq {
    ($($descriptor:ty),* $(,)?) => {
        $(
            impl PartialEq for $descriptor {
                fn eq(&self, other: &Self) -> bool {
                    DescriptorComparer::DEFAULT.equals(self, other)
                }
            }

            impl Eq for $descriptor {}

            impl Hash for $descriptor {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    DescriptorComparer::DEFAULT.hash_into(self, state);
                }
            }
        )*
    };
}

default_structural_eq!(
    BoundAttributeParameterDescriptor,
    BoundAttributeDescriptor,
    RequiredAttribute,
    TagMatchingRule,
    TagHelperDescriptor,
);

/// Keys a descriptor by the case-sensitive comparer, for set membership.
#[derive(Debug, Clone)]
pub struct CaseSensitive<T>(pub T);

impl<T> PartialEq for CaseSensitive<T>
where
    DescriptorComparer: StructuralComparer<T>,
{
    fn eq(&self, other: &Self) -> bool {
        DescriptorComparer::CASE_SENSITIVE.equals(&self.0, &other.0)
    }
}

impl<T> Eq for CaseSensitive<T> where DescriptorComparer: StructuralComparer<T> {}

impl<T> Hash for CaseSensitive<T>
where
    DescriptorComparer: StructuralComparer<T>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        DescriptorComparer::CASE_SENSITIVE.hash_into(&self.0, state);
    }
}
