//! Display Names
//!
//! Default display names for bound attributes and parameters. Purely cosmetic,
//! although display names do take part in descriptor equality.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Friendly aliases for well-known primitive type names.
static PRIMITIVE_DISPLAY_TYPE_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("System.Byte", "byte"),
        ("System.SByte", "sbyte"),
        ("System.Int32", "int"),
        ("System.UInt32", "uint"),
        ("System.Int16", "short"),
        ("System.UInt16", "ushort"),
        ("System.Int64", "long"),
        ("System.UInt64", "ulong"),
        ("System.Single", "float"),
        ("System.Double", "double"),
        ("System.Char", "char"),
        ("System.Boolean", "bool"),
        ("System.Object", "object"),
        ("System.String", "string"),
        ("System.Decimal", "decimal"),
    ])
});

pub const STRING_TYPE_NAMES: [&str; 2] = ["System.String", "string"];
pub const BOOLEAN_TYPE_NAMES: [&str; 2] = ["System.Boolean", "bool"];

/// The tag helper a bound attribute or parameter belongs to, as far as
/// display names and diagnostics need to know it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorOwner {
    pub display_name: String,
    pub type_name: Option<String>,
}

impl DescriptorOwner {
    pub fn new(display_name: impl Into<String>, type_name: Option<String>) -> Self {
        DescriptorOwner {
            display_name: display_name.into(),
            type_name,
        }
    }
}

pub fn friendly_type_name(type_name: &str) -> &str {
    PRIMITIVE_DISPLAY_TYPE_NAMES
        .get(type_name)
        .copied()
        .unwrap_or(type_name)
}

/// `"{friendly-type} {owner-type}.{property}"` when all three parts are known,
/// otherwise the descriptor name.
pub fn compute_display_name(
    type_name: Option<&str>,
    owner_type_name: Option<&str>,
    property_name: Option<&str>,
    name: Option<&str>,
) -> Option<String> {
    match (type_name, owner_type_name, property_name) {
        (Some(type_name), Some(owner), Some(property)) => Some(format!(
            "{} {}.{}",
            friendly_type_name(type_name),
            owner,
            property
        )),
        _ => name.map(str::to_string),
    }
}

pub fn is_string_type(type_name: Option<&str>) -> bool {
    type_name.is_some_and(|name| STRING_TYPE_NAMES.contains(&name))
}

pub fn is_boolean_type(type_name: Option<&str>) -> bool {
    type_name.is_some_and(|name| BOOLEAN_TYPE_NAMES.contains(&name))
}
