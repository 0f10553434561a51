//! Descriptor Metadata
//!
//! Metadata is a string map that keeps insertion order for iteration but
//! compares as an unordered set of pairs (`IndexMap` equality ignores order).

use indexmap::IndexMap;

pub type Metadata = IndexMap<String, String>;

/// Metadata value used for boolean flags.
pub const TRUE_STRING: &str = "True";

pub mod common {
    /// Fully qualified name of the type implementing a tag helper.
    pub const TYPE_NAME: &str = "Common.TypeName";
    /// Name of the property a bound attribute or parameter writes to.
    pub const PROPERTY_NAME: &str = "Common.PropertyName";
    /// Marks a bound attribute as a directive attribute (`@name`).
    pub const DIRECTIVE_ATTRIBUTE: &str = "Common.DirectiveAttribute";
}

pub mod component {
    /// Present on tag helpers generated for a component-model feature rather than a component.
    pub const SPECIAL_KIND_KEY: &str = "Components.IsSpecialKind";
    pub const GENERIC_TYPED_KEY: &str = "Components.GenericTyped";

    pub const TAG_HELPER_KIND: &str = "Components.Component";
    pub const SPLAT_KIND: &str = "Components.Splat";
    pub const BIND_KIND: &str = "Components.Bind";
    pub const EVENT_HANDLER_KIND: &str = "Components.EventHandler";
    pub const KEY_KIND: &str = "Components.Key";
    pub const REF_KIND: &str = "Components.Ref";
    pub const CHILD_CONTENT_KIND: &str = "Components.ChildContent";

    /// Parameter type given to capture-all attributes so generic type inference
    /// recognises them.
    pub const ADD_MULTIPLE_ATTRIBUTES_TYPE_NAME: &str = "global::System.Collections.Generic.IEnumerable<global::System.Collections.Generic.KeyValuePair<string, object>>";
}

/// Default kind for tag helpers that are not component-model constructs.
pub const TAG_HELPER_KIND: &str = "ITagHelper";

pub(crate) fn is_true(metadata: &Metadata, key: &str) -> bool {
    metadata.get(key).map(String::as_str) == Some(TRUE_STRING)
}

pub(crate) fn special_kind(metadata: &Metadata) -> Option<&str> {
    metadata.get(component::SPECIAL_KIND_KEY).map(String::as_str)
}
