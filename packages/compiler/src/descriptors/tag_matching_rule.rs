//! Tag Matching Rules
//!
//! Which elements a tag helper applies to. Matching itself belongs to the
//! binder; these are the frozen, validated rule descriptions it consumes.

use crate::chars;
use crate::diagnostics::{self, factory, Diagnostic};
use crate::html_conventions;
use serde::{Deserialize, Serialize};

/// Tag name that matches every element.
pub const CATCH_ALL_TAG_NAME: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameComparison {
    #[default]
    FullMatch,
    PrefixMatch,
}

#[derive(Debug, Clone)]
pub struct RequiredAttribute {
    pub(crate) name: Option<String>,
    pub(crate) name_comparison: NameComparison,
    pub(crate) value: Option<String>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl RequiredAttribute {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn name_comparison(&self) -> NameComparison {
        self.name_comparison
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[derive(Debug, Clone)]
pub struct TagMatchingRule {
    pub(crate) tag_name: Option<String>,
    pub(crate) parent_tag: Option<String>,
    pub(crate) attributes: Vec<RequiredAttribute>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl TagMatchingRule {
    pub fn tag_name(&self) -> Option<&str> {
        self.tag_name.as_deref()
    }

    pub fn parent_tag(&self) -> Option<&str> {
        self.parent_tag.as_deref()
    }

    pub fn attributes(&self) -> &[RequiredAttribute] {
        &self.attributes
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Own diagnostics plus those of every required attribute.
    pub fn all_diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .chain(self.attributes.iter().flat_map(|a| a.diagnostics.iter()))
    }

    pub fn has_errors(&self) -> bool {
        diagnostics::has_errors(self.all_diagnostics())
    }

    pub fn is_catch_all(&self) -> bool {
        self.tag_name.as_deref() == Some(CATCH_ALL_TAG_NAME)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TagMatchingRuleBuilder {
    tag_name: Option<String>,
    parent_tag: Option<String>,
    attributes: Vec<RequiredAttributeBuilder>,
}

impl TagMatchingRuleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag_name(&mut self, tag_name: impl Into<String>) -> &mut Self {
        self.tag_name = Some(tag_name.into());
        self
    }

    pub fn parent_tag(&mut self, parent_tag: impl Into<String>) -> &mut Self {
        self.parent_tag = Some(parent_tag.into());
        self
    }

    pub fn require_attribute<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut RequiredAttributeBuilder),
    {
        let mut builder = RequiredAttributeBuilder::default();
        configure(&mut builder);
        self.attributes.push(builder);
        self
    }

    pub fn build(self) -> TagMatchingRule {
        let diagnostics = self.validate();
        TagMatchingRule {
            tag_name: self.tag_name,
            parent_tag: self.parent_tag,
            attributes: self
                .attributes
                .into_iter()
                .map(RequiredAttributeBuilder::build)
                .collect(),
            diagnostics,
        }
    }

    fn validate(&self) -> Vec<Diagnostic> {
        let mut found = Vec::new();
        match self.tag_name.as_deref() {
            Some(tag_name) if !chars::is_null_or_whitespace(Some(tag_name)) => {
                if tag_name != CATCH_ALL_TAG_NAME {
                    for character in html_conventions::invalid_name_characters(tag_name) {
                        found.push(factory::invalid_targeted_tag_name(tag_name, character));
                    }
                }
            }
            _ => {
                found.push(factory::invalid_targeted_tag_name_null_or_whitespace());
            }
        }
        found
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequiredAttributeBuilder {
    name: Option<String>,
    name_comparison: NameComparison,
    value: Option<String>,
}

impl RequiredAttributeBuilder {
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn name_comparison(&mut self, comparison: NameComparison) -> &mut Self {
        self.name_comparison = comparison;
        self
    }

    pub fn value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> RequiredAttribute {
        let mut diagnostics = Vec::new();
        match self.name.as_deref() {
            Some(name) if !chars::is_null_or_whitespace(Some(name)) => {
                // A directive attribute may be required, so its marker is allowed here.
                let checked = html_conventions::strip_directive_marker(name).unwrap_or(name);
                for character in html_conventions::invalid_name_characters(checked) {
                    diagnostics.push(factory::invalid_targeted_attribute_name(name, character));
                }
            }
            _ => diagnostics.push(factory::invalid_targeted_attribute_name_null_or_whitespace()),
        }

        RequiredAttribute {
            name: self.name,
            name_comparison: self.name_comparison,
            value: self.value,
            diagnostics,
        }
    }
}
