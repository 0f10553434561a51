//! Tag Helper Descriptors
//!
//! The catalog entry for a custom markup construct: a component, or a
//! component-model feature such as `@bind` or `@attributes`.

use super::bound_attribute::{BoundAttributeDescriptor, BoundAttributeDescriptorBuilder};
use super::display_name::DescriptorOwner;
use super::metadata::{self, component, Metadata};
use super::tag_matching_rule::{TagMatchingRule, TagMatchingRuleBuilder};
use crate::diagnostics::{self, Diagnostic};
use crate::error::{require_non_empty, Result};
use indexmap::IndexSet;

#[derive(Debug, Clone)]
pub struct TagHelperDescriptor {
    pub(crate) kind: String,
    pub(crate) name: String,
    pub(crate) assembly_name: String,
    pub(crate) display_name: String,
    pub(crate) documentation: Option<String>,
    pub(crate) tag_output_hint: Option<String>,
    pub(crate) bound_attributes: Vec<BoundAttributeDescriptor>,
    pub(crate) tag_matching_rules: Vec<TagMatchingRule>,
    pub(crate) metadata: Metadata,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl TagHelperDescriptor {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn assembly_name(&self) -> &str {
        &self.assembly_name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    pub fn tag_output_hint(&self) -> Option<&str> {
        self.tag_output_hint.as_deref()
    }

    pub fn bound_attributes(&self) -> &[BoundAttributeDescriptor] {
        &self.bound_attributes
    }

    pub fn tag_matching_rules(&self) -> &[TagMatchingRule] {
        &self.tag_matching_rules
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Own diagnostics, then bound attribute and parameter diagnostics, then
    /// tag matching rule diagnostics.
    pub fn all_diagnostics(&self) -> Vec<&Diagnostic> {
        let attributes = self.bound_attributes.iter().flat_map(|attribute| {
            attribute.diagnostics.iter().chain(
                attribute
                    .parameters
                    .iter()
                    .flat_map(|parameter| parameter.diagnostics.iter()),
            )
        });
        let rules = self
            .tag_matching_rules
            .iter()
            .flat_map(TagMatchingRule::all_diagnostics);

        self.diagnostics.iter().chain(attributes).chain(rules).collect()
    }

    pub fn has_errors(&self) -> bool {
        diagnostics::has_errors(self.all_diagnostics())
    }

    pub fn type_name(&self) -> Option<&str> {
        self.metadata.get(metadata::common::TYPE_NAME).map(String::as_str)
    }

    /// Bound attribute bound by `attribute_name` at a usage site.
    pub fn find_bound_attribute(&self, attribute_name: &str) -> Option<&BoundAttributeDescriptor> {
        self.bound_attributes
            .iter()
            .find(|attribute| attribute.matches_attribute_name(attribute_name))
    }

    pub fn is_component_tag_helper(&self) -> bool {
        self.kind == component::TAG_HELPER_KIND
            && !self.metadata.contains_key(component::SPECIAL_KIND_KEY)
    }

    /// Captures every unmatched attribute at a usage site (`@attributes`).
    pub fn is_splat_tag_helper(&self) -> bool {
        metadata::special_kind(&self.metadata) == Some(component::SPLAT_KIND)
    }

    pub fn is_bind_tag_helper(&self) -> bool {
        metadata::special_kind(&self.metadata) == Some(component::BIND_KIND)
    }

    pub fn is_event_handler_tag_helper(&self) -> bool {
        metadata::special_kind(&self.metadata) == Some(component::EVENT_HANDLER_KIND)
    }

    pub fn is_key_tag_helper(&self) -> bool {
        metadata::special_kind(&self.metadata) == Some(component::KEY_KIND)
    }

    pub fn is_ref_tag_helper(&self) -> bool {
        metadata::special_kind(&self.metadata) == Some(component::REF_KIND)
    }

    pub fn is_child_content_tag_helper(&self) -> bool {
        metadata::special_kind(&self.metadata) == Some(component::CHILD_CONTENT_KIND)
    }

    pub fn is_generic_typed_component(&self) -> bool {
        self.is_component_tag_helper()
            && metadata::is_true(&self.metadata, component::GENERIC_TYPED_KEY)
    }
}

/// Accumulates a tag helper declaration. Single use: `build` consumes it.
#[derive(Debug, Clone)]
pub struct TagHelperDescriptorBuilder {
    kind: String,
    name: String,
    assembly_name: String,
    display_name: Option<String>,
    documentation: Option<String>,
    tag_output_hint: Option<String>,
    metadata: Metadata,
    attribute_builders: Vec<BoundAttributeDescriptorBuilder>,
    rule_builders: Vec<TagMatchingRuleBuilder>,
    diagnostics: Vec<Diagnostic>,
}

impl TagHelperDescriptorBuilder {
    /// Fails when any required argument is empty.
    pub fn create(
        kind: impl Into<String>,
        name: impl Into<String>,
        assembly_name: impl Into<String>,
    ) -> Result<Self> {
        Ok(TagHelperDescriptorBuilder {
            kind: require_non_empty(kind.into(), "kind")?,
            name: require_non_empty(name.into(), "name")?,
            assembly_name: require_non_empty(assembly_name.into(), "assembly_name")?,
            display_name: None,
            documentation: None,
            tag_output_hint: None,
            metadata: Metadata::new(),
            attribute_builders: Vec::new(),
            rule_builders: Vec::new(),
            diagnostics: Vec::new(),
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn display_name(&mut self, display_name: impl Into<String>) -> &mut Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn documentation(&mut self, documentation: impl Into<String>) -> &mut Self {
        self.documentation = Some(documentation.into());
        self
    }

    pub fn tag_output_hint(&mut self, hint: impl Into<String>) -> &mut Self {
        self.tag_output_hint = Some(hint.into());
        self
    }

    pub fn metadata(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn type_name(&mut self, type_name: impl Into<String>) -> &mut Self {
        self.metadata(metadata::common::TYPE_NAME, type_name)
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) -> &mut Self {
        self.diagnostics.push(diagnostic);
        self
    }

    pub fn bind_attribute<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut BoundAttributeDescriptorBuilder),
    {
        let mut builder = BoundAttributeDescriptorBuilder::new(self.kind.clone());
        configure(&mut builder);
        self.attribute_builders.push(builder);
        self
    }

    pub fn tag_matching_rule<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut TagMatchingRuleBuilder),
    {
        let mut builder = TagMatchingRuleBuilder::new();
        configure(&mut builder);
        self.rule_builders.push(builder);
        self
    }

    pub fn build(self) -> TagHelperDescriptor {
        let display_name = self.display_name.unwrap_or_else(|| self.name.clone());
        let owner = DescriptorOwner::new(
            display_name.clone(),
            self.metadata.get(metadata::common::TYPE_NAME).cloned(),
        );

        let bound_attributes: IndexSet<BoundAttributeDescriptor> = self
            .attribute_builders
            .into_iter()
            .map(|mut builder| {
                builder.owner = owner.clone();
                builder.build()
            })
            .collect();
        let tag_matching_rules: IndexSet<TagMatchingRule> = self
            .rule_builders
            .into_iter()
            .map(TagMatchingRuleBuilder::build)
            .collect();
        let diagnostics: IndexSet<Diagnostic> = self.diagnostics.into_iter().collect();

        TagHelperDescriptor {
            kind: self.kind,
            name: self.name,
            assembly_name: self.assembly_name,
            display_name,
            documentation: self.documentation,
            tag_output_hint: self.tag_output_hint,
            bound_attributes: bound_attributes.into_iter().collect(),
            tag_matching_rules: tag_matching_rules.into_iter().collect(),
            metadata: self.metadata,
            diagnostics: diagnostics.into_iter().collect(),
        }
    }
}
