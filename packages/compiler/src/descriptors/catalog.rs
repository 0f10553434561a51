//! Tag Helper Catalog
//!
//! The frozen set of descriptors a compilation binds against. Built once,
//! then shared read-only (behind `Arc`) by every document compiled with it.

use super::metadata::Metadata;
use super::tag_helper::{TagHelperDescriptor, TagHelperDescriptorBuilder};
use super::tag_matching_rule::NameComparison;
use crate::diagnostics::Diagnostic;
use crate::error::{CompilerError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Authored tag helper declaration, as read from a catalog file. Every field is
/// optional here; required ones are enforced when the builder is created.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagHelperDefinition {
    pub kind: Option<String>,
    pub name: Option<String>,
    pub assembly_name: Option<String>,
    pub display_name: Option<String>,
    pub documentation: Option<String>,
    pub tag_output_hint: Option<String>,
    pub metadata: Metadata,
    pub bound_attributes: Vec<BoundAttributeDefinition>,
    pub tag_matching_rules: Vec<TagMatchingRuleDefinition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoundAttributeDefinition {
    pub name: Option<String>,
    pub type_name: Option<String>,
    pub is_enum: bool,
    pub indexer_name_prefix: Option<String>,
    pub indexer_type_name: Option<String>,
    pub documentation: Option<String>,
    pub display_name: Option<String>,
    pub metadata: Metadata,
    pub parameters: Vec<BoundAttributeParameterDefinition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoundAttributeParameterDefinition {
    pub name: Option<String>,
    pub type_name: Option<String>,
    pub is_enum: bool,
    pub documentation: Option<String>,
    pub display_name: Option<String>,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagMatchingRuleDefinition {
    pub tag_name: Option<String>,
    pub parent_tag: Option<String>,
    pub attributes: Vec<RequiredAttributeDefinition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequiredAttributeDefinition {
    pub name: Option<String>,
    pub name_comparison: NameComparison,
    pub value: Option<String>,
}

impl TagHelperDefinition {
    pub fn build(self) -> Result<TagHelperDescriptor> {
        let mut builder = TagHelperDescriptorBuilder::create(
            self.kind.ok_or(CompilerError::MissingArgument("kind"))?,
            self.name.ok_or(CompilerError::MissingArgument("name"))?,
            self.assembly_name
                .ok_or(CompilerError::MissingArgument("assembly_name"))?,
        )?;

        if let Some(display_name) = self.display_name {
            builder.display_name(display_name);
        }
        if let Some(documentation) = self.documentation {
            builder.documentation(documentation);
        }
        if let Some(hint) = self.tag_output_hint {
            builder.tag_output_hint(hint);
        }
        for (key, value) in self.metadata {
            builder.metadata(key, value);
        }

        for attribute in self.bound_attributes {
            builder.bind_attribute(|target| attribute.apply(target));
        }

        for rule in self.tag_matching_rules {
            builder.tag_matching_rule(|target| {
                if let Some(tag_name) = rule.tag_name {
                    target.tag_name(tag_name);
                }
                if let Some(parent_tag) = rule.parent_tag {
                    target.parent_tag(parent_tag);
                }
                for required in rule.attributes {
                    target.require_attribute(|attribute| {
                        if let Some(name) = required.name {
                            attribute.name(name);
                        }
                        if let Some(value) = required.value {
                            attribute.value(value);
                        }
                        attribute.name_comparison(required.name_comparison);
                    });
                }
            });
        }

        Ok(builder.build())
    }
}

impl BoundAttributeDefinition {
    fn apply(self, target: &mut super::BoundAttributeDescriptorBuilder) {
        if let Some(name) = self.name {
            target.name(name);
        }
        if let Some(type_name) = self.type_name {
            target.type_name(type_name);
        }
        target.is_enum(self.is_enum);
        if let Some(prefix) = self.indexer_name_prefix {
            target.as_dictionary(prefix, self.indexer_type_name.unwrap_or_default());
        }
        if let Some(documentation) = self.documentation {
            target.documentation(documentation);
        }
        if let Some(display_name) = self.display_name {
            target.display_name(display_name);
        }
        for (key, value) in self.metadata {
            target.metadata(key, value);
        }
        for parameter in self.parameters {
            target.bind_attribute_parameter(|builder| {
                if let Some(name) = parameter.name {
                    builder.name(name);
                }
                if let Some(type_name) = parameter.type_name {
                    builder.type_name(type_name);
                }
                builder.is_enum(parameter.is_enum);
                if let Some(documentation) = parameter.documentation {
                    builder.documentation(documentation);
                }
                if let Some(display_name) = parameter.display_name {
                    builder.display_name(display_name);
                }
                for (key, value) in parameter.metadata {
                    builder.metadata(key, value);
                }
            });
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TagHelperCatalog {
    descriptors: Vec<Arc<TagHelperDescriptor>>,
}

impl TagHelperCatalog {
    pub fn new(descriptors: impl IntoIterator<Item = TagHelperDescriptor>) -> Self {
        TagHelperCatalog {
            descriptors: descriptors.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn from_definitions(definitions: Vec<TagHelperDefinition>) -> Result<Self> {
        let descriptors = definitions
            .into_iter()
            .map(TagHelperDefinition::build)
            .collect::<Result<Vec<_>>>()?;
        let catalog = TagHelperCatalog::new(descriptors);
        tracing::debug!(
            descriptors = catalog.len(),
            with_errors = catalog.iter().filter(|d| d.has_errors()).count(),
            "built tag helper catalog"
        );
        Ok(catalog)
    }

    /// Parses a JSON array of tag helper definitions.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let definitions: Vec<TagHelperDefinition> =
            serde_json::from_str(json).context("catalog is not a list of tag helper definitions")?;
        Ok(TagHelperCatalog::from_definitions(definitions)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        TagHelperCatalog::from_json_str(&content)
            .with_context(|| format!("failed to load catalog {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<TagHelperDescriptor>> {
        self.descriptors.iter()
    }

    /// First descriptor with the given name (ordinal comparison).
    pub fn find(&self, name: &str) -> Option<&Arc<TagHelperDescriptor>> {
        self.descriptors.iter().find(|descriptor| descriptor.name() == name)
    }

    pub fn has_errors(&self) -> bool {
        self.descriptors.iter().any(|descriptor| descriptor.has_errors())
    }

    /// Every diagnostic in the catalog, paired with the descriptor it belongs to.
    pub fn diagnostics(&self) -> Vec<(&TagHelperDescriptor, &Diagnostic)> {
        self.descriptors
            .iter()
            .flat_map(|descriptor| {
                descriptor
                    .all_diagnostics()
                    .into_iter()
                    .map(move |diagnostic| (descriptor.as_ref(), diagnostic))
            })
            .collect()
    }
}
