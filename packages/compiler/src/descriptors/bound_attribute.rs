//! Bound Attributes
//!
//! A named attribute on a tag helper that binds to a typed property, optionally
//! with an indexer that binds every attribute sharing a prefix.

use super::bound_attribute_parameter::{
    BoundAttributeParameterDescriptor, BoundAttributeParameterDescriptorBuilder,
};
use super::comparer::CaseSensitive;
use super::display_name::{self, DescriptorOwner};
use super::metadata::{self, Metadata};
use crate::chars;
use crate::diagnostics::{self, factory, Diagnostic};
use crate::error::{require_non_empty, Result};
use crate::html_conventions;
use indexmap::IndexSet;

/// Frozen description of a bound attribute.
#[derive(Debug, Clone)]
pub struct BoundAttributeDescriptor {
    pub(crate) kind: String,
    pub(crate) name: Option<String>,
    pub(crate) type_name: Option<String>,
    pub(crate) documentation: Option<String>,
    pub(crate) display_name: Option<String>,
    pub(crate) is_enum: bool,
    pub(crate) is_string_property: bool,
    pub(crate) is_boolean_property: bool,
    pub(crate) is_dictionary: bool,
    pub(crate) indexer_name_prefix: Option<String>,
    pub(crate) indexer_value_type_name: Option<String>,
    pub(crate) is_indexer_string_property: bool,
    pub(crate) is_indexer_boolean_property: bool,
    pub(crate) parameters: Vec<BoundAttributeParameterDescriptor>,
    pub(crate) metadata: Metadata,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl BoundAttributeDescriptor {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn is_enum(&self) -> bool {
        self.is_enum
    }

    pub fn is_string_property(&self) -> bool {
        self.is_string_property
    }

    pub fn is_boolean_property(&self) -> bool {
        self.is_boolean_property
    }

    pub fn is_dictionary(&self) -> bool {
        self.is_dictionary
    }

    pub fn has_indexer(&self) -> bool {
        self.indexer_name_prefix.is_some()
    }

    pub fn indexer_name_prefix(&self) -> Option<&str> {
        self.indexer_name_prefix.as_deref()
    }

    pub fn indexer_value_type_name(&self) -> Option<&str> {
        self.indexer_value_type_name.as_deref()
    }

    pub fn is_indexer_string_property(&self) -> bool {
        self.is_indexer_string_property
    }

    pub fn is_indexer_boolean_property(&self) -> bool {
        self.is_indexer_boolean_property
    }

    pub fn parameters(&self) -> &[BoundAttributeParameterDescriptor] {
        &self.parameters
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        diagnostics::has_errors(&self.diagnostics)
    }

    pub fn property_name(&self) -> Option<&str> {
        self.metadata.get(metadata::common::PROPERTY_NAME).map(String::as_str)
    }

    pub fn is_directive_attribute(&self) -> bool {
        metadata::is_true(&self.metadata, metadata::common::DIRECTIVE_ATTRIBUTE)
    }

    /// Matches an attribute name written at a usage site, either exactly
    /// (ignoring case) or through the indexer prefix.
    pub fn matches_attribute_name(&self, attribute_name: &str) -> bool {
        if self
            .name
            .as_deref()
            .is_some_and(|name| name.eq_ignore_ascii_case(attribute_name))
        {
            return true;
        }
        match self.indexer_name_prefix.as_deref() {
            Some(prefix) => {
                attribute_name.len() > prefix.len()
                    && attribute_name.is_char_boundary(prefix.len())
                    && attribute_name[..prefix.len()].eq_ignore_ascii_case(prefix)
            }
            None => false,
        }
    }
}

/// Accumulates a bound attribute declaration. Single use: `build` consumes it.
#[derive(Debug, Clone)]
pub struct BoundAttributeDescriptorBuilder {
    kind: String,
    pub(crate) owner: DescriptorOwner,
    name: Option<String>,
    type_name: Option<String>,
    is_enum: bool,
    is_dictionary: bool,
    indexer_name_prefix: Option<String>,
    indexer_value_type_name: Option<String>,
    documentation: Option<String>,
    display_name: Option<String>,
    metadata: Metadata,
    parameter_builders: Vec<BoundAttributeParameterDescriptorBuilder>,
    diagnostics: Vec<Diagnostic>,
}

impl BoundAttributeDescriptorBuilder {
    pub(crate) fn new(kind: impl Into<String>) -> Self {
        BoundAttributeDescriptorBuilder::with_owner(DescriptorOwner::default(), kind)
    }

    /// Fails when `kind` is empty.
    pub fn create(owner: DescriptorOwner, kind: impl Into<String>) -> Result<Self> {
        let kind = require_non_empty(kind.into(), "kind")?;
        Ok(BoundAttributeDescriptorBuilder::with_owner(owner, kind))
    }

    pub(crate) fn with_owner(owner: DescriptorOwner, kind: impl Into<String>) -> Self {
        BoundAttributeDescriptorBuilder {
            kind: kind.into(),
            owner,
            name: None,
            type_name: None,
            is_enum: false,
            is_dictionary: false,
            indexer_name_prefix: None,
            indexer_value_type_name: None,
            documentation: None,
            display_name: None,
            metadata: Metadata::new(),
            parameter_builders: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn type_name(&mut self, type_name: impl Into<String>) -> &mut Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn is_enum(&mut self, is_enum: bool) -> &mut Self {
        self.is_enum = is_enum;
        self
    }

    /// Binds every attribute whose name starts with `prefix` to a dictionary
    /// entry of type `value_type_name`.
    pub fn as_dictionary(
        &mut self,
        prefix: impl Into<String>,
        value_type_name: impl Into<String>,
    ) -> &mut Self {
        self.is_dictionary = true;
        self.indexer_name_prefix = Some(prefix.into());
        self.indexer_value_type_name = Some(value_type_name.into());
        self
    }

    pub fn documentation(&mut self, documentation: impl Into<String>) -> &mut Self {
        self.documentation = Some(documentation.into());
        self
    }

    pub fn display_name(&mut self, display_name: impl Into<String>) -> &mut Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn metadata(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn property_name(&mut self, property_name: impl Into<String>) -> &mut Self {
        self.metadata(metadata::common::PROPERTY_NAME, property_name)
    }

    pub fn directive_attribute(&mut self) -> &mut Self {
        self.metadata(metadata::common::DIRECTIVE_ATTRIBUTE, metadata::TRUE_STRING)
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) -> &mut Self {
        self.diagnostics.push(diagnostic);
        self
    }

    pub fn bind_attribute_parameter<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut BoundAttributeParameterDescriptorBuilder),
    {
        let mut builder = BoundAttributeParameterDescriptorBuilder::new(self.kind.clone());
        configure(&mut builder);
        self.parameter_builders.push(builder);
        self
    }

    pub fn is_directive_attribute(&self) -> bool {
        metadata::is_true(&self.metadata, metadata::common::DIRECTIVE_ATTRIBUTE)
    }

    pub fn build(self) -> BoundAttributeDescriptor {
        let display_name = self.resolve_display_name();
        let mut diagnostics: IndexSet<Diagnostic> =
            self.validate(display_name.as_deref()).into_iter().collect();
        diagnostics.extend(self.diagnostics);

        let attribute_display_name = display_name.clone().unwrap_or_default();
        // Parameter names are literal identifiers, so only exact duplicates collapse.
        let parameters: IndexSet<CaseSensitive<BoundAttributeParameterDescriptor>> = self
            .parameter_builders
            .into_iter()
            .map(|mut builder| {
                builder.owner = self.owner.clone();
                builder.attribute_display_name = attribute_display_name.clone();
                CaseSensitive(builder.build())
            })
            .collect();

        let indexer_type = self.indexer_value_type_name.as_deref();
        BoundAttributeDescriptor {
            is_string_property: display_name::is_string_type(self.type_name.as_deref()),
            is_boolean_property: display_name::is_boolean_type(self.type_name.as_deref()),
            is_indexer_string_property: display_name::is_string_type(indexer_type),
            is_indexer_boolean_property: display_name::is_boolean_type(indexer_type),
            kind: self.kind,
            name: self.name,
            type_name: self.type_name,
            documentation: self.documentation,
            display_name,
            is_enum: self.is_enum,
            is_dictionary: self.is_dictionary,
            indexer_name_prefix: self.indexer_name_prefix,
            indexer_value_type_name: self.indexer_value_type_name,
            parameters: parameters.into_iter().map(|entry| entry.0).collect(),
            metadata: self.metadata,
            diagnostics: diagnostics.into_iter().collect(),
        }
    }

    fn resolve_display_name(&self) -> Option<String> {
        if self.display_name.is_some() {
            return self.display_name.clone();
        }
        display_name::compute_display_name(
            self.type_name.as_deref(),
            self.owner.type_name.as_deref(),
            self.metadata.get(metadata::common::PROPERTY_NAME).map(String::as_str),
            self.name.as_deref(),
        )
    }

    fn validate(&self, display_name: Option<&str>) -> Vec<Diagnostic> {
        let owner = self.owner.display_name.as_str();
        let display = display_name.unwrap_or_default();
        let is_directive_attribute = self.is_directive_attribute();
        let mut found = Vec::new();

        match self.name.as_deref() {
            Some(name) if !chars::is_null_or_whitespace(Some(name)) => {
                if html_conventions::starts_with_data_dash(name) {
                    found.push(factory::invalid_bound_attribute_name_starts_with(
                        owner, display, name,
                    ));
                }

                let checked = match html_conventions::strip_directive_marker(name) {
                    Some(stripped) if is_directive_attribute => stripped,
                    _ => {
                        if is_directive_attribute {
                            found.push(factory::invalid_bound_directive_attribute_name(
                                owner, display, name,
                            ));
                        }
                        name
                    }
                };

                for character in html_conventions::invalid_name_characters(checked) {
                    found.push(factory::invalid_bound_attribute_name(
                        owner, display, checked, character,
                    ));
                }
            }
            _ => {
                if self.indexer_name_prefix.is_none() {
                    found.push(factory::invalid_bound_attribute_null_or_whitespace(
                        owner, display,
                    ));
                }
            }
        }

        if let Some(prefix) = self.indexer_name_prefix.as_deref() {
            if html_conventions::starts_with_data_dash(prefix) {
                found.push(factory::invalid_bound_attribute_prefix_starts_with(
                    owner, display, prefix,
                ));
            } else if !prefix.is_empty() && chars::is_null_or_whitespace(Some(prefix)) {
                found.push(factory::invalid_bound_attribute_null_or_whitespace(
                    owner, display,
                ));
            } else {
                let checked = match html_conventions::strip_directive_marker(prefix) {
                    Some(stripped) if is_directive_attribute => stripped,
                    _ => {
                        if is_directive_attribute {
                            found.push(factory::invalid_bound_directive_attribute_prefix(
                                owner, display, prefix,
                            ));
                        }
                        prefix
                    }
                };

                for character in html_conventions::invalid_name_characters(checked) {
                    found.push(factory::invalid_bound_attribute_prefix(
                        owner, display, checked, character,
                    ));
                }
            }
        }

        found
    }
}
