//! Bound Attribute Parameters
//!
//! A parameter qualifies a bound attribute at the usage site, e.g. the `format`
//! in `@bind:format`.

use super::display_name::{self, DescriptorOwner};
use super::metadata::{self, Metadata};
use crate::chars;
use crate::diagnostics::{self, factory, Diagnostic};
use crate::error::{require_non_empty, Result};
use crate::html_conventions;
use indexmap::IndexSet;

/// Frozen description of a bound attribute parameter.
#[derive(Debug, Clone)]
pub struct BoundAttributeParameterDescriptor {
    pub(crate) kind: String,
    pub(crate) name: Option<String>,
    pub(crate) type_name: Option<String>,
    pub(crate) documentation: Option<String>,
    pub(crate) display_name: Option<String>,
    pub(crate) is_enum: bool,
    pub(crate) is_string_property: bool,
    pub(crate) is_boolean_property: bool,
    pub(crate) metadata: Metadata,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl BoundAttributeParameterDescriptor {
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
}

/// Accumulates a parameter declaration. Single use: `build` consumes it.
#[derive(Debug, Clone)]
pub struct BoundAttributeParameterDescriptorBuilder {
    kind: String,
    pub(crate) owner: DescriptorOwner,
    pub(crate) attribute_display_name: String,
    name: Option<String>,
    type_name: Option<String>,
    is_enum: bool,
    documentation: Option<String>,
    display_name: Option<String>,
    metadata: Metadata,
    diagnostics: Vec<Diagnostic>,
}

impl BoundAttributeParameterDescriptorBuilder {
    /// Fails when `kind` is empty.
    pub fn create(kind: impl Into<String>) -> Result<Self> {
        let kind = require_non_empty(kind.into(), "kind")?;
        Ok(BoundAttributeParameterDescriptorBuilder::new(kind))
    }

    pub(crate) fn new(kind: impl Into<String>) -> Self {
        BoundAttributeParameterDescriptorBuilder {
            kind: kind.into(),
            owner: DescriptorOwner::default(),
            attribute_display_name: String::new(),
            name: None,
            type_name: None,
            is_enum: false,
            documentation: None,
            display_name: None,
            metadata: Metadata::new(),
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

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) -> &mut Self {
        self.diagnostics.push(diagnostic);
        self
    }

    pub fn build(self) -> BoundAttributeParameterDescriptor {
        let display_name = self.resolve_display_name();
        let mut diagnostics: IndexSet<Diagnostic> = self.validate().into_iter().collect();
        diagnostics.extend(self.diagnostics);

        BoundAttributeParameterDescriptor {
            is_string_property: display_name::is_string_type(self.type_name.as_deref()),
            is_boolean_property: display_name::is_boolean_type(self.type_name.as_deref()),
            kind: self.kind,
            name: self.name,
            type_name: self.type_name,
            documentation: self.documentation,
            display_name,
            is_enum: self.is_enum,
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

    fn validate(&self) -> Vec<Diagnostic> {
        let mut found = Vec::new();
        let name = match self.name.as_deref() {
            Some(name) if !chars::is_null_or_whitespace(Some(name)) => name,
            _ => {
                found.push(factory::invalid_bound_attribute_parameter_null_or_whitespace(
                    &self.attribute_display_name,
                ));
                return found;
            }
        };

        for character in html_conventions::invalid_name_characters(name) {
            found.push(factory::invalid_bound_attribute_parameter_name(
                &self.attribute_display_name,
                name,
                character,
            ));
        }
        found
    }
}
