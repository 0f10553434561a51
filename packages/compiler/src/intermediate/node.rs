//! Intermediate Nodes
//!
//! The closed set of node kinds the lowering passes rewrite. Every node shares
//! the same frame (source span, diagnostics, parent, ordered children); the
//! payload lives in [`NodeKind`].

use crate::descriptors::{BoundAttributeDescriptor, TagHelperDescriptor};
use crate::diagnostics::Diagnostic;
use crate::parse_util::SourceSpan;
use smallvec::SmallVec;
use std::sync::Arc;

/// Arena handle for a node. Only meaningful for the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Code,
    Markup,
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Tree root.
    Document { document_kind: String },
    /// Usage of a component tag helper.
    Component {
        tag_name: String,
        component: Arc<TagHelperDescriptor>,
    },
    /// Plain markup element with no component bound to it.
    MarkupElement { tag_name: String },
    /// Usage of a directive attribute such as `@attributes` or `@bind`.
    DirectiveAttribute {
        attribute_name: String,
        tag_helper: Arc<TagHelperDescriptor>,
        bound_attribute_name: String,
    },
    /// Attribute bound to a tag helper property.
    TagHelperProperty {
        attribute_name: String,
        tag_helper: Arc<TagHelperDescriptor>,
        bound_attribute_name: String,
        is_directive_attribute: bool,
    },
    ComponentAttribute {
        attribute_name: Option<String>,
        type_name: Option<String>,
        is_attribute_splat: bool,
    },
    HtmlAttribute {
        attribute_name: Option<String>,
        is_attribute_splat: bool,
    },
    /// Embedded code expression.
    EmbeddedExpression,
    /// Value of a markup attribute produced by code.
    ExpressionAttributeValue,
    Token { kind: TokenKind, content: String },
}

impl NodeKind {
    /// Short kind label used by the serializer and in log output.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Document { .. } => "Document",
            NodeKind::Component { .. } => "Component",
            NodeKind::MarkupElement { .. } => "MarkupElement",
            NodeKind::DirectiveAttribute { .. } => "DirectiveAttribute",
            NodeKind::TagHelperProperty { .. } => "TagHelperProperty",
            NodeKind::ComponentAttribute { .. } => "ComponentAttribute",
            NodeKind::HtmlAttribute { .. } => "HtmlAttribute",
            NodeKind::EmbeddedExpression => "EmbeddedExpression",
            NodeKind::ExpressionAttributeValue => "ExpressionAttributeValue",
            NodeKind::Token { .. } => "Token",
        }
    }

    pub fn is_component(&self) -> bool {
        matches!(self, NodeKind::Component { .. })
    }

    pub fn is_markup_element(&self) -> bool {
        matches!(self, NodeKind::MarkupElement { .. })
    }

    pub fn is_token(&self) -> bool {
        matches!(self, NodeKind::Token { .. })
    }

    /// Name written by the author for attribute-like kinds.
    pub fn attribute_name(&self) -> Option<&str> {
        match self {
            NodeKind::DirectiveAttribute { attribute_name, .. }
            | NodeKind::TagHelperProperty { attribute_name, .. } => Some(attribute_name.as_str()),
            NodeKind::ComponentAttribute { attribute_name, .. }
            | NodeKind::HtmlAttribute { attribute_name, .. } => attribute_name.as_deref(),
            _ => None,
        }
    }

    /// True for attribute usages written with the directive marker.
    pub fn is_directive_usage(&self) -> bool {
        match self {
            NodeKind::DirectiveAttribute { .. } => true,
            NodeKind::TagHelperProperty {
                is_directive_attribute,
                ..
            } => *is_directive_attribute,
            _ => false,
        }
    }

    /// Tag helper bound at this usage, for the kinds that carry one.
    pub fn tag_helper(&self) -> Option<&Arc<TagHelperDescriptor>> {
        match self {
            NodeKind::Component { component, .. } => Some(component),
            NodeKind::DirectiveAttribute { tag_helper, .. }
            | NodeKind::TagHelperProperty { tag_helper, .. } => Some(tag_helper),
            _ => None,
        }
    }

    /// Bound attribute descriptor for directive and property usages.
    pub fn bound_attribute(&self) -> Option<&BoundAttributeDescriptor> {
        match self {
            NodeKind::DirectiveAttribute {
                tag_helper,
                bound_attribute_name,
                ..
            }
            | NodeKind::TagHelperProperty {
                tag_helper,
                bound_attribute_name,
                ..
            } => tag_helper.find_bound_attribute(bound_attribute_name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntermediateNode {
    pub kind: NodeKind,
    pub source: Option<SourceSpan>,
    pub diagnostics: Vec<Diagnostic>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: SmallVec<[NodeId; 4]>,
}

impl IntermediateNode {
    pub fn new(kind: NodeKind) -> Self {
        IntermediateNode {
            kind,
            source: None,
            diagnostics: Vec::new(),
            parent: None,
            children: SmallVec::new(),
        }
    }

    pub fn with_source(mut self, source: SourceSpan) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }

    pub fn token(kind: TokenKind, content: impl Into<String>) -> Self {
        IntermediateNode::new(NodeKind::Token {
            kind,
            content: content.into(),
        })
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Adds `diagnostic` unless an equal one is already attached.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) -> bool {
        if self.diagnostics.contains(&diagnostic) {
            return false;
        }
        self.diagnostics.push(diagnostic);
        true
    }
}
