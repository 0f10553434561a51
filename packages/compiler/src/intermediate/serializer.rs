//! Intermediate Tree Serializer
//!
//! Renders a tree as indented text, one node per line.

use super::node::{NodeId, NodeKind};
use super::tree::DocumentTree;
use std::fmt::Write;

pub fn dump(tree: &DocumentTree) -> String {
    let mut out = String::new();
    write_node(tree, tree.root(), 0, &mut out);
    out
}

/// Renders the subtree rooted at `id`.
pub fn dump_node(tree: &DocumentTree, id: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, id, 0, &mut out);
    out
}

fn write_node(tree: &DocumentTree, id: NodeId, depth: usize, out: &mut String) {
    let node = tree.node(id);
    let _ = write!(out, "{:indent$}{}", "", node.kind.label(), indent = depth * 2);
    let payload = describe(&node.kind);
    if !payload.is_empty() {
        let _ = write!(out, " {}", payload);
    }
    if node.has_diagnostics() {
        let ids: Vec<String> = node.diagnostics.iter().map(|d| d.id()).collect();
        let _ = write!(out, " [{}]", ids.join(", "));
    }
    out.push('\n');

    for &child in node.children() {
        write_node(tree, child, depth + 1, out);
    }
}

fn describe(kind: &NodeKind) -> String {
    match kind {
        NodeKind::Document { document_kind } => document_kind.clone(),
        NodeKind::Component { tag_name, component } => {
            format!("{} ({})", tag_name, component.name())
        }
        NodeKind::MarkupElement { tag_name } => tag_name.clone(),
        NodeKind::DirectiveAttribute {
            attribute_name,
            tag_helper,
            ..
        } => format!("{} ({})", attribute_name, tag_helper.name()),
        NodeKind::TagHelperProperty {
            attribute_name,
            is_directive_attribute,
            ..
        } => {
            if *is_directive_attribute {
                format!("{} directive", attribute_name)
            } else {
                attribute_name.clone()
            }
        }
        NodeKind::ComponentAttribute {
            attribute_name,
            type_name,
            is_attribute_splat,
        } => {
            let mut text = attribute_name.clone().unwrap_or_default();
            if let Some(type_name) = type_name {
                let _ = write!(text, " : {}", type_name);
            }
            if *is_attribute_splat {
                text.push_str(" splat");
            }
            text.trim_start().to_string()
        }
        NodeKind::HtmlAttribute {
            attribute_name,
            is_attribute_splat,
        } => {
            let mut text = attribute_name.clone().unwrap_or_default();
            if *is_attribute_splat {
                text.push_str(" splat");
            }
            text.trim_start().to_string()
        }
        NodeKind::Token { kind, content } => format!("{:?} {:?}", kind, content),
        NodeKind::EmbeddedExpression | NodeKind::ExpressionAttributeValue => String::new(),
    }
}
