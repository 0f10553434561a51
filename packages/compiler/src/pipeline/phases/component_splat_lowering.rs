//! Component Splat Lowering Phase
//!
//! Rewrites `@attributes` usages into attribute-splat nodes. Under a component
//! the captured values are already typed, so the children move over as they
//! are; under any other parent each value is wrapped as a markup attribute
//! value. Runs after component lowering.

use crate::descriptors::metadata::component::ADD_MULTIPLE_ATTRIBUTES_TYPE_NAME;
use crate::error::Result;
use crate::intermediate::{DocumentTree, IntermediateNode, NodeId, NodeKind, NodeReference};
use crate::pipeline::{CodeDocument, PassDescriptor};

pub const PASS: PassDescriptor = PassDescriptor {
    name: "component_splat_lowering",
    order: 50,
    applies: CodeDocument::allows_component_passes,
    run,
};

fn run(document: &mut CodeDocument) -> Result<()> {
    let references = find_splat_usages(&document.tree);
    lower_splat_usages(&mut document.tree, &references)?;
    Ok(())
}

/// Directive usages (directive attributes, or properties written as
/// directives) whose tag helper captures every remaining attribute.
pub fn find_splat_usages(tree: &DocumentTree) -> Vec<NodeReference> {
    tree.find_descendant_references(|kind| {
        kind.is_directive_usage()
            && kind
                .tag_helper()
                .map_or(false, |tag_helper| tag_helper.is_splat_tag_helper())
    })
}

/// Rewrites every still-attached usage in `references`, returning how many
/// were rewritten. References whose node has already been detached are skipped.
pub fn lower_splat_usages(tree: &mut DocumentTree, references: &[NodeReference]) -> Result<usize> {
    let mut rewritten = 0;
    for reference in references {
        if !reference.is_live(tree) {
            tracing::trace!(
                node = reference.node().as_usize(),
                "splat usage no longer attached, skipping"
            );
            continue;
        }

        let replacement = rewrite_usage(tree, reference.parent(), reference.node())?;
        reference.replace(tree, replacement)?;
        rewritten += 1;
    }

    tracing::debug!(rewritten, "lowered attribute splats");
    Ok(rewritten)
}

enum ValueShape {
    Token,
    Expression,
    Other,
}

fn value_shape(kind: &NodeKind) -> ValueShape {
    match kind {
        NodeKind::Token { .. } => ValueShape::Token,
        NodeKind::EmbeddedExpression => ValueShape::Expression,
        _ => ValueShape::Other,
    }
}

fn rewrite_usage(tree: &mut DocumentTree, parent: NodeId, usage: NodeId) -> Result<NodeId> {
    let source = tree.node(usage).source.clone();
    let diagnostics = tree.node(usage).diagnostics.clone();
    let children = tree.take_children(usage);

    if tree.kind(parent).is_component() {
        let mut attribute = IntermediateNode::new(NodeKind::ComponentAttribute {
            attribute_name: None,
            // generic type inference looks for this signature
            type_name: Some(ADD_MULTIPLE_ATTRIBUTES_TYPE_NAME.to_string()),
            is_attribute_splat: true,
        });
        attribute.source = source;
        attribute.diagnostics = diagnostics;

        let result = tree.create(attribute);
        tree.adopt_children(result, &children)?;
        return Ok(result);
    }

    let mut attribute = IntermediateNode::new(NodeKind::HtmlAttribute {
        attribute_name: None,
        is_attribute_splat: true,
    });
    attribute.source = source;
    attribute.diagnostics = diagnostics;
    let result = tree.create(attribute);

    for child in children {
        match value_shape(tree.kind(child)) {
            ValueShape::Token => {
                let value = tree.create(IntermediateNode::new(NodeKind::ExpressionAttributeValue));
                tree.append_child(value, child)?;
                tree.append_child(result, value)?;
            }
            ValueShape::Expression => {
                let expression = tree.node_mut(child);
                let mut wrapper = IntermediateNode::new(NodeKind::ExpressionAttributeValue);
                wrapper.source = expression.source.take();
                wrapper.diagnostics = std::mem::take(&mut expression.diagnostics);

                let inner = tree.take_children(child);
                let value = tree.create(wrapper);
                tree.adopt_children(value, &inner)?;
                tree.append_child(result, value)?;
            }
            // unknown shapes are kept so later passes can still report on them
            ValueShape::Other => tree.append_child(result, child)?,
        }
    }

    Ok(result)
}
