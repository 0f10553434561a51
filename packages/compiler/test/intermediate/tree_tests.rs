//! Intermediate Tree Tests
//!
//! Arena operations, reference liveness and the well-formedness check.

#[path = "../support/mod.rs"]
mod support;

use markup_compiler::intermediate::serializer;
use markup_compiler::intermediate::{IntermediateNode, NodeKind, NodeReference, TokenKind};
use markup_compiler::CompilerError;
use support::*;

#[test]
fn should_find_descendant_references_in_pre_order() {
    let mut tree = component_tree();
    let root = tree.root();
    let div = add_element(&mut tree, root, "div");
    let first = add_splat_usage(&mut tree, div);
    let counter = add_component(&mut tree, root);
    let second = add_splat_usage(&mut tree, counter);

    let references =
        tree.find_descendant_references(|kind| matches!(kind, NodeKind::DirectiveAttribute { .. }));
    assert_eq!(
        references,
        vec![
            NodeReference::new(div, first, 0),
            NodeReference::new(counter, second, 0)
        ]
    );
}

#[test]
fn should_replace_through_reference_and_keep_siblings() {
    let mut tree = component_tree();
    let root = tree.root();
    let div = add_element(&mut tree, root, "div");
    let before = add_html_attribute(&mut tree, div, "id");
    let usage = add_splat_usage(&mut tree, div);
    let after = add_html_attribute(&mut tree, div, "class");

    let reference = tree.reference_to(usage).unwrap();
    let replacement = tree.create(IntermediateNode::new(NodeKind::HtmlAttribute {
        attribute_name: None,
        is_attribute_splat: true,
    }));
    let replaced = reference.replace(&mut tree, replacement).unwrap();

    assert_eq!(tree.children(div), &[before, replacement, after]);
    assert_eq!(replaced.node(), replacement);
    assert_eq!(tree.parent(replacement), Some(div));
    assert_eq!(tree.parent(usage), None);
    assert!(!reference.is_live(&tree));
    tree.validate().unwrap();
}

#[test]
fn should_refuse_stale_reference() {
    let mut tree = component_tree();
    let root = tree.root();
    let div = add_element(&mut tree, root, "div");
    let usage = add_splat_usage(&mut tree, div);
    let reference = tree.reference_to(usage).unwrap();
    reference.remove(&mut tree).unwrap();

    let result = reference.replace_with(
        &mut tree,
        IntermediateNode::new(NodeKind::ExpressionAttributeValue),
    );
    assert!(matches!(result, Err(CompilerError::MalformedTree(_))));
    assert!(tree.children(div).is_empty());
}

#[test]
fn should_refuse_attached_replacement() {
    let mut tree = component_tree();
    let root = tree.root();
    let div = add_element(&mut tree, root, "div");
    let usage = add_splat_usage(&mut tree, div);
    let other = add_html_attribute(&mut tree, div, "id");

    let reference = tree.reference_to(usage).unwrap();
    assert!(reference.replace(&mut tree, other).is_err());
    assert_eq!(tree.children(div), &[usage, other]);
}

#[test]
fn should_move_children_between_nodes() {
    let mut tree = component_tree();
    let root = tree.root();
    let expression = tree.add_child(root, IntermediateNode::new(NodeKind::EmbeddedExpression));
    let a = add_code(&mut tree, expression, "a");
    let b = add_code(&mut tree, expression, "b");

    let value = tree.add_child(root, IntermediateNode::new(NodeKind::ExpressionAttributeValue));
    let moved = tree.take_children(expression);
    tree.adopt_children(value, &moved).unwrap();

    assert!(tree.children(expression).is_empty());
    assert_eq!(tree.children(value), &[a, b]);
    assert_eq!(tree.parent(a), Some(value));
    tree.validate().unwrap();
}

#[test]
fn should_insert_at_position() {
    let mut tree = component_tree();
    let root = tree.root();
    let a = add_code(&mut tree, root, "a");
    let c = add_code(&mut tree, root, "c");
    let b = tree.insert_child(root, 1, IntermediateNode::token(TokenKind::Code, "b"));
    assert_eq!(tree.children(root), &[a, b, c]);
}

#[test]
fn should_collect_diagnostics_in_pre_order() {
    let mut tree = component_tree();
    let root = tree.root();
    let div = add_element(&mut tree, root, "div");
    let first = markup_compiler::diagnostics::factory::duplicate_markup_attribute("a", None);
    let second = markup_compiler::diagnostics::factory::duplicate_markup_attribute("b", None);
    let attribute = add_html_attribute(&mut tree, div, "b");
    tree.node_mut(attribute).add_diagnostic(second.clone());
    tree.node_mut(div).add_diagnostic(first.clone());

    assert_eq!(tree.diagnostics(), vec![&first, &second]);
    assert!(!tree.node_mut(div).add_diagnostic(first.clone()));
}

#[test]
fn should_dump_tree() {
    let mut tree = component_tree();
    let root = tree.root();
    let counter = add_component(&mut tree, root);
    let usage = add_splat_usage(&mut tree, counter);
    add_code(&mut tree, usage, "extra");

    assert_eq!(
        serializer::dump(&tree),
        concat!(
            "Document component.1.0\n",
            "  Component Counter (Test.Counter)\n",
            "    DirectiveAttribute @attributes (Attributes)\n",
            "      Token Code \"extra\"\n",
        )
    );
}
