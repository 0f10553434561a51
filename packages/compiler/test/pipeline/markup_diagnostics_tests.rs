//! Component Markup Diagnostics Tests
//!
//! Duplicate attribute detection on components and elements.

#[path = "../support/mod.rs"]
mod support;

use markup_compiler::diagnostics::ErrorCode;
use markup_compiler::intermediate::{DocumentTree, IntermediateNode, NodeId, NodeKind};
use markup_compiler::pipeline::phases::component_markup_diagnostics::report_duplicate_attributes;
use support::*;

fn add_parameter(tree: &mut DocumentTree, parent: NodeId, name: &str) -> NodeId {
    tree.add_child(
        parent,
        IntermediateNode::new(NodeKind::ComponentAttribute {
            attribute_name: Some(name.to_string()),
            type_name: None,
            is_attribute_splat: false,
        }),
    )
}

fn codes(tree: &DocumentTree, id: NodeId) -> Vec<ErrorCode> {
    tree.node(id).diagnostics.iter().map(|d| d.code).collect()
}

#[test]
fn should_flag_repeated_markup_attribute_ignoring_case() {
    let mut tree = component_tree();
    let root = tree.root();
    let div = add_element(&mut tree, root, "div");
    let first = add_html_attribute(&mut tree, div, "class");
    let second = add_html_attribute(&mut tree, div, "CLASS");

    assert_eq!(report_duplicate_attributes(&mut tree), 1);
    assert!(codes(&tree, first).is_empty());
    assert_eq!(codes(&tree, second), vec![ErrorCode::DuplicateMarkupAttribute]);
}

#[test]
fn should_flag_repeated_component_parameter_exactly() {
    let mut tree = component_tree();
    let root = tree.root();
    let counter = add_component(&mut tree, root);
    add_parameter(&mut tree, counter, "Value");
    let repeated = add_parameter(&mut tree, counter, "Value");
    let other_case = add_parameter(&mut tree, counter, "value");

    assert_eq!(report_duplicate_attributes(&mut tree), 1);
    assert_eq!(codes(&tree, repeated), vec![ErrorCode::DuplicateComponentParameter]);
    assert!(codes(&tree, other_case).is_empty());

    let message = &tree.node(repeated).diagnostics[0].message;
    assert!(message.contains("'Value'"));
    assert!(message.ends_with("(case-sensitive)."));
}

#[test]
fn should_name_directive_in_conflicts() {
    let mut tree = component_tree();
    let root = tree.root();
    let input = add_element(&mut tree, root, "input");
    add_html_attribute(&mut tree, input, "bind");
    let directive = tree.add_child(
        input,
        IntermediateNode::new(NodeKind::DirectiveAttribute {
            attribute_name: "@bind".to_string(),
            tag_helper: bind_tag_helper(),
            bound_attribute_name: "@bind".to_string(),
        }),
    );

    assert_eq!(report_duplicate_attributes(&mut tree), 1);
    assert_eq!(codes(&tree, directive), vec![ErrorCode::DuplicateMarkupAttributeDirective]);
    assert!(tree.node(directive).diagnostics[0].message.contains("'@bind'"));
}

#[test]
fn should_ignore_unnamed_splats_and_other_parents() {
    let mut tree = component_tree();
    let root = tree.root();
    let div = add_element(&mut tree, root, "div");
    for _ in 0..2 {
        tree.add_child(
            div,
            IntermediateNode::new(NodeKind::HtmlAttribute {
                attribute_name: None,
                is_attribute_splat: true,
            }),
        );
    }
    add_html_attribute(&mut tree, root, "id");
    add_html_attribute(&mut tree, root, "id");

    assert_eq!(report_duplicate_attributes(&mut tree), 0);
}

#[test]
fn should_not_report_twice() {
    let mut tree = component_tree();
    let root = tree.root();
    let div = add_element(&mut tree, root, "div");
    add_html_attribute(&mut tree, div, "id");
    let second = add_html_attribute(&mut tree, div, "id");
    let third = add_html_attribute(&mut tree, div, "id");

    assert_eq!(report_duplicate_attributes(&mut tree), 2);
    assert_eq!(report_duplicate_attributes(&mut tree), 0);
    assert_eq!(codes(&tree, second).len(), 1);
    assert_eq!(codes(&tree, third).len(), 1);
}

#[test]
fn should_check_nested_elements_independently() {
    let mut tree = component_tree();
    let root = tree.root();
    let outer = add_element(&mut tree, root, "div");
    add_html_attribute(&mut tree, outer, "id");
    let inner = add_element(&mut tree, outer, "span");
    add_html_attribute(&mut tree, inner, "id");

    assert_eq!(report_duplicate_attributes(&mut tree), 0);
}
