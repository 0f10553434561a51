//! Component Markup Diagnostics Phase
//!
//! Reports attributes supplied more than once on the same component or
//! element. The diagnostic goes on the later usage. Component parameters are
//! compared exactly; markup attribute names ignore case. A leading `@` is
//! ignored, so a directive attribute collides with the plain attribute it
//! would produce.

use crate::diagnostics::{factory, Diagnostic};
use crate::error::Result;
use crate::html_conventions;
use crate::intermediate::{DocumentTree, NodeId, NodeKind};
use crate::pipeline::{CodeDocument, PassDescriptor};
use indexmap::IndexMap;

pub const PASS: PassDescriptor = PassDescriptor {
    name: "component_markup_diagnostics",
    order: 100,
    applies: CodeDocument::allows_component_passes,
    run,
};

fn run(document: &mut CodeDocument) -> Result<()> {
    let reported = report_duplicate_attributes(&mut document.tree);
    tracing::debug!(reported, "checked for duplicate attributes");
    Ok(())
}

/// Adds a diagnostic to every repeated attribute usage that does not already
/// carry it. Returns the number of diagnostics added.
pub fn report_duplicate_attributes(tree: &mut DocumentTree) -> usize {
    let mut pending: Vec<(NodeId, Diagnostic)> = Vec::new();

    for id in tree.walk() {
        let is_component = match tree.kind(id) {
            NodeKind::Component { .. } => true,
            NodeKind::MarkupElement { .. } => false,
            _ => continue,
        };

        let mut seen: IndexMap<String, NodeId> = IndexMap::new();
        for &child in tree.children(id) {
            let Some(name) = tree.kind(child).attribute_name() else {
                continue;
            };
            let key = comparison_key(name, is_component);
            match seen.get(&key) {
                Some(&first) => pending.push((
                    child,
                    duplicate_diagnostic(tree, first, child, is_component),
                )),
                None => {
                    seen.insert(key, child);
                }
            }
        }
    }

    pending
        .into_iter()
        .filter(|(node, diagnostic)| tree.node_mut(*node).add_diagnostic(diagnostic.clone()))
        .count()
}

fn comparison_key(name: &str, case_sensitive: bool) -> String {
    let bare = html_conventions::strip_directive_marker(name).unwrap_or(name);
    if case_sensitive {
        bare.to_string()
    } else {
        bare.to_lowercase()
    }
}

fn duplicate_diagnostic(
    tree: &DocumentTree,
    first: NodeId,
    later: NodeId,
    is_component: bool,
) -> Diagnostic {
    let first_kind = tree.kind(first);
    let later_kind = tree.kind(later);
    let name = later_kind.attribute_name().unwrap_or_default();
    let span = tree.node(later).source.clone();

    let directive = if later_kind.is_directive_usage() {
        Some(name)
    } else if first_kind.is_directive_usage() {
        first_kind.attribute_name()
    } else {
        None
    };

    match directive {
        Some(directive_name) => factory::duplicate_markup_attribute_directive(
            html_conventions::strip_directive_marker(name).unwrap_or(name),
            directive_name,
            span,
        ),
        None if is_component => factory::duplicate_component_parameter(name, span),
        None => factory::duplicate_markup_attribute(name, span),
    }
}
