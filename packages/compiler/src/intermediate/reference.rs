//! Node References
//!
//! A `(parent, node)` locator captured during a traversal. Earlier edits in the
//! same pass can detach the node or shift its index, so every operation
//! re-resolves the reference against the parent's current child list first.

use super::node::{IntermediateNode, NodeId};
use super::tree::DocumentTree;
use crate::error::{CompilerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeReference {
    parent: NodeId,
    node: NodeId,
    index: usize,
}

impl NodeReference {
    pub fn new(parent: NodeId, node: NodeId, index: usize) -> Self {
        NodeReference { parent, node, index }
    }

    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Current position of the node under its recorded parent, or `None` once
    /// the node is no longer one of the parent's children.
    pub fn resolve(&self, tree: &DocumentTree) -> Option<usize> {
        let children = tree.children(self.parent);
        if children.get(self.index) == Some(&self.node) {
            return Some(self.index);
        }
        children.iter().position(|&id| id == self.node)
    }

    pub fn is_live(&self, tree: &DocumentTree) -> bool {
        self.resolve(tree).is_some()
    }

    /// Puts a detached `replacement` where the node was. The replaced node is
    /// detached but keeps its own children.
    pub fn replace(&self, tree: &mut DocumentTree, replacement: NodeId) -> Result<NodeReference> {
        let index = self.resolve_or_stale(tree)?;
        tree.ensure_detached(replacement)?;
        tree.ensure_not_ancestor(replacement, self.parent)?;
        tree.swap_at(self.parent, index, replacement);
        Ok(NodeReference::new(self.parent, replacement, index))
    }

    /// Allocates `node` and replaces the referenced node with it.
    pub fn replace_with(
        &self,
        tree: &mut DocumentTree,
        node: IntermediateNode,
    ) -> Result<NodeReference> {
        let index = self.resolve_or_stale(tree)?;
        let replacement = tree.create(node);
        tree.swap_at(self.parent, index, replacement);
        Ok(NodeReference::new(self.parent, replacement, index))
    }

    pub fn remove(&self, tree: &mut DocumentTree) -> Result<()> {
        let index = self.resolve_or_stale(tree)?;
        tree.detach_at(self.parent, index);
        Ok(())
    }

    fn resolve_or_stale(&self, tree: &DocumentTree) -> Result<usize> {
        self.resolve(tree).ok_or_else(|| {
            CompilerError::MalformedTree(format!(
                "node {} is no longer a child of node {}",
                self.node.as_usize(),
                self.parent.as_usize()
            ))
        })
    }
}
