//! Document Tree
//!
//! Arena owning every node of one document. Nodes never leave the arena;
//! removing or replacing a node only detaches it, so ids held elsewhere stay
//! valid handles (though possibly to detached nodes).

use super::node::{IntermediateNode, NodeId, NodeKind};
use super::reference::NodeReference;
use crate::error::{CompilerError, Result};
use crate::file_kinds::FileKind;
use smallvec::SmallVec;

#[derive(Debug, Clone)]
pub struct DocumentTree {
    nodes: Vec<IntermediateNode>,
    root: NodeId,
}

impl DocumentTree {
    pub fn new(document_kind: impl Into<String>) -> Self {
        let root = IntermediateNode::new(NodeKind::Document {
            document_kind: document_kind.into(),
        });
        DocumentTree {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    pub fn for_file_kind(file_kind: FileKind) -> Self {
        DocumentTree::new(file_kind.document_kind())
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn document_kind(&self) -> &str {
        match &self.node(self.root).kind {
            NodeKind::Document { document_kind } => document_kind,
            _ => "",
        }
    }

    /// Number of nodes ever created, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &IntermediateNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut IntermediateNode {
        &mut self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&IntermediateNode> {
        self.nodes.get(id.0)
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Allocates a detached node.
    pub fn create(&mut self, mut node: IntermediateNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = None;
        node.children.clear();
        self.nodes.push(node);
        id
    }

    /// Allocates `node` and appends it to `parent`.
    pub fn add_child(&mut self, parent: NodeId, node: IntermediateNode) -> NodeId {
        let id = self.create(node);
        self.attach(parent, id, None);
        id
    }

    pub fn insert_child(&mut self, parent: NodeId, index: usize, node: IntermediateNode) -> NodeId {
        let id = self.create(node);
        self.attach(parent, id, Some(index));
        id
    }

    /// Appends an existing detached node to `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.ensure_detached(child)?;
        self.ensure_not_ancestor(child, parent)?;
        self.attach(parent, child, None);
        Ok(())
    }

    /// Appends every node in `children` to `parent`, in order.
    pub fn adopt_children(&mut self, parent: NodeId, children: &[NodeId]) -> Result<()> {
        for &child in children {
            self.append_child(parent, child)?;
        }
        Ok(())
    }

    /// Detaches and returns every child of `id`.
    pub fn take_children(&mut self, id: NodeId) -> SmallVec<[NodeId; 4]> {
        let children = std::mem::take(&mut self.node_mut(id).children);
        for &child in &children {
            self.node_mut(child).parent = None;
        }
        children
    }

    pub fn index_of(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children(parent).iter().position(|&id| id == child)
    }

    /// Reference to an attached node, `None` for the root or a detached node.
    pub fn reference_to(&self, id: NodeId) -> Option<NodeReference> {
        let parent = self.parent(id)?;
        let index = self.index_of(parent, id)?;
        Some(NodeReference::new(parent, id, index))
    }

    /// Detaches the child at `index` under `parent`.
    pub(crate) fn detach_at(&mut self, parent: NodeId, index: usize) -> NodeId {
        let child = self.node_mut(parent).children.remove(index);
        self.node_mut(child).parent = None;
        child
    }

    /// Puts a detached `replacement` at `index` under `parent`, detaching the
    /// node that was there.
    pub(crate) fn swap_at(&mut self, parent: NodeId, index: usize, replacement: NodeId) -> NodeId {
        let old = std::mem::replace(&mut self.node_mut(parent).children[index], replacement);
        self.node_mut(old).parent = None;
        self.node_mut(replacement).parent = Some(parent);
        old
    }

    pub(crate) fn ensure_detached(&self, id: NodeId) -> Result<()> {
        if id == self.root {
            return Err(CompilerError::MalformedTree(
                "the document node cannot be re-parented".to_string(),
            ));
        }
        match self.parent(id) {
            Some(parent) => Err(CompilerError::MalformedTree(format!(
                "node {} already has parent {}",
                id.0, parent.0
            ))),
            None => Ok(()),
        }
    }

    /// Fails when `ancestor` is `node` or one of its parents.
    pub(crate) fn ensure_not_ancestor(&self, ancestor: NodeId, node: NodeId) -> Result<()> {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return Err(CompilerError::MalformedTree(format!(
                    "node {} cannot become a descendant of itself",
                    ancestor.0
                )));
            }
            current = self.parent(id);
        }
        Ok(())
    }

    fn attach(&mut self, parent: NodeId, child: NodeId, index: Option<usize>) {
        self.node_mut(child).parent = Some(parent);
        let children = &mut self.node_mut(parent).children;
        match index {
            Some(index) if index < children.len() => children.insert(index, child),
            _ => children.push(child),
        }
    }

    /// Nodes reachable from `start`, parents before children, siblings in order.
    pub fn descendants(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack: Vec<NodeId> = self.children(start).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    /// Every attached node, root first.
    pub fn walk(&self) -> Vec<NodeId> {
        let mut order = vec![self.root];
        order.extend(self.descendants(self.root));
        order
    }

    /// References to every descendant of the root whose kind satisfies
    /// `predicate`, in pre-order.
    pub fn find_descendant_references<F>(&self, mut predicate: F) -> Vec<NodeReference>
    where
        F: FnMut(&NodeKind) -> bool,
    {
        let mut references = Vec::new();
        self.collect_references(self.root, &mut predicate, &mut references);
        references
    }

    fn collect_references<F>(&self, parent: NodeId, predicate: &mut F, out: &mut Vec<NodeReference>)
    where
        F: FnMut(&NodeKind) -> bool,
    {
        for (index, &child) in self.children(parent).iter().enumerate() {
            if predicate(self.kind(child)) {
                out.push(NodeReference::new(parent, child, index));
            }
            self.collect_references(child, predicate, out);
        }
    }

    /// Checks the shape handed to code generation: a document root, every
    /// attached node listed exactly once by the parent it points back to, and
    /// no document node below the root.
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.kind(self.root), NodeKind::Document { .. }) {
            return Err(CompilerError::MalformedTree(
                "root is not a document node".to_string(),
            ));
        }
        if self.parent(self.root).is_some() {
            return Err(CompilerError::MalformedTree("root has a parent".to_string()));
        }

        let mut seen = vec![false; self.nodes.len()];
        seen[self.root.0] = true;
        for id in self.walk() {
            for &child in self.children(id) {
                if std::mem::replace(&mut seen[child.0], true) {
                    return Err(CompilerError::MalformedTree(format!(
                        "node {} is reachable more than once",
                        child.0
                    )));
                }
                if self.parent(child) != Some(id) {
                    return Err(CompilerError::MalformedTree(format!(
                        "node {} is listed under {} but points to {:?}",
                        child.0,
                        id.0,
                        self.parent(child).map(|p| p.0)
                    )));
                }
                if matches!(self.kind(child), NodeKind::Document { .. }) {
                    return Err(CompilerError::MalformedTree(format!(
                        "nested document node {}",
                        child.0
                    )));
                }
            }
        }
        Ok(())
    }

    /// Every diagnostic on an attached node, in pre-order.
    pub fn diagnostics(&self) -> Vec<&crate::diagnostics::Diagnostic> {
        self.walk()
            .into_iter()
            .flat_map(|id| self.node(id).diagnostics.iter())
            .collect()
    }
}
